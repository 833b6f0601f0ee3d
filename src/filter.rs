use regex::RegexSet;

const ROOT_SEPARATOR: char = '/';

/// Keeps dependencies inside a project tree.
///
/// If any inclusion patterns are given, only dependencies matching one of them
/// are kept.
#[derive(Clone, Debug)]
pub struct DependencyFilter {
    inclusions: RegexSet,
    exclusions: RegexSet,
}

impl DependencyFilter {
    pub fn new<'a>(
        inclusions: impl IntoIterator<Item = &'a str>,
        exclusions: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            inclusions: RegexSet::new(inclusions)?,
            exclusions: RegexSet::new(exclusions)?,
        })
    }

    pub fn is_included(&self, dependency: &str) -> bool {
        !dependency.starts_with(ROOT_SEPARATOR)
            && (self.inclusions.is_empty() || self.inclusions.is_match(dependency))
            && !self.exclusions.is_match(dependency)
    }
}
