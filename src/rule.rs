#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<'a> {
    target: &'a str,
    dependencies: Vec<&'a str>,
}

impl<'a> Rule<'a> {
    pub fn new(target: &'a str, dependencies: Vec<&'a str>) -> Self {
        Self {
            target,
            dependencies,
        }
    }

    pub fn target(&self) -> &'a str {
        self.target
    }

    pub fn dependencies(&self) -> &[&'a str] {
        &self.dependencies
    }
}
