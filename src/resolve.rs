use crate::{arguments::Resolution, error::ApplicationError};
use itertools::Itertools;
use std::{collections::HashMap, vec};

#[derive(Debug)]
enum Targets {
    Positional(vec::IntoIter<String>),
    Basename(HashMap<String, Vec<String>>),
}

/// Resolves basename-only targets of dependency rules into full paths.
#[derive(Debug)]
pub struct TargetResolver {
    object_extension: String,
    targets: Targets,
}

impl TargetResolver {
    pub fn new(
        resolution: Resolution,
        targets: Vec<String>,
        object_extension: impl Into<String>,
    ) -> Self {
        let object_extension = object_extension.into();

        Self {
            targets: match resolution {
                Resolution::Positional => Targets::Positional(targets.into_iter()),
                Resolution::Basename => Targets::Basename(
                    targets
                        .into_iter()
                        .flat_map(|target| {
                            aliases(&target, &object_extension)
                                .map(|alias| (alias.to_owned(), target.clone()))
                                .collect::<Vec<_>>()
                        })
                        .into_group_map(),
                ),
            },
            object_extension,
        }
    }

    pub fn resolve(&mut self, target: &str) -> Result<String, ApplicationError> {
        match &mut self.targets {
            Targets::Positional(targets) => {
                let expected = targets
                    .next()
                    .ok_or_else(|| ApplicationError::UnexpectedTarget(target.into()))?;

                if aliases(&expected, &self.object_extension).any(|alias| alias == target) {
                    Ok(expected)
                } else {
                    Err(ApplicationError::Mismatch {
                        expected: basename(&expected).into(),
                        actual: target.into(),
                    })
                }
            }
            Targets::Basename(targets) => match targets.get(target).map(Vec::as_slice) {
                Some([path]) => Ok(path.clone()),
                Some(paths) => Err(ApplicationError::AmbiguousTarget(
                    target.into(),
                    paths.to_vec(),
                )),
                None => Err(ApplicationError::TargetNotFound(target.into())),
            },
        }
    }
}

fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

// A target matches by its full path, or by its file name with or without an
// object extension.
fn aliases<'a>(path: &'a str, object_extension: &str) -> impl Iterator<Item = &'a str> {
    let name = basename(path);

    [
        Some(path),
        Some(name),
        name.strip_suffix(object_extension)
            .and_then(|stem| stem.strip_suffix('.')),
    ]
    .into_iter()
    .flatten()
    .unique()
}
