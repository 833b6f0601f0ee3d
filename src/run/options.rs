use crate::arguments::Resolution;
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub directory: PathBuf,
    pub exclusions: Vec<String>,
    pub inclusions: Vec<String>,
    pub object_extension: String,
    pub resolution: Resolution,
    pub source_extension: String,
    pub width: usize,
}
