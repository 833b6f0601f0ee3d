use std::fs;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Metadata {
    directory: bool,
}

impl Metadata {
    pub fn new(directory: bool) -> Self {
        Self { directory }
    }

    pub fn is_directory(&self) -> bool {
        self.directory
    }
}

impl From<fs::Metadata> for Metadata {
    fn from(metadata: fs::Metadata) -> Self {
        Metadata::new(metadata.is_dir())
    }
}
