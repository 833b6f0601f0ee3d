mod metadata;

pub use self::metadata::Metadata;
use async_trait::async_trait;
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

#[async_trait]
pub trait FileSystem: Debug {
    async fn read_directory(&self, path: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>>;
    async fn metadata(&self, path: &Path) -> Result<Metadata, Box<dyn Error>>;
}

#[derive(Debug, Default)]
pub struct OsFileSystem {}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn read_directory(&self, path: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;
        let mut paths = vec![];

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?
        {
            paths.push(entry.path());
        }

        Ok(paths)
    }

    async fn metadata(&self, path: &Path) -> Result<Metadata, Box<dyn Error>> {
        Ok(fs::metadata(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?
            .into())
    }
}

#[derive(Debug)]
pub struct OsFileSystemError {
    error: io::Error,
    path: String,
}

impl OsFileSystemError {
    pub fn new(error: io::Error, path: &Path) -> Self {
        Self {
            error,
            path: path.display().to_string(),
        }
    }
}

impl Error for OsFileSystemError {}

impl Display for OsFileSystemError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", &self.error, &self.path)
    }
}
