use crate::{context::Context, debug, error::ApplicationError, run::Options};
use itertools::Itertools;
use std::path::Path;

/// Enumerates object files expected for sources in a directory and its
/// immediate subdirectories.
///
/// The order is the one of a shell glob `*.cpp */*.cpp` in the C locale.
/// Unreadable subdirectories are skipped as a glob does.
pub async fn enumerate_targets(
    context: &Context,
    options: &Options,
) -> Result<Vec<String>, ApplicationError> {
    let file_system = context.file_system();
    let extension = options.source_extension.as_str();
    let mut sources = vec![];
    let mut nested_sources = vec![];

    for path in file_system.read_directory(&options.directory).await? {
        let Some(name) = visible_name(&path) else {
            continue;
        };

        if file_system.metadata(&path).await?.is_directory() {
            let nested_paths = match file_system.read_directory(&path).await {
                Ok(paths) => paths,
                Err(error) => {
                    debug!(context, options, "directory skipped: {}", error);
                    continue;
                }
            };

            for nested_path in nested_paths {
                if let Some(file) = source_name(&nested_path, extension)
                    && !file_system.metadata(&nested_path).await?.is_directory()
                {
                    nested_sources.push(format!("{}/{}", name, file));
                }
            }
        } else if let Some(file) = source_name(&path, extension) {
            sources.push(file.to_owned());
        }
    }

    Ok(sources
        .into_iter()
        .sorted()
        .chain(nested_sources.into_iter().sorted())
        .map(|source| {
            format!(
                "{}.{}",
                &source[..source.len() - extension.len() - 1],
                options.object_extension
            )
        })
        .collect())
}

fn visible_name(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.starts_with('.'))
}

fn source_name<'a>(path: &'a Path, extension: &str) -> Option<&'a str> {
    let name = visible_name(path)?;

    name.strip_suffix(extension)?.strip_suffix('.')?;

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arguments::Resolution,
        infrastructure::{FileSystem, Metadata, OsConsole, OsFileSystem},
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::{
        error::Error,
        fs::{create_dir, write},
        path::PathBuf,
    };
    use tempfile::{TempDir, tempdir};

    #[derive(Debug)]
    struct UnreadableFileSystem {
        file_system: OsFileSystem,
        unreadable: PathBuf,
    }

    #[async_trait]
    impl FileSystem for UnreadableFileSystem {
        async fn read_directory(&self, path: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
            if path == self.unreadable.as_path() {
                return Err("permission denied".into());
            }

            self.file_system.read_directory(path).await
        }

        async fn metadata(&self, path: &Path) -> Result<Metadata, Box<dyn Error>> {
            self.file_system.metadata(path).await
        }
    }

    fn create_tree(paths: &[&str]) -> TempDir {
        let directory = tempdir().unwrap();

        for path in paths {
            if let Some(path) = path.strip_suffix('/') {
                create_dir(directory.path().join(path)).unwrap();
            } else {
                write(directory.path().join(path), "").unwrap();
            }
        }

        directory
    }

    fn options(directory: &TempDir) -> Options {
        Options {
            debug: false,
            directory: directory.path().into(),
            exclusions: vec![],
            inclusions: vec![],
            object_extension: "o".into(),
            resolution: Resolution::Positional,
            source_extension: "cpp".into(),
            width: 78,
        }
    }

    async fn enumerate(directory: &TempDir) -> Vec<String> {
        enumerate_targets(
            &Context::new(OsConsole::new(), OsFileSystem::new()),
            &options(directory),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn enumerate_nothing() {
        assert_eq!(enumerate(&create_tree(&[])).await, Vec::<String>::new());
    }

    #[tokio::test]
    async fn enumerate_root_sources() {
        assert_eq!(
            enumerate(&create_tree(&["b.cpp", "a.cpp", "c.h"])).await,
            vec!["a.o", "b.o"]
        );
    }

    #[tokio::test]
    async fn enumerate_root_sources_before_nested_ones() {
        assert_eq!(
            enumerate(&create_tree(&[
                "sub/",
                "sub/b.cpp",
                "sub/a.cpp",
                "z.cpp",
                "core/",
                "core/x.cpp",
            ]))
            .await,
            vec!["z.o", "core/x.o", "sub/a.o", "sub/b.o"]
        );
    }

    #[tokio::test]
    async fn sort_nested_sources_by_whole_path() {
        assert_eq!(
            enumerate(&create_tree(&["a/", "a/z.cpp", "a-b/", "a-b/y.cpp"])).await,
            vec!["a-b/y.o", "a/z.o"]
        );
    }

    #[tokio::test]
    async fn sort_sources_with_extensions() {
        assert_eq!(
            enumerate(&create_tree(&[
                "area.cpp",
                "area-json.cpp",
                "music.cpp",
                "music-impl.cpp",
                "core/",
                "core/tile.cpp",
                "core/tile-grid.cpp",
            ]))
            .await,
            vec![
                "area-json.o",
                "area.o",
                "music-impl.o",
                "music.o",
                "core/tile-grid.o",
                "core/tile.o",
            ]
        );
    }

    #[tokio::test]
    async fn skip_deeply_nested_sources() {
        assert_eq!(
            enumerate(&create_tree(&["a/", "a/b/", "a/b/c.cpp", "a/d.cpp"])).await,
            vec!["a/d.o"]
        );
    }

    #[tokio::test]
    async fn skip_hidden_entries() {
        assert_eq!(
            enumerate(&create_tree(&[
                ".a.cpp",
                ".git/",
                ".git/b.cpp",
                "c/",
                "c/.d.cpp",
                ".cpp",
                "e.cpp",
            ]))
            .await,
            vec!["e.o"]
        );
    }

    #[tokio::test]
    async fn skip_directories_named_like_sources() {
        assert_eq!(
            enumerate(&create_tree(&["a.cpp/", "a.cpp/b.cpp/", "c.cpp"])).await,
            vec!["c.o"]
        );
    }

    #[tokio::test]
    async fn skip_unreadable_subdirectories() {
        let directory = create_tree(&["a.cpp", "b/", "b/c.cpp", "d/", "d/e.cpp"]);

        assert_eq!(
            enumerate_targets(
                &Context::new(
                    OsConsole::new(),
                    UnreadableFileSystem {
                        file_system: OsFileSystem::new(),
                        unreadable: directory.path().join("b"),
                    },
                ),
                &options(&directory),
            )
            .await
            .unwrap(),
            vec!["a.o", "d/e.o"]
        );
    }

    #[tokio::test]
    async fn fail_to_enumerate_unreadable_root() {
        let directory = create_tree(&["a.cpp"]);

        assert!(
            enumerate_targets(
                &Context::new(
                    OsConsole::new(),
                    UnreadableFileSystem {
                        file_system: OsFileSystem::new(),
                        unreadable: directory.path().into(),
                    },
                ),
                &options(&directory),
            )
            .await
            .is_err()
        );
    }

    #[tokio::test]
    async fn enumerate_with_custom_extensions() {
        let directory = create_tree(&["a.c", "b.cpp", "sub/", "sub/c.c"]);

        assert_eq!(
            enumerate_targets(
                &Context::new(OsConsole::new(), OsFileSystem::new()),
                &Options {
                    source_extension: "c".into(),
                    object_extension: "obj".into(),
                    ..options(&directory)
                },
            )
            .await
            .unwrap(),
            vec!["a.obj", "sub/c.obj"]
        );
    }
}
