//! Sprite loading for front-ends. The simulation never depends on it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sprites a graphical front-end asks for, by name and file.
pub const SPRITE_MANIFEST: [(&str, &str); 5] = [
    ("player", "player.png"),
    ("enemy", "enemy.png"),
    ("floor", "floor.png"),
    ("wall", "wall.png"),
    ("chest", "chest.png"),
];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{name}` not found at {path}")]
    Missing { name: String, path: PathBuf },
    #[error("asset `{name}` could not be read from {path}: {source}")]
    Unreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("asset `{0}` is empty")]
    Empty(String),
}

/// An image a front-end has resolved; the bytes stay opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub name: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

pub trait AssetLoader {
    fn load(&mut self, name: &str, path: &Path) -> Result<ImageHandle, AssetError>;
}

/// Reads images straight from disk.
#[derive(Debug, Clone, Default)]
pub struct FsAssetLoader;

impl AssetLoader for FsAssetLoader {
    fn load(&mut self, name: &str, path: &Path) -> Result<ImageHandle, AssetError> {
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::Missing {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                }
            } else {
                AssetError::Unreadable {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        if bytes.is_empty() {
            return Err(AssetError::Empty(name.to_string()));
        }
        Ok(ImageHandle {
            name: name.to_string(),
            path: path.to_path_buf(),
            bytes,
        })
    }
}

/// Whatever sprites loaded, plus a flag telling the renderer to fall back to glyphs.
#[derive(Debug, Default)]
pub struct SpriteSet {
    images: BTreeMap<String, ImageHandle>,
    pub fallback: bool,
    pub failures: Vec<AssetError>,
}

impl SpriteSet {
    /// Loads every manifest entry from `dir`. Failures are collected, never fatal.
    pub fn load_all(loader: &mut dyn AssetLoader, dir: &Path) -> Self {
        let mut set = Self::default();
        for (name, file) in SPRITE_MANIFEST {
            match loader.load(name, &dir.join(file)) {
                Ok(handle) => {
                    set.images.insert(name.to_string(), handle);
                }
                Err(err) => {
                    log::warn!("{}", err);
                    set.failures.push(err);
                }
            }
        }
        set.fallback = !set.failures.is_empty();
        set
    }

    pub fn get(&self, name: &str) -> Option<&ImageHandle> {
        self.images.get(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves every sprite except the ones listed.
    struct Partial {
        missing: Vec<&'static str>,
    }

    impl AssetLoader for Partial {
        fn load(&mut self, name: &str, path: &Path) -> Result<ImageHandle, AssetError> {
            if self.missing.contains(&name) {
                return Err(AssetError::Missing {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                });
            }
            Ok(ImageHandle {
                name: name.to_string(),
                path: path.to_path_buf(),
                bytes: vec![1, 2, 3],
            })
        }
    }

    #[test]
    fn test_all_sprites_loaded() {
        let mut loader = Partial { missing: vec![] };
        let set = SpriteSet::load_all(&mut loader, Path::new("sprites"));
        assert!(!set.fallback);
        assert_eq!(set.len(), SPRITE_MANIFEST.len());
        assert_eq!(
            set.get("wall").map(|h| h.path.clone()),
            Some(PathBuf::from("sprites/wall.png"))
        );
    }

    #[test]
    fn test_failure_sets_fallback() {
        let mut loader = Partial {
            missing: vec!["enemy"],
        };
        let set = SpriteSet::load_all(&mut loader, Path::new("sprites"));
        assert!(set.fallback);
        assert_eq!(set.failures.len(), 1);
        assert!(set.get("enemy").is_none());
        assert!(set.get("player").is_some());
    }

    #[test]
    fn test_fs_loader_reports_missing() {
        let mut loader = FsAssetLoader;
        let err = loader
            .load("ghost", Path::new("definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));
        assert!(err.to_string().contains("ghost"));
    }
}
