use std::path::{Path, PathBuf};

pub const DEFAULT_ASSET_ROOT: &str = "assets";
pub const DEFAULT_MODEL_EXTENSION: &str = "glb";

/// Maps asset identifiers onto source locations.
///
/// The convention is fixed: identifier `name` lives at `<root>/name.<extension>`,
/// which is `assets/name.glb` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    root: PathBuf,
    extension: String,
}

impl Default for AssetLocator {
    fn default() -> Self {
        AssetLocator::new(DEFAULT_ASSET_ROOT, DEFAULT_MODEL_EXTENSION)
    }
}

impl AssetLocator {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, extension: S) -> Self {
        let extension = extension.into();
        AssetLocator {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn locate(&self, identifier: &str) -> PathBuf {
        self.root.join(format!("{identifier}.{}", self.extension))
    }

    pub fn request(&self, identifier: &str) -> AssetRequest {
        AssetRequest {
            identifier: identifier.to_string(),
            location: self.locate(identifier),
        }
    }
}

/// One asset to load. Created when a load is issued and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRequest {
    identifier: String,
    location: PathBuf,
}

impl AssetRequest {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}
