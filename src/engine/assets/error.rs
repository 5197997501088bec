use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T, E = AssetError> = std::result::Result<T, E>;

/// Why a single fetch from an [`AssetSource`](crate::assets::AssetSource) failed.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum SourceError {
    #[snafu(display("Couldn't read {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Malformed model data in {}: {source}", path.display()))]
    Parse { path: PathBuf, source: gltf::Error },

    #[snafu(display("{} contains no scenes", path.display()))]
    NoScene { path: PathBuf },

    #[snafu(display("No data registered for {}", path.display()))]
    MissingSource { path: PathBuf },

    #[snafu(display("Model decoding worker failed: {source}"))]
    Worker { source: tokio::task::JoinError },
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum AssetError {
    #[snafu(display("Error loading {identifier}: {source}"))]
    AssetLoadFailure {
        identifier: String,
        source: SourceError,
    },

    #[snafu(display("Asset \"{identifier}\" is not loaded"))]
    AssetNotFound { identifier: String },

    #[snafu(display("Batch incomplete, failed to load: {}", failed.join(", ")))]
    BatchIncomplete { failed: Vec<String> },

    #[snafu(display("Asset identifiers must not be empty"))]
    InvalidIdentifier,

    #[snafu(display("Asset \"{identifier}\" was requested more than once in the same batch"))]
    DuplicateIdentifier { identifier: String },

    #[snafu(display("A batch was already started on this loader"))]
    BatchAlreadyStarted,
}

impl AssetError {
    /// The identifier this error is about, if it concerns a single asset.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            AssetError::AssetLoadFailure { identifier, .. }
            | AssetError::AssetNotFound { identifier }
            | AssetError::DuplicateIdentifier { identifier } => Some(identifier),
            _ => None,
        }
    }
}
