use crate::assets::error::{IoErr, MissingSourceErr, SourceError, WorkerErr};
use crate::assets::scene_loader::SceneLoader;
use crate::assets::{AssetRequest, Model};
use dashmap::DashMap;
use log::debug;
use snafu::{OptionExt, ResultExt};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The host I/O primitive the loader sits on: "load model from location".
///
/// A fetch either resolves to a decoded [`Model`] or reports why it couldn't.
/// Implementations must not touch the loader's table; publishing is the loader's job.
pub trait AssetSource: Send + Sync + 'static {
    fn fetch(
        &self,
        request: &AssetRequest,
    ) -> impl Future<Output = Result<Model, SourceError>> + Send;
}

/// Reads model files from disk and decodes them on the blocking pool.
#[derive(Debug, Default, Clone)]
pub struct GltfFileSource;

impl AssetSource for GltfFileSource {
    fn fetch(
        &self,
        request: &AssetRequest,
    ) -> impl Future<Output = Result<Model, SourceError>> + Send {
        let name = request.identifier().to_string();
        let path = request.location().to_path_buf();

        async move {
            debug!("Reading {}", path.display());
            let bytes = tokio::fs::read(&path).await.context(IoErr { path: &path })?;
            decode(name, bytes, path).await
        }
    }
}

/// Serves model bytes that were registered up front, e.g. from `include_bytes!`.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: Arc<DashMap<PathBuf, Arc<[u8]>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<P: Into<PathBuf>, B: Into<Arc<[u8]>>>(&self, path: P, bytes: B) {
        self.files.insert(path.into(), bytes.into());
    }

    pub fn with<P: Into<PathBuf>, B: Into<Arc<[u8]>>>(self, path: P, bytes: B) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

impl AssetSource for MemorySource {
    fn fetch(
        &self,
        request: &AssetRequest,
    ) -> impl Future<Output = Result<Model, SourceError>> + Send {
        let name = request.identifier().to_string();
        let path = request.location().to_path_buf();
        let bytes = self.files.get(&path).map(|entry| entry.value().clone());

        async move {
            let bytes = bytes.context(MissingSourceErr { path: &path })?;
            decode(name, bytes, path).await
        }
    }
}

async fn decode<B>(name: String, bytes: B, path: PathBuf) -> Result<Model, SourceError>
where
    B: AsRef<[u8]> + Send + 'static,
{
    tokio::task::spawn_blocking(move || SceneLoader::load_buffer(&name, bytes.as_ref(), &path))
        .await
        .context(WorkerErr)?
}
