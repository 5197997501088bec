//! The batch model loader and its readiness gate.
//!
//! A batch is started once per loader with [`AssetLoader::load_all`]. Every identifier
//! gets its own fetch, all fetches run concurrently and the batch waits for every one of
//! them to finish, no matter whether its siblings failed. The loader only reports
//! [`ready`](AssetLoader::is_ready) when the whole batch resolved.
//!
//! ```no_run
//! use orrery::assets::{AssetLoader, GltfFileSource, NoAttach};
//!
//! # async fn run() -> Result<(), orrery::assets::AssetError> {
//! let loader = AssetLoader::new(GltfFileSource);
//! let report = loader.load_all(["basketball", "hoop"], &NoAttach).await?;
//!
//! if loader.is_ready() {
//!     let hoop = loader.get("hoop")?;
//!     println!("hoop has {} vertices", hoop.vertex_count());
//! } else {
//!     println!("missing: {:?}", report.failed_identifiers());
//! }
//! # Ok(())
//! # }
//! ```

use crate::assets::error::{
    AssetError, AssetLoadFailureErr, BatchAlreadyStartedErr, BatchIncompleteErr,
    DuplicateIdentifierErr, InvalidIdentifierErr, Result,
};
use crate::assets::{AssetLocator, AssetSource, AssetTable, GltfFileSource, ModelHandle};
use futures::future::join_all;
use itertools::Itertools;
use log::{debug, error, info, warn};
use snafu::{IntoError, ensure};
use static_assertions::assert_impl_all;
use std::sync::{Arc, Mutex, PoisonError, RwLock, mpsc};
use tokio::task::JoinHandle;

/// Lifecycle of the loader's single batch.
///
/// `Idle → Loading → Ready | PartiallyFailed`. Both end states are terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BatchState {
    Idle,
    Loading,
    Ready,
    PartiallyFailed,
}

impl BatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BatchState::Ready | BatchState::PartiallyFailed)
    }
}

/// Observable load notifications. Every event is also logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded { identifier: String },
    Failed { identifier: String, reason: String },
    BatchComplete { identifiers: Vec<String> },
    BatchIncomplete { failed: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct ModelAttachment {
    pub identifier: String,
    pub model: ModelHandle,
}

/// The scene a completed batch is attached to.
pub trait ModelSink: Send + Sync {
    fn attach(&self, identifier: &str, model: ModelHandle);
}

impl ModelSink for mpsc::Sender<ModelAttachment> {
    fn attach(&self, identifier: &str, model: ModelHandle) {
        let attachment = ModelAttachment {
            identifier: identifier.to_string(),
            model,
        };
        if self.send(attachment).is_err() {
            warn!("Scene went away before {identifier:?} could be attached");
        }
    }
}

/// Sink for callers that only want the table and the readiness flag.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoAttach;

impl ModelSink for NoAttach {
    fn attach(&self, _identifier: &str, _model: ModelHandle) {}
}

/// Outcome of a joined batch.
#[derive(Debug)]
pub struct BatchReport {
    requested: Vec<String>,
    loaded: Vec<(String, ModelHandle)>,
    failures: Vec<AssetError>,
    state: BatchState,
}

impl BatchReport {
    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == BatchState::Ready
    }

    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    /// Handles of every identifier that loaded, in request order.
    pub fn loaded(&self) -> &[(String, ModelHandle)] {
        &self.loaded
    }

    pub fn failures(&self) -> &[AssetError] {
        &self.failures
    }

    pub fn failed_identifiers(&self) -> Vec<&str> {
        self.failures
            .iter()
            .filter_map(AssetError::identifier)
            .collect()
    }

    pub fn into_result(self) -> Result<Vec<(String, ModelHandle)>> {
        ensure!(
            self.failures.is_empty(),
            BatchIncompleteErr {
                failed: self
                    .failed_identifiers()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            }
        );
        Ok(self.loaded)
    }
}

/// Owns the asset table and the batch readiness of one scene.
pub struct AssetLoader<S: AssetSource = GltfFileSource> {
    source: S,
    locator: AssetLocator,
    table: AssetTable,
    state: RwLock<BatchState>,
    requested: RwLock<Vec<String>>,
    subscribers: Mutex<Vec<mpsc::Sender<LoadEvent>>>,
}

assert_impl_all!(AssetLoader<GltfFileSource>: Send, Sync);
assert_impl_all!(AssetTable: Send, Sync);

impl<S: AssetSource> AssetLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_locator(source, AssetLocator::default())
    }

    pub fn with_locator(source: S, locator: AssetLocator) -> Self {
        AssetLoader {
            source,
            locator,
            table: AssetTable::empty(),
            state: RwLock::new(BatchState::Idle),
            requested: RwLock::default(),
            subscribers: Mutex::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn locator(&self) -> &AssetLocator {
        &self.locator
    }

    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    pub fn state(&self) -> BatchState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// True once every identifier of the batch resolved. Never goes back to false.
    pub fn is_ready(&self) -> bool {
        self.state() == BatchState::Ready
    }

    /// Identifiers of the started batch, empty while idle.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up one loaded model. This does not check readiness, so callers that need
    /// the whole batch have to gate on [`is_ready`](Self::is_ready) first.
    pub fn get(&self, identifier: &str) -> Result<ModelHandle> {
        self.table.get(identifier)
    }

    /// Receives every [`LoadEvent`] emitted after this call.
    pub fn subscribe(&self) -> mpsc::Receiver<LoadEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Loads a single model and publishes it in the table.
    ///
    /// Identifiers that are already in the table are not fetched again. Failed loads
    /// leave the table untouched, so this is also the way to retry an identifier that
    /// failed in a batch. Retrying never changes the batch state.
    pub async fn load_one(&self, identifier: &str) -> Result<ModelHandle> {
        ensure!(!identifier.is_empty(), InvalidIdentifierErr);

        if let Some(handle) = self.table.try_get(identifier) {
            debug!("{identifier} is already loaded, not fetching it again");
            return Ok(handle);
        }

        let request = self.locator.request(identifier);
        match self.source.fetch(&request).await {
            Ok(model) => {
                let (handle, inserted) = self.table.publish(identifier, model.into_handle());
                if inserted {
                    info!("{identifier} loaded");
                    self.emit(LoadEvent::Loaded {
                        identifier: identifier.to_string(),
                    });
                } else {
                    debug!("{identifier} finished loading elsewhere first, dropping this copy");
                }
                Ok(handle)
            }
            Err(source) => {
                let reason = source.to_string();
                let err = AssetLoadFailureErr { identifier }.into_error(source);
                error!("{err}");
                self.emit(LoadEvent::Failed {
                    identifier: identifier.to_string(),
                    reason,
                });
                Err(err)
            }
        }
    }

    /// Loads the whole batch and waits for every load to finish.
    ///
    /// Only fails if the batch itself is invalid (empty or duplicate identifiers) or a
    /// batch was already started; individual load failures are reported through the
    /// returned [`BatchReport`] and leave the loader in [`BatchState::PartiallyFailed`].
    /// On success every model is attached to `sink` exactly once before the loader
    /// turns ready.
    ///
    /// [`LoadEvent::Loaded`] is only emitted for models this batch actually fetched.
    /// Identifiers that were already in the table are reused silently and only show up
    /// in the final [`LoadEvent::BatchComplete`].
    pub async fn load_all<I, T>(&self, identifiers: I, sink: &impl ModelSink) -> Result<BatchReport>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();

        ensure!(
            identifiers.iter().all(|id| !id.is_empty()),
            InvalidIdentifierErr
        );
        if let Some(identifier) = identifiers.iter().duplicates().next() {
            return DuplicateIdentifierErr { identifier }.fail();
        }

        self.begin_batch(&identifiers)?;
        info!("Loading {} models", identifiers.len());

        let results = join_all(identifiers.iter().map(|id| self.load_one(id))).await;

        let mut loaded = Vec::with_capacity(identifiers.len());
        let mut failures = Vec::new();
        for (identifier, result) in identifiers.iter().zip(results) {
            match result {
                Ok(handle) => loaded.push((identifier.clone(), handle)),
                Err(e) => failures.push(e),
            }
        }

        let state = if failures.is_empty() {
            for (identifier, handle) in &loaded {
                sink.attach(identifier, handle.clone());
            }
            self.finish_batch(BatchState::Ready);
            info!("All models loaded!");
            self.emit(LoadEvent::BatchComplete {
                identifiers: identifiers.clone(),
            });
            BatchState::Ready
        } else {
            let failed: Vec<String> = failures
                .iter()
                .filter_map(AssetError::identifier)
                .map(str::to_string)
                .collect();
            self.finish_batch(BatchState::PartiallyFailed);
            error!("Error loading some models: {}", failed.join(", "));
            self.emit(LoadEvent::BatchIncomplete { failed });
            BatchState::PartiallyFailed
        };

        Ok(BatchReport {
            requested: identifiers,
            loaded,
            failures,
            state,
        })
    }

    fn begin_batch(&self, identifiers: &[String]) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        ensure!(*state == BatchState::Idle, BatchAlreadyStartedErr);
        *state = BatchState::Loading;

        *self.requested.write().unwrap_or_else(PoisonError::into_inner) = identifiers.to_vec();
        Ok(())
    }

    fn finish_batch(&self, outcome: BatchState) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        debug_assert_eq!(*state, BatchState::Loading);
        *state = outcome;
    }

    fn emit(&self, event: LoadEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl<S: AssetSource> AssetLoader<S> {
    /// Runs [`load_all`](Self::load_all) as a task on the current tokio runtime so the
    /// caller can keep ticking frames while the batch is outstanding.
    ///
    /// # Panics
    /// Panics when called outside of a tokio runtime.
    pub fn spawn_batch<K>(
        self: &Arc<Self>,
        identifiers: Vec<String>,
        sink: K,
    ) -> JoinHandle<Result<BatchReport>>
    where
        K: ModelSink + 'static,
    {
        let loader = self.clone();
        tokio::spawn(async move { loader.load_all(identifiers, &sink).await })
    }
}
