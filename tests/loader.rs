mod common;

use common::{MODELS, memory_source, sceneless_glb, temp_asset_dir, triangle_glb};
use orrery::assets::{
    AssetError, AssetLoader, AssetLocator, AssetRequest, AssetSource, BatchState,
    GltfFileSource, LoadEvent, MemorySource, Model, ModelAttachment, NoAttach, SourceError,
};
use serial_test::serial;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Holds every fetch until the test hands out permits.
struct GatedSource {
    inner: MemorySource,
    gate: Arc<Semaphore>,
    started: Arc<AtomicUsize>,
}

impl AssetSource for GatedSource {
    fn fetch(
        &self,
        request: &AssetRequest,
    ) -> impl Future<Output = Result<Model, SourceError>> + Send {
        let gate = self.gate.clone();
        let started = self.started.clone();
        let fetch = self.inner.fetch(request);

        async move {
            started.fetch_add(1, Ordering::SeqCst);
            gate.acquire().await.unwrap().forget();
            fetch.await
        }
    }
}

async fn wait_for(mut condition: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("condition not reached in time");
}

#[tokio::test]
async fn all_models_load_and_attach_once() {
    let loader = AssetLoader::new(memory_source(&MODELS));
    let events = loader.subscribe();
    let (tx, rx) = mpsc::channel::<ModelAttachment>();

    let report = loader.load_all(MODELS, &tx).await.unwrap();

    assert!(report.is_complete());
    assert!(loader.is_ready());
    assert_eq!(loader.state(), BatchState::Ready);
    assert_eq!(report.loaded().len(), 3);
    assert!(report.failures().is_empty());

    for id in MODELS {
        let model = loader.get(id).unwrap();
        assert_eq!(model.name, id);
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.nodes[0].name, id);
    }

    let attached: Vec<String> = rx.try_iter().map(|a| a.identifier).collect();
    assert_eq!(attached, MODELS);

    let events: Vec<LoadEvent> = events.try_iter().collect();
    let loaded = events
        .iter()
        .filter(|e| matches!(e, LoadEvent::Loaded { .. }))
        .count();
    assert_eq!(loaded, 3);
    let completed = events
        .iter()
        .filter(|e| matches!(e, LoadEvent::BatchComplete { .. }))
        .count();
    assert_eq!(completed, 1);
    assert_eq!(
        events.last(),
        Some(&LoadEvent::BatchComplete {
            identifiers: MODELS.iter().map(|s| s.to_string()).collect()
        })
    );
}

#[tokio::test]
async fn one_missing_model_keeps_the_batch_unready() {
    let loader = AssetLoader::new(memory_source(&["basketball", "spaceshuttle"]));
    let events = loader.subscribe();
    let (tx, rx) = mpsc::channel::<ModelAttachment>();

    let report = loader.load_all(MODELS, &tx).await.unwrap();

    assert_eq!(report.state(), BatchState::PartiallyFailed);
    assert!(!loader.is_ready());
    assert_eq!(report.failed_identifiers(), ["hoop"]);
    assert_eq!(rx.try_iter().count(), 0);

    // Individual loads still land in the table.
    assert!(loader.get("basketball").is_ok());
    assert!(loader.get("spaceshuttle").is_ok());
    assert!(matches!(
        loader.get("hoop"),
        Err(AssetError::AssetNotFound { .. })
    ));

    let failure = &report.failures()[0];
    assert!(failure.to_string().starts_with("Error loading hoop: "));
    assert!(matches!(
        failure,
        AssetError::AssetLoadFailure {
            source: SourceError::MissingSource { .. },
            ..
        }
    ));

    let events: Vec<LoadEvent> = events.try_iter().collect();
    assert!(events.iter().any(
        |e| matches!(e, LoadEvent::Failed { identifier, .. } if identifier == "hoop")
    ));
    assert_eq!(
        events.last(),
        Some(&LoadEvent::BatchIncomplete {
            failed: vec!["hoop".to_string()]
        })
    );
}

#[tokio::test]
async fn every_model_failing_is_reported() {
    let loader = AssetLoader::new(MemorySource::new());
    let report = loader.load_all(MODELS, &NoAttach).await.unwrap();

    assert_eq!(report.failures().len(), 3);
    assert!(!loader.is_ready());
    assert!(loader.table().is_empty());
}

#[tokio::test]
async fn malformed_and_sceneless_files_fail_to_decode() {
    let locator = AssetLocator::default();
    let source = memory_source(&["hoop"])
        .with(locator.locate("basketball"), b"definitely not a model".to_vec())
        .with(locator.locate("spaceshuttle"), sceneless_glb());
    let loader = AssetLoader::new(source);

    let basketball = loader.load_one("basketball").await.unwrap_err();
    assert!(matches!(
        basketball,
        AssetError::AssetLoadFailure {
            source: SourceError::Parse { .. },
            ..
        }
    ));

    let shuttle = loader.load_one("spaceshuttle").await.unwrap_err();
    assert!(matches!(
        shuttle,
        AssetError::AssetLoadFailure {
            source: SourceError::NoScene { .. },
            ..
        }
    ));

    assert!(loader.load_one("hoop").await.is_ok());
    assert_eq!(loader.table().identifiers(), ["hoop"]);
}

#[tokio::test]
async fn nothing_is_ready_while_loading() {
    let gate = Arc::new(Semaphore::new(0));
    let started = Arc::new(AtomicUsize::new(0));
    let loader = Arc::new(AssetLoader::new(GatedSource {
        inner: memory_source(&MODELS),
        gate: gate.clone(),
        started: started.clone(),
    }));

    let batch = loader.spawn_batch(MODELS.map(String::from).to_vec(), NoAttach);

    // All fetches are in flight at once, none of them finished.
    wait_for(|| started.load(Ordering::SeqCst) == 3).await;
    assert_eq!(loader.state(), BatchState::Loading);
    assert!(!loader.is_ready());
    assert!(loader.get("hoop").is_err());
    assert_eq!(loader.requested(), MODELS);

    gate.add_permits(2);
    wait_for(|| loader.table().len() == 2).await;
    assert!(!loader.is_ready());

    gate.add_permits(1);
    let report = batch.await.unwrap().unwrap();
    assert!(report.is_complete());
    assert!(loader.is_ready());
}

#[tokio::test]
async fn retry_loads_the_model_but_keeps_the_batch_failed() {
    let source = memory_source(&["basketball", "spaceshuttle"]);
    let loader = AssetLoader::new(source.clone());

    loader.load_all(MODELS, &NoAttach).await.unwrap();
    assert_eq!(loader.state(), BatchState::PartiallyFailed);

    source.insert(AssetLocator::default().locate("hoop"), triangle_glb("hoop"));
    let hoop = loader.load_one("hoop").await.unwrap();

    assert_eq!(hoop.vertex_count(), 3);
    assert!(loader.get("hoop").is_ok());
    assert_eq!(loader.state(), BatchState::PartiallyFailed);
    assert!(!loader.is_ready());
}

#[tokio::test]
async fn empty_identifier_is_rejected() {
    let loader = AssetLoader::new(memory_source(&MODELS));
    assert!(matches!(
        loader.load_one("").await,
        Err(AssetError::InvalidIdentifier)
    ));
}

#[tokio::test]
#[serial]
async fn files_load_from_disk() {
    let dir = temp_asset_dir();
    std::fs::write(dir.join("hoop.glb"), triangle_glb("hoop")).unwrap();

    let loader = AssetLoader::with_locator(GltfFileSource, AssetLocator::new(&dir, "glb"));
    let report = loader.load_all(["hoop", "basketball"], &NoAttach).await.unwrap();

    assert_eq!(report.failed_identifiers(), ["basketball"]);
    assert!(matches!(
        report.failures()[0],
        AssetError::AssetLoadFailure {
            source: SourceError::Io { .. },
            ..
        }
    ));
    assert_eq!(loader.get("hoop").unwrap().vertex_count(), 3);

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
#[serial]
async fn file_batch_becomes_ready() {
    let dir = temp_asset_dir();
    for id in MODELS {
        std::fs::write(dir.join(format!("{id}.glb")), triangle_glb(id)).unwrap();
    }

    let loader = AssetLoader::with_locator(GltfFileSource, AssetLocator::new(&dir, ".glb"));
    let report = loader.load_all(MODELS, &NoAttach).await.unwrap();

    assert!(report.is_complete());
    assert!(loader.is_ready());
    assert_eq!(report.into_result().unwrap().len(), 3);

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn missing_model_is_reported_once() {
    let loader = AssetLoader::new(memory_source(&MODELS));
    assert!(matches!(
        loader.get("basketball"),
        Err(AssetError::AssetNotFound { .. })
    ));
    let events = loader.subscribe();

    loader
        .load_all(["basketball", "missing_model"], &NoAttach)
        .await
        .unwrap();

    assert!(!loader.is_ready());
    let first = loader.get("basketball").unwrap();
    let second = loader.get("basketball").unwrap();
    assert!(first.ptr_eq(&second));
    assert!(matches!(
        loader.get("missing_model"),
        Err(AssetError::AssetNotFound { ref identifier }) if identifier == "missing_model"
    ));

    let events: Vec<LoadEvent> = events.try_iter().collect();
    let failures: Vec<&LoadEvent> = events
        .iter()
        .filter(|e| matches!(e, LoadEvent::Failed { .. }))
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], LoadEvent::Failed { identifier, .. } if identifier == "missing_model"));
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, LoadEvent::BatchComplete { .. }))
    );
}
