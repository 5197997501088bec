use crate::utils::FrameCounter;
use crate::{AppState, HostEvent, HostHandle, World};
use log::{debug, info, trace};
use std::error::Error;
use std::sync::mpsc;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_FRAME_RATE: u32 = 60;

pub struct AppSettings<S: AppState> {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
    pub max_frames: Option<u64>,
    pub state: S,
    event_tx: mpsc::Sender<HostEvent>,
    event_rx: mpsc::Receiver<HostEvent>,
}

impl<S: AppState> AppSettings<S> {
    pub(crate) fn new(state: S, title: &str, width: u32, height: u32) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        AppSettings {
            title: title.to_string(),
            width,
            height,
            frame_rate: DEFAULT_FRAME_RATE,
            max_frames: None,
            state,
            event_tx,
            event_rx,
        }
    }

    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate.max(1);
        self
    }

    /// Stops the loop after this many frames. Without a limit it runs until shutdown.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Handle for pushing UI and surface events into the running loop.
    pub fn host_handle(&self) -> HostHandle {
        HostHandle::new(self.event_tx.clone())
    }

    /// Builds a multi-threaded tokio runtime and runs the frame loop on it until
    /// shutdown or the frame limit.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.run_async())
    }

    /// The frame loop on an already running tokio runtime.
    pub async fn run_async(self) -> Result<(), Box<dyn Error>> {
        let AppSettings {
            title,
            width,
            height,
            frame_rate,
            max_frames,
            state,
            event_tx,
            event_rx,
        } = self;
        let frame_rate = frame_rate.max(1);

        info!("Starting {title} ({width}x{height} @ {frame_rate} fps)");

        let mut app = App {
            world: World::new(),
            state,
            event_rx,
            _event_tx: event_tx,
            frames: FrameCounter::default(),
        };

        app.state.init(&mut app.world)?;
        app.dispatch(HostEvent::Resize { width, height })?;
        trace!("Initialized app state");

        let mut interval = tokio::time::interval(Duration::from_secs_f64(1.0 / frame_rate as f64));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;

            if !app.frame()? {
                break;
            }

            if max_frames.is_some_and(|max| app.frames.total_frames() >= max) {
                debug!("Reached frame limit");
                break;
            }

            if app.frames.total_frames() % frame_rate as u64 == 0 {
                trace!("{} fps", app.frames.fps());
            }
        }

        app.state.destroy(&mut app.world)?;
        info!("{title} exited after {} frames", app.frames.total_frames());

        Ok(())
    }
}

struct App<S: AppState> {
    world: World,
    state: S,
    event_rx: mpsc::Receiver<HostEvent>,
    _event_tx: mpsc::Sender<HostEvent>,
    frames: FrameCounter,
}

impl<S: AppState> App<S> {
    /// Runs one frame. Returns false when the app should stop.
    fn frame(&mut self) -> Result<bool, Box<dyn Error>> {
        if !self.pump_events()? {
            return Ok(false);
        }

        self.world.update();
        self.state.update(&mut self.world)?;
        self.state.late_update(&mut self.world)?;
        self.frames.new_frame_from_world(&self.world);

        Ok(!self.world.is_shutting_down())
    }

    fn pump_events(&mut self) -> Result<bool, Box<dyn Error>> {
        loop {
            let event = match self.event_rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("Host event queue closed. Exiting frame loop.");
                    return Ok(false);
                }
            };

            if event == HostEvent::Shutdown {
                info!("Shutdown requested by host");
                self.world.shutdown();
            }

            self.dispatch(event)?;
        }

        Ok(!self.world.is_shutting_down())
    }

    fn dispatch(&mut self, event: HostEvent) -> Result<(), Box<dyn Error>> {
        trace!("Host event: {event:?}");
        self.state.on_event(&mut self.world, &event)
    }
}
