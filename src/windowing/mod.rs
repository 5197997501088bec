//! Host loop and UI plumbing.
//!
//! The loop is headless: it ticks frames at a fixed rate on a tokio runtime and feeds the
//! app state with the events the embedding host pushes through a [`HostHandle`].

pub mod app;
pub mod host;
pub mod state;
pub mod ui;

pub use app::*;
pub use host::*;
pub use state::*;
pub use ui::*;
