use crate::world::World;
use crate::{AppSettings, HostEvent};
use std::error::Error;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

#[allow(unused)]
pub trait AppState: Sized + Send + 'static {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn late_update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    /// Called for every host event, before the frame's `update`.
    fn on_event(&mut self, world: &mut World, event: &HostEvent) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn destroy(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

pub trait AppRuntime: AppState {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self>;
    fn default_config(self) -> AppSettings<Self>;
}

impl<S: AppState> AppRuntime for S {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self> {
        AppSettings::new(self, title, width, height)
    }

    fn default_config(self) -> AppSettings<Self> {
        AppSettings::new(
            self,
            "Orrery",
            DEFAULT_SURFACE_WIDTH,
            DEFAULT_SURFACE_HEIGHT,
        )
    }
}
