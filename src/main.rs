use orrery::{AppState, HostEvent, OrreryApp, Sketch, World};
use std::error::Error;

#[derive(Default, OrreryApp)]
struct Orrery(Sketch);

impl AppState for Orrery {
    fn init(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.0.init(world)
    }

    fn update(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.0.update(world)
    }

    fn on_event(&mut self, world: &mut World, event: &HostEvent) -> Result<(), Box<dyn Error>> {
        self.0.on_event(world, event)
    }

    fn destroy(&mut self, world: &mut World) -> Result<(), Box<dyn Error>> {
        self.0.destroy(world)
    }
}
