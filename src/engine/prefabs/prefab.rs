use crate::World;
use crate::core::ObjectId;

pub trait Prefab {
    fn prefab_name(&self) -> &'static str;
    fn build(&self, world: &mut World) -> ObjectId;
    fn spawn(&self, world: &mut World) -> ObjectId {
        let obj = self.build(world);
        world.add_child(obj);
        obj
    }
}
