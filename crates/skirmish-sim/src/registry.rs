//! Insertion-ordered entity registry.
//!
//! Entities live in a hecs `World`; the registry adds the update and draw
//! order the world does not keep. A pass iterates a snapshot of the order.
//! Spawns made during the pass exist in the world at once but only join the
//! order at [`Registry::commit`], so they are first visited on the next pass.
//! Despawns take effect immediately, so later entities in the same pass no
//! longer see them.

use hecs::{DynamicBundle, Entity, World};

use skirmish_core::enums::EntityKind;

/// Where a new entity joins the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// After everything else; drawn on top.
    Back,
    /// Before everything else; drawn underneath.
    Front,
}

#[derive(Default)]
pub struct Registry {
    world: World,
    order: Vec<Entity>,
    staged_front: Vec<Entity>,
    staged_back: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity now; it joins the order at the next commit.
    pub fn spawn(&mut self, bundle: impl DynamicBundle, placement: Placement) -> Entity {
        let entity = self.world.spawn(bundle);
        match placement {
            Placement::Back => self.staged_back.push(entity),
            Placement::Front => self.staged_front.push(entity),
        }
        entity
    }

    /// Remove an entity. Removing something already gone is a no-op.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    pub fn is_live(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Kind tag of a live entity.
    pub fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.world.get::<&EntityKind>(entity).ok().map(|kind| *kind)
    }

    /// Copy of the committed order, for iterating while mutating.
    pub fn snapshot(&self) -> Vec<Entity> {
        self.order.clone()
    }

    /// Fold staged spawns into the order and drop dead entries.
    pub fn commit(&mut self) {
        let world = &self.world;
        let mut order = Vec::with_capacity(
            self.staged_front.len() + self.order.len() + self.staged_back.len(),
        );
        order.extend(self.staged_front.drain(..).filter(|&e| world.contains(e)));
        order.extend(self.order.drain(..).filter(|&e| world.contains(e)));
        order.extend(self.staged_back.drain(..).filter(|&e| world.contains(e)));
        self.order = order;
    }

    /// Every live entity, staged ones included, in the order they will hold
    /// after the next commit.
    pub fn live_in_order(&self) -> Vec<Entity> {
        self.staged_front
            .iter()
            .chain(&self.order)
            .chain(&self.staged_back)
            .copied()
            .filter(|&e| self.world.contains(e))
            .collect()
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }

    /// Discard every entity.
    pub fn clear(&mut self) {
        self.world.clear();
        self.order.clear();
        self.staged_front.clear();
        self.staged_back.clear();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
