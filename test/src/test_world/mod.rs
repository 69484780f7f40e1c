/// Simple ActorRegistry implementation for testing pocket devices

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        RwLock,
    },
};

use pocket_shared::{
    Actor, ActorKey, ActorRegistry, BlockPos, CarrierKind, HandleKey, ItemRef, WorldKey,
};

use crate::helpers::ActorBuilder;

// TestWorld - Simple HashMap-based actor registry
pub struct TestWorld {
    key: WorldKey,
    next_actor: AtomicU64,
    actors: RwLock<HashMap<ActorKey, Actor>>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new(WorldKey::from_u64(0))
    }
}

impl TestWorld {
    pub fn new(key: WorldKey) -> Self {
        Self {
            key,
            next_actor: AtomicU64::new(1),
            actors: RwLock::new(HashMap::new()),
        }
    }

    pub fn key(&self) -> WorldKey {
        self.key
    }

    /// Starts building an actor in this world
    pub fn build(&self) -> ActorBuilder<'_> {
        let key = ActorKey::from_u64(self.next_actor.fetch_add(1, Ordering::Relaxed));
        ActorBuilder::new(self, key)
    }

    pub(crate) fn insert(&self, actor: Actor) -> ActorKey {
        let key = actor.key;
        self.actors.write().unwrap().insert(key, actor);
        key
    }

    /// Current snapshot of an actor. Panics if it does not exist.
    pub fn get(&self, key: &ActorKey) -> Actor {
        self.actor(key).expect("actor does not exist")
    }

    pub fn edit(&self, key: &ActorKey, f: impl FnOnce(&mut Actor)) {
        let mut actors = self.actors.write().unwrap();
        let actor = actors.get_mut(key).expect("actor does not exist");
        f(actor);
    }

    pub fn kill(&self, key: &ActorKey) {
        self.edit(key, |actor| actor.alive = false);
    }

    pub fn remove(&self, key: &ActorKey) {
        self.actors.write().unwrap().remove(key);
    }

    pub fn move_to(&self, key: &ActorKey, world: WorldKey, position: BlockPos) {
        self.edit(key, |actor| {
            actor.world = world;
            actor.position = position;
        });
    }

    /// Removes `item` from every inventory and hand slot of the actor
    pub fn take_item(&self, key: &ActorKey, item: &ItemRef) {
        self.edit(key, |actor| match &mut actor.kind {
            CarrierKind::Player(player) => {
                player.main.retain(|held| held != item);
                player.off_hand.retain(|held| held != item);
            }
            CarrierKind::Living(living) => {
                if living.main_hand.as_ref() == Some(item) {
                    living.main_hand = None;
                }
                if living.off_hand.as_ref() == Some(item) {
                    living.off_hand = None;
                }
            }
            CarrierKind::Unsupported => {}
        });
    }

    pub fn give_main(&self, key: &ActorKey, item: &ItemRef) {
        self.edit(key, |actor| match &mut actor.kind {
            CarrierKind::Player(player) => player.main.push(item.clone()),
            CarrierKind::Living(living) => living.main_hand = Some(item.clone()),
            CarrierKind::Unsupported => {}
        });
    }

    pub fn give_off_hand(&self, key: &ActorKey, item: &ItemRef) {
        self.edit(key, |actor| match &mut actor.kind {
            CarrierKind::Player(player) => player.off_hand.push(item.clone()),
            CarrierKind::Living(living) => living.off_hand = Some(item.clone()),
            CarrierKind::Unsupported => {}
        });
    }
}

impl ActorRegistry for TestWorld {
    fn actor(&self, key: &ActorKey) -> Option<Actor> {
        self.actors.read().unwrap().get(key).cloned()
    }
}
