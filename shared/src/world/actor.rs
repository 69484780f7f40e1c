use crate::{BlockPos, ItemRef, ObserverKey, ActorKey, WorldKey};

/// A point-in-time view of a live actor, as handed out by an
/// [`ActorRegistry`](crate::ActorRegistry).
///
/// Holding an `Actor` never keeps the underlying actor alive. A fresh view
/// must be fetched every time the actor's state matters.
#[derive(Clone, Debug)]
pub struct Actor {
    pub key: ActorKey,
    pub alive: bool,
    pub world: WorldKey,
    pub position: BlockPos,
    pub kind: CarrierKind,
}

impl Actor {
    pub fn new(key: ActorKey, world: WorldKey, position: BlockPos, kind: CarrierKind) -> Self {
        Self {
            key,
            alive: true,
            world,
            position,
            kind,
        }
    }

    /// The connection this actor can be sent snapshots on, if it is a
    /// player with a live connection
    pub fn observer(&self) -> Option<ObserverKey> {
        match &self.kind {
            CarrierKind::Player(player) => player.connection,
            CarrierKind::Living(_) | CarrierKind::Unsupported => None,
        }
    }
}

/// The kinds of actor that may carry a device.
#[derive(Clone, Debug)]
pub enum CarrierKind {
    /// An actor with a full inventory model
    Player(PlayerCarrier),
    /// An actor with only hand equipment slots
    Living(LivingCarrier),
    /// Anything else (projectiles, item entities, vehicles, ...)
    Unsupported,
}

#[derive(Clone, Debug, Default)]
pub struct PlayerCarrier {
    pub main: Vec<ItemRef>,
    pub off_hand: Vec<ItemRef>,
    pub connection: Option<ObserverKey>,
}

impl PlayerCarrier {
    /// Whether `item` sits in the main inventory or the off-hand slot,
    /// compared by handle identity
    pub fn holds(&self, item: &ItemRef) -> bool {
        self.main.iter().chain(self.off_hand.iter()).any(|held| held == item)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LivingCarrier {
    pub main_hand: Option<ItemRef>,
    pub off_hand: Option<ItemRef>,
}

impl LivingCarrier {
    pub fn holds(&self, item: &ItemRef) -> bool {
        self.main_hand.as_ref() == Some(item) || self.off_hand.as_ref() == Some(item)
    }
}
