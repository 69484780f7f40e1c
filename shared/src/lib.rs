//! # Pocket Shared
//! Host-runtime vocabulary used by the pocket device server: actor handles
//! and carrier kinds, item stacks with identity handles and their tag data,
//! computer sides and terminals, and the upgrade/peripheral traits.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod computer;
mod item;
mod key;
mod pocket_access;
mod upgrade;
mod world;

pub use computer::{
    computer_family::ComputerFamily,
    computer_side::ComputerSide,
    terminal::{Terminal, TerminalSnapshot},
};
pub use item::{
    item_stack::{ItemRef, ItemStack},
    pocket_item,
    tag::{TagDocument, TagValue},
};
pub use key::{ActorKey, HandleKey, ObserverKey, WorldKey};
pub use pocket_access::{ActiveUpgrades, PocketAccess};
pub use upgrade::{
    device_context::DeviceContext,
    peripheral::Peripheral,
    pocket_upgrade::{PocketUpgrade, UpgradeRef},
    upgrade_id::UpgradeId,
};
pub use world::{
    actor::{Actor, CarrierKind, LivingCarrier, PlayerCarrier},
    actor_registry::ActorRegistry,
    block_pos::BlockPos,
};
