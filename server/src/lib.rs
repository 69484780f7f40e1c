//! # Pocket Server
//! Server-side state holder for portable computer devices. Keeps the device's
//! carrier, backing item and fitted upgrade bound together under concurrent
//! access, and decides when the carrier needs a fresh terminal snapshot.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod transport;
pub mod shared {
    pub use pocket_shared::{
        pocket_item, Actor, ActorKey, ActorRegistry, ActiveUpgrades, BlockPos, CarrierKind,
        ComputerFamily, ComputerSide, DeviceContext, HandleKey, ItemRef, LivingCarrier,
        ObserverKey, Peripheral, PlayerCarrier, PocketAccess, PocketUpgrade, TagDocument,
        TagValue, Terminal, TerminalSnapshot, UpgradeId, UpgradeRef, WorldKey,
    };
}

mod computer;
mod config;
mod error;
mod pocket;

pub use computer::server_computer::ServerComputer;
pub use config::PocketConfig;
pub use error::PocketError;
pub use pocket::{carrier_resolver, pocket_computer::PocketServerComputer};
pub use transport::{RecvError, SendError, SnapshotSender};
