use std::{collections::HashMap, sync::Arc};

use crate::{Actor, ActorRegistry, Peripheral, TagDocument, UpgradeId};

/// Upgrades fitted to a device, keyed by upgrade identity, with the
/// peripheral each one currently exposes.
pub type ActiveUpgrades = HashMap<UpgradeId, Option<Arc<dyn Peripheral>>>;

/// The surface a pocket device offers to host code and upgrade logic.
///
/// Peripherals reach their device through a `Weak<dyn PocketAccess>` handed to
/// [`PocketUpgrade::create_peripheral`](crate::PocketUpgrade::create_peripheral).
pub trait PocketAccess: Send + Sync {
    /// The actor holding this device right now, if it still legitimately
    /// holds it
    fn carrier(&self, registry: &dyn ActorRegistry) -> Option<Actor>;

    /// Dye colour of the device, -1 if undyed
    fn colour(&self) -> i32;

    fn set_colour(&self, colour: i32);

    /// Light colour override as 0xRRGGBB, -1 if unset
    fn light(&self) -> i32;

    /// Sets the light colour override. Anything outside `0..=0xFFFFFF` clears it.
    fn set_light(&self, colour: i32);

    /// Copy of the data document owned by the fitted upgrade
    fn upgrade_data(&self) -> TagDocument;

    /// Edits the upgrade's data document and flags it for persistence
    fn edit_upgrade_data(&self, f: &mut dyn FnMut(&mut TagDocument));

    /// Flags the upgrade's data document for persistence
    fn update_upgrade_data(&self);

    /// Rebuilds the peripheral exposed by the fitted upgrade
    fn invalidate_peripheral(&self);

    fn upgrades(&self) -> ActiveUpgrades;
}
