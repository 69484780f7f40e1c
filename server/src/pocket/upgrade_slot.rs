use std::sync::Weak;

use log::debug;

use pocket_shared::{
    pocket_item, ActiveUpgrades, ComputerSide, ItemRef, PocketAccess, UpgradeRef,
};

use crate::computer::server_computer::ServerComputer;

/// The one upgrade slot of a pocket device. Its peripheral lives on the
/// computer's back side.
///
/// Only ever touched while the owning device's state lock is held.
pub(crate) struct UpgradeSlot {
    upgrade: Option<UpgradeRef>,
    device: Weak<dyn PocketAccess>,
}

impl UpgradeSlot {
    /// `device` is handed to every peripheral the fitted upgrade builds
    pub fn new(device: Weak<dyn PocketAccess>) -> Self {
        Self {
            upgrade: None,
            device,
        }
    }

    pub fn upgrade(&self) -> Option<&UpgradeRef> {
        self.upgrade.as_ref()
    }

    pub fn holds(&self, upgrade: Option<&UpgradeRef>) -> bool {
        self.upgrade.as_ref() == upgrade
    }

    /// Fits a newly chosen upgrade. The item's durable data is written and
    /// marked dirty before the slot changes.
    ///
    /// Callers check [`holds`](Self::holds) first; fitting the same upgrade
    /// again rebuilds its peripheral.
    pub fn attach(
        &mut self,
        upgrade: Option<UpgradeRef>,
        item: &ItemRef,
        computer: &ServerComputer,
    ) {
        pocket_item::set_upgrade(item, upgrade.as_ref().map(UpgradeRef::upgrade_id));
        item.mark_dirty();

        self.replace(upgrade, computer);
    }

    /// Fits an upgrade already recorded elsewhere, without persisting it.
    ///
    /// Returns false if `upgrade` is already fitted.
    pub fn restore(&mut self, upgrade: Option<UpgradeRef>, computer: &ServerComputer) -> bool {
        if self.holds(upgrade.as_ref()) {
            return false;
        }

        self.replace(upgrade, computer);
        true
    }

    fn replace(&mut self, upgrade: Option<UpgradeRef>, computer: &ServerComputer) {
        debug!(
            "Pocket computer {}: upgrade {:?} -> {:?}",
            computer.instance_id(),
            self.upgrade,
            upgrade
        );
        self.upgrade = upgrade;
        self.invalidate_peripheral(computer);
    }

    /// Builds a fresh peripheral from the fitted upgrade and puts it on the
    /// back side, replacing whatever was there.
    pub fn invalidate_peripheral(&self, computer: &ServerComputer) {
        let peripheral = self
            .upgrade
            .as_ref()
            .and_then(|upgrade| {
                upgrade.create_peripheral(&computer.device_context(), self.device.clone())
            });
        computer.set_peripheral(ComputerSide::Back, peripheral);
    }

    pub fn active_upgrades(&self, computer: &ServerComputer) -> ActiveUpgrades {
        let mut upgrades = ActiveUpgrades::new();
        if let Some(upgrade) = &self.upgrade {
            upgrades.insert(
                upgrade.upgrade_id().clone(),
                computer.peripheral(ComputerSide::Back),
            );
        }
        upgrades
    }
}
