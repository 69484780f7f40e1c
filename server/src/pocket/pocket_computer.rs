use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, trace, warn};

use pocket_shared::{
    pocket_item, Actor, ActorKey, ActorRegistry, ActiveUpgrades, ComputerFamily, ItemRef,
    PocketAccess, TagDocument, UpgradeRef,
};

use crate::{
    computer::server_computer::ServerComputer,
    pocket::{broadcast_gate, carrier_resolver, upgrade_slot::UpgradeSlot},
    transport::SnapshotSender,
    PocketConfig, PocketError,
};

// Everything guarded by the device's single state lock. Carrier, item and
// upgrade (with the back-side peripheral it produced) change together.
struct PocketState {
    carrier: Option<ActorKey>,
    item: Option<ItemRef>,
    slot: UpgradeSlot,
    // Bound carrier failed to resolve last time it was checked
    orphaned: bool,
}

/// The server-side state of a pocket device: the computer itself, the item
/// stack that represents it in the world, the actor carrying that stack, and
/// the upgrade fitted to it.
///
/// The tick driver calls [`update_values`](Self::update_values) and
/// [`broadcast_state`](Self::broadcast_state) every tick. Upgrades may be
/// changed from other threads through [`set_upgrade`](Self::set_upgrade).
///
/// Devices are always shared: peripherals built by the fitted upgrade hold a
/// weak handle back to the device.
pub struct PocketServerComputer {
    computer: ServerComputer,
    state: Mutex<PocketState>,
}

impl PocketServerComputer {
    pub fn new(
        config: &PocketConfig,
        instance_id: u64,
        computer_id: i32,
        label: Option<String>,
        family: ComputerFamily,
    ) -> Arc<Self> {
        let computer = ServerComputer::new(
            instance_id,
            computer_id,
            label,
            family,
            config.terminal_width,
            config.terminal_height,
        );

        Arc::new_cyclic(|this: &std::sync::Weak<Self>| Self {
            computer,
            state: Mutex::new(PocketState {
                carrier: None,
                item: None,
                slot: UpgradeSlot::new(this.clone()),
                orphaned: false,
            }),
        })
    }

    pub fn computer(&self) -> &ServerComputer {
        &self.computer
    }

    pub fn instance_id(&self) -> u64 {
        self.computer.instance_id()
    }

    fn state(&self) -> MutexGuard<'_, PocketState> {
        match self.try_state() {
            Ok(state) => state,
            Err(err) => panic!("{}", err),
        }
    }

    fn try_state(&self) -> Result<MutexGuard<'_, PocketState>, PocketError> {
        self.state.lock().map_err(|_| PocketError::StatePoisoned {
            instance_id: self.instance_id(),
        })
    }

    fn bound_item<'s>(&self, state: &'s PocketState) -> Result<&'s ItemRef, PocketError> {
        state.item.as_ref().ok_or(PocketError::NoBackingItem {
            instance_id: self.instance_id(),
        })
    }

    // Binding

    /// Re-binds carrier, backing item and upgrade. Called by the tick driver
    /// every tick, and right after the item changes hands.
    ///
    /// The device's location follows `carrier`. A player picking the device up
    /// forces a full terminal resync to them, if they are connected. A differing `upgrade` is fitted
    /// without being written back to the item, it is assumed to come from
    /// the item already.
    pub fn update_values(&self, carrier: Option<&Actor>, item: ItemRef, upgrade: Option<UpgradeRef>) {
        let mut state = self.state();

        if let Some(actor) = carrier {
            self.computer.set_world(actor.world);
            self.computer.set_position(actor.position);
        }

        let carrier_key = carrier.map(|actor| actor.key);
        if carrier_key != state.carrier {
            debug!(
                "Pocket computer {}: carrier {:?} -> {:?}",
                self.instance_id(),
                state.carrier,
                carrier_key
            );
            // New observer has never seen this terminal
            if carrier.and_then(Actor::observer).is_some() {
                self.computer.mark_terminal_changed();
            }
            state.orphaned = false;
        }

        state.carrier = carrier_key;
        state.item = Some(item);

        state.slot.restore(upgrade, &self.computer);
    }

    /// The backing item currently bound, if any
    pub fn backing_item(&self) -> Option<ItemRef> {
        self.state().item.clone()
    }

    /// The carrier bound by the last update, without checking it still
    /// holds the device
    pub fn bound_carrier(&self) -> Option<ActorKey> {
        self.state().carrier
    }

    /// The actor holding this device right now. Re-validated on every call.
    pub fn carrier(&self, registry: &dyn ActorRegistry) -> Option<Actor> {
        let mut state = self.state();
        self.resolve_carrier(&mut state, registry)
    }

    fn resolve_carrier(&self, state: &mut PocketState, registry: &dyn ActorRegistry) -> Option<Actor> {
        let resolved =
            carrier_resolver::resolve_key(registry, state.carrier.as_ref(), state.item.as_ref());
        let orphaned = resolved.is_none() && state.carrier.is_some();
        if orphaned && !state.orphaned {
            debug!(
                "Pocket computer {}: bound carrier {:?} no longer holds the device",
                self.instance_id(),
                state.carrier
            );
        }
        state.orphaned = orphaned;
        resolved
    }

    // Upgrades

    pub fn upgrade(&self) -> Option<UpgradeRef> {
        self.state().slot.upgrade().cloned()
    }

    /// Fits `upgrade` and records it on the backing item. Fitting the upgrade
    /// already present does nothing.
    ///
    /// # Panics
    ///
    /// Panics if no backing item has been bound yet.
    pub fn set_upgrade(&self, upgrade: Option<UpgradeRef>) {
        if let Err(err) = self.try_set_upgrade(upgrade) {
            panic!("{}", err);
        }
    }

    /// Fallible version of [`set_upgrade`](Self::set_upgrade). Returns
    /// whether the fitted upgrade changed.
    pub fn try_set_upgrade(&self, upgrade: Option<UpgradeRef>) -> Result<bool, PocketError> {
        let mut state = self.try_state()?;
        if state.slot.holds(upgrade.as_ref()) {
            return Ok(false);
        }

        let item = self.bound_item(&state)?.clone();
        state.slot.attach(upgrade, &item, &self.computer);
        Ok(true)
    }

    pub fn invalidate_peripheral(&self) {
        let state = self.state();
        state.slot.invalidate_peripheral(&self.computer);
    }

    pub fn active_upgrades(&self) -> ActiveUpgrades {
        let state = self.state();
        state.slot.active_upgrades(&self.computer)
    }

    // Item data

    pub fn colour(&self) -> i32 {
        self.state()
            .item
            .as_ref()
            .map(pocket_item::colour)
            .unwrap_or(-1)
    }

    /// # Panics
    ///
    /// Panics if no backing item has been bound yet.
    pub fn set_colour(&self, colour: i32) {
        if let Err(err) = self.try_set_colour(colour) {
            panic!("{}", err);
        }
    }

    pub fn try_set_colour(&self, colour: i32) -> Result<(), PocketError> {
        let state = self.try_state()?;
        let item = self.bound_item(&state)?;
        pocket_item::set_colour(item, colour);
        item.mark_dirty();
        Ok(())
    }

    pub fn light(&self) -> i32 {
        self.state()
            .item
            .as_ref()
            .map(pocket_item::light)
            .unwrap_or(-1)
    }

    /// # Panics
    ///
    /// Panics if no backing item has been bound yet.
    pub fn set_light(&self, colour: i32) {
        if let Err(err) = self.try_set_light(colour) {
            panic!("{}", err);
        }
    }

    /// Returns whether the stored light override changed. Unchanged values
    /// leave the item clean.
    pub fn try_set_light(&self, colour: i32) -> Result<bool, PocketError> {
        let state = self.try_state()?;
        let item = self.bound_item(&state)?;
        let changed = pocket_item::set_light(item, colour);
        if changed {
            item.mark_dirty();
        }
        Ok(changed)
    }

    pub fn upgrade_data(&self) -> TagDocument {
        self.state()
            .item
            .as_ref()
            .map(pocket_item::upgrade_info)
            .unwrap_or_default()
    }

    /// Edits the upgrade's data document on the backing item and marks the
    /// item dirty.
    ///
    /// # Panics
    ///
    /// Panics if no backing item has been bound yet.
    pub fn edit_upgrade_data<R>(&self, f: impl FnOnce(&mut TagDocument) -> R) -> R {
        let state = self.state();
        let item = match self.bound_item(&state) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        };
        let result = pocket_item::update_upgrade_info(item, f);
        item.mark_dirty();
        result
    }

    /// Marks the backing item dirty so its data gets persisted
    pub fn update_upgrade_data(&self) {
        if let Some(item) = &self.state().item {
            item.mark_dirty();
        }
    }

    // Broadcast

    /// Runs one broadcast cycle.
    ///
    /// Interactive sessions are served first by the computer's own broadcast.
    /// Then, if the terminal changed or `force` is set, the carrier gets a
    /// snapshot directly, provided it resolves to a connected player with no
    /// session of its own on this device. The change flag is cleared once
    /// any snapshot went out.
    ///
    /// Returns the number of snapshots handed to `sender`.
    pub fn broadcast_state(
        &self,
        force: bool,
        registry: &dyn ActorRegistry,
        sender: &dyn SnapshotSender,
    ) -> usize {
        let changed = self.computer.take_terminal_changed();
        let mut delivered = self.computer.broadcast_to_sessions(changed || force, sender);

        let target = {
            let mut state = self.state();
            let carrier = self.resolve_carrier(&mut state, registry);
            broadcast_gate::snapshot_target(changed, force, carrier.as_ref(), |observer| {
                self.computer.is_interacting(observer)
            })
        };

        if let Some(observer) = target {
            let snapshot = self.computer.create_terminal_packet();
            match sender.send(&observer, &snapshot) {
                Ok(()) => {
                    trace!(
                        "Pocket computer {}: sent terminal to carrier {:?}",
                        self.instance_id(),
                        observer
                    );
                    delivered += 1;
                }
                Err(err) => warn!(
                    "Pocket computer {}: cannot send terminal to carrier {:?}: {}",
                    self.instance_id(),
                    observer,
                    err
                ),
            }
        }

        if changed && delivered == 0 {
            self.computer.mark_terminal_changed();
        }

        delivered
    }
}

impl PocketAccess for PocketServerComputer {
    fn carrier(&self, registry: &dyn ActorRegistry) -> Option<Actor> {
        PocketServerComputer::carrier(self, registry)
    }

    fn colour(&self) -> i32 {
        PocketServerComputer::colour(self)
    }

    fn set_colour(&self, colour: i32) {
        PocketServerComputer::set_colour(self, colour)
    }

    fn light(&self) -> i32 {
        PocketServerComputer::light(self)
    }

    fn set_light(&self, colour: i32) {
        PocketServerComputer::set_light(self, colour)
    }

    fn upgrade_data(&self) -> TagDocument {
        PocketServerComputer::upgrade_data(self)
    }

    fn edit_upgrade_data(&self, f: &mut dyn FnMut(&mut TagDocument)) {
        PocketServerComputer::edit_upgrade_data(self, |data| f(data))
    }

    fn update_upgrade_data(&self) {
        PocketServerComputer::update_upgrade_data(self)
    }

    fn invalidate_peripheral(&self) {
        PocketServerComputer::invalidate_peripheral(self)
    }

    fn upgrades(&self) -> ActiveUpgrades {
        self.active_upgrades()
    }
}
