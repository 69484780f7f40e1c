use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
};

use log::{trace, warn};

use pocket_shared::{
    BlockPos, ComputerFamily, ComputerSide, DeviceContext, ObserverKey, Peripheral, Terminal,
    TerminalSnapshot, WorldKey,
};

use crate::transport::SnapshotSender;

type PeripheralSlots = [Option<Arc<dyn Peripheral>>; ComputerSide::COUNT];

#[derive(Clone, Copy, Default)]
struct Location {
    world: Option<WorldKey>,
    position: BlockPos,
}

/// A running computer as seen by the server: identity, location, terminal,
/// attached peripherals and the observers currently interacting with it.
pub struct ServerComputer {
    instance_id: u64,
    computer_id: i32,
    family: ComputerFamily,
    label: RwLock<Option<String>>,
    location: RwLock<Location>,
    terminal: RwLock<Terminal>,
    terminal_changed: AtomicBool,
    peripherals: RwLock<PeripheralSlots>,
    sessions: RwLock<HashSet<ObserverKey>>,
}

impl ServerComputer {
    pub fn new(
        instance_id: u64,
        computer_id: i32,
        label: Option<String>,
        family: ComputerFamily,
        terminal_width: usize,
        terminal_height: usize,
    ) -> Self {
        Self {
            instance_id,
            computer_id,
            family,
            label: RwLock::new(label),
            location: RwLock::new(Location::default()),
            terminal: RwLock::new(Terminal::new(terminal_width, terminal_height)),
            terminal_changed: AtomicBool::new(false),
            peripherals: RwLock::new(std::array::from_fn(|_| None)),
            sessions: RwLock::new(HashSet::new()),
        }
    }

    // Identity

    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    pub fn id(&self) -> i32 {
        self.computer_id
    }

    pub fn family(&self) -> ComputerFamily {
        self.family
    }

    pub fn label(&self) -> Option<String> {
        let Ok(label) = self.label.read() else {
            panic!("ServerComputer label lock poisoned");
        };
        label.clone()
    }

    pub fn set_label(&self, label: Option<String>) {
        let Ok(mut current) = self.label.write() else {
            panic!("ServerComputer label lock poisoned");
        };
        *current = label;
    }

    // Location

    pub fn world(&self) -> Option<WorldKey> {
        self.location().world
    }

    pub fn position(&self) -> BlockPos {
        self.location().position
    }

    pub fn set_world(&self, world: WorldKey) {
        let Ok(mut location) = self.location.write() else {
            panic!("ServerComputer location lock poisoned");
        };
        location.world = Some(world);
    }

    pub fn set_position(&self, position: BlockPos) {
        let Ok(mut location) = self.location.write() else {
            panic!("ServerComputer location lock poisoned");
        };
        location.position = position;
    }

    fn location(&self) -> Location {
        let Ok(location) = self.location.read() else {
            panic!("ServerComputer location lock poisoned");
        };
        *location
    }

    /// Copy of the facts an upgrade factory may depend on
    pub fn device_context(&self) -> DeviceContext {
        let location = self.location();
        DeviceContext {
            instance_id: self.instance_id,
            computer_id: self.computer_id,
            family: self.family,
            label: self.label(),
            world: location.world,
            position: location.position,
        }
    }

    // Terminal

    pub fn terminal_width(&self) -> usize {
        self.read_terminal(Terminal::width)
    }

    pub fn terminal_height(&self) -> usize {
        self.read_terminal(Terminal::height)
    }

    pub fn read_terminal<R>(&self, f: impl FnOnce(&Terminal) -> R) -> R {
        let Ok(terminal) = self.terminal.read() else {
            panic!("ServerComputer terminal lock poisoned");
        };
        f(&terminal)
    }

    /// Edits the terminal. Any edit marks the terminal as changed.
    pub fn write_terminal<R>(&self, f: impl FnOnce(&mut Terminal) -> R) -> R {
        let Ok(mut terminal) = self.terminal.write() else {
            panic!("ServerComputer terminal lock poisoned");
        };
        let result = f(&mut terminal);
        self.mark_terminal_changed();
        result
    }

    pub fn mark_terminal_changed(&self) {
        self.terminal_changed.store(true, Ordering::Release);
    }

    pub fn has_terminal_changed(&self) -> bool {
        self.terminal_changed.load(Ordering::Acquire)
    }

    pub fn clear_terminal_changed(&self) {
        self.terminal_changed.store(false, Ordering::Release);
    }

    /// Clears the change flag, returning whether it was set
    pub(crate) fn take_terminal_changed(&self) -> bool {
        self.terminal_changed.swap(false, Ordering::AcqRel)
    }

    pub fn create_terminal_packet(&self) -> TerminalSnapshot {
        self.read_terminal(|terminal| TerminalSnapshot::new(self.instance_id, terminal))
    }

    // Peripherals

    pub fn peripheral(&self, side: ComputerSide) -> Option<Arc<dyn Peripheral>> {
        let Ok(peripherals) = self.peripherals.read() else {
            panic!("ServerComputer peripheral lock poisoned");
        };
        peripherals[side.index()].clone()
    }

    /// Replaces the peripheral on `side`, detaching the old instance and
    /// attaching the new one. Setting the instance already present does nothing.
    pub fn set_peripheral(&self, side: ComputerSide, peripheral: Option<Arc<dyn Peripheral>>) {
        let Ok(mut peripherals) = self.peripherals.write() else {
            panic!("ServerComputer peripheral lock poisoned");
        };
        let slot = &mut peripherals[side.index()];

        let unchanged = match (slot.as_ref(), peripheral.as_ref()) {
            (None, None) => true,
            (Some(old), Some(new)) => {
                Arc::as_ptr(old) as *const () == Arc::as_ptr(new) as *const ()
            }
            _ => false,
        };
        if unchanged {
            return;
        }

        if let Some(old) = slot.take() {
            old.detach(side);
        }
        if let Some(new) = peripheral {
            new.attach(side);
            *slot = Some(new);
        }
    }

    // Sessions

    /// Registers an interactive session. The observer receives terminal
    /// snapshots through the generic broadcast from now on.
    pub fn open_session(&self, observer: ObserverKey) {
        let Ok(mut sessions) = self.sessions.write() else {
            panic!("ServerComputer session lock poisoned");
        };
        sessions.insert(observer);
    }

    pub fn close_session(&self, observer: &ObserverKey) -> bool {
        let Ok(mut sessions) = self.sessions.write() else {
            panic!("ServerComputer session lock poisoned");
        };
        sessions.remove(observer)
    }

    pub fn is_interacting(&self, observer: &ObserverKey) -> bool {
        let Ok(sessions) = self.sessions.read() else {
            panic!("ServerComputer session lock poisoned");
        };
        sessions.contains(observer)
    }

    pub fn session_count(&self) -> usize {
        let Ok(sessions) = self.sessions.read() else {
            panic!("ServerComputer session lock poisoned");
        };
        sessions.len()
    }

    // Broadcast

    /// Runs one broadcast cycle: sends a snapshot to every interacting session
    /// if the terminal changed or `force` is set. The change flag is cleared
    /// once at least one snapshot has been delivered.
    ///
    /// Returns the number of snapshots handed to `sender`.
    pub fn broadcast_state(&self, force: bool, sender: &dyn SnapshotSender) -> usize {
        let changed = self.take_terminal_changed();
        let delivered = self.broadcast_to_sessions(changed || force, sender);
        if changed && delivered == 0 {
            self.mark_terminal_changed();
        }
        delivered
    }

    pub(crate) fn broadcast_to_sessions(
        &self,
        snapshot_needed: bool,
        sender: &dyn SnapshotSender,
    ) -> usize {
        if !snapshot_needed {
            return 0;
        }

        let observers: Vec<ObserverKey> = {
            let Ok(sessions) = self.sessions.read() else {
                panic!("ServerComputer session lock poisoned");
            };
            sessions.iter().copied().collect()
        };
        if observers.is_empty() {
            return 0;
        }

        let snapshot = self.create_terminal_packet();
        let mut delivered = 0;
        for observer in observers {
            match sender.send(&observer, &snapshot) {
                Ok(()) => delivered += 1,
                Err(err) => warn!(
                    "Computer {}: cannot send terminal to session {:?}: {}",
                    self.instance_id, observer, err
                ),
            }
        }
        trace!(
            "Computer {}: sent terminal to {} session(s)",
            self.instance_id,
            delivered
        );

        delivered
    }
}
