pub(crate) mod broadcast_gate;
pub mod carrier_resolver;
pub(crate) mod pocket_computer;
pub(crate) mod upgrade_slot;
