use crate::{BlockPos, ComputerFamily, WorldKey};

/// What an upgrade factory gets to know about the device it is building a
/// peripheral for.
///
/// This is a copy taken while the device's state is locked. Anything that
/// changes later is read through the device's `PocketAccess` handle.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceContext {
    pub instance_id: u64,
    pub computer_id: i32,
    pub family: ComputerFamily,
    pub label: Option<String>,
    pub world: Option<WorldKey>,
    pub position: BlockPos,
}
