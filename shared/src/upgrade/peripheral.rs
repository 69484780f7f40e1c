use crate::ComputerSide;

/// An I/O capability exposed to programs running on a computer.
pub trait Peripheral: Send + Sync {
    fn peripheral_type(&self) -> &str;

    /// Called when this instance becomes visible on `side`
    fn attach(&self, _side: ComputerSide) {}

    /// Called when this instance is removed from `side`
    fn detach(&self, _side: ComputerSide) {}
}
