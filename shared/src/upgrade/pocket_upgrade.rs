use std::{
    fmt,
    sync::{Arc, Weak},
};

use crate::{DeviceContext, Peripheral, PocketAccess, UpgradeId};

/// A hardware extension that can be fitted to a pocket device.
pub trait PocketUpgrade: Send + Sync {
    fn upgrade_id(&self) -> &UpgradeId;

    /// Builds the peripheral this upgrade exposes on `device`. May produce
    /// nothing for upgrades with no program-visible side.
    ///
    /// `access` is the device itself. The peripheral may keep it and call
    /// back later, but not from inside this call or from `attach`/`detach`:
    /// those run while the device's state is locked.
    fn create_peripheral(
        &self,
        device: &DeviceContext,
        access: Weak<dyn PocketAccess>,
    ) -> Option<Arc<dyn Peripheral>>;
}

// UpgradeRef
/// Shared handle to a registered upgrade descriptor, compared by identity.
#[derive(Clone)]
pub struct UpgradeRef {
    inner: Arc<dyn PocketUpgrade>,
}

impl UpgradeRef {
    pub fn from_arc(upgrade: Arc<dyn PocketUpgrade>) -> Self {
        Self { inner: upgrade }
    }

    pub fn upgrade_id(&self) -> &UpgradeId {
        self.inner.upgrade_id()
    }

    pub fn create_peripheral(
        &self,
        device: &DeviceContext,
        access: Weak<dyn PocketAccess>,
    ) -> Option<Arc<dyn Peripheral>> {
        self.inner.create_peripheral(device, access)
    }

    /// Identity comparison. Only the data pointer is compared, vtables for the
    /// same type may differ between codegen units.
    pub fn ptr_eq(&self, other: &UpgradeRef) -> bool {
        Arc::as_ptr(&self.inner) as *const () == Arc::as_ptr(&other.inner) as *const ()
    }
}

impl PartialEq for UpgradeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for UpgradeRef {}

impl fmt::Debug for UpgradeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UpgradeRef")
            .field(self.inner.upgrade_id())
            .finish()
    }
}
