use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex, Weak,
};

use pocket_shared::{
    ComputerSide, DeviceContext, Peripheral, PocketAccess, PocketUpgrade, UpgradeId, UpgradeRef,
};

/// Upgrade whose peripherals record their attach/detach lifecycle.
pub struct TestUpgrade {
    id: UpgradeId,
    builds: AtomicUsize,
    produces_peripheral: bool,
    created: Mutex<Vec<Arc<TestPeripheral>>>,
}

impl TestUpgrade {
    pub fn new(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: UpgradeId::from(id),
            builds: AtomicUsize::new(0),
            produces_peripheral: true,
            created: Mutex::new(Vec::new()),
        })
    }

    /// An upgrade with no program-visible peripheral
    pub fn without_peripheral(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: UpgradeId::from(id),
            builds: AtomicUsize::new(0),
            produces_peripheral: false,
            created: Mutex::new(Vec::new()),
        })
    }

    /// How many times the factory has been invoked
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Every peripheral this upgrade has built, oldest first
    pub fn created(&self) -> Vec<Arc<TestPeripheral>> {
        self.created.lock().unwrap().clone()
    }

    pub fn last_created(&self) -> Option<Arc<TestPeripheral>> {
        self.created.lock().unwrap().last().cloned()
    }
}

impl PocketUpgrade for TestUpgrade {
    fn upgrade_id(&self) -> &UpgradeId {
        &self.id
    }

    fn create_peripheral(
        &self,
        device: &DeviceContext,
        access: Weak<dyn PocketAccess>,
    ) -> Option<Arc<dyn Peripheral>> {
        let serial = self.builds.fetch_add(1, Ordering::SeqCst);
        if !self.produces_peripheral {
            return None;
        }
        let peripheral = Arc::new(TestPeripheral {
            upgrade_id: self.id.clone(),
            serial,
            instance_id: device.instance_id,
            label: device.label.clone(),
            device: access,
            attached: AtomicBool::new(false),
            detached: AtomicBool::new(false),
        });
        self.created.lock().unwrap().push(peripheral.clone());
        Some(peripheral as Arc<dyn Peripheral>)
    }
}

/// Wraps a shared test upgrade into a descriptor handle
pub fn upgrade_ref(upgrade: &Arc<TestUpgrade>) -> UpgradeRef {
    UpgradeRef::from_arc(upgrade.clone())
}

pub struct TestPeripheral {
    pub upgrade_id: UpgradeId,
    pub serial: usize,
    pub instance_id: u64,
    pub label: Option<String>,
    device: Weak<dyn PocketAccess>,
    attached: AtomicBool,
    detached: AtomicBool,
}

impl TestPeripheral {
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst) && !self.detached.load(Ordering::SeqCst)
    }

    pub fn was_detached(&self) -> bool {
        self.detached.load(Ordering::SeqCst)
    }

    /// Drives the owning device's light, as a program call on this
    /// peripheral would. Returns false once the device is gone.
    pub fn set_device_light(&self, colour: i32) -> bool {
        match self.device.upgrade() {
            Some(device) => {
                device.set_light(colour);
                true
            }
            None => false,
        }
    }
}

impl Peripheral for TestPeripheral {
    fn peripheral_type(&self) -> &str {
        self.upgrade_id.as_str()
    }

    fn attach(&self, side: ComputerSide) {
        assert_eq!(side, ComputerSide::Back);
        self.attached.store(true, Ordering::SeqCst);
    }

    fn detach(&self, side: ComputerSide) {
        assert_eq!(side, ComputerSide::Back);
        self.detached.store(true, Ordering::SeqCst);
    }
}
