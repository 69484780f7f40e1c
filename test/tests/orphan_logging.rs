/// A dropped device is reported once, not on every tick it stays dropped.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};

use pocket_shared::ItemRef;
use pocket_test::{new_device, RecordingSender, TestWorld};

struct OrphanCounter {
    hits: AtomicUsize,
}

impl Log for OrphanCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if record.args().to_string().contains("no longer holds the device") {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: OrphanCounter = OrphanCounter {
    hits: AtomicUsize::new(0),
};

#[test]
fn orphaned_carrier_logged_once_per_loss() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let world = TestWorld::default();
    let sender = RecordingSender::new();
    let item = ItemRef::new();
    let player = world.build().holding(&item).player();
    let device = new_device(8);
    device.update_values(Some(&world.get(&player)), item.clone(), None);

    world.take_item(&player, &item);
    for _ in 0..5 {
        device.broadcast_state(false, &world, &sender);
        assert!(device.carrier(&world).is_none());
    }
    assert_eq!(LOGGER.hits.load(Ordering::SeqCst), 1);

    // Recovered, then lost again
    world.give_main(&player, &item);
    assert!(device.carrier(&world).is_some());
    world.take_item(&player, &item);
    assert!(device.carrier(&world).is_none());
    assert!(device.carrier(&world).is_none());
    assert_eq!(LOGGER.hits.load(Ordering::SeqCst), 2);
}
