/// Upgrades changed from an interaction thread while the tick thread keeps
/// re-binding the device must never leave a torn upgrade/peripheral pair.

use std::{sync::Arc, thread};

use pocket_shared::{pocket_item, ItemRef};
use pocket_test::{
    assert_active_upgrades_consistent, assert_upgrade_consistent, new_device, upgrade_ref,
    TestUpgrade, TestWorld,
};

#[test]
fn racing_set_upgrade_picks_one_winner() {
    for round in 0..50 {
        let device = new_device(round);
        let item = ItemRef::new();
        device.update_values(None, item.clone(), None);

        let first = TestUpgrade::new("computercraft:wireless_modem");
        let second = TestUpgrade::new("computercraft:speaker");

        let handles: Vec<_> = [first.clone(), second.clone()]
            .into_iter()
            .map(|upgrade| {
                let device = device.clone();
                thread::spawn(move || device.set_upgrade(Some(upgrade_ref(&upgrade))))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let winner = device.upgrade().expect("one upgrade fitted");
        assert!(winner == upgrade_ref(&first) || winner == upgrade_ref(&second));
        assert_eq!(pocket_item::upgrade_id(&item).as_ref(), Some(winner.upgrade_id()));
        assert_upgrade_consistent(&device);
    }
}

#[test]
fn tick_and_interaction_threads_stay_consistent() {
    let _ = env_logger::builder().is_test(true).try_init();

    let world = Arc::new(TestWorld::default());
    let item = ItemRef::new();
    let player = world.build().holding(&item).player();
    let device = new_device(1);

    let upgrades: Vec<Arc<TestUpgrade>> = vec![
        TestUpgrade::new("computercraft:wireless_modem"),
        TestUpgrade::new("computercraft:speaker"),
        TestUpgrade::without_peripheral("computercraft:colour"),
    ];
    device.update_values(Some(&world.get(&player)), item.clone(), None);

    let interaction = {
        let device = device.clone();
        let upgrades = upgrades.clone();
        thread::spawn(move || {
            let rng = fastrand::Rng::with_seed(7);
            for _ in 0..500 {
                let choice = rng.usize(0..=upgrades.len());
                let upgrade = upgrades.get(choice).map(upgrade_ref);
                device.set_upgrade(upgrade);
            }
        })
    };

    let tick = {
        let device = device.clone();
        let world = world.clone();
        let item = item.clone();
        thread::spawn(move || {
            for _ in 0..500 {
                // Re-bind with whatever is persisted on the item, like a tick driver
                let persisted = pocket_item::upgrade_id(&item);
                let upgrade = device
                    .upgrade()
                    .filter(|fitted| Some(fitted.upgrade_id()) == persisted.as_ref());
                device.update_values(Some(&world.get(&player)), item.clone(), upgrade);
                assert_active_upgrades_consistent(&device.active_upgrades());
            }
        })
    };

    for _ in 0..500 {
        let active = device.active_upgrades();
        assert_active_upgrades_consistent(&active);
        if let Some(id) = active.keys().next() {
            assert!(upgrades
                .iter()
                .any(|upgrade| upgrade_ref(upgrade).upgrade_id() == id));
        }
    }

    interaction.join().unwrap();
    tick.join().unwrap();
    assert_upgrade_consistent(&device);
}
