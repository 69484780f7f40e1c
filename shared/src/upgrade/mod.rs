pub mod device_context;
pub mod peripheral;
pub mod pocket_upgrade;
pub mod upgrade_id;
