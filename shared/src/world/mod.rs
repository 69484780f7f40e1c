pub mod actor;
pub mod actor_registry;
pub mod block_pos;
