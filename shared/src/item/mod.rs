pub mod item_stack;
pub mod pocket_item;
pub mod tag;
