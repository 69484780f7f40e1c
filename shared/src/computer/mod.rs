pub mod computer_family;
pub mod computer_side;
pub mod terminal;
