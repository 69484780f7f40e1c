/// Tier of a computer. Pocket devices come in every family.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ComputerFamily {
    Normal,
    Advanced,
    Command,
}

impl ComputerFamily {
    /// Whether terminals of this family support colour output
    pub fn is_colour(&self) -> bool {
        match self {
            ComputerFamily::Normal => false,
            ComputerFamily::Advanced | ComputerFamily::Command => true,
        }
    }
}
