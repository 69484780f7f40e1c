use std::fmt;

/// Attachment points a computer exposes for peripherals
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ComputerSide {
    Bottom,
    Top,
    Back,
    Front,
    Right,
    Left,
}

impl ComputerSide {
    pub const COUNT: usize = 6;

    pub const ALL: [ComputerSide; ComputerSide::COUNT] = [
        ComputerSide::Bottom,
        ComputerSide::Top,
        ComputerSide::Back,
        ComputerSide::Front,
        ComputerSide::Right,
        ComputerSide::Left,
    ];

    pub fn index(&self) -> usize {
        match self {
            ComputerSide::Bottom => 0,
            ComputerSide::Top => 1,
            ComputerSide::Back => 2,
            ComputerSide::Front => 3,
            ComputerSide::Right => 4,
            ComputerSide::Left => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComputerSide::Bottom => "bottom",
            ComputerSide::Top => "top",
            ComputerSide::Back => "back",
            ComputerSide::Front => "front",
            ComputerSide::Right => "right",
            ComputerSide::Left => "left",
        }
    }
}

impl fmt::Display for ComputerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
