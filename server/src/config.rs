/// Contains Config properties which will be used by pocket devices
#[derive(Clone, Debug)]
pub struct PocketConfig {
    /// Width, in characters, of a pocket device's terminal
    pub terminal_width: usize,
    /// Height, in characters, of a pocket device's terminal
    pub terminal_height: usize,
}

impl Default for PocketConfig {
    fn default() -> Self {
        Self {
            terminal_width: 26,
            terminal_height: 20,
        }
    }
}
