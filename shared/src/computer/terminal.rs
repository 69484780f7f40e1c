/// Text contents of a computer's screen.
///
/// Only the parts needed to build snapshots are modelled here, the program
/// runtime that draws into it lives elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct Terminal {
    width: usize,
    height: usize,
    rows: Vec<String>,
}

impl Terminal {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![" ".repeat(width); height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> Option<&str> {
        self.rows.get(y).map(String::as_str)
    }

    /// Writes `text` starting at column `x` of row `y`, clipping at the
    /// terminal edge. Returns false if nothing was written.
    pub fn write(&mut self, x: usize, y: usize, text: &str) -> bool {
        if y >= self.height || x >= self.width {
            return false;
        }

        let row = &mut self.rows[y];
        let mut chars: Vec<char> = row.chars().collect();
        let mut written = false;
        for (offset, character) in text.chars().enumerate() {
            let column = x + offset;
            if column >= self.width {
                break;
            }
            chars[column] = character;
            written = true;
        }
        *row = chars.into_iter().collect();

        written
    }

    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            *row = " ".repeat(self.width);
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Full copy of a terminal, addressed to one observer.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalSnapshot {
    pub instance_id: u64,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

impl TerminalSnapshot {
    pub fn new(instance_id: u64, terminal: &Terminal) -> Self {
        Self {
            instance_id,
            width: terminal.width(),
            height: terminal.height(),
            rows: terminal.rows().to_vec(),
        }
    }
}
