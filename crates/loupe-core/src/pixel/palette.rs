/// Color table for indexed formats. Entries are RGB triples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<[u8; 3]>,
}

impl Palette {
    pub fn new(entries: Vec<[u8; 3]>) -> Self {
        Self { entries }
    }

    /// 256-entry ramp with `entry[i] = (i, i, i)`.
    pub fn grayscale() -> Self {
        Self {
            entries: (0..=255u8).map(|i| [i, i, i]).collect(),
        }
    }

    /// Two-entry palette where index 0 is black and index 1 is white.
    pub fn monochrome() -> Self {
        Self {
            entries: vec![[0, 0, 0], [255, 255, 255]],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<[u8; 3]> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[[u8; 3]] {
        &self.entries
    }

    pub fn is_identity_grayscale(&self) -> bool {
        self.entries.len() == 256
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| e.iter().all(|&c| c as usize == i))
    }
}
