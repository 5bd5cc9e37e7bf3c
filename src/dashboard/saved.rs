use std::collections::BTreeSet;

/// Product ids bookmarked in one dashboard view. Held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedProducts {
    ids: BTreeSet<String>,
}

impl SavedProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the saved state of `id`. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
