/// Linear visit history with a cursor over the entries.
///
/// Pushing a new location while the cursor sits before the last entry
/// discards everything after the cursor first, so forward history is
/// invalidated by new navigation, matching conventional browser behavior.
/// The location type is opaque to the structure; the shell uses `String`
/// URLs but anything that identifies "a place" works.
#[derive(Debug)]
pub struct NavigationHistory<T> {
    entries: Vec<T>,
    /// Index of the current entry; `None` iff the history is empty.
    cursor: Option<usize>,
}

impl<T> NavigationHistory<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Record a newly visited location and move the cursor onto it.
    ///
    /// Entries after the cursor are dropped before appending. Duplicates are
    /// allowed; visiting the same location twice creates two entries.
    pub fn push(&mut self, location: T) {
        if let Some(index) = self.cursor {
            self.entries.truncate(index + 1);
        }
        self.entries.push(location);
        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(index) if index > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        match self.cursor {
            Some(index) => index + 1 < self.entries.len(),
            None => false,
        }
    }

    /// Move the cursor one entry back and return the entry it now points at.
    ///
    /// At the oldest entry (or on an empty history) this is a no-op and
    /// returns `None`; the entries themselves are never modified.
    pub fn back(&mut self) -> Option<&T> {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                self.entries.get(index - 1)
            }
            _ => None,
        }
    }

    /// Move the cursor one entry forward; no-op returning `None` at the
    /// newest entry.
    pub fn forward(&mut self) -> Option<&T> {
        match self.cursor {
            Some(index) if index + 1 < self.entries.len() => {
                self.cursor = Some(index + 1);
                self.entries.get(index + 1)
            }
            _ => None,
        }
    }

    /// The entry under the cursor, or `None` while the history is empty.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|index| self.entries.get(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for NavigationHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}
