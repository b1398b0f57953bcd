//! Selection lists for the language and text menus

/// A list with one highlighted item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    items: Vec<T>,
    selected: usize,
}

impl<T> Default for Menu<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }
}

impl<T> Menu<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move the highlight by `delta`, clamped to the list
    pub fn move_by(&mut self, delta: isize) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Highlight the first item equal to `item`; returns whether it was found
    pub fn select(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}
