#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    /// Label for the item's own control, describing the action it offers.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Visibility::Visible => "Hide",
            Visibility::Hidden => "Show",
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Show/hide flags for the current rendered result set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToggleSet {
    items: Vec<Visibility>,
}

impl ToggleSet {
    /// Every item starts visible.
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![Visibility::Visible; len],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Visibility> {
        self.items.get(index).copied()
    }

    /// Flips one item and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Option<Visibility> {
        let slot = self.items.get_mut(index)?;
        *slot = slot.flipped();
        Some(*slot)
    }

    /// Forces every item to the opposite of item #1's current state.
    ///
    /// Returns the state that was assigned, or `None` when there is nothing
    /// to toggle.
    pub fn toggle_all(&mut self) -> Option<Visibility> {
        let target = self.items.first()?.flipped();
        self.items.fill(target);
        Some(target)
    }
}
