//! # Lazy Selection Options
//!
//! [`ChooserState`] backs a dropdown over a large option set (components,
//! countries). While the dropdown is closed it holds nothing but the label
//! of the current selection, resolved once when the selection changes; the
//! full option list is materialized only while the dropdown is open and
//! dropped again on close.
//!
//! The state here is presentation cache only. Opening and closing never
//! touches the selected value, which lives in the trusted row state and
//! changes only through a calculator mutation.

/// One entry of a materialized option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserOption {
    /// Identifier committed on selection
    pub id: String,
    /// Label shown in the list
    pub label: String,
}

/// Open/closed dropdown state for one chooser control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChooserState {
    open: bool,
    selected_label: String,
    options: Vec<ChooserOption>,
}

impl ChooserState {
    /// A closed chooser showing `selected_label`.
    pub fn closed(selected_label: impl Into<String>) -> Self {
        ChooserState {
            open: false,
            selected_label: selected_label.into(),
            options: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Label of the current selection; available in every state.
    pub fn selected_label(&self) -> &str {
        &self.selected_label
    }

    /// Replace the displayed label after the bound selection changed.
    pub fn set_selected_label(&mut self, label: impl Into<String>) {
        self.selected_label = label.into();
    }

    /// The materialized option list; empty while closed.
    pub fn options(&self) -> &[ChooserOption] {
        &self.options
    }

    /// Open the chooser, materializing its options.
    ///
    /// `materialize` runs only on a closed chooser; opening one that is
    /// already open keeps the existing list.
    pub fn open_with<F>(&mut self, materialize: F)
    where
        F: FnOnce() -> Vec<ChooserOption>,
    {
        if self.open {
            return;
        }
        self.options = materialize();
        self.open = true;
    }

    /// Close the chooser and drop the option list. The label stays.
    pub fn close(&mut self) {
        self.open = false;
        self.options = Vec::new();
    }
}
