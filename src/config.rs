//! Widget configuration.

use serde::{Deserialize, Serialize};

fn default_item_count_options() -> Vec<usize> {
    vec![10, 20, 30, 40]
}

/// Configuration for the optional items-per-page selector.
///
/// All of this is caller-owned input. In particular `selected_count_option`
/// follows the same controlled discipline as the page number: picking a new
/// value in the selector emits a notification but never changes what the
/// widget displays until the caller writes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Whether the items-per-page selector is shown at all.
    #[serde(default)]
    pub show_item_count_select: bool,
    /// The choices offered by the selector.
    #[serde(default = "default_item_count_options")]
    pub item_count_options: Vec<usize>,
    /// The currently applied items-per-page value, if the caller tracks one.
    #[serde(default)]
    pub selected_count_option: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            show_item_count_select: false,
            item_count_options: default_item_count_options(),
            selected_count_option: None,
        }
    }
}

impl PaginationConfig {
    /// Position of the applied count inside the option list. `None` when no
    /// count is applied or the applied count is not one of the options.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected_count_option?;
        self.item_count_options.iter().position(|&o| o == selected)
    }
}
