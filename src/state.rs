//! Page position state and navigation enablement queries.

/// The two caller-supplied numbers every pagination decision derives from.
///
/// Both values are plain inputs: the widget reads them on every render and
/// every interaction but never writes them back in response to user action.
/// When `max_page_number >= 1` a fully valid control keeps
/// `1 <= page_number <= max_page_number`; that invariant is the caller's to
/// uphold, and the queries below are defined relative to it either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Currently displayed page, normally starting at 1.
    pub page_number: usize,

    /// Highest reachable page. Zero means "no pages".
    pub max_page_number: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_number: 1,
            max_page_number: 1,
        }
    }
}

impl PageState {
    /// Create a page state from the caller's current truth.
    pub fn new(page_number: usize, max_page_number: usize) -> Self {
        Self {
            page_number,
            max_page_number,
        }
    }

    /// Whether backward navigation is currently permitted.
    pub fn can_go_to_previous_page(&self) -> bool {
        self.page_number > 1
    }

    /// Whether forward navigation is currently permitted.
    pub fn can_go_to_next_page(&self) -> bool {
        self.page_number < self.max_page_number
    }

    /// Target page for a previous-page request.
    ///
    /// Computed unconditionally; at the floor the target saturates at zero
    /// rather than wrapping. Enablement gating belongs to the interaction
    /// surface, not here.
    pub fn previous_page_target(&self) -> usize {
        self.page_number.saturating_sub(1)
    }

    /// Target page for a next-page request, computed unconditionally.
    pub fn next_page_target(&self) -> usize {
        self.page_number.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PageState::default();
        assert_eq!(state.page_number, 1);
        assert_eq!(state.max_page_number, 1);
    }

    #[test]
    fn test_enablement_in_range() {
        for max in 1..=6usize {
            for page in 1..=max {
                let state = PageState::new(page, max);
                assert_eq!(state.can_go_to_previous_page(), page > 1);
                assert_eq!(state.can_go_to_next_page(), page < max);
            }
        }
    }

    #[test]
    fn test_first_page_disables_previous() {
        let state = PageState::new(1, 5);
        assert!(!state.can_go_to_previous_page());
        assert!(state.can_go_to_next_page());
    }

    #[test]
    fn test_last_page_disables_next() {
        let state = PageState::new(5, 5);
        assert!(state.can_go_to_previous_page());
        assert!(!state.can_go_to_next_page());
    }

    #[test]
    fn test_single_page_disables_both() {
        let state = PageState::new(1, 1);
        assert!(!state.can_go_to_previous_page());
        assert!(!state.can_go_to_next_page());
    }

    #[test]
    fn test_zero_pages_disables_both() {
        // The "no pages" state: both numbers zero.
        let state = PageState::new(0, 0);
        assert!(!state.can_go_to_previous_page());
        assert!(!state.can_go_to_next_page());

        // Zero max disables navigation regardless of the page number.
        let state = PageState::new(3, 0);
        assert!(!state.can_go_to_next_page());
    }

    #[test]
    fn test_middle_page_enables_both() {
        let state = PageState::new(2, 3);
        assert!(state.can_go_to_previous_page());
        assert!(state.can_go_to_next_page());
    }

    #[test]
    fn test_navigation_targets() {
        let state = PageState::new(4, 9);
        assert_eq!(state.previous_page_target(), 3);
        assert_eq!(state.next_page_target(), 5);

        // Targets are computed even where navigation would be disabled.
        let floor = PageState::new(0, 0);
        assert_eq!(floor.previous_page_target(), 0);
        assert_eq!(floor.next_page_target(), 1);
    }
}
