//! Outbound change notifications.
//!
//! Notifications are advisory, fire-and-forget messages: the widget emits a
//! requested change and keeps displaying the caller-supplied values until
//! the caller re-supplies new ones. Routing is entirely the host's concern;
//! the widget only guarantees that a message with this shape is sent.

use serde::{Deserialize, Serialize};

/// A change requested by the user through the pagination controls.
///
/// The serialized form keeps the event names and camelCase payload keys of
/// the original browser control, so hosts that bridge to a web frontend can
/// forward notifications byte-for-byte:
///
/// ```json
/// {"event":"pagination-page-change","detail":{"page":3}}
/// {"event":"pagination-item-counter-change","detail":{"itemCount":20}}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail")]
pub enum PaginationEvent {
    /// The user asked for a different page, via an arrow or a valid
    /// typed-in page number.
    #[serde(rename = "pagination-page-change")]
    PageChange { page: usize },

    /// The user picked a different items-per-page value.
    #[serde(rename = "pagination-item-counter-change")]
    ItemCountChange {
        #[serde(rename = "itemCount")]
        item_count: usize,
    },
}

impl PaginationEvent {
    /// The requested page, when this is a page-change notification.
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::PageChange { page } => Some(*page),
            Self::ItemCountChange { .. } => None,
        }
    }

    /// The requested items-per-page, when this is an item-count change.
    pub fn item_count(&self) -> Option<usize> {
        match self {
            Self::PageChange { .. } => None,
            Self::ItemCountChange { item_count } => Some(*item_count),
        }
    }
}
