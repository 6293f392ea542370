//! Layout directionality.

use serde::{Deserialize, Serialize};

/// Horizontal reading direction of the surrounding UI.
///
/// Direction only mirrors the physical placement of the controls. Logical
/// behavior is unaffected: the previous-page control always targets page
/// minus one regardless of which side of the strip it renders on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Whether horizontal layout runs right-to-left.
    pub fn mirrored(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Source of the ambient reading direction.
///
/// The widget queries this on every render, so a host can swap direction at
/// runtime (a live locale switch) without rebuilding the widget.
pub trait DirectionalityProvider: Send + Sync {
    fn direction(&self) -> TextDirection;
}

impl DirectionalityProvider for TextDirection {
    fn direction(&self) -> TextDirection {
        *self
    }
}
