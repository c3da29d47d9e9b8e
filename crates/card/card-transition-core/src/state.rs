//! Resting positions of the card panel.

use serde::{Deserialize, Serialize};

/// One of the two resting positions of the card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    /// Only the handle area is on screen.
    Collapsed,
    /// The full card height is on screen.
    Expanded,
}

impl CardState {
    /// State a visible (expanded) or hidden (collapsed) card rests in.
    #[inline]
    pub fn from_visible(is_card_visible: bool) -> Self {
        if is_card_visible {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[inline]
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}
