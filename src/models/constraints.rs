//! Optional card size constraints and the modifier classes they produce.

use crate::models::{Variant, Viewport};
use serde::Serialize;
use std::fmt;

/// A size modifier that can be active on a rendered card.
///
/// Ordering of the variants is the order modifier classes are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeConstraint {
    /// Caps the height of row cards
    MaxHeight,
    /// Caps the width of tile cards
    MaxWidth,
    /// Fixes the height of grid tiles on desktop
    GridHeight,
}

impl SizeConstraint {
    /// Every constraint, in emission order.
    pub const ALL: [Self; 3] = [Self::MaxHeight, Self::MaxWidth, Self::GridHeight];

    /// Modifier class added to the card element.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::MaxHeight => "has-max-height",
            Self::MaxWidth => "has-max-width",
            Self::GridHeight => "has-grid-height",
        }
    }

    /// CSS custom property carrying the configured pixel value.
    pub const fn css_property(self) -> &'static str {
        match self {
            Self::MaxHeight => "--topic-card-max-height",
            Self::MaxWidth => "--topic-card-max-width",
            Self::GridHeight => "--topic-card-grid-height",
        }
    }

    /// Whether this constraint targets the given variant on the given viewport.
    ///
    /// Max-height only targets row variants and max-width only tile variants,
    /// so the two can never meet on one card. Grid-height is limited to the
    /// `grid` variant on desktop.
    pub const fn applies_to(self, variant: Variant, viewport: Viewport) -> bool {
        match self {
            Self::MaxHeight => variant.is_row(),
            Self::MaxWidth => variant.is_tile(),
            Self::GridHeight => {
                matches!(variant, Variant::Grid) && matches!(viewport, Viewport::Desktop)
            }
        }
    }
}

impl fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Enabled size constraints with their pixel values.
///
/// `None` means the constraint's enable flag was off. Values are validated
/// to be non-zero before a `SizeConstraints` reaches the resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeConstraints {
    /// Max height for row cards, in px
    pub max_height: Option<u32>,
    /// Max width for tile cards, in px
    pub max_width: Option<u32>,
    /// Fixed grid tile height on desktop, in px
    pub grid_height: Option<u32>,
}

impl SizeConstraints {
    /// Returns the configured pixel value for a constraint, if enabled.
    pub const fn value(&self, constraint: SizeConstraint) -> Option<u32> {
        match constraint {
            SizeConstraint::MaxHeight => self.max_height,
            SizeConstraint::MaxWidth => self.max_width,
            SizeConstraint::GridHeight => self.grid_height,
        }
    }

    /// Iterates enabled constraints with their values, in emission order.
    pub fn enabled(&self) -> impl Iterator<Item = (SizeConstraint, u32)> + '_ {
        SizeConstraint::ALL
            .into_iter()
            .filter_map(|constraint| self.value(constraint).map(|px| (constraint, px)))
    }
}
