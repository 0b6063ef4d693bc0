//! Card style resolution.
//!
//! Maps a (category, viewport, configuration) triple to the card variant a
//! topic list renders with, plus the size modifiers active on its cards.
//! Resolution is a pure function of its inputs and never fails; the worst
//! outcome is [`Variant::None`], which leaves the host's plain topic list
//! in place.

use crate::models::{
    CategoryId, SizeConstraint, StyleConfig, Variant, Viewport, ViewportRule,
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::trace;

/// Result of resolving one category on one viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    /// Layout variant
    pub variant: Variant,
    /// Active size modifiers, in emission order
    pub constraints: BTreeSet<SizeConstraint>,
}

impl ResolvedStyle {
    /// A style with cards disabled.
    pub const fn none() -> Self {
        Self {
            variant: Variant::None,
            constraints: BTreeSet::new(),
        }
    }

    /// True when cards are rendered.
    pub const fn is_shown(&self) -> bool {
        self.variant.is_shown()
    }

    /// True when the modifier is active.
    pub fn has(&self, constraint: SizeConstraint) -> bool {
        self.constraints.contains(&constraint)
    }

    /// Modifier class names, in emission order.
    pub fn modifier_classes(&self) -> Vec<&'static str> {
        self.constraints.iter().map(|c| c.class_name()).collect()
    }
}

/// Desktop and mobile results for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewportStyles {
    /// Category the styles belong to
    pub category: CategoryId,
    /// Desktop result
    pub desktop: ResolvedStyle,
    /// Mobile result
    pub mobile: ResolvedStyle,
}

impl ViewportStyles {
    /// Result for one viewport.
    pub const fn get(&self, viewport: Viewport) -> &ResolvedStyle {
        match viewport {
            Viewport::Desktop => &self.desktop,
            Viewport::Mobile => &self.mobile,
        }
    }
}

/// Resolves the card style for a category on a viewport.
///
/// # Rules
///
/// - An unset viewport uses the default policy.
/// - A global token applies to every category.
/// - Membership lists: list set -> `list`, grid set -> `grid`, both -> the
///   tie-break winner, neither -> `none`. Only when no membership set on
///   any viewport has members does the default policy apply instead.
/// - Max-height only on row variants, max-width only on tile variants,
///   grid-height only on `grid` on desktop.
///
/// # Examples
///
/// ```
/// use topic_cards::models::{
///     CategoryId, CategorySet, DefaultPolicy, StyleConfig, TieBreak, Variant, Viewport,
///     ViewportRule,
/// };
/// use topic_cards::services::resolver::resolve;
///
/// let (grid, _) = CategorySet::parse_list("7");
/// let config = StyleConfig::builder(TieBreak::ListWins, DefaultPolicy::Disabled)
///     .desktop(ViewportRule::membership(CategorySet::new(), grid))
///     .mobile(ViewportRule::membership(CategorySet::new(), CategorySet::new()))
///     .build()
///     .unwrap();
///
/// let category = CategoryId::new(7);
/// assert_eq!(resolve(category, Viewport::Desktop, &config).variant, Variant::Grid);
/// assert_eq!(resolve(category, Viewport::Mobile, &config).variant, Variant::None);
/// ```
pub fn resolve(category: CategoryId, viewport: Viewport, config: &StyleConfig) -> ResolvedStyle {
    let variant = resolve_variant(category, viewport, config);

    let constraints = if variant.is_shown() {
        config
            .constraints()
            .enabled()
            .map(|(constraint, _)| constraint)
            .filter(|constraint| constraint.applies_to(variant, viewport))
            .collect()
    } else {
        BTreeSet::new()
    };

    trace!(%category, %viewport, %variant, "Resolved card style");

    ResolvedStyle {
        variant,
        constraints,
    }
}

/// Resolves only the variant.
pub fn resolve_variant(category: CategoryId, viewport: Viewport, config: &StyleConfig) -> Variant {
    let fallback = config.default_policy().variant();

    match config.rule(viewport) {
        ViewportRule::Unset => fallback,
        ViewportRule::Global { variant } => *variant,
        ViewportRule::Membership(membership)
            if membership.is_empty() && !config.has_members() =>
        {
            fallback
        }
        ViewportRule::Membership(membership) => membership
            .lookup(category, config.tie_break())
            .unwrap_or(Variant::None),
    }
}

/// Resolves a category on both viewports.
pub fn resolve_all(category: CategoryId, config: &StyleConfig) -> ViewportStyles {
    ViewportStyles {
        category,
        desktop: resolve(category, Viewport::Desktop, config),
        mobile: resolve(category, Viewport::Mobile, config),
    }
}
