//! Immutable card style configuration snapshot.
//!
//! A `StyleConfig` is built once, at the settings boundary, through
//! [`StyleConfigBuilder`]. It has no setters: every resolution receives the
//! same snapshot and nothing it does can change it.

use crate::models::{CategoryId, CategorySet, SizeConstraints, Variant, Viewport};
use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Which variant wins when a category is in both the list and grid sets.
///
/// Two settings schemes in the wild disagree on this, so it is always an
/// explicit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// `list` has priority
    ListWins,
    /// `grid` has priority
    GridWins,
}

impl TieBreak {
    /// The variant this policy picks for a category in both sets.
    pub const fn winner(self) -> Variant {
        match self {
            Self::ListWins => Variant::List,
            Self::GridWins => Variant::Grid,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListWins => f.write_str("list wins"),
            Self::GridWins => f.write_str("grid wins"),
        }
    }
}

/// What an unconfigured viewport resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "policy", content = "variant")]
pub enum DefaultPolicy {
    /// Use this variant for every category
    Fallback(Variant),
    /// Show no cards
    Disabled,
}

impl DefaultPolicy {
    /// The variant produced by this policy.
    pub const fn variant(self) -> Variant {
        match self {
            Self::Fallback(variant) => variant,
            Self::Disabled => Variant::None,
        }
    }
}

impl fmt::Display for DefaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback(variant) => write!(f, "fallback to {variant}"),
            Self::Disabled => f.write_str("disabled"),
        }
    }
}

/// Per-category membership sets for one viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Categories rendered as `list`
    pub list: CategorySet,
    /// Categories rendered as `grid`
    pub grid: CategorySet,
}

impl Membership {
    /// Creates a membership rule from the two sets.
    pub fn new(list: CategorySet, grid: CategorySet) -> Self {
        Self { list, grid }
    }

    /// True when neither set has members.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.grid.is_empty()
    }

    /// Looks a category up in both sets.
    ///
    /// Returns `None` when the category is in neither set.
    pub fn lookup(&self, category: CategoryId, tie_break: TieBreak) -> Option<Variant> {
        match (self.list.contains(category), self.grid.contains(category)) {
            (true, true) => Some(tie_break.winner()),
            (true, false) => Some(Variant::List),
            (false, true) => Some(Variant::Grid),
            (false, false) => None,
        }
    }
}

/// How one viewport picks its variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "rule")]
pub enum ViewportRule {
    /// Nothing configured; the default policy applies
    #[default]
    Unset,
    /// One style token for every category
    Global {
        /// Variant applied to all categories
        variant: Variant,
    },
    /// Per-category list/grid sets
    Membership(Membership),
}

impl ViewportRule {
    /// Shorthand for a global rule.
    pub const fn global(variant: Variant) -> Self {
        Self::Global { variant }
    }

    /// Shorthand for a membership rule.
    pub fn membership(list: CategorySet, grid: CategorySet) -> Self {
        Self::Membership(Membership::new(list, grid))
    }
}

impl fmt::Display for ViewportRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Global { variant } => write!(f, "all categories {variant}"),
            Self::Membership(m) => write!(f, "list [{}], grid [{}]", m.list, m.grid),
        }
    }
}

/// Validated card style settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleConfig {
    desktop: ViewportRule,
    mobile: ViewportRule,
    tie_break: TieBreak,
    default_policy: DefaultPolicy,
    constraints: SizeConstraints,
}

impl StyleConfig {
    /// Starts a builder. Both policies are required up front.
    pub fn builder(tie_break: TieBreak, default_policy: DefaultPolicy) -> StyleConfigBuilder {
        StyleConfigBuilder::new(tie_break, default_policy)
    }

    /// Rule for a viewport.
    pub const fn rule(&self, viewport: Viewport) -> &ViewportRule {
        match viewport {
            Viewport::Desktop => &self.desktop,
            Viewport::Mobile => &self.mobile,
        }
    }

    /// Tie-break policy.
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Default policy.
    pub const fn default_policy(&self) -> DefaultPolicy {
        self.default_policy
    }

    /// Enabled size constraints.
    pub const fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    /// True when a membership rule on either viewport names a category.
    pub fn has_members(&self) -> bool {
        [&self.desktop, &self.mobile]
            .into_iter()
            .any(|rule| matches!(rule, ViewportRule::Membership(m) if !m.is_empty()))
    }
}

/// Builder for [`StyleConfig`].
///
/// # Examples
///
/// ```
/// use topic_cards::models::{
///     CategorySet, DefaultPolicy, StyleConfig, TieBreak, Variant, ViewportRule,
/// };
///
/// let (list, _) = CategorySet::parse_list("5");
/// let config = StyleConfig::builder(TieBreak::GridWins, DefaultPolicy::Fallback(Variant::List))
///     .desktop(ViewportRule::membership(list, CategorySet::new()))
///     .mobile(ViewportRule::global(Variant::Grid))
///     .max_height(275)
///     .build()
///     .unwrap();
/// assert_eq!(config.constraints().max_height, Some(275));
/// ```
#[derive(Debug, Clone)]
pub struct StyleConfigBuilder {
    desktop: ViewportRule,
    mobile: ViewportRule,
    tie_break: TieBreak,
    default_policy: DefaultPolicy,
    constraints: SizeConstraints,
}

impl StyleConfigBuilder {
    /// Creates a builder with both viewports unset and no constraints.
    pub fn new(tie_break: TieBreak, default_policy: DefaultPolicy) -> Self {
        Self {
            desktop: ViewportRule::Unset,
            mobile: ViewportRule::Unset,
            tie_break,
            default_policy,
            constraints: SizeConstraints::default(),
        }
    }

    /// Sets the desktop rule.
    pub fn desktop(mut self, rule: ViewportRule) -> Self {
        self.desktop = rule;
        self
    }

    /// Sets the mobile rule.
    pub fn mobile(mut self, rule: ViewportRule) -> Self {
        self.mobile = rule;
        self
    }

    /// Enables the max-height constraint.
    pub fn max_height(mut self, px: u32) -> Self {
        self.constraints.max_height = Some(px);
        self
    }

    /// Enables the max-width constraint.
    pub fn max_width(mut self, px: u32) -> Self {
        self.constraints.max_width = Some(px);
        self
    }

    /// Enables the grid-height constraint.
    pub fn grid_height(mut self, px: u32) -> Self {
        self.constraints.grid_height = Some(px);
        self
    }

    /// Validates and freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an enabled constraint has a zero pixel value.
    pub fn build(self) -> Result<StyleConfig> {
        for (constraint, px) in self.constraints.enabled() {
            if px == 0 {
                anyhow::bail!("{} is enabled but its value is 0px", constraint.class_name());
            }
        }

        Ok(StyleConfig {
            desktop: self.desktop,
            mobile: self.mobile,
            tie_break: self.tie_break,
            default_policy: self.default_policy,
            constraints: self.constraints,
        })
    }
}
