//! Theme system.
//!
//! A theme is a dictionary from visual slot name to [`Style`]. The render
//! adapter and the default slot components resolve styles by name at render
//! time; a host swaps the look of the whole widget by installing a different
//! theme, without touching any component.
//!
//! Recognized slot names: `tree`, `list`, `list_item`, `body`, `body_text`,
//! `expander`, `checkbox`, `checkbox_checked`, `paginator`,
//! `paginator_text`, `loading`, `loading_text`.

mod default;

use std::sync::Arc;

pub use default::{DefaultTheme, MinimalTheme};

use crate::style::Style;

/// Trait for theme types that resolve named slot styles.
pub trait Theme: Send + Sync + 'static {
    /// Resolve a slot name to its style.
    ///
    /// Returns `None` if the slot is not styled by this theme.
    fn resolve(&self, slot: &str) -> Option<Style>;

    /// All slot names this theme styles.
    fn slot_names(&self) -> Vec<&'static str>;

    /// Clone this theme into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Theme>;
}

impl Clone for Box<dyn Theme> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A thread-safe reference to a theme.
pub type ThemeRef = Arc<dyn Theme>;

/// Resolve a slot style, falling back to the empty style.
pub fn resolve_style(theme: &dyn Theme, slot: &str) -> Style {
    theme.resolve(slot).unwrap_or_default()
}
