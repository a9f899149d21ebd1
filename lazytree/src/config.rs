//! Tree configuration.

/// Who owns the canonical node data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateMode {
    /// The host's supplied forest is the sole source of truth: every call to
    /// [`crate::tree::Tree::sync`] whose input differs structurally from the
    /// current forest replaces it. The host is expected to observe
    /// `on_update` and fold mutations back into its own copy.
    #[default]
    ExternallyControlled,
    /// The tree forks the initial forest and owns it from then on; `sync`
    /// only re-forks when the input itself changes, never in response to a
    /// re-send of data the tree has already seen.
    LocallyControlled,
}

/// Configuration read once at construction.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Upper bound on how many children are requested per fetch.
    /// Pagination requires this to be set.
    pub page_limit: Option<usize>,
    /// Columns of indentation per depth level.
    pub indent_width: u16,
    /// Reconciliation strategy, see [`StateMode`].
    pub state_mode: StateMode,
    /// Whether the load-more affordance is offered at all.
    pub paginated: bool,
    /// Select on double click instead of single click.
    pub double_click_select: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            page_limit: None,
            indent_width: 2,
            state_mode: StateMode::default(),
            paginated: true,
            double_click_select: false,
        }
    }
}

impl TreeConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page limit.
    pub fn page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Set the indent width in columns.
    pub fn indent_width(mut self, width: u16) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the reconciliation mode.
    pub fn state_mode(mut self, mode: StateMode) -> Self {
        self.state_mode = mode;
        self
    }

    /// Fork the external data once and own it afterwards.
    pub fn locally_controlled(mut self) -> Self {
        self.state_mode = StateMode::LocallyControlled;
        self
    }

    /// Enable or disable the load-more affordance.
    pub fn paginated(mut self, paginated: bool) -> Self {
        self.paginated = paginated;
        self
    }

    /// Select on double click instead of single click.
    pub fn double_click_select(mut self, enabled: bool) -> Self {
        self.double_click_select = enabled;
        self
    }
}
