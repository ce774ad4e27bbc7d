/// Settings applied by a [`Graph`](crate::graph::Graph) for its whole lifetime.
///
/// Built from [`GraphConfig::default`] and adjusted with the `with_*` setters:
///
/// ```
/// use scalargrad_core::{Graph, GraphConfig};
///
/// let config = GraphConfig::default()
///     .with_capacity(64)
///     .with_reject_non_finite(true);
/// let graph = Graph::with_config(config);
/// assert!(graph.config().reject_non_finite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Number of node slots reserved up front in the arena.
    pub capacity: usize,
    /// When set, `set_value`/`set_grad` refuse NaN and infinities.
    pub reject_non_finite: bool,
    /// When set, a `log::warn!` is emitted for every operation whose forward value is NaN or infinite.
    pub warn_non_finite: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            capacity: 0,
            reject_non_finite: false,
            warn_non_finite: true,
        }
    }
}

impl GraphConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    pub fn with_warn_non_finite(mut self, warn: bool) -> Self {
        self.warn_non_finite = warn;
        self
    }
}
