//! Configuration structs for graph construction and gradient checking.

/// Options applied when building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Prefix of automatically named leaves (`x1`, `x2`, ...).
    pub input_prefix: String,
    /// Prefix of automatically named operation results (`v1`, `v2`, ...).
    pub intermediate_prefix: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            input_prefix: "x".to_string(),
            intermediate_prefix: "v".to_string(),
        }
    }
}

/// Parameters of the finite-difference gradient check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation used for central differences.
    pub epsilon: f64,
    /// Maximum absolute difference accepted between two gradient estimates.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}
