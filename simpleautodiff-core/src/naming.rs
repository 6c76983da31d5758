use crate::config::GraphConfig;

/// Hands out display names for the nodes of one graph.
///
/// Each [`Graph`](crate::Graph) owns its own context, so two independent builds
/// both start at `x1` / `v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingContext {
    input_prefix: String,
    intermediate_prefix: String,
    input_count: usize,
    intermediate_count: usize,
}

impl NamingContext {
    pub fn new(config: &GraphConfig) -> Self {
        NamingContext {
            input_prefix: config.input_prefix.clone(),
            intermediate_prefix: config.intermediate_prefix.clone(),
            input_count: 0,
            intermediate_count: 0,
        }
    }

    pub fn next_input_name(&mut self) -> String {
        self.input_count += 1;
        format!("{}{}", self.input_prefix, self.input_count)
    }

    pub fn next_intermediate_name(&mut self) -> String {
        self.intermediate_count += 1;
        format!("{}{}", self.intermediate_prefix, self.intermediate_count)
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn intermediate_count(&self) -> usize {
        self.intermediate_count
    }

    pub fn reset(&mut self) {
        self.input_count = 0;
        self.intermediate_count = 0;
    }
}

impl Default for NamingContext {
    fn default() -> Self {
        NamingContext::new(&GraphConfig::default())
    }
}
