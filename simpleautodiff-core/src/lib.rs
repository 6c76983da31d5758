//! Scalar automatic differentiation over an arena-backed computational graph.
//!
//! A [`Graph`] is built from leaves ([`Graph::input`]) and operator calls
//! ([`Graph::add`], [`Graph::mul`], [`Graph::sin`], [`Graph::log`], ...). Every node's value
//! and local partial derivatives are computed when the node is created. Derivatives are
//! then obtained either with one reverse-mode sweep ([`Graph::backward`]) giving the
//! derivative of the output with respect to every node, or with a forward-mode sweep
//! ([`Graph::forward`]) giving the derivative with respect to one seeded leaf.

// Core modules
pub mod autograd;
pub mod config;
pub mod graph;
pub mod naming;
pub mod node;
pub mod ops;
pub mod types;

pub mod utils;

pub mod error;
pub use error::AutodiffError;

pub use autograd::grad_check::{check_grad, GradCheckError, GradientReport};
pub use autograd::Operation;
pub use config::{GradCheckConfig, GraphConfig};
pub use graph::Graph;
pub use naming::NamingContext;
pub use node::{Node, NodeId};
pub use types::Scalar;
// Re-export traits required by public functions/structs
pub use num_traits;
