//! Coverability analysis: potential-firing semantics, the coverability
//! tree builder, connectivity, property derivation, and the orchestrator
//! that wires them together.

pub mod analyzer;
pub mod connectivity;
pub mod cover;
pub mod potential;
pub mod report;

pub use analyzer::Analyzer;
pub use connectivity::is_connected;
pub use cover::{build_coverability_tree, CoverOutcome, CoverTree, TreeNode};
pub use potential::{potentially_fire, potentially_ready};
pub use report::Report;
