//! Coverability, liveness, boundedness, safeness, and reachability
//! analysis for Petri nets.
//!
//! A net is a bipartite graph of places and transitions joined by weighted
//! arcs ([`net::Net`]). [`analysis::Analyzer`] builds a finite coverability
//! tree from a net's initial marking (an ω-abstracted Karp-Miller unfolding
//! that terminates even on unbounded nets) and derives four Boolean
//! properties from it: `alive`, `coherent`, `safe`, and `reachable` (see
//! [`analysis::Report`]).
//!
//! `alive` here is weaker than the textbook definition of liveness: it
//! means the search found no dead end and every transition fired at least
//! once somewhere along the way, not that every transition can always
//! eventually fire again from every reachable marking. Treat it as a
//! useful necessary condition, not a proof of liveness in the formal
//! sense.
//!
//! This crate analyzes; it does not simulate interactively, construct a
//! supervisor, enumerate firing sequences or minimal traps/siphons, or
//! persist anything to disk. Net construction and dot rendering
//! ([`net::to_dot`]) are provided as plain data operations, not part of
//! the analysis contract.

pub mod analysis;
pub mod config;
pub mod error;
pub mod net;

pub use analysis::{Analyzer, Report};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use net::{Net, Marking, Token};
