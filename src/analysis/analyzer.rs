//! The orchestrator. Wires the net model through the coverability search,
//! connectivity check, and property derivation, and returns a [`Report`].

use crate::analysis::connectivity::is_connected;
use crate::analysis::cover::build_coverability_tree;
use crate::analysis::report::Report;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::net::model::Net;

/// Runs a full analysis of a net and produces its [`Report`].
///
/// `Analyzer` holds no state between calls to [`Analyzer::analyze`]: each
/// call builds, uses, and discards its own coverability search, so one
/// instance may be reused across any number of nets.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Analyzer { config }
    }

    /// Builds the coverability tree from `net`'s initial marking, checks
    /// connectivity, and derives the four Boolean properties.
    pub fn analyze(&self, net: &Net) -> Result<Report> {
        let outcome = build_coverability_tree(net, self.config.node_limit)?;
        let connected = is_connected(net);
        Ok(Report::derive(net, &outcome, connected))
    }
}
