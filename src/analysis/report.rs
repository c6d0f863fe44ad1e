//! Property derivation and report rendering.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result as AnyResult};

use crate::analysis::cover::CoverOutcome;
use crate::net::model::Net;

const REPORT_WIDTH: usize = 48;

fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{:=^width$}", format!(" {title} "), width = REPORT_WIDTH)
}

fn write_section(f: &mut fmt::Formatter<'_>, label: &str, value: bool) -> fmt::Result {
    writeln!(f, "{:-<width$}", "", width = REPORT_WIDTH)?;
    writeln!(f, "{label:<16}: {}", bool_text(value))
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// The four Boolean properties derived from a finished coverability
/// search: liveness (in the weaker sense used here), graph connectivity,
/// safeness, and reachability of the initial marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// No terminal node in the tree, and every transition was seen as
    /// potentially ready at least once along the search. Weaker than the
    /// textbook definition of liveness.
    pub alive: bool,
    /// The bipartite graph underlying the net is connected.
    pub coherent: bool,
    /// No marking in the closed set contains ω anywhere.
    pub safe: bool,
    /// The initial marking was reached again as a non-root tree node.
    pub reachable: bool,
}

impl Report {
    pub fn derive(net: &Net, outcome: &CoverOutcome, connected: bool) -> Report {
        let alive = outcome.term == 0 && outcome.done_events == net.transition_names();
        let reachable = outcome.dubl_start > 0;
        let safe = !outcome.tree.nodes().any(|n| n.marking.contains_omega());
        Report {
            alive,
            coherent: connected,
            safe,
            reachable,
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the `Display` rendering to `path` alongside a `.json` sibling
    /// carrying the same report. A caller convenience: the analyzer itself
    /// never touches disk.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> AnyResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).with_context(|| format!("writing report to {path:?}"))?;
        let json_path = path.with_extension("json");
        let json = self.to_json_string().context("serializing report as JSON")?;
        fs::write(&json_path, json).with_context(|| format!("writing report JSON to {json_path:?}"))?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, "Petri Net Analysis")?;
        write_section(f, "alive", self.alive)?;
        write_section(f, "coherent", self.coherent)?;
        write_section(f, "safe", self.safe)?;
        write_section(f, "reachable", self.reachable)?;
        writeln!(f, "{:=<width$}", "", width = REPORT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::cover::build_coverability_tree;
    use crate::analysis::connectivity::is_connected;
    use crate::net::model::TransitionType;

    #[test]
    fn self_loop_is_alive_coherent_safe_reachable() {
        let mut net = Net::empty();
        net.add_place("p1", 1).unwrap();
        net.add_transition("t", TransitionType::Controllable).unwrap();
        net.set_link_place_to_transition("p1", "t", 1).unwrap();
        net.set_link_transition_to_place("t", "p1", 1).unwrap();

        let outcome = build_coverability_tree(&net, None).unwrap();
        let report = Report::derive(&net, &outcome, is_connected(&net));
        assert_eq!(
            report,
            Report {
                alive: true,
                coherent: true,
                safe: true,
                reachable: true,
            }
        );
    }

    #[test]
    fn terminal_net_is_not_alive_and_not_reachable() {
        let mut net = Net::empty();
        net.add_place("p1", 1).unwrap();
        net.add_place("p2", 0).unwrap();
        net.add_transition("t", TransitionType::Controllable).unwrap();
        net.link_places_by_transition("p1", "t", "p2").unwrap();

        let outcome = build_coverability_tree(&net, None).unwrap();
        let report = Report::derive(&net, &outcome, is_connected(&net));
        assert_eq!(
            report,
            Report {
                alive: false,
                coherent: true,
                safe: true,
                reachable: false,
            }
        );
    }

    #[test]
    fn display_renders_all_four_fields() {
        let report = Report {
            alive: true,
            coherent: false,
            safe: true,
            reachable: false,
        };
        let rendered = report.to_string();
        assert!(rendered.contains("alive"));
        assert!(rendered.contains("coherent"));
        assert!(rendered.contains("safe"));
        assert!(rendered.contains("reachable"));
    }
}
