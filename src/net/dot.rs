//! Rendering a net (and, optionally, a marking) to graph-description text.
//!
//! A non-core convenience: nothing in [`crate::analysis`] calls this
//! module, and the analyzer's correctness never depends on it.

use std::fmt::Write as _;

use crate::net::marking::{Marking, Token};
use crate::net::model::{ArcDirection, Net, TransitionType};

/// Renders `net` (with an optional marking for token annotations) to a dot
/// graph-description.
pub fn to_dot(net: &Net, marking: Option<&Marking>) -> String {
    let mut out = String::new();
    out.push_str("// generated petri net graph\n");
    out.push_str("digraph PetriNet { rankdir=LR\n");

    out.push_str("subgraph places {\n");
    for name in net.place_names() {
        let tokens = marking
            .map(|m| m.get(&name))
            .unwrap_or_else(|| Token::Finite(net.get_place(&name).map(|p| p.tokens).unwrap_or(0)));
        write!(out, "  p_{name} [shape=circle, label=\"{name}\"").unwrap();
        match tokens {
            Token::Finite(n) if n > 0 => {
                write!(out, ", xlabel=\"*{n}\"").unwrap();
            }
            Token::Omega => {
                out.push_str(", xlabel=\"*\u{03c9}\"");
            }
            _ => {}
        }
        out.push_str("];\n");
    }
    out.push_str("}\n");

    out.push_str("subgraph transitions {\n");
    for name in net.transition_names() {
        let t = net.get_transition(&name).unwrap();
        let color = match t.transition_type {
            TransitionType::Controllable => "cornflowerblue",
            _ => "coral",
        };
        write!(out, "  t_{name} [shape=box, style=filled, color={color}, label=\"{name}\"];\n").unwrap();
    }
    out.push_str("}\n");

    for arc in net.arcs() {
        let (from, to) = match arc.direction {
            ArcDirection::PlaceToTransition => (format!("p_{}", arc.place), format!("t_{}", arc.transition)),
            ArcDirection::TransitionToPlace => (format!("t_{}", arc.transition), format!("p_{}", arc.place)),
        };
        for _ in 0..arc.weight {
            writeln!(out, "  {from} -> {to};").unwrap();
        }
    }

    out.push_str("}\n");
    out
}

/// Writes the dot rendering of `net` to `path`.
pub fn write_dot<P: AsRef<std::path::Path>>(net: &Net, marking: Option<&Marking>, path: P) -> std::io::Result<()> {
    std::fs::write(path, to_dot(net, marking))
}
