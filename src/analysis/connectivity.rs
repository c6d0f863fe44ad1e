//! Connectivity check over the undirected view of the bipartite graph.

use std::collections::{BTreeSet, VecDeque};

use log::warn;

use crate::net::model::Net;

/// True iff every place and transition is reachable, in the undirected
/// sense (pre- and post-arcs merged, direction and multiplicity ignored),
/// from an arbitrary starting vertex. The starting vertex is the
/// lexicographically first name across places and transitions combined.
///
/// An empty net (no places, no transitions) returns `true` by convention:
/// there is no vertex to fail to visit.
pub fn is_connected(net: &Net) -> bool {
    let vertices: BTreeSet<String> = net.place_names().into_iter().chain(net.transition_names()).collect();

    let Some(first) = vertices.iter().next().cloned() else {
        return true;
    };

    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    visited.insert(first.clone());
    queue.push_back(first);

    while let Some(current) = queue.pop_front() {
        let neighbours: BTreeSet<String> = if net.has_place(&current) {
            net.place_inputs(&current).into_iter().chain(net.place_outputs(&current)).collect()
        } else {
            net.transition_inputs(&current)
                .into_iter()
                .chain(net.transition_outputs(&current))
                .collect()
        };

        for n in neighbours {
            if visited.insert(n.clone()) {
                queue.push_back(n);
            }
        }
    }

    let connected = visited == vertices;
    if !connected {
        let missing: Vec<&String> = vertices.difference(&visited).collect();
        warn!("net is not connected; unreachable from {first:?}: {missing:?}");
    }
    connected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::model::TransitionType;

    #[test]
    fn empty_net_is_vacuously_connected() {
        assert!(is_connected(&Net::empty()));
    }

    #[test]
    fn single_cycle_is_connected() {
        let mut net = Net::empty();
        net.add_place("p1", 1).unwrap();
        net.add_place("p2", 0).unwrap();
        net.add_transition("t1", TransitionType::Controllable).unwrap();
        net.link_places_by_transition("p1", "t1", "p2").unwrap();
        assert!(is_connected(&net));
    }

    #[test]
    fn two_disjoint_cycles_are_not_connected() {
        let mut net = Net::empty();
        net.add_place("a1", 1).unwrap();
        net.add_place("a2", 0).unwrap();
        net.add_transition("ta", TransitionType::Controllable).unwrap();
        net.link_places_by_transition("a1", "ta", "a2").unwrap();

        net.add_place("b1", 1).unwrap();
        net.add_place("b2", 0).unwrap();
        net.add_transition("tb", TransitionType::Controllable).unwrap();
        net.link_places_by_transition("b1", "tb", "b2").unwrap();

        assert!(!is_connected(&net));
    }

    #[test]
    fn isolated_place_breaks_connectivity() {
        let mut net = Net::empty();
        net.add_place("p1", 1).unwrap();
        net.add_place("isolated", 0).unwrap();
        net.add_transition("t1", TransitionType::Controllable).unwrap();
        net.set_link_place_to_transition("p1", "t1", 1).unwrap();
        net.set_link_transition_to_place("t1", "p1", 1).unwrap();
        assert!(!is_connected(&net));
    }
}
