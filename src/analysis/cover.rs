//! The coverability tree builder.
//!
//! Performs a Karp-Miller-style bounded search over the reachable-marking
//! graph: for every open marking, compute the potentially-ready
//! transitions, derive successor markings, apply ω-acceleration against a
//! strictly-covering ancestor, insert into the tree, and maintain the
//! open/closed sets until open is empty.

use std::collections::BTreeSet;

use log::debug;

use crate::analysis::potential::{potentially_fire, potentially_ready};
use crate::error::{Error, Result};
use crate::net::marking::Marking;
use crate::net::model::Net;

/// One node of the coverability tree: a marking and a parent back-link
/// (`None` for the root). Nodes live in an arena addressed by index rather
/// than through an owning/non-owning pointer pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TreeNode {
    pub marking: Marking,
    pub parent: Option<usize>,
}

/// The finished coverability tree.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CoverTree {
    nodes: Vec<TreeNode>,
}

impl CoverTree {
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: usize) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }
}

/// Everything the property-derivation step needs beyond the tree itself.
#[derive(Debug, Clone)]
pub struct CoverOutcome {
    pub tree: CoverTree,
    pub done_events: BTreeSet<String>,
    pub term: usize,
    pub dubl_start: usize,
}

/// Runs the bounded coverability search from `net`'s initial marking.
/// `node_limit`, if set, bounds the number of tree nodes the search may
/// create; exceeding it surfaces as [`Error::SearchLimitExceeded`] rather
/// than looping or exhausting memory.
pub fn build_coverability_tree(net: &Net, node_limit: Option<usize>) -> Result<CoverOutcome> {
    let root_marking = net.initial_marking();
    let mut nodes = vec![TreeNode {
        marking: root_marking.clone(),
        parent: None,
    }];

    // `open`/`closed` are value-equated sets of markings.
    let mut open: BTreeSet<Marking> = BTreeSet::new();
    let mut closed: BTreeSet<Marking> = BTreeSet::new();
    open.insert(root_marking.clone());

    let mut done_events: BTreeSet<String> = BTreeSet::new();
    let mut term: usize = 0;
    let mut dubl_start: usize = 0;

    let mut i = 0usize;
    while !open.is_empty() {
        let current_marking = nodes[i].marking.clone();
        let ready = potentially_ready(net, &current_marking);

        if ready.is_empty() {
            term += 1;
        } else {
            for t in ready {
                let fired = potentially_fire(net, &current_marking, Some(&t))?;
                done_events.insert(t);

                let accelerated = accelerate(&nodes, i, fired);

                if !closed.contains(&accelerated) && accelerated != current_marking {
                    open.insert(accelerated.clone());
                    if let Some(limit) = node_limit {
                        if nodes.len() >= limit {
                            return Err(Error::SearchLimitExceeded { limit });
                        }
                    }
                    nodes.push(TreeNode {
                        marking: accelerated,
                        parent: Some(i),
                    });
                } else if accelerated == root_marking {
                    dubl_start += 1;
                }
            }
        }

        closed.insert(current_marking.clone());
        open.remove(&current_marking);
        i += 1;
    }

    Ok(CoverOutcome {
        tree: CoverTree { nodes },
        done_events,
        term,
        dubl_start,
    })
}

/// ω-acceleration: walk ancestors of the candidate node from its parent up
/// to the root; at the first ancestor strictly covered by the candidate
/// marking, set every place where the candidate strictly exceeds that
/// ancestor to ω.
///
/// Only the nearest strictly-covering ancestor is consulted (not every
/// covering ancestor on the path), matching the standard "coverability
/// tree" variant of the Karp-Miller construction.
fn accelerate(nodes: &[TreeNode], parent: usize, candidate: Marking) -> Marking {
    let mut cursor = Some(parent);
    let ancestor = loop {
        match cursor {
            None => break None,
            Some(idx) => {
                if candidate.strictly_covers(&nodes[idx].marking) {
                    break Some(&nodes[idx]);
                }
                cursor = nodes[idx].parent;
            }
        }
    };

    let Some(ancestor) = ancestor else {
        return candidate;
    };

    let exceeding: Vec<String> = candidate
        .places()
        .filter(|p| candidate.get(p) > ancestor.marking.get(p))
        .map(|p| p.to_string())
        .collect();

    if exceeding.is_empty() {
        return candidate;
    }

    debug!("accelerating places {:?} to omega", exceeding);
    candidate.with_omega_on_positions(exceeding.iter().map(|s| s.as_str()))
}
