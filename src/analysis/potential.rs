//! Potential-firing semantics over arbitrary (possibly-ω) markings.
//!
//! These are free functions over a net and a marking, deliberately not
//! methods on [`crate::net::Net`]: the concrete semantics in `net::model`
//! and the potential semantics here must not share mutable state.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::net::marking::{Marking, Token};
use crate::net::model::Net;

/// Transition names `t` such that for every pre-arc (p, t, w),
/// `marking(p) == ω` or `marking(p) >= w`.
pub fn potentially_ready(net: &Net, marking: &Marking) -> BTreeSet<String> {
    net.transition_names()
        .into_iter()
        .filter(|t| is_potentially_ready(net, marking, t))
        .collect()
}

fn is_potentially_ready(net: &Net, marking: &Marking, transition: &str) -> bool {
    net.transition_inputs(transition).into_iter().all(|place| {
        let weight = net.get_link_place_to_transition(&place, transition);
        match marking.get(&place) {
            Token::Omega => true,
            Token::Finite(n) => n >= weight,
        }
    })
}

/// Successor marking after potentially firing `transition` (or, if `None`,
/// the lexicographically first potentially-ready transition) from
/// `marking`. Places untouched by the firing transition are copied
/// unchanged; places at ω stay at ω. Firing an explicit, non-ready
/// transition is an error; firing with no explicit name and no ready
/// transition returns `marking` unchanged.
pub fn potentially_fire(net: &Net, marking: &Marking, transition: Option<&str>) -> Result<Marking> {
    let ready = potentially_ready(net, marking);

    let firing = match transition {
        Some(name) => {
            if !ready.is_empty() && !ready.contains(name) {
                return Err(Error::InvalidArgument(format!(
                    "transition {name:?} is not potentially ready"
                )));
            }
            if ready.is_empty() {
                return Ok(marking.clone());
            }
            name.to_string()
        }
        None => match ready.into_iter().next() {
            Some(name) => name,
            None => return Ok(marking.clone()),
        },
    };

    let mut next = marking.clone();
    let touched: BTreeSet<String> = net
        .transition_inputs(&firing)
        .into_iter()
        .chain(net.transition_outputs(&firing))
        .collect();

    for place in touched {
        if marking.get(&place).is_omega() {
            next.set(&place, Token::Omega);
            continue;
        }
        let consumed = net.get_link_place_to_transition(&place, &firing);
        let produced = net.get_link_transition_to_place(&firing, &place);
        let value = (marking.get(&place) - consumed) + produced;
        next.set(&place, value);
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::model::TransitionType;

    fn cycle() -> Net {
        let mut net = Net::empty();
        net.add_place("p1", 1).unwrap();
        net.add_place("p2", 0).unwrap();
        net.add_transition("t1", TransitionType::Controllable).unwrap();
        net.link_places_by_transition("p1", "t1", "p2").unwrap();
        net
    }

    #[test]
    fn potentially_ready_matches_concrete_readiness() {
        let net = cycle();
        let m = net.initial_marking();
        assert_eq!(potentially_ready(&net, &m), net.ready_transitions());
    }

    #[test]
    fn omega_place_is_always_potentially_ready() {
        let net = cycle();
        let mut m = net.initial_marking();
        m.set("p1", Token::Finite(0));
        assert!(potentially_ready(&net, &m).is_empty());
        let m_omega = m.with_omega_on_positions(["p1"]);
        assert!(potentially_ready(&net, &m_omega).contains("t1"));
    }

    #[test]
    fn potentially_fire_moves_a_finite_token() {
        let net = cycle();
        let m = net.initial_marking();
        let next = potentially_fire(&net, &m, Some("t1")).unwrap();
        assert_eq!(next.get("p1"), Token::Finite(0));
        assert_eq!(next.get("p2"), Token::Finite(1));
    }

    #[test]
    fn potentially_fire_keeps_omega_on_untouched_and_touched_places() {
        let net = cycle();
        let m = net.initial_marking().with_omega_on_positions(["p1"]);
        let next = potentially_fire(&net, &m, Some("t1")).unwrap();
        assert_eq!(next.get("p1"), Token::Omega);
    }

    #[test]
    fn firing_non_ready_explicit_transition_errors() {
        let net = cycle();
        let mut m = net.initial_marking();
        m.set("p1", Token::Finite(0));
        assert!(potentially_fire(&net, &m, Some("t1")).is_err());
    }

    #[test]
    fn firing_with_no_name_and_no_ready_transition_is_identity() {
        let net = cycle();
        let mut m = net.initial_marking();
        m.set("p1", Token::Finite(0));
        let next = potentially_fire(&net, &m, None).unwrap();
        assert_eq!(next, m);
    }
}
