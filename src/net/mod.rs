//! The Petri net model: places, transitions, weighted arcs, markings, and
//! the name validator every mutating operation consults.
//!
//! ```
//! use petri_cover::net::{Net, TransitionType};
//!
//! let mut net = Net::empty();
//! net.add_place("p0", 1).unwrap();
//! net.add_place("p1", 0).unwrap();
//! net.add_transition("t0", TransitionType::Controllable).unwrap();
//! net.set_link_place_to_transition("p0", "t0", 1).unwrap();
//! net.set_link_transition_to_place("t0", "p1", 1).unwrap();
//!
//! assert!(net.ready_transitions().contains("t0"));
//! net.fire(Some("t0")).unwrap();
//! assert_eq!(net.get_place("p0").unwrap().tokens, 0);
//! assert_eq!(net.get_place("p1").unwrap().tokens, 1);
//! ```

pub mod decor;
pub mod dot;
pub mod marking;
pub mod model;
pub mod name;

pub use decor::{BehaviorAttribute, BehaviorAttributeRestriction, Hint, ViewProperties};
pub use dot::{to_dot, write_dot};
pub use marking::{Marking, Token};
pub use model::{Arc, ArcDirection, Net, Place, Transition, TransitionType};
pub use name::is_valid_name;
