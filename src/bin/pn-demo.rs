//! Demonstration driver: hand-builds a couple of example nets and prints
//! their analysis reports. Not part of the library's public contract.

use petri_cover::net::{Net, TransitionType};
use petri_cover::{AnalysisConfig, Analyzer};

fn linear_cycle() -> Net {
    let mut net = Net::empty();
    for p in ["p1", "p2", "p3", "p4", "p5"] {
        net.add_place(p, 0).unwrap();
    }
    net.set_place("p1", 1).unwrap();
    for (t, from, to) in [
        ("t1", "p1", "p2"),
        ("t2", "p2", "p3"),
        ("t3", "p3", "p4"),
        ("t4", "p4", "p5"),
        ("t5", "p5", "p1"),
    ] {
        net.add_transition(t, TransitionType::Controllable).unwrap();
        net.link_places_by_transition(from, t, to).unwrap();
    }
    net
}

fn unbounded_producer() -> Net {
    let mut net = Net::empty();
    net.add_place("p1", 1).unwrap();
    net.add_place("p2", 0).unwrap();
    net.add_transition("t", TransitionType::Controllable).unwrap();
    net.set_link_place_to_transition("p1", "t", 1).unwrap();
    net.set_link_transition_to_place("t", "p1", 1).unwrap();
    net.set_link_transition_to_place("t", "p2", 1).unwrap();
    net
}

fn main() {
    env_logger::init();

    let analyzer = Analyzer::new(AnalysisConfig::default());

    for (name, net) in [("linear 5-place cycle", linear_cycle()), ("unbounded producer", unbounded_producer())] {
        println!("== {name} ==");
        match analyzer.analyze(&net) {
            Ok(report) => println!("{report}"),
            Err(e) => println!("analysis failed: {e}"),
        }
    }
}
