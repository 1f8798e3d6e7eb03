//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic event-driven transitions (states repeat)
//! - Declaration-order state enumeration
//! - Undo/redo over the visit history
//!
//! Run with: cargo run --example traffic_light

use statewalk::{ConfigBuilder, Machine};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = ConfigBuilder::new()
        .initial("red")
        .state("red", [("tick", "green")])
        .state("green", [("tick", "yellow")])
        .state("yellow", [("tick", "red")])
        .build()
        .unwrap();

    let mut machine = Machine::new(config).unwrap();

    println!("Declared states: {:?}", machine.states());
    println!("Initial state: {}\n", machine.state());

    println!("One full cycle:");
    for _ in 0..3 {
        let from = machine.state().to_string();
        machine.trigger("tick").unwrap();
        println!("  {} -> {}", from, machine.state());
    }

    println!("\nVisit history: {:?}", machine.history());

    println!("\nWalking back with undo:");
    while machine.undo() {
        println!("  back to {}", machine.state());
    }

    println!("\nAnd forward again with redo:");
    while machine.redo() {
        println!("  forward to {}", machine.state());
    }

    println!("\nEvery state handles 'tick': {:?}", machine.states_for("tick"));

    println!("\n=== Example Complete ===");
}
