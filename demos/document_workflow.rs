//! Document Workflow State Machine
//!
//! This example demonstrates a review workflow with rejected paths,
//! unconditional jumps, and history maintenance.
//!
//! Key concepts:
//! - Configuration authored as JSON (key order becomes declaration order)
//! - change_state as an administrative override that bypasses the table
//! - Branch truncation: transitioning after undo drops the redo branch
//! - clear_history at workflow milestones
//!
//! Run with: cargo run --example document_workflow

use statewalk::{Config, Machine};

fn main() {
    println!("=== Document Workflow State Machine ===\n");

    let config = Config::from_json(
        r#"{
            "initial": "draft",
            "states": {
                "draft":     { "transitions": { "submit": "review" } },
                "review":    { "transitions": { "approve": "published", "reject": "draft" } },
                "published": { "transitions": { "retract": "draft" } }
            }
        }"#,
    )
    .unwrap();

    let mut machine = Machine::new(config).unwrap();
    println!("Workflow states: {:?}", machine.states());
    println!("States that can 'reject': {:?}\n", machine.states_for("reject"));

    println!("Normal path with one rejection:");
    for event in ["submit", "reject", "submit", "approve"] {
        machine.trigger(event).unwrap();
        println!("  {:>8} -> {}", event, machine.state());
    }
    println!("History so far: {:?}\n", machine.history());

    println!("Editor has second thoughts:");
    machine.undo();
    println!("  undo -> {}", machine.state());
    println!("  events available here: {:?}", machine.events());

    // Jumping from here abandons the 'published' entry entirely.
    machine.change_state("draft").unwrap();
    println!("  admin override -> {}", machine.state());
    println!("  redo possible? {}\n", machine.can_redo());

    println!("Milestone reached, compacting history:");
    machine.clear_history();
    println!("  history: {:?}", machine.history());

    println!("\nInvalid operations never change the machine:");
    println!("  trigger('approve') in draft: {}", machine.trigger("approve").unwrap_err());
    println!("  change_state('archived'):    {}", machine.change_state("archived").unwrap_err());
    println!("  still in: {}", machine.state());

    println!("\n=== Example Complete ===");
}
