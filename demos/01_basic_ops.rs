//! Example 01: Basic Session Operations
//!
//! This example demonstrates the core task list commands: adding, toggling,
//! renaming and deleting tasks, with the derived counters along the way.
//!
//! Run with: cargo run --example 01_basic_ops

use eyre::Result;
use tasklist::TaskListStore;

fn main() -> Result<()> {
    println!("TaskList Basic Operations Example");
    println!("=================================\n");

    let mut store = TaskListStore::new();
    println!("Fresh session: {} tasks\n", store.total());

    // ADD: newest tasks go on top
    println!("1. ADD - Adding three tasks...");
    store.add("Write weekly report");
    store.add("Buy milk");
    store.add("Call the dentist");
    for task in store.visible_items() {
        println!("   - {}", task.title);
    }
    println!("   (newest first)\n");

    // TOGGLE: flip the done flag, position stays put
    println!("2. TOGGLE - Completing 'Buy milk'...");
    let milk_id = store.items()[1].id;
    store.toggle(milk_id);
    for task in store.visible_items() {
        let marker = if task.done { "[x]" } else { "[ ]" };
        println!("   {} {}", marker, task.title);
    }
    println!();

    // RENAME: replace the title, nothing else changes
    println!("3. RENAME - Editing the report task...");
    let report_id = store.items()[2].id;
    store.rename(report_id, "Write weekly report (Q3 edition)");
    println!("   New title: {}\n", store.items()[2].title);

    // DELETE: remove by id
    println!("4. DELETE - Removing 'Call the dentist'...");
    let dentist_id = store.items()[0].id;
    store.delete(dentist_id);
    println!("   Remaining tasks: {}\n", store.total());

    // COUNTS: always recomputed from the collection
    println!("5. COUNTS - Derived counters...");
    let counts = store.counts();
    println!("   Total: {}", counts.total);
    println!("   Active: {}", counts.active);
    println!("   Completed: {}\n", counts.completed);

    println!("Example complete!");
    Ok(())
}
