//! Example 02: Filtered Views
//!
//! This example demonstrates the three view filters and shows that switching
//! between them only changes what is visible, never what is stored.
//!
//! Run with: cargo run --example 02_filtered_views

use eyre::Result;
use tasklist::{TaskListStore, ViewFilter};

fn print_view(store: &TaskListStore) {
    for task in store.visible_items() {
        let marker = if task.done { "[x]" } else { "[ ]" };
        println!("   {} {}", marker, task.title);
    }
    if store.visible_items().is_empty() {
        println!("   (nothing in this view)");
    }
}

fn main() -> Result<()> {
    println!("TaskList Filtered Views Example");
    println!("===============================\n");

    // Seed five tasks and complete two of them
    let mut store = TaskListStore::new();
    store.add("Refill printer paper");
    store.add("Review pull request");
    store.add("Book flights");
    store.add("Water the plants");
    store.add("Send invoices");
    store.toggle(store.items()[1].id);
    store.toggle(store.items()[3].id);

    println!("Seeded {} tasks, {} completed\n", store.total(), store.completed_count());

    // ALL: the whole collection
    println!("1. FILTER all - Every task...");
    store.set_filter(ViewFilter::All);
    print_view(&store);
    println!("   Visible: {}\n", store.visible_items().len());

    // ACTIVE: only tasks still to do
    println!("2. FILTER active - Still to do...");
    store.set_filter(ViewFilter::Active);
    print_view(&store);
    println!("   Visible: {}\n", store.visible_items().len());

    // COMPLETED: only finished tasks
    println!("3. FILTER completed - Already done...");
    store.set_filter(ViewFilter::Completed);
    print_view(&store);
    println!("   Visible: {}\n", store.visible_items().len());

    // Filters never touch the collection itself
    println!("4. VERIFY - Collection untouched by filtering...");
    println!("   Total is still {}", store.total());
    let counts = store.counts();
    println!(
        "   Counts unchanged: {} active, {} completed\n",
        counts.active, counts.completed
    );

    println!("Example complete!");
    Ok(())
}
