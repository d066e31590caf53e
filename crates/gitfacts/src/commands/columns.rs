//! Columns command.

use gitfacts_extractor::builtin::{COLUMNS, DEFAULT_COLUMNS};

/// Prints every built-in column, marking the defaults.
pub fn run() {
    for column in COLUMNS {
        let marker = if DEFAULT_COLUMNS.contains(&column.name) {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<12} {}", column.name, column.description);
    }
    println!("\n* exported when no columns are configured");
}
