//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `stylo_core` linkage without the Flutter/FFI runtime.
//! - Print the seeded catalog deterministically for quick sanity checks.

use std::process::ExitCode;
use stylo_core::{CatalogOptions, CatalogSource, ALL_GROUPS_SELECTOR};

fn main() -> ExitCode {
    println!("stylo_core ping={}", stylo_core::ping());
    println!("stylo_core version={}", stylo_core::core_version());

    let source = match CatalogSource::seeded(CatalogOptions::default()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("catalog init failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let groups = match source.get_groups(ALL_GROUPS_SELECTOR) {
        Ok(groups) => groups,
        Err(err) => {
            eprintln!("catalog listing failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for group in groups {
        println!(
            "{} \"{}\" items={} top={}",
            group.unique_id(),
            group,
            group.len(),
            group.top_items().len()
        );
        for item in group.top_items() {
            let item = item.borrow();
            println!("  {} {}", item.unique_id(), item);
        }
    }
    ExitCode::SUCCESS
}
