//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use staffdesk_core::{
    EmployeeQuery, EmployeeRepository, MemoryStore, StoreEmployeeRepository,
};

fn main() {
    println!("staffdesk_core version={}", staffdesk_core::core_version());

    let mut repo = StoreEmployeeRepository::new(MemoryStore::new());
    match repo.load() {
        Ok(employees) => {
            let view = staffdesk_core::run_query(&employees, &EmployeeQuery::default());
            println!(
                "seeded employees={} first_page={} total_pages={}",
                employees.len(),
                view.employees.len(),
                view.total_pages
            );
        }
        Err(err) => eprintln!("load failed: {err}"),
    }
}
