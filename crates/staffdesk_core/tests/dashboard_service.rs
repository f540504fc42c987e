use staffdesk_core::{
    EmployeeQuery, EmployeeService, MemoryStore, StoreEmployeeRepository,
};

fn service() -> EmployeeService<StoreEmployeeRepository<MemoryStore>> {
    EmployeeService::new(StoreEmployeeRepository::new(MemoryStore::new()))
}

#[test]
fn dashboard_seeds_and_reports_counters_with_first_page() {
    let mut service = service();

    let view = service.dashboard(&EmployeeQuery::default()).unwrap();
    assert_eq!(view.stats.total, 6);
    assert_eq!(view.stats.active + view.stats.inactive, view.stats.total);
    assert_eq!(view.page.page, 1);
    assert_eq!(view.page.total_pages, 2);
    assert_eq!(view.page.employees.len(), 5);
}

#[test]
fn deleting_the_last_page_clamps_the_view_back() {
    let mut service = service();
    let query = EmployeeQuery {
        page: 2,
        ..EmployeeQuery::default()
    };

    let view = service.dashboard(&query).unwrap();
    assert_eq!(view.page.page, 2);
    assert_eq!(view.page.employees.len(), 1);
    let last_id = view.page.employees[0].id.clone();

    service.delete(&last_id).unwrap();

    // The re-derived view never points past the end of the shrunken set.
    let view = service.dashboard(&query).unwrap();
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(view.page.page, 1);
    assert_eq!(view.page.employees.len(), 5);
    assert_eq!(view.stats.total, 5);
}

#[test]
fn mutations_through_the_service_refresh_the_derived_view() {
    let mut service = service();
    let before = service.dashboard(&EmployeeQuery::default()).unwrap();

    let target = before.page.employees[0].clone();
    assert!(target.is_active);
    service.set_active(&target.id, false).unwrap();

    let after = service.dashboard(&EmployeeQuery::default()).unwrap();
    assert_eq!(after.stats.active, before.stats.active - 1);
    assert_eq!(after.stats.inactive, before.stats.inactive + 1);
    assert!(!after.page.employees[0].is_active);
}
