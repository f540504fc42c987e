use staffdesk_core::{
    is_authenticated, login, logout, AuthError, MemoryStore, StoreAdapter, IS_AUTHENTICATED_KEY,
};

#[test]
fn login_accepts_the_fixed_credentials_and_marks_the_store() {
    let mut store = MemoryStore::new();

    login(&mut store, "admin@bookxpert.com", "admin123").unwrap();
    assert_eq!(
        store.get(IS_AUTHENTICATED_KEY).unwrap().as_deref(),
        Some("true")
    );
    // The flag is the only thing login writes.
    assert_eq!(store.len(), 1);
    assert!(is_authenticated(&store).unwrap());
}

#[test]
fn login_rejects_wrong_credentials_without_touching_the_store() {
    let mut store = MemoryStore::new();

    let err = login(&mut store, "admin@bookxpert.com", "nope").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    let err = login(&mut store, "someone@else.com", "admin123").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    assert_eq!(store.get(IS_AUTHENTICATED_KEY).unwrap(), None);
    assert!(!is_authenticated(&store).unwrap());
}

#[test]
fn logout_removes_the_flag_and_is_safe_when_logged_out() {
    let mut store = MemoryStore::new();
    login(&mut store, "admin@bookxpert.com", "admin123").unwrap();

    logout(&mut store).unwrap();
    assert!(!is_authenticated(&store).unwrap());

    // Logging out twice is harmless.
    logout(&mut store).unwrap();
    assert_eq!(store.get(IS_AUTHENTICATED_KEY).unwrap(), None);
}

#[test]
fn stale_flag_values_do_not_count_as_logged_in() {
    let mut store = MemoryStore::new();
    store.set(IS_AUTHENTICATED_KEY, "yes").unwrap();
    assert!(!is_authenticated(&store).unwrap());
}
