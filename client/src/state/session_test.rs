use super::*;

#[test]
fn session_starts_absent() {
    let session = SessionState::default();
    assert!(session.get().is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn set_replaces_previous_identity_wholesale() {
    let mut first = AuthResponse::new("A", "a@b.com");
    first.extra.insert("id".to_owned(), serde_json::json!("u-1"));

    let mut session = SessionState::default();
    session.set(first);
    session.set(AuthResponse::new("B", "b@c.com"));

    let user = session.get().unwrap();
    assert_eq!(user.name, "B");
    assert!(user.extra.is_empty());
}

#[test]
fn clear_is_idempotent() {
    let mut session = SessionState::default();
    session.set(AuthResponse::new("A", "a@b.com"));
    session.clear();
    let after_first = session.clone();
    session.clear();
    assert_eq!(session, after_first);
    assert!(!session.is_signed_in());
}

#[test]
fn generation_changes_when_identity_changes_hands() {
    let mut session = SessionState::default();
    let start = session.generation();
    session.set(AuthResponse::new("A", "a@b.com"));
    let signed_in = session.generation();
    assert_ne!(signed_in, start);
    session.clear();
    assert_ne!(session.generation(), signed_in);
}

#[test]
fn refresh_applies_to_current_session_only() {
    let mut session = SessionState::default();
    session.set(AuthResponse::new("A", "a@b.com"));
    let generation = session.generation();

    assert!(session.refresh(generation, AuthResponse::new("A. Smith", "a@b.com")));
    assert_eq!(session.get().unwrap().name, "A. Smith");
    assert_eq!(session.generation(), generation);

    session.clear();
    session.set(AuthResponse::new("B", "b@b.com"));
    assert!(!session.refresh(generation, AuthResponse::new("A", "a@b.com")));
    assert_eq!(session.get().unwrap().email, "b@b.com");
}

#[test]
fn refresh_never_signs_anyone_in() {
    let mut session = SessionState::default();
    let generation = session.generation();
    assert!(!session.refresh(generation, AuthResponse::new("A", "a@b.com")));
    assert!(session.get().is_none());
}
