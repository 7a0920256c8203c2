//! SessionManager behaviour through the public API.

use std::sync::Arc;

use localaccount::{
    FixedClock, SystemClock,
    backend::Storage,
    constants::SESSION_KEY,
    user::{SessionManager, SessionRecord},
};

use crate::helpers::test_storage;

#[test]
fn test_start_then_current_then_end() {
    let (storage, _dir) = test_storage();
    let clock = Arc::new(FixedClock::new(10));
    let sessions = SessionManager::new(storage, clock.clone());

    sessions.start("alice").unwrap();
    assert_eq!(
        sessions.current().unwrap(),
        Some(SessionRecord {
            nick: "alice".to_string(),
            at: 10,
        })
    );

    sessions.end().unwrap();
    assert_eq!(sessions.current().unwrap(), None);
}

#[test]
fn test_start_with_system_clock_is_within_window() {
    use localaccount::Clock;

    let (storage, _dir) = test_storage();
    let sessions = SessionManager::new(storage, Arc::new(SystemClock));

    let before = SystemClock.now_millis();
    let started = sessions.start("alice").unwrap();
    let after = SystemClock.now_millis();
    assert!((before..=after).contains(&started.at));
}

#[test]
fn test_session_readable_by_second_manager() {
    let (storage, _dir) = test_storage();
    let clock = Arc::new(FixedClock::new(10));
    let first = SessionManager::new(storage.clone(), clock.clone());
    let second = SessionManager::new(storage, clock);

    first.start("alice").unwrap();
    assert_eq!(second.current().unwrap().unwrap().nick, "alice");
    second.end().unwrap();
    assert_eq!(first.current().unwrap(), None);
}

#[test]
fn test_non_json_session_reads_absent() {
    let (storage, _dir) = test_storage();
    storage.set(SESSION_KEY, "alice").unwrap();

    let sessions = SessionManager::new(storage, Arc::new(FixedClock::new(0)));
    assert_eq!(sessions.current().unwrap(), None);

    // A fresh login replaces the garbage
    sessions.start("alice").unwrap();
    assert_eq!(sessions.current().unwrap().unwrap().nick, "alice");
}
