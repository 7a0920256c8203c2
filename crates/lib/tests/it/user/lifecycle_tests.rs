//! Account lifecycle: register, login, profile edits, logout.

use localaccount::{
    Error,
    accounts::{NewUser, ProfileUpdate},
    user::{UserError, dob},
};

use crate::helpers::{new_user, register, setup_accounts, test_storage};

#[test]
fn test_register_login_edit_scenario() {
    let (storage, _dir) = test_storage();
    let (accounts, _clock) = setup_accounts(storage);

    register(&accounts, "bob", "pw1");

    let session = accounts.login("bob", "pw1").expect("login should succeed");
    assert_eq!(session.nick, "bob");

    let err = accounts.login("bob", "wrong").unwrap_err();
    assert!(err.is_authentication_error());
    assert_eq!(accounts.whoami().unwrap(), Some(session));

    accounts
        .update_profile(ProfileUpdate {
            status: Some("busy".to_string()),
            ..Default::default()
        })
        .unwrap();
    let bob = accounts.users().find_by_nickname("bob").unwrap().unwrap();
    assert_eq!(bob.status, "busy");
    assert_eq!(bob.password, "pw1");
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let (storage, _dir) = test_storage();
    let (accounts, _clock) = setup_accounts(storage);

    register(&accounts, "alice", "first");
    let err = accounts.register(new_user("alice", "second")).unwrap_err();
    match err {
        Error::User(UserError::NicknameTaken { nickname }) => assert_eq!(nickname, "alice"),
        other => panic!("Unexpected error: {other:?}"),
    }

    // The first record is intact
    accounts.login("alice", "first").unwrap();
    assert!(accounts.login("alice", "second").is_err());
}

#[test]
fn test_profile_edit_round_trips_dob() {
    let (storage, _dir) = test_storage();
    let (accounts, _clock) = setup_accounts(storage);

    accounts
        .register(NewUser {
            dob: dob::compose("1990", "3", "7"),
            gender: "f".to_string(),
            ..new_user("carol", "pw")
        })
        .unwrap();
    accounts.login("carol", "pw").unwrap();

    let parts = dob::split(&accounts.current_user().unwrap().dob);
    assert_eq!((parts.year.as_str(), parts.month.as_str(), parts.day.as_str()), ("1990", "03", "07"));

    let updated = accounts
        .update_profile(ProfileUpdate {
            dob: Some(dob::compose(&parts.year, "12", &parts.day)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(updated.dob, "1990-12-07");
    assert_eq!(updated.gender, "f");
}

#[test]
fn test_session_outlives_user_removal_then_clears() {
    let (storage, _dir) = test_storage();
    let (accounts, _clock) = setup_accounts(storage);

    register(&accounts, "dave", "pw");
    accounts.login("dave", "pw").unwrap();

    // Simulate the user collection being wiped out from under the session
    accounts.users().save_all(&[]).unwrap();

    assert!(accounts.whoami().unwrap().is_some());
    let err = accounts.current_user().unwrap_err();
    assert!(matches!(err, Error::User(UserError::NotLoggedIn)));
    assert!(accounts.whoami().unwrap().is_none());
}

#[test]
fn test_relogin_replaces_session() {
    let (storage, _dir) = test_storage();
    let (accounts, clock) = setup_accounts(storage);

    register(&accounts, "erin", "pw");
    register(&accounts, "frank", "pw");

    let first = accounts.login("erin", "pw").unwrap();
    clock.advance(60_000);
    let second = accounts.login("frank", "pw").unwrap();

    assert_eq!(second.at, first.at + 60_000);
    assert_eq!(accounts.current_user().unwrap().nickname, "frank");

    accounts.logout().unwrap();
    assert!(accounts.whoami().unwrap().is_none());
}

#[test]
fn test_user_count_tracks_registrations() {
    let (storage, _dir) = test_storage();
    let (accounts, _clock) = setup_accounts(storage);

    assert_eq!(accounts.user_count().unwrap(), 0);
    for (i, nick) in ["a", "b", "c"].into_iter().enumerate() {
        register(&accounts, nick, "pw");
        assert_eq!(accounts.user_count().unwrap(), i + 1);
    }
}
