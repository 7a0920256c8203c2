//! Constants used throughout the localaccount library.
//!
//! Storage keys are part of the persisted layout. Changing them orphans existing data.

/// Storage key holding the JSON array of user records.
pub const USERS_KEY: &str = "myapp_users_v1";

/// Storage key holding the JSON session record, if any.
pub const SESSION_KEY: &str = "myapp_session_v1";

/// Earliest year offered for a date of birth.
pub const MIN_BIRTH_YEAR: i32 = 1900;
