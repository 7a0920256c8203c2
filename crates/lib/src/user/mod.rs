//! User system for localaccount
//!
//! Provides the persisted user collection, the current-session record,
//! and the typed patch used for profile edits.

pub mod dob;
pub mod errors;
pub mod session;
pub mod store;
pub mod types;

pub use errors::UserError;
pub use session::SessionManager;
pub use store::UserStore;
pub use types::*;
