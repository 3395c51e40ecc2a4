//! Warehouseman authentication.
//!
//! Login is a secret-key lookup against the remote API; the resulting
//! session is a single serialized record persisted under a fixed storage
//! key (see [`session::SessionStore`]).

pub mod login;
pub mod session;

pub use login::{login, logout, AuthError};
pub use session::SessionStore;
