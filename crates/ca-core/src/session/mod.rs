//! Session domain module.
//!
//! Holds the authentication state, the events and actions of the session
//! lifecycle, and the pure reducer that ties them together.

mod action;
mod cookies;
mod event;
mod state;
pub mod state_machine;

pub use action::AuthAction;
pub use cookies::SessionCookies;
pub use event::AuthEvent;
pub use state::{AuthState, Session, SessionStatus};
pub use state_machine::AuthStateMachine;
