//! Session probing and the keep-alive timer.

mod keep_alive;
mod probe;

pub use keep_alive::{SessionKeepAlive, SessionRefreshHandler};
pub use probe::{ProbeOutcome, ProbeSession};
