//! Session cookie stores
//!
//! - [`InMemorySessionStore`]: lives as long as the process, like a browser tab.
//! - [`FileSessionStore`]: JSON file in the app data dir, shared by
//!   consecutive CLI invocations.

mod file;
mod memory;

pub use file::{FileSessionStore, DEFAULT_SESSION_FILE};
pub use memory::InMemorySessionStore;
