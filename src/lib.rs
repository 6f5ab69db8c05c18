pub mod bootstrap;
pub mod cli;

pub use bootstrap::run_cli;
pub use cli::{Cli, Command};
