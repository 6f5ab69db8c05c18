//! Terminal-side UI adapters.

mod navigator;
mod notifier;

pub use navigator::HistoryNavigator;
pub use notifier::ConsoleNotifier;
