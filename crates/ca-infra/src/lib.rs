pub mod fs;
pub mod http;
pub mod session_store;
pub mod ui;

pub use fs::DirsAppDirsAdapter;
pub use http::{HttpApiClient, HttpAuthApi, HttpOnboardingApi, HttpSettingsApi};
pub use session_store::{FileSessionStore, InMemorySessionStore};
pub use ui::{ConsoleNotifier, HistoryNavigator};
