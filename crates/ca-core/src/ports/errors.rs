use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("platform data directory is not available")]
    DataLocalDirUnavailable,
}
