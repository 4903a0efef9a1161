use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Input unavailable after {attempts} failed reads")]
    InputUnavailable { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, VendoError>;
