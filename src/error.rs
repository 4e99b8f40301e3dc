use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, Error)]
pub enum Error {
    ///a vertex file line could not be read back, line is 1 based and counts the header
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("empty sampling domain: need a < b and at least one subdivision")]
    EmptyDomain,
    ///window, surface or event loop setup failed
    #[error("initialization failed: {0}")]
    Initialization(String),
    ///a frame could not be handed to the window
    #[error("presentation failed: {0}")]
    Present(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
}
impl Error {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }
}
