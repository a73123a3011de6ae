use anticheat_types::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("not a number: {0:?}")]
    NotANumber(String),
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ParseFailure
    }
}
