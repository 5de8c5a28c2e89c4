#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Insufficient data: need {needed} bytes, have {available}")]
    InsufficientData { needed: usize, available: usize },
    #[error("Invalid signature: {0:?}")]
    InvalidSignature(String),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl CodecError {
    pub(crate) fn need(needed: usize, available: usize) -> Result<(), CodecError> {
        if available < needed {
            Err(CodecError::InsufficientData { needed, available })
        } else {
            Ok(())
        }
    }
}
