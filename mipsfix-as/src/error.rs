use std::fmt;

/// Driver-level failures layered around `mipsfix_core::ProcessorError`
/// (§7): input acquisition and assembler invocation are the driver's own
/// concerns, not the core's.
#[derive(Debug)]
pub enum DriverError {
    InputUnavailable(String),
    Processing(mipsfix_core::ProcessorError),
    AssemblerFailed(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InputUnavailable(reason) => write!(f, "input unavailable: {reason}"),
            DriverError::Processing(err) => write!(f, "processing failed: {err}"),
            DriverError::AssemblerFailed(reason) => write!(f, "assembler failed: {reason}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<mipsfix_core::ProcessorError> for DriverError {
    fn from(err: mipsfix_core::ProcessorError) -> Self {
        DriverError::Processing(err)
    }
}
