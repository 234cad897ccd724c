//! Request-level errors.
//!
//! Per-candidate provider failures never show up here; they are carried as
//! `TravelOutcome` variants. An `AppError` means the whole request (or the
//! process) could not be served.

/// Broad classification used for exit codes and reply status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential or invalid engine settings.
    Config,
    /// The inbound request has nothing to resolve (e.g. blank origin).
    RequestMalformed,
    /// Unreadable or invalid input files.
    Input,
    /// Failures while running (thread pool, output, terminal).
    Runtime,
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestMalformed, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Runtime, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Config | ErrorKind::RequestMalformed | ErrorKind::Input => 2,
            ErrorKind::Runtime => 4,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::config("x").exit_code(), 2);
        assert_eq!(AppError::malformed("x").exit_code(), 2);
        assert_eq!(AppError::input("x").exit_code(), 2);
        assert_eq!(AppError::runtime("x").exit_code(), 4);
    }

    #[test]
    fn display_is_the_message() {
        let err = AppError::malformed("Missing origin address.");
        assert_eq!(err.to_string(), "Missing origin address.");
        assert_eq!(err.kind(), ErrorKind::RequestMalformed);
    }
}
