use crate::error::{ErrorVerbosity, ErrorVerbosityProvider};

/// State handed to every extractor and middleware.
#[derive(Debug, Clone, Copy)]
pub struct ApiState {
    error_verbosity: ErrorVerbosity,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity) -> Self {
        Self { error_verbosity }
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
