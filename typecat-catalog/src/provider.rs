//! Support types for generated accessors.

use std::{cell::OnceCell, fmt};

use thiserror::Error;

/// Raised by generated accessors when an alias cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ArgumentError {
    message: String,
}

impl ArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

type Resolver<'a, T> = Box<dyn Fn() -> Result<T, ArgumentError> + 'a>;

/// A lazy reference: the lookup runs the first time the value is requested.
///
/// A successful lookup is kept; a failed one is reported to the caller and
/// retried on the next request.
pub struct Provider<'a, T> {
    resolve: Resolver<'a, T>,
    value: OnceCell<T>,
}

impl<'a, T> Provider<'a, T> {
    pub fn new(resolve: impl Fn() -> Result<T, ArgumentError> + 'a) -> Self {
        Self {
            resolve: Box::new(resolve),
            value: OnceCell::new(),
        }
    }

    /// Resolve the reference, or return the value resolved earlier.
    pub fn get(&self) -> Result<&T, ArgumentError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let value = (self.resolve)()?;
        Ok(self.value.get_or_init(|| value))
    }

    /// Whether a value has been resolved yet.
    pub fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }

    /// Consume the reference and return its value, resolving it if needed.
    pub fn into_value(self) -> Result<T, ArgumentError> {
        let Provider { resolve, value } = self;
        match value.into_inner() {
            Some(value) => Ok(value),
            None => resolve(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Provider<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Provider").field(value).finish(),
            None => f.write_str("Provider(<unresolved>)"),
        }
    }
}
