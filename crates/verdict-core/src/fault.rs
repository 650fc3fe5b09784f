use std::error::Error;
use std::fmt;

use crate::{CoreError, ErrorBody, StatusError, StructuredError};

/// Error value handed to the dispatcher
///
/// The variants mirror how the dispatcher treats an error: taxonomy errors
/// resolve to a fixed status, structured errors go through localization and
/// the fallback handler, anything else only reaches the fallback handler.
#[derive(Debug)]
pub enum Fault {
    /// Member of the built-in status taxonomy
    Status(StatusError),
    /// Application-defined error embedding an [`ErrorBody`]
    Structured(Box<dyn StructuredError>),
    /// Error without a structured body
    Other(anyhow::Error),
}

impl Fault {
    /// Wrap an application-defined error
    pub fn structured(error: impl StructuredError) -> Self {
        Self::from(Box::new(error) as Box<dyn StructuredError>)
    }

    /// Wrap an error without a structured body
    pub fn other(error: impl Into<anyhow::Error>) -> Self {
        Self::from(error.into())
    }

    /// Move a [`StatusError`] hidden behind `Structured` or `Other` into
    /// [`Fault::Status`]
    ///
    /// Taxonomy membership is decided by the runtime type, not by the variant
    /// the caller picked. `anyhow` context around a status error is dropped.
    #[must_use]
    pub fn normalize(self) -> Self {
        match self {
            Self::Other(e) => match e.downcast::<StatusError>() {
                Ok(status) => Self::Status(status),
                Err(e) => Self::Other(e),
            },
            Self::Structured(e) => {
                if let Some(status) = (&*e as &(dyn Error + 'static)).downcast_ref::<StatusError>() {
                    return Self::Status(status.clone());
                }
                Self::Structured(e)
            }
            status @ Self::Status(_) => status,
        }
    }

    /// Borrow the embedded body
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotStructured`] for [`Fault::Other`]
    pub fn body(&self) -> Result<&ErrorBody, CoreError> {
        match self {
            Self::Status(e) => Ok(e.body()),
            Self::Structured(e) => Ok(e.body()),
            Self::Other(_) => Err(CoreError::NotStructured),
        }
    }

    /// Overwrite the embedded message; unstructured errors are left untouched
    pub fn set_message(&mut self, message: impl Into<String>) {
        let body = match self {
            Self::Status(e) => StructuredError::body_mut(e),
            Self::Structured(e) => e.body_mut(),
            Self::Other(_) => return,
        };
        body.message = message.into();
    }

    /// Inspect the concrete error type behind this fault
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + Send + Sync + 'static,
    {
        match self {
            Self::Status(e) => (e as &(dyn Error + 'static)).downcast_ref(),
            Self::Structured(e) => (&**e as &(dyn Error + 'static)).downcast_ref(),
            Self::Other(e) => e.downcast_ref(),
        }
    }

    /// Whether the fault belongs to the built-in taxonomy
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}

/// Borrow the body of `fault`
///
/// # Errors
///
/// Returns [`CoreError::NotStructured`] when the fault carries no body
pub fn get_body(fault: &Fault) -> Result<&ErrorBody, CoreError> {
    fault.body()
}

/// Replace the message of `fault` in place
pub fn set_message(fault: &mut Fault, message: impl Into<String>) {
    fault.set_message(message);
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(e) => fmt::Display::fmt(e, f),
            Self::Structured(e) => fmt::Display::fmt(e, f),
            Self::Other(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Status(e) => e.source(),
            Self::Structured(e) => e.source(),
            Self::Other(e) => e.source(),
        }
    }
}

impl From<StatusError> for Fault {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

impl From<crate::Status> for Fault {
    fn from(status: crate::Status) -> Self {
        Self::Status(StatusError::new(status))
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error).normalize()
    }
}

impl From<Box<dyn StructuredError>> for Fault {
    fn from(error: Box<dyn StructuredError>) -> Self {
        Self::Structured(error).normalize()
    }
}
