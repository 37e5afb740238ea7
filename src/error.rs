//! Errors raised by the array methods.
//!
//! Both adapter errors are the analogue of a JavaScript `TypeError`: they are
//! raised before any primitive is touched, so a failed call never leaves a
//! partially mutated list behind.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The receiver is a single element (or not a node at all) rather than
    /// a node list.
    #[error("{method} can only be called on node lists")]
    ReceiverType { method: String },

    /// A callback-accepting method was handed something that cannot be called.
    #[error("Callback is not a function")]
    CallbackType,

    /// A method table was asked for a method it does not hold.
    #[error("{name} is not a function")]
    NotAFunction { name: String },
}

impl Error {
    pub(crate) fn receiver(method: &str) -> Error {
        Error::ReceiverType { method: method.to_string() }
    }

    /// Name of the method the error was raised for, if it carries one.
    pub fn method(&self) -> Option<&str> {
        match self {
            Error::ReceiverType { method } => Some(method),
            Error::NotAFunction { name } => Some(name),
            Error::CallbackType => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_message_names_method() {
        let err = Error::receiver("splice");
        assert_eq!(err.to_string(), "splice can only be called on node lists");
        assert_eq!(err.method(), Some("splice"));
    }

    #[test]
    fn callback_message() {
        assert_eq!(Error::CallbackType.to_string(), "Callback is not a function");
        assert_eq!(Error::CallbackType.method(), None);
    }
}
