use std::error::Error as StdError;
use thiserror::Error;

/// Boxed cause carried by [`Error::Fatal`]
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Outcome of a failed capability call.
///
/// The two variants are disjoint: [`Error::Fatal`] means the session is
/// unusable and no further calls should be made on it, [`Error::Application`]
/// means the server processed the call and refused it.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote call could not be completed end to end
    #[error("Fatal: {0}")]
    Fatal(#[source] BoxError),
    /// The server reported a failure; contains its message verbatim
    #[error("{0}")]
    Application(String),
}

impl Error {
    /// Wraps any error as session-terminating without altering it
    pub fn fatal<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Fatal(error.into())
    }

    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    #[must_use]
    pub const fn is_application(&self) -> bool {
        matches!(self, Self::Application(_))
    }

    /// Server message of an application error
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Application(msg) => Some(msg.as_str()),
            Self::Fatal(_) => None,
        }
    }
}

/// The server answered with a reply that cannot be interpreted unambiguously
#[derive(Debug, Error)]
#[error("Malformed `{procedure}` reply: {reason}")]
pub struct MalformedReply {
    pub procedure: &'static str,
    pub reason: String,
}

impl From<MalformedReply> for Error {
    fn from(error: MalformedReply) -> Self {
        Self::fatal(error)
    }
}

#[cfg(test)]
mod test_error {
    use std::io;

    use super::*;

    #[test]
    fn test_fatal_keeps_cause() {
        let error = Error::fatal(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        assert!(error.is_fatal());
        assert!(error.message().is_none());

        let cause = error
            .source()
            .and_then(|s| s.downcast_ref::<io::Error>())
            .unwrap();
        assert_eq!(cause.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(error.to_string(), "Fatal: reset");
    }

    #[test]
    fn test_application_message_verbatim() {
        let error = Error::Application("no such file: /a".to_owned());
        assert!(error.is_application());
        assert_eq!(error.message(), Some("no such file: /a"));
        assert_eq!(error.to_string(), "no such file: /a");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_malformed_reply_is_fatal() {
        let error: Error = MalformedReply {
            procedure: "pwd",
            reason: "both path and error are set".to_owned(),
        }
        .into();

        assert!(error.is_fatal());
        assert!(error
            .source()
            .is_some_and(|s| s.downcast_ref::<MalformedReply>().is_some()));
    }
}
