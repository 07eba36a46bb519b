use reqwest::StatusCode;

use crate::i18n::MessageKey;

/// A failed call to the session endpoint, as observed by the client.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// No complete response arrived: the server was unreachable or the
    /// connection dropped before the body was read.
    #[error("Failed to reach the server: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Server answered with HTTP {status}")]
    Status { status: StatusCode },

    #[error("Invalid session body (HTTP {status}): {message}")]
    Decode { status: StatusCode, message: String },
}

impl TransportError {
    /// HTTP status of the failed call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Connect(err) => err.status().map(|status| status.as_u16()),
            TransportError::Status { status } | TransportError::Decode { status, .. } => {
                Some(status.as_u16())
            }
        }
    }

    pub fn class(&self) -> ErrorClass {
        ErrorClass::classify(self.status())
    }
}

impl From<StatusCode> for TransportError {
    fn from(status: StatusCode) -> Self {
        TransportError::Status { status }
    }
}

/// What went wrong, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NoConnectivity,
    NotFound,
    Forbidden,
    ServerError,
    OtherHttpError { code: u16 },
}

impl ErrorClass {
    pub fn classify(status: Option<u16>) -> Self {
        match status {
            None => ErrorClass::NoConnectivity,
            Some(404) => ErrorClass::NotFound,
            Some(403) => ErrorClass::Forbidden,
            Some(500) => ErrorClass::ServerError,
            Some(code) => ErrorClass::OtherHttpError { code },
        }
    }

    pub fn message_key(self) -> MessageKey {
        match self {
            ErrorClass::NoConnectivity => MessageKey::CantTalkNetDown,
            ErrorClass::NotFound => MessageKey::ErrHttp404,
            ErrorClass::Forbidden => MessageKey::ErrHttp403,
            ErrorClass::ServerError => MessageKey::ErrHttp500,
            ErrorClass::OtherHttpError { .. } => MessageKey::ErrHttpOther,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_precedence() {
        assert_eq!(ErrorClass::classify(None), ErrorClass::NoConnectivity);
        assert_eq!(ErrorClass::classify(Some(404)), ErrorClass::NotFound);
        assert_eq!(ErrorClass::classify(Some(403)), ErrorClass::Forbidden);
        assert_eq!(ErrorClass::classify(Some(500)), ErrorClass::ServerError);
        assert_eq!(
            ErrorClass::classify(Some(502)),
            ErrorClass::OtherHttpError { code: 502 }
        );
    }

    #[test]
    fn test_status_of_http_failures() {
        let err = TransportError::from(StatusCode::FORBIDDEN);
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.class(), ErrorClass::Forbidden);

        let err = TransportError::Decode {
            status: StatusCode::OK,
            message: "expected a JSON object".to_string(),
        };
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.class(), ErrorClass::OtherHttpError { code: 200 });
    }
}
