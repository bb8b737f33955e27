//! Client error types.

/// Errors from the open-notify HTTP client.
///
/// `Network` and `Status` cover the transport class (connection failures and
/// non-success responses), `Format` the malformed-body class. Failures are
/// never retried; every error propagates to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection could not be established or the transfer failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status code.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// Response body is missing fields or holds malformed values.
    #[error("malformed response: {message}")]
    Format { message: String },
}

impl Error {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Error::Format {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Status { status: 503 };
        assert_eq!(err.to_string(), "request failed with status 503");

        let err = Error::format("no latitude");
        assert_eq!(err.to_string(), "malformed response: no latitude");
    }
}
