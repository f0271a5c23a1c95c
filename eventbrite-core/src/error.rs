use crate::request::OutboundArgs;
use std::fmt;
use thiserror::Error;

/// Structured failure reported by the remote endpoint in a response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// The outbound arguments that produced the failing call.
    pub request_args: OutboundArgs,
}

impl ApiError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        request_args: OutboundArgs,
    ) -> Self {
        ApiError {
            code: code.into(),
            message: message.into(),
            request_args,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter had no value at call time. Raised before any
    /// network activity.
    #[error("missing required argument `{0}`")]
    MissingArgument(String),

    /// The method is not present in the catalog for the given namespace.
    #[error("unknown method `{method}` in namespace `{namespace}`")]
    UnknownMethod { namespace: String, method: String },

    /// The requested response format is not supported.
    #[error("unsupported response format `{0}`")]
    UnsupportedFormat(String),

    /// Network or connection failure. Never retried here.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON. Carries the raw body for diagnosis.
    #[error("failed to decode response body: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    /// The remote endpoint reported a structured error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Error::MissingArgument(name.into())
    }

    pub fn unknown_method(namespace: impl Into<String>, method: impl Into<String>) -> Self {
        Error::UnknownMethod {
            namespace: namespace.into(),
            method: method.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Error::UnsupportedFormat(format.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(message.into())
    }

    pub fn decode(source: serde_json::Error, body: impl Into<String>) -> Self {
        Error::Decode {
            source,
            body: body.into(),
        }
    }
}
