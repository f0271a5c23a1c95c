//! Catalog-driven request building and response classification for the
//! Eventbrite HTTP/JSON API. Everything here is pure data and logic; the
//! network lives in `eventbrite-client`.

pub mod args;
pub mod binding;
pub mod catalog;
pub mod error;
pub mod request;
pub mod response;

pub use args::{ArgValue, CallArgs};
pub use binding::Bindings;
pub use catalog::{MethodCatalog, MethodSpec, ParameterSpec, Requirement, ValueKind};
pub use error::{ApiError, Error};
pub use request::{build_query_args, OutboundArgs, APP_KEY_FIELD, USER_KEY_FIELD};
pub use response::{parse_response, JSON_FORMAT};
