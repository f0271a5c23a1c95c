pub mod client;
pub mod proxy;
pub mod transport;

pub use client::{
    CallOptions, Client, ClientConfig, Dispatch, EVENTBRITE_SECURE_URL, EVENTBRITE_URL,
};
pub use proxy::NamespaceProxy;
pub use transport::HttpTransport;

// Re-export the core types callers need to build and inspect calls.
pub use eventbrite_core::{ApiError, ArgValue, CallArgs, Error, MethodCatalog, OutboundArgs};
