use crate::proxy::NamespaceProxy;
use crate::transport::HttpTransport;
use eventbrite_core::{
    build_query_args, parse_response, Bindings, CallArgs, Error, MethodCatalog, JSON_FORMAT,
};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Default endpoint for API requests.
pub const EVENTBRITE_URL: &str = "http://www.eventbrite.com/";

/// Default endpoint for secure API requests.
pub const EVENTBRITE_SECURE_URL: &str = "https://www.eventbrite.com/";

/// Client configuration. Read on every dispatched call, never mutated after
/// the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application key, attached to every call.
    pub app_key: String,
    /// User key, attached whenever present (even when empty).
    pub user_key: Option<String>,
    pub base_url: String,
    pub secure_base_url: String,
    /// Forward proxy address, e.g. `http://10.0.0.1:3128`.
    pub proxy: Option<String>,
}

impl ClientConfig {
    pub fn new(app_key: impl Into<String>) -> Self {
        ClientConfig {
            app_key: app_key.into(),
            user_key: None,
            base_url: EVENTBRITE_URL.to_string(),
            secure_base_url: EVENTBRITE_SECURE_URL.to_string(),
            proxy: None,
        }
    }
}

/// Per-call options for `dispatch`.
#[derive(Debug, Clone)]
pub struct CallOptions {
    /// Route the call to the secure endpoint.
    pub secure: bool,
    /// Response format; only `json` is supported.
    pub format: String,
}

impl Default for CallOptions {
    fn default() -> Self {
        CallOptions {
            secure: false,
            format: JSON_FORMAT.to_string(),
        }
    }
}

/// Outcome of a dispatch: the decoded payload, or the dispatch target itself
/// when no method was named (template-style access).
#[derive(Debug)]
pub enum Dispatch<'a, T> {
    Target(&'a T),
    Payload(Value),
}

impl<'a, T> Dispatch<'a, T> {
    pub fn into_payload(self) -> Option<Value> {
        match self {
            Dispatch::Payload(value) => Some(value),
            Dispatch::Target(_) => None,
        }
    }

    pub fn target(&self) -> Option<&'a T> {
        match self {
            Dispatch::Target(target) => Some(*target),
            Dispatch::Payload(_) => None,
        }
    }
}

/// State shared between the client and its namespace proxies.
#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) config: ClientConfig,
    pub(crate) transport: HttpTransport,
    pub(crate) bindings: Bindings,
}

impl Inner {
    /// Compose request building, transport and response parsing for one call.
    pub(crate) fn dispatch_fields(
        &self,
        method: &str,
        fields: CallArgs,
        options: &CallOptions,
    ) -> Result<Value, Error> {
        if options.format != JSON_FORMAT {
            return Err(Error::unsupported_format(options.format.as_str()));
        }

        debug!(method, arguments = fields.len(), "dispatching method");

        let outbound = build_query_args(
            &fields,
            &self.config.app_key,
            self.config.user_key.as_deref(),
        );

        let base_url = if options.secure {
            &self.config.secure_base_url
        } else {
            &self.config.base_url
        };

        let body = self
            .transport
            .fetch(base_url, &options.format, method, &outbound)?;
        parse_response(&body, &options.format, &outbound)
    }
}

/// Provides access to the Eventbrite API.
///
/// Owns the immutable configuration and one [`NamespaceProxy`] per catalog
/// namespace; every call funnels through [`Client::dispatch_with`].
#[derive(Debug)]
pub struct Client {
    inner: Arc<Inner>,
    proxies: IndexMap<String, NamespaceProxy>,
}

impl Client {
    /// Construct a client over the built-in method catalog.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_catalog(config, MethodCatalog::builtin().clone())
    }

    /// Construct against a custom catalog. Bindings and proxies are generated
    /// here, once; nothing is re-derived per call.
    pub fn with_catalog(config: ClientConfig, catalog: MethodCatalog) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.proxy.as_deref())?;
        let bindings = Bindings::generate(catalog);
        let inner = Arc::new(Inner {
            config,
            transport,
            bindings,
        });

        let proxies = inner
            .bindings
            .catalog()
            .namespaces()
            .map(|namespace| {
                (
                    namespace.to_string(),
                    NamespaceProxy::new(Arc::clone(&inner), namespace),
                )
            })
            .collect();

        Ok(Client { inner, proxies })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The proxy for one catalog namespace, if it exists.
    pub fn namespace(&self, name: &str) -> Option<&NamespaceProxy> {
        self.proxies.get(name)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceProxy> {
        self.proxies.values()
    }

    /// Dispatch with default options (insecure endpoint, JSON format).
    pub fn dispatch(
        &self,
        method: Option<&str>,
        args: CallArgs,
    ) -> Result<Dispatch<'_, Self>, Error> {
        self.dispatch_with(method, args, &CallOptions::default())
    }

    /// Make a call to the API's REST endpoint.
    ///
    /// With no method this returns the client itself. Arguments are sent as
    /// given; catalog validation happens in the namespace proxies before they
    /// forward here.
    pub fn dispatch_with(
        &self,
        method: Option<&str>,
        args: CallArgs,
        options: &CallOptions,
    ) -> Result<Dispatch<'_, Self>, Error> {
        let Some(method) = method else {
            return Ok(Dispatch::Target(self));
        };

        let payload = self.inner.dispatch_fields(method, args, options)?;
        Ok(Dispatch::Payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        Client::new(ClientConfig::new("APPKEY")).unwrap()
    }

    #[test]
    fn test_construction_creates_builtin_proxies() {
        let client = test_client();

        let proxy = client.namespace("events").unwrap();
        assert_eq!(proxy.namespace(), "events");
        assert_eq!(proxy.qualified_name(), "eventbrite.events");

        assert!(client.namespace("venues").is_none());
        assert_eq!(client.namespaces().count(), 1);
    }

    #[test]
    fn test_config_defaults() {
        let client = test_client();
        let config = client.config();

        assert_eq!(config.app_key, "APPKEY");
        assert_eq!(config.user_key, None);
        assert_eq!(config.base_url, EVENTBRITE_URL);
        assert_eq!(config.secure_base_url, EVENTBRITE_SECURE_URL);
    }

    #[test]
    fn test_dispatch_without_method_returns_client() {
        let client = test_client();
        let reply = client.dispatch(None, CallArgs::new()).unwrap();

        match reply {
            Dispatch::Target(target) => assert!(std::ptr::eq(target, &client)),
            Dispatch::Payload(_) => panic!("expected the client itself"),
        }
    }

    #[test]
    fn test_invoke_without_method_returns_proxy() {
        let client = test_client();
        let proxy = client.namespace("events").unwrap();

        let reply = proxy.invoke(None, CallArgs::new()).unwrap();
        match reply.target() {
            Some(target) => assert!(std::ptr::eq(target, proxy)),
            None => panic!("expected the proxy itself"),
        }
    }

    #[test]
    fn test_unsupported_format_fails_before_any_network() {
        let client = test_client();
        let options = CallOptions {
            secure: false,
            format: "xml".to_string(),
        };

        let err = client
            .dispatch_with(Some("event_get"), CallArgs::new(), &options)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_argument_fails_before_any_network() {
        let client = test_client();
        let proxy = client.namespace("events").unwrap();

        let err = proxy
            .invoke(Some("event_get"), CallArgs::new())
            .unwrap_err();
        match err {
            Error::MissingArgument(name) => assert_eq!(name, "id"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_method_fails_before_any_network() {
        let client = test_client();
        let proxy = client.namespace("events").unwrap();

        let err = proxy
            .invoke(Some("event_delete"), CallArgs::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownMethod { .. }));
    }
}
