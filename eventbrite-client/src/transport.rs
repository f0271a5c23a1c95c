use eventbrite_core::{Error, OutboundArgs};
use tracing::{debug, trace};

/// Performs the single blocking HTTP exchange for a call, optionally routed
/// through a forward proxy.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(proxy: Option<&str>) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder();

        if let Some(address) = proxy {
            let proxy = reqwest::Proxy::all(address)
                .map_err(|err| Error::transport(format!("invalid proxy `{address}`: {err}")))?;
            builder = builder.proxy(proxy);
        }

        let http = builder
            .build()
            .map_err(|err| Error::transport(format!("failed to build HTTP client: {err}")))?;

        Ok(HttpTransport { http })
    }

    /// Fetch `<base>/<format>/<method>?<urlencoded args>` and return the raw
    /// response body.
    ///
    /// The calling thread blocks until the endpoint responds or the
    /// connection fails; failures propagate without retry.
    pub fn fetch(
        &self,
        base_url: &str,
        format: &str,
        method: &str,
        args: &OutboundArgs,
    ) -> Result<String, Error> {
        let url = format!("{}/{}/{}", base_url.trim_end_matches('/'), format, method);
        debug!(%url, "dispatching API request");

        let response = self
            .http
            .get(&url)
            .query(args)
            .send()
            .map_err(|err| Error::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| Error::transport(err.to_string()))?;

        if !status.is_success() {
            return Err(Error::transport(format!("HTTP {status}: {body}")));
        }

        trace!(%body, "raw response");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_proxy_address() {
        let err = HttpTransport::new(Some("http://")).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        let transport = HttpTransport::new(None).unwrap();
        // Port 1 is never listening locally.
        let err = transport
            .fetch("http://127.0.0.1:1/", "json", "event_get", &OutboundArgs::new())
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
