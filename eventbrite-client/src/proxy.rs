use crate::client::{CallOptions, Dispatch, Inner};
use eventbrite_core::{CallArgs, Error};
use std::sync::Arc;

/// Groups one namespace of API calls and forwards every invocation to the
/// owning client's dispatch entry point.
#[derive(Debug)]
pub struct NamespaceProxy {
    inner: Arc<Inner>,
    namespace: String,
    /// Product-qualified name prefixed onto every method, e.g. `eventbrite.events`.
    qualified: String,
}

impl NamespaceProxy {
    pub(crate) fn new(inner: Arc<Inner>, namespace: &str) -> Self {
        NamespaceProxy {
            qualified: format!("eventbrite.{namespace}"),
            namespace: namespace.to_string(),
            inner,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    /// Invoke with default options (insecure endpoint, JSON format).
    pub fn invoke(
        &self,
        method: Option<&str>,
        args: CallArgs,
    ) -> Result<Dispatch<'_, Self>, Error> {
        self.invoke_with(method, args, &CallOptions::default())
    }

    /// Invoke a catalog method in this namespace.
    ///
    /// With no method this returns the proxy itself. Otherwise the method's
    /// binding assembles and validates the arguments, and the call goes to
    /// the client's dispatch entry point under the qualified method name.
    pub fn invoke_with(
        &self,
        method: Option<&str>,
        args: CallArgs,
        options: &CallOptions,
    ) -> Result<Dispatch<'_, Self>, Error> {
        let Some(method) = method else {
            return Ok(Dispatch::Target(self));
        };

        let fields = self.inner.bindings.assemble(&self.namespace, method, args)?;
        let qualified_method = format!("{}.{}", self.qualified, method);
        let payload = self
            .inner
            .dispatch_fields(&qualified_method, fields, options)?;
        Ok(Dispatch::Payload(payload))
    }
}
