use crate::args::ArgValue;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// How a parameter's value serializes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Text,
    /// Sequence or mapping, JSON-encoded before transmission.
    Structured,
}

/// Whether a parameter must be supplied at call time.
///
/// A parameter is either required, omitted from the outbound mapping entirely
/// when unsupplied, or substituted with a default. Optional-with-default is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Requirement {
    Required,
    Optional,
    Defaulted(ArgValue),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ValueKind,
    pub requirement: Requirement,
}

impl ParameterSpec {
    pub fn required(name: impl Into<String>, kind: ValueKind) -> Self {
        ParameterSpec {
            name: name.into(),
            kind,
            requirement: Requirement::Required,
        }
    }

    pub fn optional(name: impl Into<String>, kind: ValueKind) -> Self {
        ParameterSpec {
            name: name.into(),
            kind,
            requirement: Requirement::Optional,
        }
    }

    pub fn defaulted(name: impl Into<String>, kind: ValueKind, value: impl Into<ArgValue>) -> Self {
        ParameterSpec {
            name: name.into(),
            kind,
            requirement: Requirement::Defaulted(value.into()),
        }
    }
}

/// One remote operation: its wire name and ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Sent to the server as the literal method string.
    pub name: String,
    /// Order defines both argument order and outbound field order.
    pub params: Vec<ParameterSpec>,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>, params: Vec<ParameterSpec>) -> Self {
        MethodSpec {
            name: name.into(),
            params,
        }
    }
}

/// The static table of namespaces and methods that drives binding generation.
///
/// Methods are keyed by name within their namespace, so names are unique by
/// construction; inserting a duplicate replaces the earlier entry. The catalog
/// is never mutated after the bindings are generated from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodCatalog {
    namespaces: IndexMap<String, IndexMap<String, MethodSpec>>,
}

impl MethodCatalog {
    pub fn new() -> Self {
        MethodCatalog::default()
    }

    pub fn insert(&mut self, namespace: impl Into<String>, method: MethodSpec) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(method.name.clone(), method);
    }

    pub fn get(&self, namespace: &str, method: &str) -> Option<&MethodSpec> {
        self.namespaces.get(namespace).and_then(|m| m.get(method))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    pub fn methods(&self, namespace: &str) -> impl Iterator<Item = &MethodSpec> {
        self.namespaces
            .get(namespace)
            .into_iter()
            .flat_map(|methods| methods.values())
    }

    /// The catalog of supported Eventbrite API calls.
    ///
    /// Built on first use and shared for the life of the process.
    pub fn builtin() -> &'static MethodCatalog {
        static BUILTIN: OnceLock<MethodCatalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin_catalog)
    }
}

fn builtin_catalog() -> MethodCatalog {
    let mut catalog = MethodCatalog::new();
    catalog.insert(
        "events",
        MethodSpec::new(
            "event_get",
            vec![ParameterSpec::required("id", ValueKind::Integer)],
        ),
    );
    catalog.insert(
        "events",
        MethodSpec::new(
            "event_list_attendees",
            vec![ParameterSpec::required("id", ValueKind::Integer)],
        ),
    );
    catalog
}
