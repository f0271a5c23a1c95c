use crate::args::{ArgValue, CallArgs};
use crate::catalog::{MethodCatalog, MethodSpec, ParameterSpec, Requirement, ValueKind};
use crate::error::Error;
use serde_json::Value;

/// Operation registry generated from a [`MethodCatalog`].
///
/// This replaces per-method generated callables with one pre-validated table
/// consulted by a single generic assembly routine. Generated once when the
/// client is constructed, immutable afterwards, so every lookup observes the
/// same bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    catalog: MethodCatalog,
}

impl Bindings {
    /// Consume the catalog and produce the registry.
    pub fn generate(catalog: MethodCatalog) -> Self {
        Bindings { catalog }
    }

    pub fn catalog(&self) -> &MethodCatalog {
        &self.catalog
    }

    pub fn lookup(&self, namespace: &str, method: &str) -> Result<&MethodSpec, Error> {
        self.catalog
            .get(namespace, method)
            .ok_or_else(|| Error::unknown_method(namespace, method))
    }

    /// Turn call-time arguments into the outbound field mapping for one method.
    ///
    /// Validates required parameters, substitutes defaults, drops unsupplied
    /// optional fields entirely, and JSON-encodes structured sequence/mapping
    /// values. Fails before any network activity.
    pub fn assemble(
        &self,
        namespace: &str,
        method: &str,
        args: CallArgs,
    ) -> Result<CallArgs, Error> {
        let spec = self.lookup(namespace, method)?;
        assemble_fields(spec, args)
    }
}

fn assemble_fields(spec: &MethodSpec, mut supplied: CallArgs) -> Result<CallArgs, Error> {
    let mut fields = CallArgs::new();

    for param in &spec.params {
        match supplied.take(&param.name) {
            Some(value) => fields.insert(param.name.as_str(), encode_param(param, value)),
            None => match &param.requirement {
                Requirement::Required => {
                    return Err(Error::missing_argument(param.name.as_str()))
                }
                Requirement::Optional => {}
                Requirement::Defaulted(default) => {
                    fields.insert(param.name.as_str(), encode_param(param, default.clone()));
                }
            },
        }
    }

    // Arguments the catalog does not name pass through after the declared
    // fields, same as calling dispatch directly.
    for (name, value) in supplied {
        fields.insert(name, value);
    }

    Ok(fields)
}

/// Only sequences and mappings are JSON-encoded for a structured parameter;
/// scalars pass through so callers may pre-encode their own payloads.
fn encode_param(param: &ParameterSpec, value: ArgValue) -> ArgValue {
    if param.kind != ValueKind::Structured {
        return value;
    }

    let composite = matches!(
        &value,
        ArgValue::List(_) | ArgValue::Structured(Value::Array(_) | Value::Object(_))
    );
    if composite {
        ArgValue::Text(value.to_json().to_string())
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_bindings() -> Bindings {
        let mut catalog = MethodCatalog::new();
        catalog.insert(
            "events",
            MethodSpec::new(
                "event_search",
                vec![
                    ParameterSpec::required("keywords", ValueKind::Text),
                    ParameterSpec::optional("city", ValueKind::Text),
                    ParameterSpec::defaulted("max", ValueKind::Integer, 10),
                    ParameterSpec::optional("filters", ValueKind::Structured),
                ],
            ),
        );
        Bindings::generate(catalog)
    }

    #[test]
    fn test_missing_required_argument() {
        let bindings = sample_bindings();
        let err = bindings
            .assemble("events", "event_search", CallArgs::new())
            .unwrap_err();

        match err {
            Error::MissingArgument(name) => assert_eq!(name, "keywords"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_method() {
        let bindings = sample_bindings();
        let err = bindings
            .assemble("events", "event_delete", CallArgs::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownMethod { .. }));
    }

    #[test]
    fn test_optional_field_is_absent_not_null() {
        let bindings = sample_bindings();
        let fields = bindings
            .assemble(
                "events",
                "event_search",
                CallArgs::new().arg("keywords", "rust"),
            )
            .unwrap();

        // `city` must not appear at all, while the default fills in `max`.
        assert!(fields.get("city").is_none());
        assert_eq!(fields.get("max"), Some(&ArgValue::Int(10)));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_supplied_value_overrides_default() {
        let bindings = sample_bindings();
        let fields = bindings
            .assemble(
                "events",
                "event_search",
                CallArgs::new().arg("keywords", "rust").arg("max", 50),
            )
            .unwrap();
        assert_eq!(fields.get("max"), Some(&ArgValue::Int(50)));
    }

    #[test]
    fn test_structured_values_are_json_encoded() {
        let bindings = sample_bindings();
        let fields = bindings
            .assemble(
                "events",
                "event_search",
                CallArgs::new()
                    .arg("keywords", "rust")
                    .arg("filters", json!({"category": "tech"})),
            )
            .unwrap();

        assert_eq!(
            fields.get("filters"),
            Some(&ArgValue::Text(r#"{"category":"tech"}"#.to_string()))
        );
    }

    #[test]
    fn test_structured_scalar_passes_through_unencoded() {
        let bindings = sample_bindings();
        let fields = bindings
            .assemble(
                "events",
                "event_search",
                CallArgs::new()
                    .arg("keywords", "rust")
                    .arg("filters", "already-encoded"),
            )
            .unwrap();
        assert_eq!(
            fields.get("filters"),
            Some(&ArgValue::Text("already-encoded".to_string()))
        );
    }

    #[test]
    fn test_fields_follow_parameter_order() {
        let bindings = sample_bindings();
        let fields = bindings
            .assemble(
                "events",
                "event_search",
                CallArgs::new()
                    .arg("city", "Lisbon")
                    .arg("keywords", "rust")
                    .arg("extra", 1),
            )
            .unwrap();

        let names: Vec<&str> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["keywords", "city", "max", "extra"]);
    }

    #[test]
    fn test_regenerated_bindings_behave_identically() {
        let first = sample_bindings();
        let second = sample_bindings();
        assert_eq!(first, second);

        let args = || CallArgs::new().arg("keywords", "rust");
        assert_eq!(
            first.assemble("events", "event_search", args()).unwrap(),
            second.assemble("events", "event_search", args()).unwrap()
        );
    }
}
