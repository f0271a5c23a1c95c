use crate::error::{ApiError, Error};
use crate::request::OutboundArgs;
use serde_json::Value;

/// The only response format the API negotiates.
pub const JSON_FORMAT: &str = "json";

/// Decode a raw response body and classify it as success or API error.
///
/// The envelope check runs on every decoded response; error detection is
/// structural, independent of transport status codes.
pub fn parse_response(
    body: &str,
    format: &str,
    request_args: &OutboundArgs,
) -> Result<Value, Error> {
    if format != JSON_FORMAT {
        return Err(Error::unsupported_format(format));
    }

    let decoded: Value = serde_json::from_str(body).map_err(|source| Error::decode(source, body))?;
    check_error(&decoded, request_args)?;
    Ok(decoded)
}

/// A decoded object carrying an `error` key is an API-level failure no matter
/// what else it contains.
fn check_error(decoded: &Value, request_args: &OutboundArgs) -> Result<(), ApiError> {
    let Some(envelope) = decoded.as_object().and_then(|object| object.get("error")) else {
        return Ok(());
    };

    let code = envelope
        .get("error_type")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let message = envelope
        .get("error_msg")
        .and_then(Value::as_str)
        .unwrap_or("");

    Err(ApiError::new(code, message, request_args.clone()))
}
