//! Parsing of `runapp://` invocation URIs.

use std::collections::HashMap;

use url::Url;

use crate::error::{Error, Result};

/// Scheme name registered with the OS.
pub const SCHEME: &str = "runapp";

/// Prefix every invocation argument must start with.
pub const SCHEME_PREFIX: &str = "runapp://";

/// Query parameters by name.
pub type QueryParams = HashMap<String, String>;

/// What a single invocation asks for: the app key and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub scheme: String,
    pub key: String,
    pub query_params: QueryParams,
}

impl InvocationRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }
}

/// Check whether an argument carries the `runapp://` prefix (scheme case ignored).
pub fn is_scheme_uri(raw: &str) -> bool {
    raw.get(..SCHEME_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SCHEME_PREFIX))
}

/// Parse a raw command-line argument into an invocation request.
///
/// The URI host becomes the key, case preserved. Query values are URL-decoded
/// once; for a repeated name only the first value is kept.
pub fn parse(raw: &str) -> Result<InvocationRequest> {
    if !is_scheme_uri(raw) {
        return Err(Error::WrongScheme(raw.to_string()));
    }

    let malformed = |message: String| Error::UriMalformed {
        uri: raw.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|e| malformed(e.to_string()))?;
    let key = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(malformed("missing app key".to_string())),
    };

    let mut query_params = QueryParams::new();
    for (name, value) in url.query_pairs() {
        query_params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }

    Ok(InvocationRequest {
        scheme: url.scheme().to_string(),
        key,
        query_params,
    })
}
