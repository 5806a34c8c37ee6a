use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Query values keep the separators Google APIs expect inside values (|,:)
// plus the RFC 3986 unreserved marks.
const PARAM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'|')
    .remove(b',')
    .remove(b':');

// Strict set for values where separators must not survive raw, e.g. the
// encoded-polyline alphabet which includes '|' and '\'.
const STRICT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes a single query parameter value for a Google Maps URL.
pub fn encode_param(value: &str) -> String {
    utf8_percent_encode(value, PARAM_SET).to_string()
}

/// Fully encodes a value, leaving only unreserved characters literal.
pub fn encode_strict(value: &str) -> String {
    utf8_percent_encode(value, STRICT_SET).to_string()
}

/// Joins pre-encoded (key, value) pairs into a query string. Values must
/// already be encoded exactly once.
pub fn join_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}
