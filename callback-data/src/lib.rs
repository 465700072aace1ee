//! Callback-button data codec.
//!
//! A token is `<action>` or `<action>?<query>`, the query being form-urlencoded
//! key/value pairs. Decoding is total: anything unparseable yields no parameters.

use std::collections::BTreeMap;

use dbot_core::CallbackQuery;
use url::form_urlencoded;

/// Decoded callback parameters. Values are always strings.
pub type CallbackParams = BTreeMap<String, String>;

/// Builds a token from an action name and parameters. With no parameters the
/// token is the bare action, without a trailing `?`.
///
/// The action must not contain `?`.
pub fn pack<I, K, V>(action: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut empty = true;
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), value.as_ref());
        empty = false;
    }

    if empty {
        action.to_string()
    } else {
        format!("{}?{}", action, serializer.finish())
    }
}

/// Parameters carried by a pressed button's data.
pub fn unpack(query: &CallbackQuery) -> CallbackParams {
    query.data.as_deref().map(unpack_str).unwrap_or_default()
}

/// Parses everything after the first `?`. Later duplicates win; a pair without `=`
/// decodes to an empty value.
pub fn unpack_str(data: &str) -> CallbackParams {
    match data.split_once('?') {
        Some((_, query)) => form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect(),
        None => CallbackParams::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_without_params_is_bare_action() {
        assert_eq!(pack("menu", CallbackParams::new()), "menu");
        assert_eq!(pack("menu", None::<(&str, &str)>), "menu");
    }

    #[test]
    fn test_pack_encodes_reserved_characters() {
        let token = pack("search", [("q", "a b&c=d")]);
        assert_eq!(token, "search?q=a+b%26c%3Dd");
        assert_eq!(unpack_str(&token).get("q").map(String::as_str), Some("a b&c=d"));
    }

    #[test]
    fn test_unpack_without_query_is_empty() {
        assert!(unpack_str("menu").is_empty());
        assert!(unpack_str("").is_empty());
        assert!(unpack_str("menu?").is_empty());
    }

    #[test]
    fn test_unpack_tolerates_malformed_query() {
        let params = unpack_str("act?%zz=1&&=x&flag&k=%E2%82%AC");
        assert_eq!(params.get("%zz").map(String::as_str), Some("1"));
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
        assert_eq!(params.get("k").map(String::as_str), Some("€"));
        assert_eq!(params.get("").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_unpack_last_duplicate_wins() {
        let params = unpack_str("act?page=1&page=2");
        assert_eq!(params.len(), 1);
        assert_eq!(params["page"], "2");
    }
}
