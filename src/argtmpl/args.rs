//! # Template Arguments
//!
//! Raw arguments arrive from the command line as `key=value` or as a bare `key`.
//! A bare key is boolean-flag shorthand and binds to [`FLAG_VALUE`].
//!
//! Both sides of the separator are trimmed independently, so `" a = b "` binds
//! `a` to `b`. A raw argument with more than one `=` is malformed, and so is one
//! whose key is empty after trimming. An empty value (`key=`) is allowed.
//!
//! Keys are unique: the first occurrence wins and any later occurrence of the
//! same key, in either form, is an error rather than an overwrite.

use crate::error::{ArgtmplError, Result};
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

/// Value bound to a key given without `=`.
pub const FLAG_VALUE: &str = "true";

const SEPARATOR: char = '=';

/// Flat, read-only mapping from argument name to value.
///
/// Serializes as a plain map, so every key is a top-level template variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arguments {
    values: BTreeMap<String, String>,
}

impl Arguments {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        match self.values.entry(key.to_string()) {
            btree_map::Entry::Occupied(entry) => {
                Err(ArgtmplError::DuplicateArgument(entry.key().clone()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value.to_string());
                Ok(())
            }
        }
    }
}

/// Builds the argument mapping from raw `key=value` / `key` strings, in order.
pub fn parse_args<I, S>(raw: I) -> Result<Arguments>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut arguments = Arguments::default();
    for arg in raw {
        let (key, value) = split_argument(arg.as_ref())?;
        arguments.insert(key, value)?;
        debug!(key, value, "parsed argument");
    }
    Ok(arguments)
}

fn split_argument(raw: &str) -> Result<(&str, &str)> {
    let (key, value) = match raw.split_once(SEPARATOR) {
        None => (raw.trim(), FLAG_VALUE),
        Some((_, rest)) if rest.contains(SEPARATOR) => {
            return Err(ArgtmplError::InvalidArgument(raw.to_string()))
        }
        Some((key, value)) => (key.trim(), value.trim()),
    };

    if key.is_empty() {
        return Err(ArgtmplError::InvalidArgument(raw.to_string()));
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value() {
        let args = parse_args(["a=b"]).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("a"), Some("b"));
    }

    #[test]
    fn test_bare_key_is_flag() {
        let args = parse_args(["flag"]).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("flag"), Some("true"));
    }

    #[test]
    fn test_whitespace_trimmed_around_separator() {
        let args = parse_args([" a = b "]).unwrap();
        assert_eq!(args.get("a"), Some("b"));
        assert!(!args.contains_key(" a "));
    }

    #[test]
    fn test_bare_key_trimmed() {
        let args = parse_args(["  debug\t"]).unwrap();
        assert_eq!(args.get("debug"), Some("true"));
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let args = parse_args(["greeting = hello world "]).unwrap();
        assert_eq!(args.get("greeting"), Some("hello world"));
    }

    #[test]
    fn test_one_entry_per_distinct_key() {
        let raw = ["name=world", "count = 3", "verbose", " empty ="];
        let args = parse_args(raw).unwrap();

        assert_eq!(args.len(), raw.len());
        assert_eq!(args.get("name"), Some("world"));
        assert_eq!(args.get("count"), Some("3"));
        assert_eq!(args.get("verbose"), Some("true"));
        assert_eq!(args.get("empty"), Some(""));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = parse_args(["a=b", "a=c"]).unwrap_err();
        match err {
            ArgtmplError::DuplicateArgument(key) => assert_eq!(key, "a"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_key_across_forms() {
        let err = parse_args(["flag", " flag = false"]).unwrap_err();
        assert!(matches!(err, ArgtmplError::DuplicateArgument(ref k) if k == "flag"));

        let err = parse_args(["flag=false", "flag"]).unwrap_err();
        assert!(matches!(err, ArgtmplError::DuplicateArgument(ref k) if k == "flag"));
    }

    #[test]
    fn test_duplicate_detected_after_trimming() {
        let err = parse_args(["a=1", " a =2"]).unwrap_err();
        assert_eq!(err.to_string(), "argument a is already defined");
    }

    #[test]
    fn test_more_than_one_separator_rejected() {
        let err = parse_args(["a=b=c"]).unwrap_err();
        assert!(matches!(err, ArgtmplError::InvalidArgument(ref raw) if raw == "a=b=c"));
        assert!(err.to_string().contains("foo=bar"));

        assert!(parse_args(["a==b"]).is_err());
    }

    #[test]
    fn test_empty_key_rejected() {
        for raw in ["=value", " = value", "", "   "] {
            let err = parse_args([raw]).unwrap_err();
            assert!(
                matches!(err, ArgtmplError::InvalidArgument(_)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_value_allowed() {
        let args = parse_args(["key="]).unwrap();
        assert_eq!(args.get("key"), Some(""));
    }

    #[test]
    fn test_first_error_stops_parsing() {
        let err = parse_args(["a=1", "b=1=2", "a=2"]).unwrap_err();
        assert!(matches!(err, ArgtmplError::InvalidArgument(_)));
    }

    #[test]
    fn test_no_arguments() {
        let args = parse_args(Vec::<String>::new()).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_iter_is_sorted_by_key() {
        let args = parse_args(["b=2", "c=3", "a=1"]).unwrap();
        let keys: Vec<_> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let args = parse_args(["name=world", "flag"]).unwrap();
        let value = minijinja::Value::from_serialize(&args);
        assert_eq!(value.get_attr("name").unwrap().to_string(), "world");
        assert_eq!(value.get_attr("flag").unwrap().to_string(), "true");
    }
}
