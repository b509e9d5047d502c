//! Sub-property parsing, validation, and flattening.
//!
//! A parameter's `properties` blob groups values that belong together: a
//! database engine and its version have a hard relationship, so rather
//! than modelling them as independent dimensions (which would multiply the
//! matrix incorrectly), the `DATABASE` value carries
//! `"engine=mysql\nversion=5.7"` as properties. After a combination
//! selects that value, each pair is promoted to a synthetic top-level
//! parameter of the combination — outside the Cartesian product.
//!
//! The blob is classic properties-file text: one `key=value` (or
//! `key: value`) pair per line, `#`/`!` comment lines ignored. Pairs whose
//! key or value is empty or fails the token pattern are skipped, never
//! fatal; every skip is reported as a [`PropertyWarning`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::params::Parameter;

/// Allowed characters for property keys and values, full-string match.
static VALID_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w,\-.@:]*$").unwrap()
});

/// A property pair skipped during expansion. Skips are non-fatal and never
/// affect sibling pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertyWarning {
    /// A non-comment line had no `=` or `:` separator.
    MissingSeparator {
        /// The offending line, as written
        line: String,
    },
    /// Key or value was empty or contained disallowed characters.
    InvalidPair {
        /// Key as parsed
        key: String,
        /// Value as parsed
        value: String,
    },
}

impl fmt::Display for PropertyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyWarning::MissingSeparator { line } => {
                write!(f, "property line '{line}' has no key=value separator")
            }
            PropertyWarning::InvalidPair { key, value } => {
                write!(f, "property pair '{key}={value}' failed validation")
            }
        }
    }
}

/// Outcome of expanding one parameter's properties blob.
#[derive(Debug, Default)]
pub struct Expansion {
    /// Synthetic parameters, one per valid pair.
    pub parameters: Vec<Parameter>,
    /// One warning per skipped pair or malformed line.
    pub warnings: Vec<PropertyWarning>,
}

/// Check a key or value against the allowed-token pattern.
#[must_use]
pub fn is_valid_token(token: &str) -> bool {
    VALID_TOKEN.is_match(token)
}

/// Parse a properties blob into validated `(key, value)` pairs.
///
/// Returns the pairs that survive validation, and a warning for each pair
/// or line that did not. An empty blob yields nothing; blank and comment
/// lines are skipped silently.
#[must_use]
pub fn parse(blob: &str) -> (Vec<(String, String)>, Vec<PropertyWarning>) {
    let mut pairs = Vec::new();
    let mut warnings = Vec::new();

    for line in blob.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some(split) = line.find(['=', ':']) else {
            warnings.push(PropertyWarning::MissingSeparator {
                line: line.to_string(),
            });
            continue;
        };
        let key = line[..split].trim();
        let value = line[split + 1..].trim();
        if key.is_empty() || value.is_empty() || !is_valid_token(key) || !is_valid_token(value) {
            warnings.push(PropertyWarning::InvalidPair {
                key: key.to_string(),
                value: value.to_string(),
            });
            continue;
        }
        pairs.push((key.to_string(), value.to_string()));
    }

    (pairs, warnings)
}

/// Expand one parameter's sub-properties into synthetic parameters.
///
/// Each valid `(key, value)` pair becomes a parameter with the key as its
/// dimension and the value as its name, carrying the original blob
/// unparsed and marked ready. The caller attaches these to the owning
/// combination; they never join a value set or the product itself.
#[must_use]
pub fn expand(parameter: &Parameter) -> Expansion {
    let (pairs, warnings) = parse(parameter.properties());
    let parameters = pairs
        .into_iter()
        .map(|(key, value)| {
            Parameter::new(key, value).with_properties(parameter.properties())
        })
        .collect();
    Expansion {
        parameters,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let (pairs, warnings) = parse("engine=mysql\nversion=5.7");
        assert_eq!(
            pairs,
            vec![
                ("engine".to_string(), "mysql".to_string()),
                ("version".to_string(), "5.7".to_string()),
            ]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_colon_separator_and_comments() {
        let (pairs, warnings) = parse("# database engine\nengine: mysql\n! note\n\n");
        assert_eq!(pairs, vec![("engine".to_string(), "mysql".to_string())]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_missing_separator_warns() {
        let (pairs, warnings) = parse("engine mysql");
        assert!(pairs.is_empty());
        assert_eq!(
            warnings,
            vec![PropertyWarning::MissingSeparator {
                line: "engine mysql".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_empty_value_dropped() {
        let (pairs, warnings) = parse("key=");
        assert!(pairs.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_parse_invalid_key_does_not_affect_siblings() {
        let (pairs, warnings) = parse("bad!key=val\nversion=5.7");
        assert_eq!(pairs, vec![("version".to_string(), "5.7".to_string())]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_parse_empty_blob() {
        let (pairs, warnings) = parse("");
        assert!(pairs.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_token_charset() {
        assert!(is_valid_token("mysql-5.7"));
        assert!(is_valid_token("a@b:c,d_e"));
        assert!(!is_valid_token("bad!key"));
        assert!(!is_valid_token("has space"));
    }

    #[test]
    fn test_expand_builds_synthetic_parameters() {
        let db = Parameter::new("DATABASE", "MySQL")
            .with_properties("engine=mysql\nversion=5.7");
        let expansion = expand(&db);

        assert_eq!(expansion.parameters.len(), 2);
        assert!(expansion.warnings.is_empty());

        let engine = &expansion.parameters[0];
        assert_eq!(engine.dimension().as_str(), "engine");
        assert_eq!(engine.name(), "mysql");
        // Synthetic parameters keep the original blob and are ready.
        assert_eq!(engine.properties(), db.properties());
        assert!(engine.is_ready());
    }

    #[test]
    fn test_expand_no_properties() {
        let jdk = Parameter::new("JDK", "JDK8");
        let expansion = expand(&jdk);
        assert!(expansion.parameters.is_empty());
        assert!(expansion.warnings.is_empty());
    }
}
