//! Whitelisted field specs and polarity markers.
//!
//! A whitelist maps each public (caller-visible) field name to one or more
//! underlying field tokens. Each token may carry a polarity marker:
//!
//! | token      | effective direction for requested `D` |
//! |------------|----------------------------------------|
//! | `--field`  | always desc                            |
//! | `++field`  | always asc                             |
//! | `-field`   | inverse of `D`                         |
//! | `+field`   | `D`                                    |
//! | `field`    | `D`                                    |

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// No marker or `+`.
    Follow,
    /// `-`
    Invert,
    /// `++`
    ForceAsc,
    /// `--`
    ForceDesc,
}

impl Polarity {
    /// Effective direction of a token with this polarity.
    pub fn resolve(self, requested: Direction) -> Direction {
        match self {
            Polarity::Follow => requested,
            Polarity::Invert => requested.inverse(),
            Polarity::ForceAsc => Direction::Asc,
            Polarity::ForceDesc => Direction::Desc,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Polarity::Follow => "",
            Polarity::Invert => "-",
            Polarity::ForceAsc => "++",
            Polarity::ForceDesc => "--",
        }
    }
}

/// One underlying field reference with its polarity marker stripped off.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldToken {
    pub field: String,
    pub polarity: Polarity,
}

impl FieldToken {
    pub fn parse(token: &str) -> Result<FieldToken> {
        let (polarity, field) = if let Some(rest) = token.strip_prefix("--") {
            (Polarity::ForceDesc, rest)
        } else if let Some(rest) = token.strip_prefix("++") {
            (Polarity::ForceAsc, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (Polarity::Invert, rest)
        } else if let Some(rest) = token.strip_prefix('+') {
            (Polarity::Follow, rest)
        } else {
            (Polarity::Follow, token)
        };

        if field.is_empty() {
            return Err(Error::InvalidFieldToken(token.to_string()));
        }

        Ok(FieldToken {
            field: field.to_string(),
            polarity,
        })
    }

    pub fn resolve(&self, requested: Direction) -> Direction {
        self.polarity.resolve(requested)
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.polarity.marker(), self.field)
    }
}

/// A public field name and the underlying tokens it sorts by, in key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldSpec", into = "RawFieldSpec")]
pub struct FieldSpec {
    pub name: String,
    pub tokens: Vec<FieldToken>,
}

impl FieldSpec {
    pub fn new<I, S>(name: impl Into<String>, tokens: I) -> Result<FieldSpec>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let tokens = tokens
            .into_iter()
            .map(|t| FieldToken::parse(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if tokens.is_empty() {
            return Err(Error::EmptyFieldSpec(name));
        }
        Ok(FieldSpec { name, tokens })
    }

    /// A public name that sorts by the underlying field of the same name.
    pub fn plain(name: impl Into<String>) -> Result<FieldSpec> {
        let name = name.into();
        let token = name.clone();
        FieldSpec::new(name, [token])
    }
}

impl TryFrom<&str> for FieldSpec {
    type Error = Error;

    fn try_from(name: &str) -> Result<FieldSpec> {
        FieldSpec::plain(name)
    }
}

impl TryFrom<(&str, &str)> for FieldSpec {
    type Error = Error;

    fn try_from((name, token): (&str, &str)) -> Result<FieldSpec> {
        FieldSpec::new(name, [token])
    }
}

impl<const N: usize> TryFrom<(&str, [&str; N])> for FieldSpec {
    type Error = Error;

    fn try_from((name, tokens): (&str, [&str; N])) -> Result<FieldSpec> {
        FieldSpec::new(name, tokens)
    }
}

/// Every shape a field spec may take in a config file.
///
/// ```yaml
/// fields:
///   - title                        # sorts by `title`
///   - [author, author__last_name]  # one underlying token
///   - [date, [-published, ++id]]   # several tokens
///   - { name: rank, fields: [--score] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawFieldSpec {
    Name(String),
    Pair(String, String),
    Multi(String, Vec<String>),
    Map { name: String, fields: Vec<String> },
}

impl TryFrom<RawFieldSpec> for FieldSpec {
    type Error = Error;

    fn try_from(raw: RawFieldSpec) -> Result<FieldSpec> {
        match raw {
            RawFieldSpec::Name(name) => FieldSpec::plain(name),
            RawFieldSpec::Pair(name, token) => FieldSpec::new(name, [token]),
            RawFieldSpec::Multi(name, tokens) | RawFieldSpec::Map { name, fields: tokens } => {
                FieldSpec::new(name, tokens)
            }
        }
    }
}

impl From<FieldSpec> for RawFieldSpec {
    fn from(spec: FieldSpec) -> Self {
        RawFieldSpec::Map {
            name: spec.name,
            fields: spec.tokens.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Immutable mapping of public names to underlying tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    fields: HashMap<String, Vec<FieldToken>>,
}

impl Whitelist {
    /// Build a whitelist; public names must be unique.
    pub fn new<I>(specs: I) -> Result<Whitelist>
    where
        I: IntoIterator<Item = FieldSpec>,
    {
        let mut fields = HashMap::new();
        for spec in specs {
            if fields.contains_key(&spec.name) {
                return Err(Error::DuplicateField(spec.name));
            }
            fields.insert(spec.name, spec.tokens);
        }
        Ok(Whitelist { fields })
    }

    pub fn get(&self, name: &str) -> Option<&[FieldToken]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markers() {
        let cases = [
            ("--two", "two", Polarity::ForceDesc),
            ("++one", "one", Polarity::ForceAsc),
            ("-five", "five", Polarity::Invert),
            ("+three", "three", Polarity::Follow),
            ("four", "four", Polarity::Follow),
        ];
        for (raw, field, polarity) in cases {
            let token = FieldToken::parse(raw).unwrap();
            assert_eq!(token.field, field, "token {}", raw);
            assert_eq!(token.polarity, polarity, "token {}", raw);
        }
    }

    #[test]
    fn test_marker_only_token_is_rejected() {
        for raw in ["", "-", "+", "--", "++"] {
            assert!(matches!(
                FieldToken::parse(raw),
                Err(Error::InvalidFieldToken(_))
            ));
        }
    }

    #[test]
    fn test_polarity_resolution() {
        use Direction::*;
        assert_eq!(Polarity::Follow.resolve(Asc), Asc);
        assert_eq!(Polarity::Follow.resolve(Desc), Desc);
        assert_eq!(Polarity::Invert.resolve(Asc), Desc);
        assert_eq!(Polarity::Invert.resolve(Desc), Asc);
        assert_eq!(Polarity::ForceAsc.resolve(Desc), Asc);
        assert_eq!(Polarity::ForceDesc.resolve(Asc), Desc);
    }

    #[test]
    fn test_display_drops_plus() {
        assert_eq!(FieldToken::parse("+name").unwrap().to_string(), "name");
        assert_eq!(FieldToken::parse("--name").unwrap().to_string(), "--name");
    }

    #[test]
    fn test_spec_forms() {
        let plain = FieldSpec::try_from("title").unwrap();
        assert_eq!(plain.tokens, vec![FieldToken::parse("title").unwrap()]);

        let pair = FieldSpec::try_from(("author", "author__last_name")).unwrap();
        assert_eq!(pair.name, "author");
        assert_eq!(pair.tokens[0].field, "author__last_name");

        let multi = FieldSpec::try_from(("date", ["-published", "++id"])).unwrap();
        assert_eq!(multi.tokens.len(), 2);
        assert_eq!(multi.tokens[1].polarity, Polarity::ForceAsc);
    }

    #[test]
    fn test_empty_spec_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            FieldSpec::new("x", empty),
            Err(Error::EmptyFieldSpec(name)) if name == "x"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let specs = vec![
            FieldSpec::plain("a").unwrap(),
            FieldSpec::try_from(("a", "b")).unwrap(),
        ];
        assert!(matches!(Whitelist::new(specs), Err(Error::DuplicateField(n)) if n == "a"));
    }

    #[test]
    fn test_deserialize_all_shapes() {
        let yaml = r#"
- title
- [author, author__last_name]
- [date, ["-published", "++id"]]
- { name: rank, fields: ["--score"] }
"#;
        let specs: Vec<FieldSpec> = serde_yaml::from_str(yaml).unwrap();
        let wl = Whitelist::new(specs).unwrap();
        assert_eq!(wl.len(), 4);
        assert_eq!(wl.get("title").unwrap()[0].field, "title");
        assert_eq!(wl.get("author").unwrap()[0].field, "author__last_name");
        assert_eq!(wl.get("date").unwrap()[0].polarity, Polarity::Invert);
        assert_eq!(wl.get("rank").unwrap()[0].polarity, Polarity::ForceDesc);
        assert!(wl.get("missing").is_none());
    }

    #[test]
    fn test_serialize_uses_map_form() {
        let spec = FieldSpec::try_from(("date", ["-published", "id"])).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "date", "fields": ["-published", "id"]})
        );
    }
}
