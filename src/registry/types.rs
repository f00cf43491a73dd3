//! Core types for configuration entries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// The kind of value an entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// One string out of a registered option list
    #[serde(rename = "choose")]
    Choice,
    /// Boolean switch
    #[serde(rename = "check")]
    Flag,
    /// Signed integer
    Count,
    /// Free text
    Text,
}

impl EntryType {
    /// Name written to the `<type>` element of the config file
    pub fn type_name(self) -> &'static str {
        match self {
            EntryType::Choice => "choose",
            EntryType::Flag => "check",
            EntryType::Count => "count",
            EntryType::Text => "text",
        }
    }

    /// Parse a raw string into a value of this type
    ///
    /// `name` is only used to build the error.
    pub fn parse_value(self, name: &str, raw: &str) -> Result<EntryValue> {
        let parse_error = || RegistryError::Parse {
            name: name.to_string(),
            value: raw.to_string(),
            expected: self,
        };

        match self {
            EntryType::Flag => {
                if raw.eq_ignore_ascii_case("true") {
                    Ok(EntryValue::Flag(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Ok(EntryValue::Flag(false))
                } else {
                    Err(parse_error())
                }
            }
            EntryType::Count => raw
                .trim()
                .parse::<i64>()
                .map(EntryValue::Count)
                .map_err(|_| parse_error()),
            EntryType::Text => Ok(EntryValue::Text(raw.to_string())),
            EntryType::Choice => Ok(EntryValue::Choice(raw.to_string())),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A strongly-typed entry value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Choice(String),
    Flag(bool),
    Count(i64),
    Text(String),
}

impl EntryValue {
    /// The type this value belongs to
    pub fn entry_type(&self) -> EntryType {
        match self {
            EntryValue::Choice(_) => EntryType::Choice,
            EntryValue::Flag(_) => EntryType::Flag,
            EntryValue::Count(_) => EntryType::Count,
            EntryValue::Text(_) => EntryType::Text,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            EntryValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<i64> {
        match self {
            EntryValue::Count(v) => Some(*v),
            _ => None,
        }
    }

    /// Text of a `Text` or `Choice` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EntryValue::Text(v) | EntryValue::Choice(v) => Some(v),
            _ => None,
        }
    }
}

/// String form used in the config file and in change events
impl fmt::Display for EntryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryValue::Flag(v) => write!(f, "{}", v),
            EntryValue::Count(v) => write!(f, "{}", v),
            EntryValue::Text(v) | EntryValue::Choice(v) => f.write_str(v),
        }
    }
}

/// Static metadata describing one configuration entry
///
/// Built with [`super::EntryDescriptorBuilder`], which checks that the
/// default value parses for the declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    /// Unique key used for storage, lookup and events
    pub name: String,

    /// Value type
    pub entry_type: EntryType,

    /// String form of the initial value
    pub default_value: String,

    /// Dot-separated location path (e.g. "display.advanced")
    pub location: String,

    /// Whether the entry is offered for interactive editing
    pub visible: bool,

    /// Translation key for the display name
    pub name_key: String,

    /// Translation key for the help text
    pub description_key: String,
}

impl EntryDescriptor {
    /// Parse the default value according to the entry type
    pub fn parsed_default(&self) -> Result<EntryValue> {
        self.entry_type.parse_value(&self.name, &self.default_value)
    }

    /// Parse a raw value according to the entry type
    pub fn parse(&self, raw: &str) -> Result<EntryValue> {
        self.entry_type.parse_value(&self.name, raw)
    }

    /// Location split into its non-empty segments
    pub fn location_segments(&self) -> impl Iterator<Item = &str> {
        self.location.split('.').filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing_is_case_insensitive() {
        assert_eq!(
            EntryType::Flag.parse_value("f", "TRUE").unwrap(),
            EntryValue::Flag(true)
        );
        assert_eq!(
            EntryType::Flag.parse_value("f", "False").unwrap(),
            EntryValue::Flag(false)
        );
        assert!(EntryType::Flag.parse_value("f", "yes").is_err());
    }

    #[test]
    fn test_count_parsing() {
        assert_eq!(
            EntryType::Count.parse_value("c", "-42").unwrap(),
            EntryValue::Count(-42)
        );

        let err = EntryType::Count.parse_value("c", "4x2").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Parse { expected: EntryType::Count, .. }
        ));
    }

    #[test]
    fn test_text_and_choice_take_raw_string() {
        assert_eq!(
            EntryType::Text.parse_value("t", "  spaced ").unwrap(),
            EntryValue::Text("  spaced ".to_string())
        );
        assert_eq!(
            EntryType::Choice.parse_value("c", "dark").unwrap(),
            EntryValue::Choice("dark".to_string())
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for (ty, raw) in [
            (EntryType::Flag, "true"),
            (EntryType::Count, "9001"),
            (EntryType::Text, "hello world"),
            (EntryType::Choice, "hover"),
        ] {
            let value = ty.parse_value("x", raw).unwrap();
            assert_eq!(value.to_string(), raw);
            assert_eq!(value.entry_type(), ty);
        }
    }

    #[test]
    fn test_type_names() {
        assert_eq!(EntryType::Choice.to_string(), "choose");
        assert_eq!(EntryType::Flag.to_string(), "check");
        assert_eq!(EntryType::Count.to_string(), "count");
        assert_eq!(EntryType::Text.to_string(), "text");
    }
}
