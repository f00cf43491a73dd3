//! Advisory numeric bounds and choice lists
//!
//! Constraints are looked up by presentation layers (to clamp a numeric
//! editor or fill a choice list). The change pipeline does not consult them;
//! install [`ConstraintRegistry::bounds_veto`] to enforce bounds.

use std::collections::HashMap;

use super::pipeline::{ChangeRequest, Denial};
use super::types::EntryValue;

/// Inclusive integer range for a `Count` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for IntegerBounds {
    fn default() -> Self {
        Self {
            min: i64::MIN,
            max: i64::MAX,
        }
    }
}

impl IntegerBounds {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into the range
    pub fn clamp(&self, value: i64) -> i64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Per-entry bounds and option lists, independent of registration
#[derive(Debug, Default, Clone)]
pub struct ConstraintRegistry {
    min: HashMap<String, i64>,
    max: HashMap<String, i64>,
    options: HashMap<String, Vec<String>>,
}

impl ConstraintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both bounds, replacing any previous ones
    pub fn set_integer_bounds(&mut self, name: &str, min: i64, max: i64) {
        self.set_integer_min(name, min);
        self.set_integer_max(name, max);
    }

    pub fn set_integer_min(&mut self, name: &str, min: i64) {
        self.min.insert(name.to_string(), min);
    }

    pub fn set_integer_max(&mut self, name: &str, max: i64) {
        self.max.insert(name.to_string(), max);
    }

    /// Bounds for `name`, unset sides cover the full `i64` range
    pub fn integer_bounds(&self, name: &str) -> IntegerBounds {
        let default = IntegerBounds::default();
        IntegerBounds {
            min: self.min.get(name).copied().unwrap_or(default.min),
            max: self.max.get(name).copied().unwrap_or(default.max),
        }
    }

    /// Whether any bound was registered for `name`
    pub fn has_bounds(&self, name: &str) -> bool {
        self.min.contains_key(name) || self.max.contains_key(name)
    }

    /// Replace the option list for `name` wholesale
    pub fn set_options<I, S>(&mut self, name: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .insert(name.to_string(), options.into_iter().map(Into::into).collect());
    }

    /// Registered options, `None` when the entry has none yet
    pub fn options(&self, name: &str) -> Option<&[String]> {
        self.options.get(name).map(Vec::as_slice)
    }

    /// Veto handler that denies `Count` proposals outside the current bounds
    ///
    /// The handler works on a snapshot taken now; bounds registered later
    /// are not seen.
    pub fn bounds_veto(&self) -> impl Fn(&ChangeRequest) -> Result<(), Denial> + 'static {
        let snapshot = self.clone();
        move |request: &ChangeRequest| {
            let EntryValue::Count(value) = &request.new_value else {
                return Ok(());
            };
            if !snapshot.has_bounds(&request.entry_name) {
                return Ok(());
            }
            let bounds = snapshot.integer_bounds(&request.entry_name);
            if bounds.contains(*value) {
                Ok(())
            } else {
                Err(Denial::new(format!(
                    "{} must be between {} and {}, got {}",
                    request.entry_name, bounds.min, bounds.max, value
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_bounds_cover_full_range() {
        let constraints = ConstraintRegistry::new();
        let bounds = constraints.integer_bounds("volume");
        assert_eq!(bounds.min, i64::MIN);
        assert_eq!(bounds.max, i64::MAX);
        assert!(!constraints.has_bounds("volume"));
    }

    #[test]
    fn test_bounds_overwrite() {
        let mut constraints = ConstraintRegistry::new();
        constraints.set_integer_bounds("volume", 0, 100);
        constraints.set_integer_max("volume", 11);

        let bounds = constraints.integer_bounds("volume");
        assert_eq!(bounds, IntegerBounds { min: 0, max: 11 });
        assert_eq!(bounds.clamp(50), 11);
        assert_eq!(bounds.clamp(-3), 0);
        assert!(bounds.contains(7));
    }

    #[test]
    fn test_only_min_set() {
        let mut constraints = ConstraintRegistry::new();
        constraints.set_integer_min("retries", 1);

        let bounds = constraints.integer_bounds("retries");
        assert_eq!(bounds.min, 1);
        assert_eq!(bounds.max, i64::MAX);
    }

    #[test]
    fn test_options_are_replaced_not_merged() {
        let mut constraints = ConstraintRegistry::new();
        assert!(constraints.options("theme").is_none());

        constraints.set_options("theme", ["light", "dark"]);
        constraints.set_options("theme", ["solarized"]);

        assert_eq!(constraints.options("theme").unwrap(), ["solarized".to_string()]);
    }

    #[test]
    fn test_bounds_veto() {
        let mut constraints = ConstraintRegistry::new();
        constraints.set_integer_bounds("volume", 0, 100);
        let veto = constraints.bounds_veto();

        let ok = ChangeRequest {
            entry_name: "volume".to_string(),
            old_value: EntryValue::Count(50),
            new_value: EntryValue::Count(80),
        };
        assert!(veto(&ok).is_ok());

        let too_loud = ChangeRequest {
            new_value: EntryValue::Count(150),
            ..ok
        };
        let denial = veto(&too_loud).unwrap_err();
        assert!(denial.reason().contains("between 0 and 100"));

        let unbounded = ChangeRequest {
            entry_name: "brightness".to_string(),
            old_value: EntryValue::Count(0),
            new_value: EntryValue::Count(-5),
        };
        assert!(veto(&unbounded).is_ok());
    }
}
