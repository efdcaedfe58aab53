//! Declarative Field Validation
//!
//! Per-field rules evaluated synchronously against raw string values.
//! Shared by the submission wizard and the client dialog.

use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex pattern"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern")
});

/// A single predicate over a field value
#[derive(Debug, Clone)]
pub enum Rule {
    /// At least this many characters (not trimmed)
    MinChars(usize),
    /// Whole value must match
    Pattern(Regex),
    /// Anything goes, including empty
    Optional,
}

impl Rule {
    /// `YYYY-MM-DD` shape; does not check the calendar
    pub fn iso_date() -> Self {
        Rule::Pattern(ISO_DATE.clone())
    }

    pub fn email() -> Self {
        Rule::Pattern(EMAIL.clone())
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::MinChars(min) => value.chars().count() >= *min,
            Rule::Pattern(re) => re.is_match(value),
            Rule::Optional => true,
        }
    }
}

/// A rule bound to a field with the message shown when it fails
#[derive(Debug, Clone)]
pub struct FieldRule<K> {
    pub field: K,
    pub rule: Rule,
    pub message: String,
}

/// Ordered collection of field rules
#[derive(Debug, Clone)]
pub struct RuleSet<K> {
    rules: Vec<FieldRule<K>>,
}

impl<K: Copy + PartialEq> RuleSet<K> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with(mut self, field: K, rule: Rule, message: impl Into<String>) -> Self {
        self.rules.push(FieldRule { field, rule, message: message.into() });
        self
    }

    pub fn has_rule(&self, field: K) -> bool {
        self.rules.iter().any(|r| r.field == field)
    }

    /// Message of the first rule for `field` that rejects `value`
    pub fn check(&self, field: K, value: &str) -> Option<&str> {
        self.rules
            .iter()
            .filter(|r| r.field == field)
            .find(|r| !r.rule.accepts(value))
            .map(|r| r.message.as_str())
    }

    /// Check `fields` in order, collecting failures in the same order
    pub fn validate<'v, I, F>(&self, fields: I, value_of: F) -> FieldErrors<K>
    where
        I: IntoIterator<Item = K>,
        F: Fn(K) -> &'v str,
    {
        let mut errors = FieldErrors::default();
        for field in fields {
            if let Some(message) = self.check(field, value_of(field)) {
                errors.insert(field, message);
            }
        }
        errors
    }
}

impl<K: Copy + PartialEq> Default for RuleSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-field error messages, kept in the order they were found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<K> {
    entries: Vec<(K, String)>,
}

impl<K> Default for FieldErrors<K> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: Copy + PartialEq> FieldErrors<K> {
    /// Set (or replace) the message for a field
    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn remove(&mut self, field: K) {
        self.entries.retain(|(f, _)| *f != field);
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    /// Field that should receive focus
    pub fn first(&self) -> Option<K> {
        self.entries.first().map(|(f, _)| *f)
    }

    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Merge `other` in, replacing messages for fields present in both
    pub fn extend(&mut self, other: FieldErrors<K>) {
        for (field, message) in other.entries {
            self.insert(field, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_chars_counts_characters() {
        let rule = Rule::MinChars(5);
        assert!(!rule.accepts("Test"));
        assert!(rule.accepts("Testt"));
        // multi-byte characters count once
        assert!(rule.accepts("ÄÖÜßé"));
        assert!(rule.accepts("  a  "));
    }

    #[test]
    fn test_iso_date_shape() {
        let rule = Rule::iso_date();
        assert!(rule.accepts("2024-09-15"));
        assert!(!rule.accepts("2024-9-15"));
        assert!(!rule.accepts("15/09/2024"));
        assert!(!rule.accepts(""));
        // Arabic-Indic digits are not ASCII digits
        assert!(!rule.accepts("٢٠٢٤-٠٩-١٥"));
    }

    #[test]
    fn test_email_shape() {
        let rule = Rule::email();
        assert!(rule.accepts("john.doe@innovate.com"));
        assert!(!rule.accepts("john.doe"));
        assert!(!rule.accepts("john doe@innovate.com"));
        assert!(!rule.accepts("john@innovate"));
    }

    #[test]
    fn test_validate_keeps_field_order() {
        let rules = RuleSet::new()
            .with("a", Rule::MinChars(2), "a too short")
            .with("b", Rule::MinChars(2), "b too short")
            .with("c", Rule::Optional, "never");

        let errors = rules.validate(["b", "a", "c"], |_| "");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(errors.first(), Some("b"));
        assert_eq!(errors.get("a"), Some("a too short"));
        assert_eq!(errors.get("c"), None);
    }

    #[test]
    fn test_insert_replaces_and_remove_clears() {
        let mut errors = FieldErrors::default();
        errors.insert(1, "first");
        errors.insert(2, "second");
        errors.insert(1, "again");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(1), Some("again"));
        assert_eq!(errors.first(), Some(1));

        errors.remove(1);
        assert_eq!(errors.first(), Some(2));
    }
}
