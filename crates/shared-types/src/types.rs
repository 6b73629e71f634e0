use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-supplied answers driving template interpolation.
///
/// A value that is absent, or empty after trimming, counts as "not provided"
/// and renders as a bracketed placeholder. Lookups never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Raw value as stored, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value only if actually provided (non-empty after trimming).
    pub fn filled(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    /// Value if provided, otherwise a bracketed `[label]` placeholder.
    pub fn or_placeholder(&self, name: &str, label: &str) -> String {
        match self.filled(name) {
            Some(value) => value.to_string(),
            None => format!("[{}]", label),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Clause opt-in flags keyed by clause id.
///
/// Only ids known to the active template are honored; the rest are ignored.
/// Clause fragments are concatenated in this map's iteration order.
pub type Customizations = BTreeMap<String, bool>;

/// Outcome of checking whether form data is sufficient to generate a document.
///
/// Errors block generation; warnings are informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// A rendered document plus its identity and generation time.
///
/// Created fresh per generation request and never mutated afterward. The
/// engine does not persist it; that is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Upper-cased `LA-<base36 timestamp>-<6 char random>` id.
    pub document_id: String,
    pub document_type: String,
    pub html: String,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
}

/// Descriptive, non-authoritative template facts for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub sections: usize,
    pub custom_clauses: usize,
    pub estimated_length: String,
    pub complexity: String,
}

/// Opaque between-session state a wizard collaborator serializes.
///
/// The engine only defines the shape; storage lives outside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub selected_document: Option<String>,
    pub form_data: FieldValues,
    pub customizations: Customizations,
    /// Unix millis at save time.
    pub saved_at: i64,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: FieldValues JSON roundtrip preserves all entries
        #[test]
        fn field_values_json_roundtrip(
            entries in prop::collection::btree_map("[a-zA-Z]{1,12}", ".{0,40}", 0..10)
        ) {
            let form = FieldValues(entries);
            let json = serde_json::to_string(&form).unwrap();
            let restored: FieldValues = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(form, restored);
        }

        /// Property: or_placeholder never returns an empty string
        #[test]
        fn placeholder_never_empty(
            value in ".{0,20}",
            label in "[A-Za-z ]{1,20}",
        ) {
            let mut form = FieldValues::new();
            form.set("field", value);
            prop_assert!(!form.or_placeholder("field", &label).is_empty());
        }
    }
}
