//! Static disease and vaccine reference text.

use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::trace;

/// Built-in entries present in every knowledge base.
const BUILTIN: &[(&str, &str)] = &[(
    "Measles",
    "Measles is a highly contagious viral disease. Vaccination is the best protection.",
)];

/// Read-only lookup of disease name to informational text.
///
/// Entries are fixed at construction. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct VaccineKnowledgeBase {
    entries: BTreeMap<String, String>,
}

impl Default for VaccineKnowledgeBase {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<(String, String)>())
    }
}

impl VaccineKnowledgeBase {
    /// Knowledge base holding only the built-in entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in entries plus `extra`. An extra entry with a built-in name
    /// replaces the built-in text.
    #[must_use]
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<String, String> = BUILTIN
            .iter()
            .map(|(name, text)| ((*name).to_string(), (*text).to_string()))
            .collect();
        entries.extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self { entries }
    }

    /// Description for `disease`, or a fixed "no information" message.
    #[must_use]
    pub fn lookup(&self, disease: &str) -> Cow<'_, str> {
        match self.entries.get(disease) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => {
                trace!(disease, "no vaccine information");
                Cow::Owned(format!("No information available for {disease}"))
            }
        }
    }

    /// Returns true if `disease` has an entry.
    #[must_use]
    pub fn contains(&self, disease: &str) -> bool {
        self.entries.contains_key(disease)
    }

    /// Known disease names in sorted order.
    pub fn diseases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_measles() {
        let kb = VaccineKnowledgeBase::new();
        assert_eq!(
            kb.lookup("Measles"),
            "Measles is a highly contagious viral disease. Vaccination is the best protection."
        );
    }

    #[test]
    fn test_lookup_unknown() {
        let kb = VaccineKnowledgeBase::new();
        assert_eq!(kb.lookup("Unknown"), "No information available for Unknown");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let kb = VaccineKnowledgeBase::new();
        assert_eq!(kb.lookup("measles"), "No information available for measles");
        assert_eq!(kb.lookup(" Measles"), "No information available for  Measles");
    }

    #[test]
    fn test_lookup_empty_name() {
        let kb = VaccineKnowledgeBase::new();
        assert_eq!(kb.lookup(""), "No information available for ");
    }

    #[test]
    fn test_with_extra_adds_entries() {
        let kb = VaccineKnowledgeBase::with_extra([("Polio", "Four doses in childhood.")]);
        assert_eq!(kb.len(), 2);
        assert!(kb.contains("Polio"));
        assert!(kb.contains("Measles"));
        assert_eq!(kb.diseases().collect::<Vec<_>>(), vec!["Measles", "Polio"]);
    }

    #[test]
    fn test_with_extra_overrides_builtin() {
        let kb = VaccineKnowledgeBase::with_extra([("Measles", "Custom text.")]);
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.lookup("Measles"), "Custom text.");
    }
}
