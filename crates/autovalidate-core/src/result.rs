// File: src/result.rs
// Purpose: Failures collected during one validation pass

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One failed check.
///
/// `check_type` names the rule family (`input_email`), `error_kind` the
/// specific failure (`empty`, `invalid`, ...). Serializes as
/// `{"type": ..., "error": ...}`; the element name is the key in the
/// surrounding [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationFailure {
    #[serde(skip)]
    pub element_name: String,
    #[serde(rename = "type")]
    pub check_type: String,
    #[serde(rename = "error")]
    pub error_kind: String,
}

/// Failures of one pass, at most one per element name.
///
/// Recording a second failure for a name replaces the first but keeps its
/// position, so iteration follows the order in which names first failed.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
    writes: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `element_name`, replacing any earlier one
    pub fn record(
        &mut self,
        element_name: impl Into<String>,
        check_type: impl Into<String>,
        error_kind: impl Into<String>,
    ) {
        let failure = ValidationFailure {
            element_name: element_name.into(),
            check_type: check_type.into(),
            error_kind: error_kind.into(),
        };
        self.writes += 1;

        match self
            .failures
            .iter_mut()
            .find(|f| f.element_name == failure.element_name)
        {
            Some(existing) => *existing = failure,
            None => self.failures.push(failure),
        }
    }

    pub fn get(&self, element_name: &str) -> Option<&ValidationFailure> {
        self.failures.iter().find(|f| f.element_name == element_name)
    }

    pub fn contains(&self, element_name: &str) -> bool {
        self.get(element_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// True when no element failed
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.element_name.as_str())
    }

    /// Number of `record` calls, including overwrites
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

impl PartialEq for ValidationResult {
    fn eq(&self, other: &Self) -> bool {
        self.failures == other.failures
    }
}

impl Eq for ValidationResult {}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.failures.len()))?;
        for failure in &self.failures {
            map.serialize_entry(&failure.element_name, failure)?;
        }
        map.end()
    }
}
