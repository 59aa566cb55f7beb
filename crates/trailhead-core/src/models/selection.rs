//! Plan selection carried between planning interactions.

use serde::{Deserialize, Serialize};

/// Lifecycle of a plan selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// Nothing selected yet
    Idle,

    /// One or more courses appended
    Accumulating,
}

impl SelectionState {
    /// Lowercase name used in rendered views.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionState::Idle => "idle",
            SelectionState::Accumulating => "accumulating",
        }
    }
}

/// Ordered course identifiers chosen during one planning session.
///
/// The selection lives in the request and is echoed back to the client as a
/// JSON array; it is never stored server-side. Duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PlanSelection(Vec<String>);

impl PlanSelection {
    /// An empty selection in the [`SelectionState::Idle`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SelectionState {
        if self.0.is_empty() {
            SelectionState::Idle
        } else {
            SelectionState::Accumulating
        }
    }

    /// Selected identifiers in selection order.
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialized form handed back to the client for the next submission.
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }
}

impl From<Vec<String>> for PlanSelection {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl Extend<String> for PlanSelection {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
