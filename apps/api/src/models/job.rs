use serde::{Deserialize, Serialize};

/// A single job listing in the fixed shape every surface consumes.
///
/// Every field is optional: the upstream search API populates them
/// inconsistently. There is no identity field, so duplicates across pages
/// are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

impl JobRecord {
    /// Midpoint of the salary bounds. A single known bound stands in for the
    /// midpoint; `None` when neither bound is numeric.
    pub fn salary_midpoint(&self) -> Option<f64> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        }
    }
}
