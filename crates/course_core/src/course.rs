use serde::{Deserialize, Serialize};

/// A single catalog entry as supplied by the ingestion layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prerequisite1: String,
    #[serde(default)]
    pub prerequisite2: String,
}

impl CourseRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_prerequisites(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.prerequisite1 = first.into();
        self.prerequisite2 = second.into();
        self
    }

    /// Non-empty prerequisites, in declaration order.
    pub fn prerequisites(&self) -> impl Iterator<Item = &str> {
        [self.prerequisite1.as_str(), self.prerequisite2.as_str()]
            .into_iter()
            .filter(|p| !p.is_empty())
    }
}
