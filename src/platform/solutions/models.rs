//! Solution data models

use serde::{Deserialize, Serialize};

use crate::platform::traits::PlatformResource;

/// Solution record from the object store
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Solution {
    pub id: String,
    #[serde(default)]
    pub data: SolutionData,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Solution payload (`data` object)
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SolutionData {
    pub name: Option<String>,
    #[serde(rename = "isSystem")]
    pub is_system: Option<bool>,
    #[serde(rename = "isSubscribed")]
    pub is_subscribed: Option<bool>,
    pub dependencies: Option<Vec<String>>,
}

/// Collection wrapper returned by the list endpoint
#[derive(Deserialize, Debug, Default)]
pub struct SolutionList {
    #[serde(default)]
    pub items: Vec<Solution>,
}

impl Solution {
    /// Whether the tenant is subscribed (missing means no)
    pub fn is_subscribed(&self) -> bool {
        self.data.is_subscribed.unwrap_or(false)
    }

    /// Whether this is a platform-provided solution
    pub fn is_system(&self) -> bool {
        self.data.is_system.unwrap_or(false)
    }

    /// Ids of solutions this one depends on
    pub fn dependencies(&self) -> &[String] {
        self.data.dependencies.as_deref().unwrap_or_default()
    }
}

impl PlatformResource for Solution {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.data.name.as_deref().unwrap_or(&self.id)
    }
}
