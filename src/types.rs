use std::{collections::HashMap, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// One tracked API endpoint as returned by the checker backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl ApiInfo {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.http_method, &self.path)
    }

    /// Nickname of whoever checked the item, ignoring blank values.
    pub fn checked_by(&self) -> Option<&str> {
        self.nickname
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Group name to items, in the order the backend sent them.
pub type Groups = IndexMap<String, Vec<ApiInfo>>;

/// `"<METHOD>_<path>"` to a Swagger UI fragment such as `Pets/listPets`.
pub type SwaggerLinks = HashMap<String, String>;

/// Identity of a checklist item for updates: the (method, path) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub http_method: String,
    pub path: String,
}

impl ItemKey {
    pub fn new(http_method: &str, path: &str) -> Self {
        Self {
            http_method: http_method.to_string(),
            path: path.to_string(),
        }
    }

    pub fn composite_key(&self) -> String {
        utils::composite_key(&self.http_method, &self.path)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.http_method, self.path)
    }
}

/// Status update sent to `<base>/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUpdate {
    pub http_method: String,
    pub path: String,
    pub checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl CheckUpdate {
    pub fn new(key: &ItemKey, checked: bool, nickname: Option<String>) -> Self {
        Self {
            http_method: key.http_method.clone(),
            path: key.path.clone(),
            checked,
            nickname,
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.http_method, &self.path)
    }
}

#[derive(Tabled)]
pub struct ChecklistRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "done")]
    pub status: String,
    pub api: String,
    #[tabled(rename = "by")]
    pub nickname: String,
    #[tabled(rename = "swagger")]
    pub link: String,
}

#[derive(Tabled)]
pub struct GroupOptionRow {
    pub group: String,
    pub apis: usize,
    pub checked: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub nickname: String,
    pub saved_at: u64,
}
