//! In-memory checker backend for tests and offline demos.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::ChecklistError,
    types::{CheckUpdate, Groups, SwaggerLinks},
};

use super::ChecklistBackend;

/// Which calls should fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockFailures {
    pub groups: bool,
    pub links: bool,
    pub check: bool,
}

#[derive(Debug, Default)]
struct MockData {
    groups: Groups,
    links: SwaggerLinks,
    failures: MockFailures,
    updates: Vec<CheckUpdate>,
    group_fetches: usize,
    link_fetches: usize,
}

/// Backend keeping groups and links in memory.
///
/// Updates are applied the way the checker server applies them: the first
/// item in each group whose path matches exactly and whose method matches
/// ignoring case takes the new state, and unchecking clears the nickname.
/// Clones share the same data, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    data: Arc<Mutex<MockData>>,
}

impl MockBackend {
    pub fn new(groups: Groups, links: SwaggerLinks) -> Self {
        Self {
            data: Arc::new(Mutex::new(MockData {
                groups,
                links,
                ..MockData::default()
            })),
        }
    }

    /// Builds a backend from the JSON bodies the real server would send.
    pub fn from_json(groups: &str, links: &str) -> Result<Self, ChecklistError> {
        Ok(Self::new(
            serde_json::from_str(groups)?,
            serde_json::from_str(links)?,
        ))
    }

    pub fn set_failures(&self, failures: MockFailures) {
        self.lock().failures = failures;
    }

    pub fn set_groups(&self, groups: Groups) {
        self.lock().groups = groups;
    }

    pub fn groups(&self) -> Groups {
        self.lock().groups.clone()
    }

    /// Every update received, including the ones that were made to fail.
    pub fn updates(&self) -> Vec<CheckUpdate> {
        self.lock().updates.clone()
    }

    pub fn group_fetches(&self) -> usize {
        self.lock().group_fetches
    }

    pub fn link_fetches(&self) -> usize {
        self.lock().link_fetches
    }

    fn lock(&self) -> MutexGuard<'_, MockData> {
        // a panicking test thread must not poison the others
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ChecklistBackend for MockBackend {
    async fn fetch_groups(&self) -> Result<Groups, ChecklistError> {
        let mut data = self.lock();
        data.group_fetches += 1;
        if data.failures.groups {
            return Err(ChecklistError::Unavailable("groups".to_string()));
        }
        Ok(data.groups.clone())
    }

    async fn fetch_swagger_links(&self) -> Result<SwaggerLinks, ChecklistError> {
        let mut data = self.lock();
        data.link_fetches += 1;
        if data.failures.links {
            return Err(ChecklistError::Unavailable("swagger-links".to_string()));
        }
        Ok(data.links.clone())
    }

    async fn update_check(&self, update: &CheckUpdate) -> Result<(), ChecklistError> {
        let mut data = self.lock();
        data.updates.push(update.clone());
        if data.failures.check {
            return Err(ChecklistError::Unavailable("check".to_string()));
        }

        for apis in data.groups.values_mut() {
            if let Some(api) = apis.iter_mut().find(|a| {
                a.path == update.path && a.http_method.eq_ignore_ascii_case(&update.http_method)
            }) {
                api.checked = update.checked;
                api.nickname = if update.checked {
                    update.nickname.clone()
                } else {
                    Some(String::new())
                };
            }
        }

        Ok(())
    }
}
