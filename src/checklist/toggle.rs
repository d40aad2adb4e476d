use tracing::{error, info};

use crate::{
    backend::ChecklistBackend,
    error::ChecklistError,
    types::{CheckUpdate, ItemKey},
};

use super::{ChecklistController, MSG_UPDATE_FAILED, MSG_UPDATE_OK};

/// A click on one checkbox: which control, and the state it now shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEvent {
    pub index: usize,
    pub key: ItemKey,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The backend accepted the update; `reloaded` tells whether the
    /// follow-up load succeeded.
    Updated { reloaded: bool },
    /// The backend call failed and the checkbox was restored.
    RolledBack,
    /// Nothing was sent because no nickname is stored while tracking is on.
    Rejected,
}

impl<B: ChecklistBackend> ChecklistController<B> {
    /// Runs the optimistic update for one checkbox.
    ///
    /// The checkbox shows the new state immediately. If the backend accepts
    /// it, a success notice is raised and the whole list is reloaded once;
    /// if not, the checkbox goes back to its previous state and an error
    /// notice is raised. There is no retry.
    pub async fn toggle(&mut self, event: ToggleEvent) -> Result<ToggleOutcome, ChecklistError> {
        let previous = self.flip(&event, event.checked)?;

        let nickname = if self.settings.track_nickname {
            match self.nickname() {
                Some(n) => Some(n.to_string()),
                None => {
                    self.flip(&event, previous)?;
                    self.notices.error(&ChecklistError::IdentityRequired.to_string());
                    return Ok(ToggleOutcome::Rejected);
                }
            }
        } else {
            None
        };

        let update = CheckUpdate::new(&event.key, event.checked, nickname);
        match self.backend.update_check(&update).await {
            Ok(()) => {
                info!(api = %event.key, checked = event.checked, "API status updated");
                self.notices.success(MSG_UPDATE_OK);
                let reloaded = self.load_groups().await;
                Ok(ToggleOutcome::Updated { reloaded })
            }
            Err(e) => {
                error!(
                    api = %event.key,
                    error = %e,
                    remote = e.is_remote(),
                    "error updating API status"
                );
                self.flip(&event, previous)?;
                self.notices.error(MSG_UPDATE_FAILED);
                Ok(ToggleOutcome::RolledBack)
            }
        }
    }

    /// Toggles the entry at `index` to the opposite of what it shows.
    pub async fn toggle_index(&mut self, index: usize) -> Result<ToggleOutcome, ChecklistError> {
        let event = self
            .rendered
            .entry(index)
            .map(|e| e.toggle_event())
            .ok_or_else(|| ChecklistError::UnknownItem(format!("#{}", index)))?;
        self.toggle(event).await
    }

    /// Sets the first entry bound to `key` to `checked`.
    pub async fn set_checked(
        &mut self,
        key: &ItemKey,
        checked: bool,
    ) -> Result<ToggleOutcome, ChecklistError> {
        let event = self.event_for(key, checked)?;
        self.toggle(event).await
    }

    /// Sets the control addressed by `event` and returns what it showed before.
    fn flip(&mut self, event: &ToggleEvent, checked: bool) -> Result<bool, ChecklistError> {
        let entry = self
            .rendered
            .entry_mut(event.index)
            .filter(|e| e.control.key == event.key)
            .ok_or_else(|| ChecklistError::UnknownItem(event.key.to_string()))?;

        let previous = entry.control.checked;
        entry.control.checked = checked;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        backend::{MockBackend, MockFailures},
        checklist::NoticeKind,
        config::Settings,
        management::{IdentityManager, IdentityPrompt},
    };

    const GROUPS: &str = r#"{
        "Pets": [
            {"httpMethod":"GET","path":"/pets","description":"list pets","checked":false},
            {"httpMethod":"POST","path":"/pets","description":"add pet","checked":true,"nickname":"bob"}
        ]
    }"#;

    fn untracked() -> Settings {
        Settings {
            track_nickname: false,
            notice_lifetime: Duration::from_secs(3),
            ..Settings::default()
        }
    }

    async fn loaded(settings: Settings) -> (MockBackend, ChecklistController<MockBackend>) {
        let backend = MockBackend::from_json(GROUPS, "{}").unwrap();
        let mut controller = ChecklistController::new(backend.clone(), settings).quiet();
        assert!(controller.load_groups().await);
        (backend, controller)
    }

    #[tokio::test]
    async fn test_success_reloads_exactly_once() {
        let (backend, mut controller) = loaded(untracked()).await;
        assert_eq!(backend.group_fetches(), 1);

        let outcome = controller.toggle_index(1).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Updated { reloaded: true });
        assert_eq!(backend.group_fetches(), 2);
        assert_eq!(backend.link_fetches(), 2);

        let entry = controller.entry(1).unwrap();
        assert!(entry.checked);
        assert!(entry.control.checked);
        assert_eq!(controller.notices().last().unwrap().message, MSG_UPDATE_OK);
    }

    #[tokio::test]
    async fn test_failure_rolls_back_without_reload() {
        let (backend, mut controller) = loaded(untracked()).await;
        backend.set_failures(MockFailures {
            check: true,
            ..MockFailures::default()
        });

        let outcome = controller.toggle_index(2).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::RolledBack);
        assert_eq!(backend.group_fetches(), 1);
        assert!(controller.entry(2).unwrap().control.checked);

        let notice = controller.notices().last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, MSG_UPDATE_FAILED);
    }

    #[tokio::test]
    async fn test_untracked_update_has_no_nickname() {
        let (backend, mut controller) = loaded(untracked()).await;
        controller
            .set_checked(&ItemKey::new("GET", "/pets"), true)
            .await
            .unwrap();

        let updates = backend.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].nickname, None);
        assert!(updates[0].checked);
    }

    #[tokio::test]
    async fn test_tracked_toggle_without_nickname_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = IdentityPrompt::load(IdentityManager::with_path(dir.path().join("id.json"))).await;
        let backend = MockBackend::from_json(GROUPS, "{}").unwrap();
        let mut controller = ChecklistController::new(backend.clone(), Settings::default())
            .quiet()
            .with_identity(prompt);
        controller.load_groups().await;

        assert!(controller.needs_identity());
        let outcome = controller.toggle_index(1).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Rejected);
        assert!(backend.updates().is_empty());
        assert!(!controller.entry(1).unwrap().control.checked);
    }

    #[tokio::test]
    async fn test_tracked_toggle_sends_nickname() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = IdentityPrompt::load(IdentityManager::with_path(dir.path().join("id.json"))).await;
        let backend = MockBackend::from_json(GROUPS, "{}").unwrap();
        let mut controller = ChecklistController::new(backend.clone(), Settings::default())
            .quiet()
            .with_identity(prompt);
        controller.load_groups().await;

        controller.submit_nickname("Alice").await.unwrap();
        assert!(!controller.needs_identity());

        controller.toggle_index(1).await.unwrap();
        assert_eq!(backend.updates()[0].nickname.as_deref(), Some("Alice"));
        assert_eq!(controller.entry(1).unwrap().nickname.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_unknown_index_is_an_error() {
        let (_, mut controller) = loaded(untracked()).await;
        let err = controller.toggle_index(42).await.unwrap_err();
        assert!(matches!(err, ChecklistError::UnknownItem(_)));
    }
}
