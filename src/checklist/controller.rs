use crate::{
    backend::ChecklistBackend,
    config::Settings,
    error::ChecklistError,
    management::IdentityPrompt,
    types::{Groups, ItemKey},
};

use super::{
    ChecklistState, GroupFilter, NoticeBoard, RenderedEntry, RenderedList, ToggleEvent, render,
};

/// Top-level owner of the checklist session.
///
/// Holds the backend handle and every piece of mutable state; the loader,
/// renderer and toggle workflow all operate through it.
pub struct ChecklistController<B: ChecklistBackend> {
    pub(super) backend: B,
    pub(super) settings: Settings,
    pub(super) state: ChecklistState,
    pub(super) filter: GroupFilter,
    pub(super) rendered: RenderedList,
    pub(super) notices: NoticeBoard,
    pub(super) identity: Option<IdentityPrompt>,
}

impl<B: ChecklistBackend> ChecklistController<B> {
    pub fn new(backend: B, settings: Settings) -> Self {
        let notices = NoticeBoard::new(settings.notice_lifetime);
        Self {
            backend,
            settings,
            state: ChecklistState::new(),
            filter: GroupFilter::new(),
            rendered: RenderedList::default(),
            notices,
            identity: None,
        }
    }

    /// Attaches the nickname gate. Only consulted when tracking is enabled.
    pub fn with_identity(mut self, prompt: IdentityPrompt) -> Self {
        self.identity = Some(prompt);
        self
    }

    /// Keeps notices in memory without printing them.
    pub fn quiet(mut self) -> Self {
        self.notices = self.notices.quiet();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn filter(&self) -> &GroupFilter {
        &self.filter
    }

    pub fn rendered(&self) -> &RenderedList {
        &self.rendered
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn identity(&self) -> Option<&IdentityPrompt> {
        self.identity.as_ref()
    }

    pub fn entry(&self, index: usize) -> Option<&RenderedEntry> {
        self.rendered.entry(index)
    }

    /// Nickname attached to updates, if tracking is on and one is stored.
    pub fn nickname(&self) -> Option<&str> {
        if !self.settings.track_nickname {
            return None;
        }
        self.identity.as_ref().and_then(|p| p.nickname())
    }

    /// `true` while the nickname gate blocks normal interaction.
    pub fn needs_identity(&self) -> bool {
        self.settings.track_nickname
            && self.identity.as_ref().is_none_or(|p| p.is_prompting())
    }

    /// Destructively redraws the list from `groups`.
    pub fn render(&mut self, groups: &Groups) {
        self.rendered = render(groups, self.state.links(), &self.settings);
    }

    /// Re-renders the current filter view of the snapshot.
    pub fn repaint(&mut self) {
        let view = self.filter.view(self.state.snapshot());
        self.render(&view);
    }

    /// Applies a dropdown selection and re-renders without fetching.
    pub fn select_group(&mut self, value: &str) -> bool {
        if !self.filter.select(value) {
            return false;
        }
        self.repaint();
        true
    }

    pub async fn submit_nickname(&mut self, input: &str) -> Result<String, ChecklistError> {
        let result = match self.identity.as_mut() {
            Some(prompt) => prompt.submit(input).await.map(str::to_string),
            None => Err(ChecklistError::IdentityRequired),
        };

        if let Err(e) = &result {
            self.notices.error(&e.to_string());
        }
        result
    }

    pub async fn reset_identity(&mut self) -> Result<(), ChecklistError> {
        match self.identity.as_mut() {
            Some(prompt) => prompt.reset().await,
            None => Err(ChecklistError::IdentityRequired),
        }
    }

    /// Toggle event for the first rendered entry bound to `key`, set to `checked`.
    pub fn event_for(&self, key: &ItemKey, checked: bool) -> Result<ToggleEvent, ChecklistError> {
        let entry = self
            .rendered
            .find(key)
            .ok_or_else(|| ChecklistError::UnknownItem(key.to_string()))?;

        let mut event = entry.toggle_event();
        event.checked = checked;
        Ok(event)
    }
}
