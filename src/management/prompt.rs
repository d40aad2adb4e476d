use crate::error::ChecklistError;

use super::IdentityManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    /// No nickname stored; interaction is blocked until one is entered.
    Prompting,
    /// A nickname is stored.
    Dismissed,
}

/// Gate asking for a nickname before the checklist can be used.
///
/// ```text
///   load (none stored) ──► Prompting ──submit(non-blank)──► Dismissed
///   load (stored)     ──────────────────────────────────► Dismissed
///                          ▲                                   │
///                          └────────────── reset ──────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct IdentityPrompt {
    identity: IdentityManager,
    state: PromptState,
    nickname: Option<String>,
}

impl IdentityPrompt {
    /// Computes the initial state from the stored identity.
    ///
    /// Unreadable storage counts as "nothing stored", which only means the
    /// user is asked again.
    pub async fn load(identity: IdentityManager) -> Self {
        let nickname = match identity.load().await {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "cannot read stored nickname");
                None
            }
        };

        let state = if nickname.is_some() {
            PromptState::Dismissed
        } else {
            PromptState::Prompting
        };

        Self {
            identity,
            state,
            nickname,
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn is_prompting(&self) -> bool {
        self.state == PromptState::Prompting
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Accepts a nickname. Blank input is rejected and the prompt stays open.
    pub async fn submit(&mut self, input: &str) -> Result<&str, ChecklistError> {
        let nickname = input.trim();
        if nickname.is_empty() {
            return Err(ChecklistError::EmptyNickname);
        }

        self.identity.persist(nickname).await?;
        self.state = PromptState::Dismissed;
        let stored = self.nickname.insert(nickname.to_string());
        Ok(stored.as_str())
    }

    /// Forgets the nickname and reopens the prompt.
    pub async fn reset(&mut self) -> Result<(), ChecklistError> {
        self.identity.clear().await?;
        self.nickname = None;
        self.state = PromptState::Prompting;
        Ok(())
    }
}
