mod identity;
mod prompt;

pub use identity::IDENTITY_FILE;
pub use identity::IdentityManager;
pub use prompt::IdentityPrompt;
pub use prompt::PromptState;
