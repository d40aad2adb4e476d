use crate::{
    info,
    management::{IdentityManager, IdentityPrompt},
    success, warning,
};

#[derive(Debug, Clone)]
pub enum NicknameAction {
    Show,
    Set(String),
    Reset,
}

/// Manages the nickname attached to status updates.
///
/// # Example Usage
///
/// ```bash
/// apichecklist nickname              # show
/// apichecklist nickname set alice
/// apichecklist nickname reset        # asks again next time
/// ```
pub async fn nickname(action: NicknameAction) {
    let mut prompt = IdentityPrompt::load(IdentityManager::new()).await;

    match action {
        NicknameAction::Show => match prompt.nickname() {
            Some(n) => info!("Nickname: {}", n),
            None => warning!("No nickname set."),
        },
        NicknameAction::Set(input) => match prompt.submit(&input).await {
            Ok(n) => success!("Nickname set to {}.", n),
            Err(e) => warning!("{}", e),
        },
        NicknameAction::Reset => match prompt.reset().await {
            Ok(_) => success!("Nickname cleared."),
            Err(e) => warning!("Cannot clear nickname. Err: {}", e),
        },
    }
}
