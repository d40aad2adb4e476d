use crate::{checklist::ToggleOutcome, types::ItemKey, warning};

use super::{load, normalize_method, session};

/// Checks (`checked = true`) or unchecks one API, then prints the reloaded list.
///
/// The API is addressed by method and path exactly as the checker lists it.
/// When nickname tracking is on and no nickname is stored, nothing is sent.
///
/// # Example Usage
///
/// ```bash
/// apichecklist check --method GET --path /pets
/// apichecklist uncheck --method GET --path /pets
/// ```
pub async fn check(method: String, path: String, checked: bool) {
    let mut controller = session().await;
    if !load(&mut controller).await {
        return;
    }

    let key = ItemKey::new(&normalize_method(&method), &path);
    match controller.set_checked(&key, checked).await {
        Ok(ToggleOutcome::Updated { reloaded: true }) => print!("{}", controller.rendered()),
        Ok(ToggleOutcome::Rejected) => {
            warning!("Run apichecklist nickname set <NAME> first.")
        }
        Ok(_) => {}
        Err(e) => warning!("Cannot change {}. Err: {}", key, e),
    }
}
