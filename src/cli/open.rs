use crate::{Res, info, types::ItemKey, utils, warning};

use super::{load, normalize_method, session};

/// Opens the Swagger documentation of one API in the default browser.
///
/// Relative documentation links are resolved against the origin of the
/// checker backend.
pub async fn open(method: String, path: String) {
    let mut controller = session().await;
    if !load(&mut controller).await {
        return;
    }

    let key = ItemKey::new(&normalize_method(&method), &path);
    let Some(entry) = controller.rendered().find(&key) else {
        warning!("No API {} in the checklist.", key);
        return;
    };

    report(open_link(controller.backend().base_url(), &entry.link));
}

/// Resolves `link` and hands it to the default browser. Returns the opened URL.
pub(super) fn open_link(base_url: &str, link: &str) -> Res<String> {
    let url = utils::resolve_doc_url(base_url, link)?;
    webbrowser::open(&url)?;
    Ok(url)
}

pub(super) fn report(opened: Res<String>) {
    match opened {
        Ok(url) => info!("Opened {}", url),
        Err(e) => warning!("Cannot open documentation. Err: {}", e),
    }
}
