use chrono::Utc;
use reqwest::Url;

use crate::error::ChecklistError;

/// Key used by the Swagger link table: method and path joined by `_`.
pub fn composite_key(http_method: &str, path: &str) -> String {
    format!("{}_{}", http_method, path)
}

/// Strips every leading `/` from a Swagger fragment.
pub fn normalize_fragment(fragment: &str) -> &str {
    fragment.trim_start_matches('/')
}

/// Joins the documentation base with a fragment.
///
/// Separators are trimmed on both sides of the join and exactly one `/` is put
/// back, so `…#` and `…#/` bases produce the same link.
pub fn doc_link(swagger_base: &str, fragment: &str) -> String {
    format!(
        "{}/{}",
        swagger_base.trim_end_matches('/'),
        normalize_fragment(fragment)
    )
}

/// One display line for an item: `GET | /pets - list pets`.
pub fn format_api_text(http_method: &str, path: &str, description: &str) -> String {
    format!("{} | {} - {}", http_method, path, description)
}

/// Turns a rendered link into something a browser can open.
///
/// Absolute links are returned unchanged; relative ones are resolved against
/// the origin of the backend base URL, the same way the browser resolves the
/// anchor against the page that served the checklist.
pub fn resolve_doc_url(backend_base: &str, link: &str) -> Result<String, ChecklistError> {
    if let Ok(url) = Url::parse(link) {
        return Ok(url.to_string());
    }

    let base = Url::parse(backend_base).map_err(|e| ChecklistError::InvalidUrl {
        url: backend_base.to_string(),
        reason: e.to_string(),
    })?;

    base.join(link)
        .map(|u| u.to_string())
        .map_err(|e| ChecklistError::InvalidUrl {
            url: link.to_string(),
            reason: e.to_string(),
        })
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn unix_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
