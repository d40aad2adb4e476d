use std::fmt;

use colored::Colorize;
use tabled::Table;

use crate::{
    config::Settings,
    types::{ChecklistRow, Groups, ItemKey, SwaggerLinks},
    utils,
};

use super::ToggleEvent;

/// The checkbox of one rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub key: ItemKey,
    pub checked: bool,
}

/// One line of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// 1-based position in the whole list; the address used to toggle it.
    pub index: usize,
    pub group: String,
    pub text: String,
    pub link: String,
    /// Checked state from the snapshot this entry was rendered from.
    pub checked: bool,
    pub nickname: Option<String>,
    pub control: ToggleControl,
}

impl RenderedEntry {
    pub fn css_class(&self) -> &'static str {
        if self.checked { "checked" } else { "unchecked" }
    }

    /// The event a click on this entry's checkbox produces.
    pub fn toggle_event(&self) -> ToggleEvent {
        ToggleEvent {
            index: self.index,
            key: self.control.key.clone(),
            checked: !self.control.checked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroup {
    pub heading: String,
    pub entries: Vec<RenderedEntry>,
}

/// What is currently on screen. Rebuilt from scratch on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    pub groups: Vec<RenderedGroup>,
}

impl RenderedList {
    pub fn entries(&self) -> impl Iterator<Item = &RenderedEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry(&self, index: usize) -> Option<&RenderedEntry> {
        self.entries().find(|e| e.index == index)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut RenderedEntry> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.entries.iter_mut())
            .find(|e| e.index == index)
    }

    /// First entry bound to `key`.
    pub fn find(&self, key: &ItemKey) -> Option<&RenderedEntry> {
        self.entries().find(|e| &e.control.key == key)
    }
}

/// Builds the display list for `groups`.
///
/// Every item gets exactly one entry, in group order then item order. The
/// documentation link is looked up by exact composite key and falls back to
/// an empty fragment; badges are only shown when nickname tracking is on.
pub fn render(groups: &Groups, links: &SwaggerLinks, settings: &Settings) -> RenderedList {
    let mut index = 0;
    let groups = groups
        .iter()
        .map(|(name, apis)| RenderedGroup {
            heading: name.clone(),
            entries: apis
                .iter()
                .map(|api| {
                    index += 1;
                    let key = api.key();
                    let fragment = links
                        .get(&key.composite_key())
                        .map(String::as_str)
                        .unwrap_or("");
                    let nickname = if settings.track_nickname {
                        api.checked_by().map(str::to_string)
                    } else {
                        None
                    };

                    RenderedEntry {
                        index,
                        group: name.clone(),
                        text: utils::format_api_text(&api.http_method, &api.path, &api.description),
                        link: utils::doc_link(&settings.swagger_base, fragment),
                        checked: api.checked,
                        nickname,
                        control: ToggleControl {
                            key,
                            checked: api.checked,
                        },
                    }
                })
                .collect(),
        })
        .collect();

    RenderedList { groups }
}

impl fmt::Display for RenderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return writeln!(f, "No APIs to show.");
        }

        for group in &self.groups {
            writeln!(f, "{}", group.heading.bold().underline())?;

            let rows: Vec<ChecklistRow> = group
                .entries
                .iter()
                .map(|e| ChecklistRow {
                    index: e.index,
                    status: if e.control.checked { "[x]" } else { "[ ]" }.to_string(),
                    api: if e.checked {
                        e.text.green().to_string()
                    } else {
                        e.text.clone()
                    },
                    nickname: e.nickname.clone().unwrap_or_default(),
                    link: e.link.clone(),
                })
                .collect();

            writeln!(f, "{}\n", Table::new(rows))?;
        }

        Ok(())
    }
}
