use crate::types::Groups;

/// Label of the default option.
pub const ALL_GROUPS: &str = "All Groups";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupSelection {
    #[default]
    All,
    Group(String),
}

/// The group dropdown: "All Groups" followed by every group name.
///
/// Selecting only changes which part of the snapshot is rendered; it never
/// triggers a fetch.
#[derive(Debug, Clone, Default)]
pub struct GroupFilter {
    groups: Vec<String>,
    selection: GroupSelection,
}

impl GroupFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the options after a load. A selected group that no longer
    /// exists falls back to "All Groups".
    pub fn populate(&mut self, groups: Vec<String>) {
        if let GroupSelection::Group(name) = &self.selection {
            if !groups.contains(name) {
                self.selection = GroupSelection::All;
            }
        }
        self.groups = groups;
    }

    pub fn options(&self) -> Vec<&str> {
        std::iter::once(ALL_GROUPS)
            .chain(self.groups.iter().map(String::as_str))
            .collect()
    }

    pub fn selection(&self) -> &GroupSelection {
        &self.selection
    }

    /// Selects by option value. Empty, `all` and the default label select all
    /// groups; unknown names are ignored and return `false`.
    pub fn select(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || value == ALL_GROUPS || value.eq_ignore_ascii_case("all") {
            self.selection = GroupSelection::All;
            return true;
        }

        if self.groups.iter().any(|g| g == value) {
            self.selection = GroupSelection::Group(value.to_string());
            return true;
        }

        false
    }

    /// The part of `snapshot` the current selection shows.
    pub fn view(&self, snapshot: &Groups) -> Groups {
        match &self.selection {
            GroupSelection::All => snapshot.clone(),
            GroupSelection::Group(name) => match snapshot.get(name) {
                Some(apis) => {
                    let mut groups = Groups::new();
                    groups.insert(name.clone(), apis.clone());
                    groups
                }
                None => snapshot.clone(),
            },
        }
    }
}
