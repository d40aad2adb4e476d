use crate::types::{ApiInfo, Groups, SwaggerLinks};

/// Identifies one load cycle. Later cycles get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// The last successfully loaded snapshot and its link table.
///
/// Both are replaced together or not at all, so a render never mixes groups
/// from one fetch with links from another. A load result is only applied if
/// no newer load has been applied in the meantime.
#[derive(Debug, Clone, Default)]
pub struct ChecklistState {
    snapshot: Groups,
    links: SwaggerLinks,
    issued: u64,
    applied: u64,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &Groups {
        &self.snapshot
    }

    pub fn links(&self) -> &SwaggerLinks {
        &self.links
    }

    pub fn group(&self, name: &str) -> Option<&Vec<ApiInfo>> {
        self.snapshot.get(name)
    }

    pub fn group_names(&self) -> Vec<String> {
        self.snapshot.keys().cloned().collect()
    }

    /// `true` until the first load has been applied.
    pub fn is_empty(&self) -> bool {
        self.applied == 0
    }

    pub fn issue_ticket(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Replaces snapshot and links wholesale. Returns `false` and leaves the
    /// state untouched when `ticket` is older than the last applied load.
    pub fn apply(&mut self, ticket: LoadTicket, snapshot: Groups, links: SwaggerLinks) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }

        self.snapshot = snapshot;
        self.links = links;
        self.applied = ticket.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(name: &str) -> Groups {
        let mut groups = Groups::new();
        groups.insert(name.to_string(), Vec::new());
        groups
    }

    #[test]
    fn test_apply_replaces_both() {
        let mut state = ChecklistState::new();
        assert!(state.is_empty());

        let ticket = state.issue_ticket();
        let mut links = SwaggerLinks::new();
        links.insert("GET_/pets".into(), "/pets/list".into());
        assert!(state.apply(ticket, groups("Pets"), links));

        assert!(!state.is_empty());
        assert_eq!(state.group_names(), vec!["Pets".to_string()]);
        assert_eq!(state.links().len(), 1);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut state = ChecklistState::new();
        let first = state.issue_ticket();
        let second = state.issue_ticket();

        assert!(state.apply(second, groups("Fresh"), SwaggerLinks::new()));
        assert!(!state.apply(first, groups("Stale"), SwaggerLinks::new()));
        assert_eq!(state.group_names(), vec!["Fresh".to_string()]);
    }
}
