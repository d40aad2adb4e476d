use tracing::{debug, error};

use crate::{
    backend::ChecklistBackend,
    error::ChecklistError,
    types::{Groups, SwaggerLinks},
};

use super::{ChecklistController, LoadTicket, MSG_LOAD_FAILED};

impl<B: ChecklistBackend> ChecklistController<B> {
    /// Fetches groups then links and, when both succeed, replaces the
    /// snapshot, refreshes the group dropdown and re-renders.
    ///
    /// On failure the previous snapshot stays on screen and an error notice is
    /// raised. Returns whether a new snapshot was applied.
    pub async fn load_groups(&mut self) -> bool {
        let ticket = self.begin_load();
        match self.fetch_snapshot().await {
            Ok((groups, links)) => self.apply_load(ticket, groups, links),
            Err(e) => {
                error!(error = %e, remote = e.is_remote(), "error fetching API groups");
                self.notices.error(MSG_LOAD_FAILED);
                false
            }
        }
    }

    /// Reserves a ticket for a load whose result is applied later.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state.issue_ticket()
    }

    /// The two sequential reads of a load cycle, without touching state.
    pub async fn fetch_snapshot(&self) -> Result<(Groups, SwaggerLinks), ChecklistError> {
        let groups = self.backend.fetch_groups().await?;
        let links = self.backend.fetch_swagger_links().await?;
        Ok((groups, links))
    }

    /// Applies a finished load. Results overtaken by a newer load are dropped.
    pub fn apply_load(&mut self, ticket: LoadTicket, groups: Groups, links: SwaggerLinks) -> bool {
        if !self.state.apply(ticket, groups, links) {
            debug!(?ticket, "dropping stale load result");
            return false;
        }

        self.filter.populate(self.state.group_names());
        self.repaint();
        true
    }
}
