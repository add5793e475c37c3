use lookup_api_types::{SearchResponse, SearchResultItem};

use super::{Accepted, Dispatch, SearchSession};
use crate::{config::SearchConfig, error::AppResult, sequencer::Ticket};

/// The landing page search: every keystroke searches, results replace the
/// container wholesale.
#[derive(Clone, Debug)]
pub struct HomeWidget {
    session: SearchSession,
    items: Vec<SearchResultItem>,
}

impl HomeWidget {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            session: SearchSession::new("home search", config),
            items: Vec::new(),
        }
    }

    pub fn keystroke(&mut self, value: &str) -> Dispatch {
        self.session.dispatch(value, None)
    }

    /// Returns whether the shown results changed.
    pub fn receive(&mut self, ticket: Ticket, result: AppResult<SearchResponse>) -> bool {
        match self.session.accept(ticket, result) {
            Accepted::Discard => false,
            Accepted::Render(items) => {
                self.items = items;
                true
            }
            Accepted::Clear => {
                self.items.clear();
                true
            }
        }
    }

    pub fn items(&self) -> &[SearchResultItem] {
        &self.items
    }
}
