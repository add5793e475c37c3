//! State of the two search widgets, kept apart from the DOM so that the
//! components only have to forward events and paint what is stored here.

pub mod home;
pub mod nav;

use lookup_api_types::{SearchQuery, SearchResponse, SearchResultItem};

use crate::{
    config::{FailurePolicy, SearchConfig},
    error::{AppError, AppResult},
    sequencer::{RequestSequencer, Ticket},
};

pub use home::HomeWidget;
pub use nav::{Dismissal, NavWidget, PanelState};

/// A request the component has to send for a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub query: SearchQuery,
}

/// What a response means for the result container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Accepted {
    Discard,
    Render(Vec<SearchResultItem>),
    Clear,
}

/// Request bookkeeping shared by both widgets.
#[derive(Clone, Debug)]
pub(crate) struct SearchSession {
    name: &'static str,
    sequencer: RequestSequencer,
    limit: Option<u32>,
    on_failure: FailurePolicy,
}

impl SearchSession {
    pub(crate) fn new(name: &'static str, config: &SearchConfig) -> Self {
        Self {
            name,
            sequencer: RequestSequencer::new(),
            limit: config.limit,
            on_failure: config.on_failure,
        }
    }

    pub(crate) fn dispatch(&mut self, q: &str, lang: Option<String>) -> Dispatch {
        let ticket = self.sequencer.issue();
        let query = SearchQuery::new(q)
            .with_lang(lang)
            .with_limit(self.limit);
        log::debug!("{}: search #{} for {:?}", self.name, ticket.get(), query.q);
        Dispatch { ticket, query }
    }

    pub(crate) fn accept(&self, ticket: Ticket, result: AppResult<SearchResponse>) -> Accepted {
        if !self.sequencer.is_latest(ticket) {
            log::debug!("{}: dropping response to superseded search #{}", self.name, ticket.get());
            return Accepted::Discard;
        }
        match result {
            Ok(response) => Accepted::Render(response.items),
            Err(AppError::Aborted) => Accepted::Discard,
            Err(e) => {
                log::warn!("{}: search #{} failed: {e}", self.name, ticket.get());
                match self.on_failure {
                    FailurePolicy::Clear => Accepted::Clear,
                    FailurePolicy::Keep => Accepted::Discard,
                }
            }
        }
    }
}
