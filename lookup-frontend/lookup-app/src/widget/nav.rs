use lookup_api_types::{SearchResponse, SearchResultItem};

use super::{Accepted, Dispatch, SearchSession};
use crate::{config::SearchConfig, error::AppResult, sequencer::Ticket};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Nothing shown, no click listener.
    #[default]
    Closed,
    /// Results shown with exactly one click listener waiting to close them.
    Open,
}

/// What the component has to do with the document click listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Arm,
    Disarm,
    Unchanged,
}

/// The navigation bar search. Results open a panel that the next click
/// anywhere on the page closes again.
#[derive(Clone, Debug)]
pub struct NavWidget {
    session: SearchSession,
    items: Vec<SearchResultItem>,
    state: PanelState,
}

impl NavWidget {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            session: SearchSession::new("nav search", config),
            items: Vec::new(),
            state: PanelState::Closed,
        }
    }

    /// `root_lang` is the `lang` attribute of the document element at the
    /// time of the keystroke.
    pub fn keystroke(&mut self, value: &str, root_lang: Option<String>) -> Dispatch {
        self.session.dispatch(value, root_lang)
    }

    /// `None` when the response was dropped and nothing changed.
    pub fn receive(
        &mut self,
        ticket: Ticket,
        result: AppResult<SearchResponse>,
    ) -> Option<Dismissal> {
        match self.session.accept(ticket, result) {
            Accepted::Discard => None,
            Accepted::Render(items) => {
                self.items = items;
                Some(self.open())
            }
            Accepted::Clear => Some(self.close()),
        }
    }

    /// A click somewhere in the document.
    pub fn dismiss(&mut self) -> Dismissal {
        self.close()
    }

    fn open(&mut self) -> Dismissal {
        match self.state {
            PanelState::Open => Dismissal::Unchanged,
            PanelState::Closed => {
                self.state = PanelState::Open;
                Dismissal::Arm
            }
        }
    }

    // A closed panel never holds items.
    fn close(&mut self) -> Dismissal {
        self.items.clear();
        match self.state {
            PanelState::Closed => Dismissal::Unchanged,
            PanelState::Open => {
                self.state = PanelState::Closed;
                Dismissal::Disarm
            }
        }
    }

    pub fn items(&self) -> &[SearchResultItem] {
        &self.items
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }
}
