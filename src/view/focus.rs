use std::sync::Arc;
use log::debug;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::record::Id;
use super::Ticket;

#[derive(Debug)]
pub enum DetailState<D> {
    Idle,
    Loading(Id),
    Loaded(Id, Arc<D>),
}

impl<D> DetailState<D> {
    pub fn target(&self) -> Option<Id> {
        match self {
            DetailState::Idle          => None,
            DetailState::Loading(id)   => Some(*id),
            DetailState::Loaded(id, _) => Some(*id),
        }
    }

    pub fn payload(&self) -> Option<&Arc<D>> {
        match self {
            DetailState::Loaded(_, d) => Some(d),
            _                         => None,
        }
    }
}

impl<D> Clone for DetailState<D> {
    fn clone(&self) -> Self {
        match self {
            DetailState::Idle          => DetailState::Idle,
            DetailState::Loading(id)   => DetailState::Loading(*id),
            DetailState::Loaded(id, d) => DetailState::Loaded(*id, d.clone()),
        }
    }
}

#[derive(Debug)]
pub struct Focus<D> {
    state:  DetailState<D>,
    ticket: Ticket,
    error:  Option<Error>,
}

impl<D> Focus<D> {
    pub fn new() -> Self {
        Self {
            state:  DetailState::Idle,
            ticket: Ticket::default(),
            error:  None,
        }
    }

    /// Starts loading `id`, or returns `None` if it is already loading or
    /// loaded.
    pub fn begin(&mut self, id: Id) -> Option<Ticket> {
        if self.state.target() == Some(id) {
            return None;
        }
        self.ticket = self.ticket.next();
        self.state  = DetailState::Loading(id);
        self.error  = None;
        Some(self.ticket)
    }

    pub fn complete(&mut self, ticket: Ticket, id: Id, result: Result<D, Error>) -> Result<Outcome, Error> {
        if ticket != self.ticket {
            debug!("discarding stale detail for #{}", id);
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(detail) => {
                self.state = DetailState::Loaded(id, Arc::new(detail));
                Ok(Outcome::Applied)
            }
            Err(e) => {
                self.state = DetailState::Idle;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Returns to `Idle` if the request behind `ticket` was dropped before
    /// it completed.
    pub fn abandon(&mut self, ticket: Ticket) {
        if ticket == self.ticket {
            if let DetailState::Loading(_) = self.state {
                self.state = DetailState::Idle;
            }
        }
    }

    pub fn state(&self) -> &DetailState<D> {
        &self.state
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

impl<D> Default for Focus<D> {
    fn default() -> Self {
        Self::new()
    }
}
