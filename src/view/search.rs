use log::debug;
use oracle_api::Batch;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::sync::Protocols;
use super::Ticket;

#[derive(Clone, Debug)]
pub struct ResultSet<R> {
    pub query:     String,
    pub records:   Vec<R>,
    pub protocols: Protocols,
}

#[derive(Clone, Debug)]
pub enum Overlay<R> {
    Inactive,
    Active(ResultSet<R>),
}

impl<R> Overlay<R> {
    pub fn is_active(&self) -> bool {
        matches!(self, Overlay::Active(_))
    }

    pub fn result(&self) -> Option<&ResultSet<R>> {
        match self {
            Overlay::Active(set) => Some(set),
            Overlay::Inactive    => None,
        }
    }
}

impl<R> Default for Overlay<R> {
    fn default() -> Self {
        Overlay::Inactive
    }
}

#[derive(Debug)]
pub struct Search<R> {
    overlay: Overlay<R>,
    ticket:  Ticket,
    error:   Option<Error>,
}

impl<R: Record> Search<R> {
    pub fn new() -> Self {
        Self {
            overlay: Overlay::Inactive,
            ticket:  Ticket::default(),
            error:   None,
        }
    }

    pub fn begin(&mut self, query: &str) -> Option<Ticket> {
        if query.trim().is_empty() {
            return None;
        }
        self.ticket = self.ticket.next();
        Some(self.ticket)
    }

    pub fn complete(&mut self, ticket: Ticket, query: &str, result: Result<Batch<R>, Error>) -> Result<Outcome, Error> {
        if ticket != self.ticket {
            debug!("discarding stale search result for '{}'", query);
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(batch) => {
                self.overlay = Overlay::Active(ResultSet {
                    query:     query.to_owned(),
                    protocols: batch.protocols.into_iter().collect(),
                    records:   batch.records,
                });
                self.error = None;
                Ok(Outcome::Applied)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Drops the overlay and invalidates any search still in flight.
    pub fn reset(&mut self) {
        self.ticket  = self.ticket.next();
        self.overlay = Overlay::Inactive;
        self.error   = None;
    }

    pub fn overlay(&self) -> &Overlay<R> {
        &self.overlay
    }

    pub fn query(&self) -> Option<&str> {
        self.overlay.result().map(|set| set.query.as_str())
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

impl<R: Record> Default for Search<R> {
    fn default() -> Self {
        Self::new()
    }
}
