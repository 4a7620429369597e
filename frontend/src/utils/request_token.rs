use std::{cell::Cell, rc::Rc};

/// Generation counter shared by everything that can start a fetch for one
/// view. A response is applied only while its ticket is still the latest.
#[derive(Clone, Debug, Default)]
pub struct RequestToken {
    generation: Rc<Cell<u64>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RequestTicket(next)
    }

    /// Drops every outstanding ticket without starting a new request.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.get() == ticket.0
    }
}
