/// Activation counter for one controller
///
/// Each activation takes a [`Ticket`]; only the newest ticket may write to the
/// view-model, so a response that arrives after a newer activation is dropped.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

/// Proof of which activation issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    /// Supersedes every ticket issued so far
    pub fn next(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
