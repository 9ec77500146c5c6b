//! Seeded and progress notifications

use std::fmt;

/// Which notification a listener wants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The generator left the not-ready state
    Seeded,
    /// Entropy arrived while the generator was not ready
    Progress,
}

/// Payload delivered to listeners
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RandomEvent {
    /// Strength in bits at the moment of seeding
    Seeded {
        /// Best of reseed strength and pooled strength
        strength: u32,
    },
    /// Fraction of the default paranoia threshold reached, in `[0, 1]`
    Progress {
        /// Progress value
        progress: f64,
    },
}

impl RandomEvent {
    /// The kind this event is delivered under
    pub fn kind(&self) -> EventKind {
        match self {
            RandomEvent::Seeded { .. } => EventKind::Seeded,
            RandomEvent::Progress { .. } => EventKind::Progress,
        }
    }
}

/// Handle returned by `subscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&RandomEvent) + Send>;

struct Listener {
    id: ListenerId,
    kind: EventKind,
    callback: Callback,
}

/// Registered listeners in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, kind: EventKind, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener { id, kind, callback });
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    pub(crate) fn fire(&mut self, event: RandomEvent) {
        let kind = event.kind();
        for listener in self.entries.iter_mut().filter(|l| l.kind == kind) {
            (listener.callback)(&event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
