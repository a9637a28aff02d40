use alloc::vec::Vec;

/// Where a listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTarget {
    /// The track element holding all slides.
    Track,
    /// The global window (pointer tracking outside the track, viewport resize).
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    Resize,
}

/// A host-issued handle for one registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// Listener registration provided by the host (DOM, windowing toolkit, test fake).
///
/// The id returned by `add_listener` is the only thing passed back to `remove_listener`, so
/// subscription and unsubscription always refer to the same listener.
pub trait EventHost {
    fn add_listener(&mut self, target: EventTarget, kind: EventKind) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);
}

impl<H: EventHost + ?Sized> EventHost for &mut H {
    fn add_listener(&mut self, target: EventTarget, kind: EventKind) -> ListenerId {
        (**self).add_listener(target, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id);
    }
}

/// Listeners that stay registered for the whole lifetime of a carousel.
///
/// `PointerMove` is registered only between pointer-down and pointer-up.
pub const LIFETIME_LISTENERS: [(EventTarget, EventKind); 4] = [
    (EventTarget::Window, EventKind::Resize),
    (EventTarget::Track, EventKind::PointerDown),
    (EventTarget::Window, EventKind::PointerUp),
    (EventTarget::Window, EventKind::PointerCancel),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binding {
    pub target: EventTarget,
    pub kind: EventKind,
    pub id: ListenerId,
}

/// Tracks which listeners are currently registered with an [`EventHost`].
///
/// At most one listener per [`EventKind`] is active at a time.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    active: Vec<Binding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self, kind: EventKind) -> bool {
        self.active.iter().any(|b| b.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.active.iter()
    }

    /// Registers a listener unless one for `kind` is already active.
    pub fn attach(
        &mut self,
        host: &mut impl EventHost,
        target: EventTarget,
        kind: EventKind,
    ) -> ListenerId {
        if let Some(b) = self.active.iter().find(|b| b.kind == kind) {
            return b.id;
        }
        let id = host.add_listener(target, kind);
        atrace!(?target, ?kind, id = id.0, "listener attached");
        self.active.push(Binding { target, kind, id });
        id
    }

    pub fn attach_all(
        &mut self,
        host: &mut impl EventHost,
        listeners: &[(EventTarget, EventKind)],
    ) {
        for &(target, kind) in listeners {
            self.attach(host, target, kind);
        }
    }

    /// Removes the active listener for `kind`. Returns `false` when none was active.
    pub fn detach(&mut self, host: &mut impl EventHost, kind: EventKind) -> bool {
        let Some(pos) = self.active.iter().position(|b| b.kind == kind) else {
            return false;
        };
        let binding = self.active.remove(pos);
        host.remove_listener(binding.id);
        atrace!(?kind, id = binding.id.0, "listener detached");
        true
    }

    /// Removes every active listener. Returns how many were removed.
    pub fn detach_all(&mut self, host: &mut impl EventHost) -> usize {
        let n = self.active.len();
        for binding in self.active.drain(..) {
            host.remove_listener(binding.id);
        }
        n
    }
}
