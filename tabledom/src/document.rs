//! Document root and event listener registry.
//!
//! Listeners are keyed by target element id and event kind. Dispatch walks
//! from the target up to the root, invoking matching listeners in
//! registration order at each level. Every handler receives exclusive
//! access to the whole tree, so reactions never overlap.

use std::error::Error;
use std::fmt;

use crate::element::{path_to, Element};
use crate::event::{Event, EventKind};

/// Result returned by a listener.
pub type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

type Handler = Box<dyn FnMut(&mut Element, &Event) -> HandlerResult>;

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__listener_{}", self.0)
    }
}

struct Listener {
    id: ListenerId,
    target: String,
    kind: EventKind,
    handler: Handler,
}

// =============================================================================
// DispatchOutcome / DispatchError
// =============================================================================

/// Result of a successful dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No listener matched the event.
    NotHandled,
    /// This many listeners ran.
    Handled(usize),
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchOutcome::NotHandled)
    }
}

/// Errors that abort a dispatch.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The event names an element that is not in the tree.
    #[error("No element with id {0:?}")]
    UnknownTarget(String),

    /// A listener failed. Listeners after it did not run.
    #[error("Listener on {target:?} failed: {source}")]
    Handler {
        /// Element the failing listener was attached to.
        target: String,
        source: Box<dyn Error + Send + Sync>,
    },
}

// =============================================================================
// Document
// =============================================================================

pub struct Document {
    root: Element,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Register `handler` for events of `kind` targeted at (or bubbling
    /// through) the element with id `target`.
    pub fn add_listener(
        &mut self,
        target: impl Into<String>,
        kind: EventKind,
        handler: impl FnMut(&mut Element, &Event) -> HandlerResult + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        let target = target.into();
        log::debug!("add listener {id} for {kind:?} on {target}");
        self.listeners.push(Listener {
            id,
            target,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners attached directly to `target`.
    pub fn listeners_on(&self, target: &str) -> usize {
        self.listeners.iter().filter(|l| l.target == target).count()
    }

    /// Dispatch an event, bubbling from its target to the root.
    ///
    /// Events without a target are not handled. The first listener error
    /// stops dispatch and is returned.
    pub fn dispatch(&mut self, event: &Event) -> Result<DispatchOutcome, DispatchError> {
        let Some(target) = event.target() else {
            return Ok(DispatchOutcome::NotHandled);
        };

        let Some(path) = path_to(&self.root, target) else {
            return Err(DispatchError::UnknownTarget(target.to_string()));
        };

        let kind = event.kind();
        let mut handled = 0;

        for element_id in path.iter().rev() {
            for listener in self
                .listeners
                .iter_mut()
                .filter(|l| l.kind == kind && l.target == *element_id)
            {
                if let Err(source) = (listener.handler)(&mut self.root, event) {
                    log::warn!("listener {} on {element_id} failed: {source}", listener.id);
                    return Err(DispatchError::Handler {
                        target: element_id.clone(),
                        source,
                    });
                }
                handled += 1;
            }
        }

        if handled == 0 {
            Ok(DispatchOutcome::NotHandled)
        } else {
            Ok(DispatchOutcome::Handled(handled))
        }
    }
}
