pub mod document;
pub mod element;
pub mod event;
pub mod text;
pub mod types;

pub use document::{DispatchError, DispatchOutcome, Document, HandlerResult, ListenerId};
pub use element::{
    find_element, find_element_mut, path_to, query_all, query_first, walk_mut, Element,
};
pub use event::{Event, EventKind, MouseButton};
pub use types::*;
