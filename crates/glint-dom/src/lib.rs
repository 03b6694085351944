//! Glint DOM - Node utilities
//!
//! Stateless helpers over a host-supplied node handle: attribute access,
//! class-token manipulation, subtree emptying, and window size probing.
//! The host owns every handle; this layer only reads and mutates through
//! the [`NodeOps`] capability surface for the duration of a call.

mod attr;
mod class;
mod memory;
mod node;
mod viewport;

pub use attr::{get_attr, has_attr, remove_attr, set_attr, AttrValue};
pub use class::{add_class, has_class, remove_class};
pub use memory::MemoryElement;
pub use node::{add_event, empty, is_element, is_text, remove_event, Handler, NodeKind, NodeOps};
pub use viewport::{window_size, ClientArea, ViewportMetrics, WindowSize};
