//! Glint Event - Cross-host event utilities
//!
//! Listener binding over a tiered capability fallback chain, and
//! normalization of target, wheel delta, default action, and propagation
//! across standard and legacy event shapes. Handles are host-owned; this
//! layer never dispatches events itself.

mod event;
mod memory;
mod target;

pub use event::{
    prevent_default, resolve_event, stop_propagation, target_of, wheel_delta, EventOps,
    WHEEL_DETAIL_SCALE,
};
pub use memory::{MemoryEvent, MemoryTarget, Tier};
pub use target::{bind, unbind, BindError, Bound, EventTarget, Handler};
