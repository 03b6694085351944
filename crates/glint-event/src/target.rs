//! Tiered listener binding
//!
//! Three registration tiers, probed in fixed order, first match wins:
//! standard add/remove listener, legacy attach/detach keyed by `"on" + type`,
//! and last-resort assignment of the `"on" + type` property. The property
//! tier holds one handler per type; rebinding overwrites, and [`bind`]
//! reports that as [`Bound::Replaced`] instead of hiding it.

use std::fmt;
use std::rc::Rc;

/// Registered event callback. Clones share identity; tiers 1 and 2 match
/// registrations by that identity on removal.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback. Only reference hosts and tests dispatch.
    pub fn invoke(&self) {
        (self.0)()
    }

    /// Identity comparison.
    pub fn same(&self, other: &Handler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Capability surface of a bindable host object.
///
/// Each tier is a probe plus its operations; the defaults stand for
/// "capability absent". A host exposes whichever tiers it actually has.
pub trait EventTarget {
    /// Tier 1: standard listener registration with a capture flag.
    fn has_listener_api(&self) -> bool {
        false
    }

    fn add_listener(&mut self, event_type: &str, handler: &Handler, capture: bool) {
        let _ = (event_type, handler, capture);
    }

    fn remove_listener(&mut self, event_type: &str, handler: &Handler, capture: bool) {
        let _ = (event_type, handler, capture);
    }

    /// Tier 2: legacy registration keyed by the `"on" + type` name. No
    /// capture phase; detach must see the registered handler identity.
    fn has_attach_api(&self) -> bool {
        false
    }

    fn attach(&mut self, on_name: &str, handler: &Handler) {
        let _ = (on_name, handler);
    }

    fn detach(&mut self, on_name: &str, handler: &Handler) {
        let _ = (on_name, handler);
    }

    /// Tier 3: direct `"on" + type` property assignment. One handler per
    /// type; returns the handler that was displaced, if any.
    fn has_on_property(&self) -> bool {
        false
    }

    fn set_on_property(&mut self, on_name: &str, handler: Option<Handler>) -> Option<Handler> {
        let _ = (on_name, handler);
        None
    }
}

/// How a [`bind`] call landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Registered alongside any existing handlers.
    Added,
    /// Property tier displaced a previously bound handler.
    Replaced,
}

/// Binding failure.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("target exposes no listener registration capability")]
    Unsupported,
}

fn on_name(event_type: &str) -> String {
    format!("on{}", event_type)
}

/// Bind `handler` for `event_type`, taking the best available tier.
///
/// Tiers 2 and 3 have no capture phase; callers needing capture must go
/// through the standard capability directly. `Bound::Replaced` is the
/// documented surface of the property tier's one-handler limit.
pub fn bind(
    target: &mut impl EventTarget,
    event_type: &str,
    handler: &Handler,
) -> Result<Bound, BindError> {
    if target.has_listener_api() {
        target.add_listener(event_type, handler, false);
        return Ok(Bound::Added);
    }

    if target.has_attach_api() {
        target.attach(&on_name(event_type), handler);
        return Ok(Bound::Added);
    }

    if target.has_on_property() {
        let displaced = target.set_on_property(&on_name(event_type), Some(handler.clone()));
        if displaced.is_some() {
            tracing::debug!("on{} rebound, previous handler displaced", event_type);
            return Ok(Bound::Replaced);
        }
        return Ok(Bound::Added);
    }

    Err(BindError::Unsupported)
}

/// Unbind a handler bound with [`bind`], probing the same tier order.
pub fn unbind(
    target: &mut impl EventTarget,
    event_type: &str,
    handler: &Handler,
) -> Result<(), BindError> {
    if target.has_listener_api() {
        target.remove_listener(event_type, handler, false);
        return Ok(());
    }

    if target.has_attach_api() {
        target.detach(&on_name(event_type), handler);
        return Ok(());
    }

    if target.has_on_property() {
        target.set_on_property(&on_name(event_type), None);
        return Ok(());
    }

    Err(BindError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryTarget, Tier};

    #[test]
    fn test_standard_tier_stacks_handlers() {
        let mut target = MemoryTarget::new(Tier::Standard);
        let a = Handler::new(|| {});
        let b = Handler::new(|| {});

        assert_eq!(bind(&mut target, "click", &a).unwrap(), Bound::Added);
        assert_eq!(bind(&mut target, "click", &b).unwrap(), Bound::Added);
        assert_eq!(target.bound_count("click"), 2);

        unbind(&mut target, "click", &a).unwrap();
        assert_eq!(target.bound_count("click"), 1);
    }

    #[test]
    fn test_attach_tier_uses_on_name() {
        let mut target = MemoryTarget::new(Tier::LegacyAttach);
        let handler = Handler::new(|| {});

        bind(&mut target, "scroll", &handler).unwrap();
        assert_eq!(target.bound_count("scroll"), 1);
        assert!(target.attached_names().contains(&"onscroll".to_string()));

        // Detach with a different identity leaves the registration alone
        let stranger = Handler::new(|| {});
        unbind(&mut target, "scroll", &stranger).unwrap();
        assert_eq!(target.bound_count("scroll"), 1);

        unbind(&mut target, "scroll", &handler).unwrap();
        assert_eq!(target.bound_count("scroll"), 0);
    }

    #[test]
    fn test_property_tier_reports_replacement() {
        let mut target = MemoryTarget::new(Tier::OnProperty);
        let a = Handler::new(|| {});
        let b = Handler::new(|| {});

        assert_eq!(bind(&mut target, "click", &a).unwrap(), Bound::Added);
        assert_eq!(bind(&mut target, "click", &b).unwrap(), Bound::Replaced);

        // Only the newest handler is active
        assert_eq!(target.bound_count("click"), 1);
        assert!(target.on_property("onclick").unwrap().same(&b));
    }

    #[test]
    fn test_property_tier_unbind_clears() {
        let mut target = MemoryTarget::new(Tier::OnProperty);
        let handler = Handler::new(|| {});

        bind(&mut target, "click", &handler).unwrap();
        unbind(&mut target, "click", &handler).unwrap();
        assert!(target.on_property("onclick").is_none());
    }

    #[test]
    fn test_no_tier_is_an_error() {
        let mut target = MemoryTarget::new(Tier::None);
        let handler = Handler::new(|| {});

        assert!(matches!(bind(&mut target, "click", &handler), Err(BindError::Unsupported)));
        assert!(matches!(unbind(&mut target, "click", &handler), Err(BindError::Unsupported)));
    }
}
