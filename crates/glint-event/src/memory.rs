//! In-memory reference hosts
//!
//! A tier-selectable bind target and a flag-recording event handle, so every
//! fallback path is observable without a real host environment.

use std::collections::HashMap;

use crate::target::{EventTarget, Handler};
use crate::EventOps;

/// Which registration capability a [`MemoryTarget`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Standard,
    LegacyAttach,
    OnProperty,
    /// No registration capability at all.
    None,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Standard => "standard",
            Tier::LegacyAttach => "legacy-attach",
            Tier::OnProperty => "on-property",
            Tier::None => "none",
        }
    }
}

/// Bind target exposing exactly one registration tier.
#[derive(Debug)]
pub struct MemoryTarget {
    tier: Tier,
    listeners: Vec<(String, Handler, bool)>,
    attached: Vec<(String, Handler)>,
    properties: HashMap<String, Handler>,
}

impl MemoryTarget {
    pub fn new(tier: Tier) -> Self {
        tracing::trace!("memory target with {} tier", tier.as_str());
        Self {
            tier,
            listeners: Vec::new(),
            attached: Vec::new(),
            properties: HashMap::new(),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Handlers currently registered for an event type, across whichever
    /// store the tier uses.
    pub fn bound_count(&self, event_type: &str) -> usize {
        let on = format!("on{}", event_type);
        match self.tier {
            Tier::Standard => self.listeners.iter().filter(|(t, _, _)| t == event_type).count(),
            Tier::LegacyAttach => self.attached.iter().filter(|(n, _)| *n == on).count(),
            Tier::OnProperty => usize::from(self.properties.contains_key(&on)),
            Tier::None => 0,
        }
    }

    /// Names the legacy tier has attachments under.
    pub fn attached_names(&self) -> Vec<String> {
        self.attached.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Current `"on" + type` property handler, if assigned.
    pub fn on_property(&self, on_name: &str) -> Option<&Handler> {
        self.properties.get(on_name)
    }
}

impl EventTarget for MemoryTarget {
    fn has_listener_api(&self) -> bool {
        self.tier == Tier::Standard
    }

    fn add_listener(&mut self, event_type: &str, handler: &Handler, capture: bool) {
        self.listeners.push((event_type.to_string(), handler.clone(), capture));
    }

    fn remove_listener(&mut self, event_type: &str, handler: &Handler, capture: bool) {
        self.listeners
            .retain(|(t, h, c)| !(t == event_type && h.same(handler) && *c == capture));
    }

    fn has_attach_api(&self) -> bool {
        self.tier == Tier::LegacyAttach
    }

    fn attach(&mut self, on_name: &str, handler: &Handler) {
        self.attached.push((on_name.to_string(), handler.clone()));
    }

    fn detach(&mut self, on_name: &str, handler: &Handler) {
        self.attached.retain(|(n, h)| !(n == on_name && h.same(handler)));
    }

    fn has_on_property(&self) -> bool {
        self.tier == Tier::OnProperty
    }

    fn set_on_property(&mut self, on_name: &str, handler: Option<Handler>) -> Option<Handler> {
        match handler {
            Some(h) => self.properties.insert(on_name.to_string(), h),
            None => self.properties.remove(on_name),
        }
    }
}

/// Event handle double. Node references are plain ids; the flag fields
/// record what the normalization layer wrote.
#[derive(Debug, Default)]
pub struct MemoryEvent {
    standard_methods: bool,
    target: Option<u32>,
    legacy_source: Option<u32>,
    wheel_delta: Option<f64>,
    wheel_detail: Option<f64>,
    default_prevented: bool,
    propagation_stopped: bool,
    return_value: Option<bool>,
    cancel_bubble: Option<bool>,
}

impl MemoryEvent {
    /// Event with the standard method surface.
    pub fn standard() -> Self {
        Self { standard_methods: true, ..Default::default() }
    }

    /// Event with only the legacy flag fields.
    pub fn legacy() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, id: u32) -> Self {
        self.target = Some(id);
        self
    }

    pub fn with_legacy_source(mut self, id: u32) -> Self {
        self.legacy_source = Some(id);
        self
    }

    pub fn with_wheel_delta(mut self, delta: f64) -> Self {
        self.wheel_delta = Some(delta);
        self
    }

    pub fn with_wheel_detail(mut self, detail: f64) -> Self {
        self.wheel_detail = Some(detail);
        self
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn return_value(&self) -> Option<bool> {
        self.return_value
    }

    pub fn cancel_bubble(&self) -> Option<bool> {
        self.cancel_bubble
    }
}

impl EventOps for MemoryEvent {
    type Target = u32;

    fn target(&self) -> Option<&u32> {
        self.target.as_ref()
    }

    fn legacy_source(&self) -> Option<&u32> {
        self.legacy_source.as_ref()
    }

    fn has_prevent_default(&self) -> bool {
        self.standard_methods
    }

    fn call_prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn set_return_value(&mut self, allow: bool) {
        self.return_value = Some(allow);
    }

    fn has_stop_propagation(&self) -> bool {
        self.standard_methods
    }

    fn call_stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn set_cancel_bubble(&mut self, cancel: bool) {
        self.cancel_bubble = Some(cancel);
    }

    fn wheel_delta(&self) -> Option<f64> {
        self.wheel_delta
    }

    fn wheel_detail(&self) -> Option<f64> {
        self.wheel_detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_is_exclusive() {
        let standard = MemoryTarget::new(Tier::Standard);
        assert!(standard.has_listener_api());
        assert!(!standard.has_attach_api());
        assert!(!standard.has_on_property());

        let bare = MemoryTarget::new(Tier::None);
        assert!(!bare.has_listener_api());
        assert!(!bare.has_attach_api());
        assert!(!bare.has_on_property());
    }

    #[test]
    fn test_event_builder_fields() {
        let event = MemoryEvent::standard().with_target(4).with_wheel_delta(120.0);

        assert_eq!(event.target(), Some(&4));
        assert_eq!(EventOps::wheel_delta(&event), Some(120.0));
        assert!(!event.default_prevented());
    }
}
