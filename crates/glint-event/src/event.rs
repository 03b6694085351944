//! Event normalization
//!
//! One read surface over the two event shapes in the wild: the standard one
//! (target, preventDefault, stopPropagation, wheel delta) and the legacy one
//! (source field, return-value flag, cancel-bubble flag, per-notch detail).

/// Legacy per-notch detail to wheel-delta scale. The two source fields also
/// disagree on sign, hence the negation in [`wheel_delta`].
pub const WHEEL_DETAIL_SCALE: f64 = 40.0;

/// Capability surface of a host event handle.
///
/// Probes default to "absent"; a host implements whichever side it has.
/// The flag setters are the legacy write path and are only touched when the
/// matching standard method is missing.
pub trait EventOps {
    /// Host node reference type carried by the event.
    type Target;

    /// Standard target reference.
    fn target(&self) -> Option<&Self::Target>;

    /// Legacy source-element field.
    fn legacy_source(&self) -> Option<&Self::Target> {
        None
    }

    /// Probe for the standard default-action suppression method.
    fn has_prevent_default(&self) -> bool {
        false
    }

    fn call_prevent_default(&mut self) {}

    /// Legacy default-action flag; `false` suppresses.
    fn set_return_value(&mut self, allow: bool) {
        let _ = allow;
    }

    /// Probe for the standard propagation-stop method.
    fn has_stop_propagation(&self) -> bool {
        false
    }

    fn call_stop_propagation(&mut self) {}

    /// Legacy propagation flag; `true` stops bubbling.
    fn set_cancel_bubble(&mut self, cancel: bool) {
        let _ = cancel;
    }

    /// Standard wheel delta, multiples of ±120 per notch.
    fn wheel_delta(&self) -> Option<f64> {
        None
    }

    /// Legacy per-notch detail, multiples of ±3, opposite sign.
    fn wheel_detail(&self) -> Option<f64> {
        None
    }
}

/// The event to act on: the one passed in, else the caller-supplied ambient
/// current event. The ambient event is an explicit argument here — this
/// layer reads no global state.
pub fn resolve_event<E>(event: Option<E>, ambient: Option<E>) -> Option<E> {
    event.or(ambient)
}

/// Target of the event, standard field first, legacy source field second.
pub fn target_of<E: EventOps>(event: &E) -> Option<&E::Target> {
    event.target().or_else(|| event.legacy_source())
}

/// Normalized wheel delta. Legacy detail is scaled by
/// [`WHEEL_DETAIL_SCALE`] and sign-flipped to match the standard convention.
pub fn wheel_delta<E: EventOps>(event: &E) -> Option<f64> {
    event
        .wheel_delta()
        .or_else(|| event.wheel_detail().map(|detail| -detail * WHEEL_DETAIL_SCALE))
}

/// Suppress the event's default action through whichever shape exists.
pub fn prevent_default(event: &mut impl EventOps) {
    if event.has_prevent_default() {
        event.call_prevent_default();
    } else {
        event.set_return_value(false);
    }
}

/// Stop the event's propagation through whichever shape exists.
///
/// When the standard method is missing the legacy cancel-bubble flag is
/// written directly.
pub fn stop_propagation(event: &mut impl EventOps) {
    if event.has_stop_propagation() {
        event.call_stop_propagation();
    } else {
        event.set_cancel_bubble(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryEvent;

    #[test]
    fn test_resolve_event_prefers_explicit() {
        let explicit = MemoryEvent::standard().with_target(1);
        let ambient = MemoryEvent::standard().with_target(2);

        let picked = resolve_event(Some(explicit), Some(ambient)).unwrap();
        assert_eq!(target_of(&picked), Some(&1));
    }

    #[test]
    fn test_resolve_event_falls_back_to_ambient() {
        let ambient = MemoryEvent::standard().with_target(7);

        let picked = resolve_event(None, Some(ambient)).unwrap();
        assert_eq!(target_of(&picked), Some(&7));

        assert!(resolve_event::<MemoryEvent>(None, None).is_none());
    }

    #[test]
    fn test_target_of_legacy_source() {
        let event = MemoryEvent::legacy().with_legacy_source(9);
        assert_eq!(target_of(&event), Some(&9));
    }

    #[test]
    fn test_wheel_delta_standard() {
        let event = MemoryEvent::standard().with_wheel_delta(240.0);
        assert_eq!(wheel_delta(&event), Some(240.0));
    }

    #[test]
    fn test_wheel_delta_from_detail() {
        // Three notches backward in legacy terms
        let event = MemoryEvent::legacy().with_wheel_detail(3.0);
        assert_eq!(wheel_delta(&event), Some(-120.0));

        let event = MemoryEvent::legacy().with_wheel_detail(-3.0);
        assert_eq!(wheel_delta(&event), Some(120.0));
    }

    #[test]
    fn test_prevent_default_both_shapes() {
        let mut event = MemoryEvent::standard();
        prevent_default(&mut event);
        assert!(event.default_prevented());

        let mut event = MemoryEvent::legacy();
        prevent_default(&mut event);
        assert_eq!(event.return_value(), Some(false));
    }

    #[test]
    fn test_stop_propagation_both_shapes() {
        let mut event = MemoryEvent::standard();
        stop_propagation(&mut event);
        assert!(event.propagation_stopped());

        let mut event = MemoryEvent::legacy();
        stop_propagation(&mut event);
        assert_eq!(event.cancel_bubble(), Some(true));
    }
}
