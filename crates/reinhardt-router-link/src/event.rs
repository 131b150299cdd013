//! Event capability abstraction.
//!
//! Host platforms deliver very different event objects: mouse events carry a
//! button, keyboard events do not, some native event types cannot have their
//! default action suppressed. [`NavigationEvent`] exposes each capability as an
//! optional method so the [guard](crate::guard) stays total over all of them.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Modifier keys held while the event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
	/// Meta (Command / Windows) key.
	pub meta: bool,
	/// Alt (Option) key.
	pub alt: bool,
	/// Control key.
	pub ctrl: bool,
	/// Shift key.
	pub shift: bool,
}

impl Modifiers {
	/// Returns true when any modifier is held.
	pub fn any(&self) -> bool {
		self.meta || self.alt || self.ctrl || self.shift
	}
}

/// An input event as seen by the navigation guard.
///
/// Every method has a default that means "capability not available", which
/// never disqualifies an event.
pub trait NavigationEvent {
	/// Modifier keys held during the event.
	fn modifiers(&self) -> Modifiers {
		Modifiers::default()
	}

	/// Pointer button, for event types that carry one.
	fn button(&self) -> Option<i16> {
		None
	}

	/// Whether an earlier handler already suppressed the default action.
	fn default_prevented(&self) -> bool {
		false
	}

	/// The `target` attribute of the element the handler is attached to.
	fn target_attribute(&self) -> Option<String> {
		None
	}

	/// Suppresses the default action. Returns false when the event type
	/// offers no way to do so.
	fn suppress_default(&self) -> bool {
		false
	}
}

/// Host-independent event used by server-side rendering and tests.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::{SyntheticEvent, guard_event};
///
/// let event = SyntheticEvent::click();
/// assert!(guard_event(&event));
/// assert_eq!(event.suppress_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SyntheticEvent {
	modifiers: Modifiers,
	button: Option<i16>,
	default_prevented: bool,
	target_attribute: Option<String>,
	unsuppressible: bool,
	suppressed: AtomicUsize,
}

impl SyntheticEvent {
	/// Creates an event with no button and no modifiers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a primary-button click.
	pub fn click() -> Self {
		Self::new().with_button(0)
	}

	/// Sets the modifier keys.
	pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}

	/// Sets the pointer button.
	pub fn with_button(mut self, button: i16) -> Self {
		self.button = Some(button);
		self
	}

	/// Marks the default action as already prevented.
	pub fn prevented(mut self) -> Self {
		self.default_prevented = true;
		self
	}

	/// Sets the `target` attribute of the current target.
	pub fn with_target_attribute(mut self, target: impl Into<String>) -> Self {
		self.target_attribute = Some(target.into());
		self
	}

	/// Makes the event unable to suppress its default action.
	pub fn unsuppressible(mut self) -> Self {
		self.unsuppressible = true;
		self
	}

	/// Returns how many times the default action was suppressed.
	pub fn suppress_count(&self) -> usize {
		self.suppressed.load(Ordering::SeqCst)
	}
}

impl NavigationEvent for SyntheticEvent {
	fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	fn button(&self) -> Option<i16> {
		self.button
	}

	fn default_prevented(&self) -> bool {
		self.default_prevented || self.suppress_count() > 0
	}

	fn target_attribute(&self) -> Option<String> {
		self.target_attribute.clone()
	}

	fn suppress_default(&self) -> bool {
		if self.unsuppressible {
			return false;
		}
		self.suppressed.fetch_add(1, Ordering::SeqCst);
		true
	}
}

#[cfg(target_arch = "wasm32")]
mod web {
	use super::{Modifiers, NavigationEvent};
	use wasm_bindgen::JsCast;
	use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

	impl NavigationEvent for Event {
		fn modifiers(&self) -> Modifiers {
			if let Some(mouse) = self.dyn_ref::<MouseEvent>() {
				Modifiers {
					meta: mouse.meta_key(),
					alt: mouse.alt_key(),
					ctrl: mouse.ctrl_key(),
					shift: mouse.shift_key(),
				}
			} else if let Some(key) = self.dyn_ref::<KeyboardEvent>() {
				Modifiers {
					meta: key.meta_key(),
					alt: key.alt_key(),
					ctrl: key.ctrl_key(),
					shift: key.shift_key(),
				}
			} else {
				Modifiers::default()
			}
		}

		fn button(&self) -> Option<i16> {
			self.dyn_ref::<MouseEvent>().map(MouseEvent::button)
		}

		fn default_prevented(&self) -> bool {
			Event::default_prevented(self)
		}

		fn target_attribute(&self) -> Option<String> {
			self.current_target()?
				.dyn_into::<Element>()
				.ok()?
				.get_attribute("target")
		}

		fn suppress_default(&self) -> bool {
			Event::prevent_default(self);
			true
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct BareEvent;

	impl NavigationEvent for BareEvent {}

	#[rstest]
	fn test_bare_event_defaults() {
		let event = BareEvent;
		assert!(!event.modifiers().any());
		assert_eq!(event.button(), None);
		assert!(!event.default_prevented());
		assert_eq!(event.target_attribute(), None);
		assert!(!event.suppress_default());
	}

	#[rstest]
	fn test_synthetic_event_counts_suppression() {
		let event = SyntheticEvent::click();
		assert!(!event.default_prevented());
		assert!(event.suppress_default());
		assert_eq!(event.suppress_count(), 1);
		assert!(event.default_prevented());
	}

	#[rstest]
	fn test_unsuppressible_event() {
		let event = SyntheticEvent::click().unsuppressible();
		assert!(!event.suppress_default());
		assert_eq!(event.suppress_count(), 0);
	}

	#[rstest]
	#[case(Modifiers { meta: true, ..Modifiers::default() })]
	#[case(Modifiers { alt: true, ..Modifiers::default() })]
	#[case(Modifiers { ctrl: true, ..Modifiers::default() })]
	#[case(Modifiers { shift: true, ..Modifiers::default() })]
	fn test_any_modifier(#[case] modifiers: Modifiers) {
		assert!(modifiers.any());
	}
}
