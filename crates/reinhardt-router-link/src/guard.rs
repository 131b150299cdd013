//! Navigation intent guard.
//!
//! Decides whether an input event on a link should become a client-side
//! navigation, and suppresses the browser's own navigation when it does.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::event::NavigationEvent;

static BLANK_TARGET: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\b_blank\b").expect("blank-target pattern is valid"));

/// Why the guard let an event through to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
	/// A modifier key was held (open in new tab/window, download, ...).
	ModifierKey,
	/// An earlier handler already prevented the default action.
	DefaultPrevented,
	/// A button other than the primary one was pressed.
	NonPrimaryButton(i16),
	/// The link opens in a new browsing context.
	BlankTarget,
}

impl fmt::Display for GuardRejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ModifierKey => write!(f, "modifier key held"),
			Self::DefaultPrevented => write!(f, "default action already prevented"),
			Self::NonPrimaryButton(button) => write!(f, "non-primary button {}", button),
			Self::BlankTarget => write!(f, "target=\"_blank\""),
		}
	}
}

/// Classifies an event without side effects.
///
/// # Errors
///
/// Returns the first [`GuardRejection`] that applies.
pub fn evaluate_event<E>(event: &E) -> Result<(), GuardRejection>
where
	E: NavigationEvent + ?Sized,
{
	if event.modifiers().any() {
		return Err(GuardRejection::ModifierKey);
	}
	if event.default_prevented() {
		return Err(GuardRejection::DefaultPrevented);
	}
	if let Some(button) = event.button().filter(|button| *button != 0) {
		return Err(GuardRejection::NonPrimaryButton(button));
	}
	if event
		.target_attribute()
		.is_some_and(|target| BLANK_TARGET.is_match(&target))
	{
		return Err(GuardRejection::BlankTarget);
	}
	Ok(())
}

/// Returns true when the event should trigger a navigation.
///
/// On success the event's default action is suppressed, when the event type
/// supports it. Rejected events are left untouched.
pub fn guard_event<E>(event: &E) -> bool
where
	E: NavigationEvent + ?Sized,
{
	match evaluate_event(event) {
		Ok(()) => {
			if !event.suppress_default() {
				tracing::trace!("event cannot suppress its default action");
			}
			true
		}
		Err(rejection) => {
			tracing::trace!(%rejection, "navigation guard rejected event");
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::{Modifiers, SyntheticEvent};
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_primary_click_navigates_and_suppresses_once() {
		let event = SyntheticEvent::click();
		assert!(guard_event(&event));
		assert_eq!(event.suppress_count(), 1);
	}

	#[rstest]
	fn test_event_without_button_is_not_disqualified() {
		let event = SyntheticEvent::new();
		assert!(guard_event(&event));
	}

	#[rstest]
	#[case(1)]
	#[case(2)]
	fn test_non_primary_button_rejected(#[case] button: i16) {
		let event = SyntheticEvent::click().with_button(button);
		assert_eq!(
			evaluate_event(&event),
			Err(GuardRejection::NonPrimaryButton(button))
		);
		assert!(!guard_event(&event));
		assert_eq!(event.suppress_count(), 0);
	}

	#[rstest]
	fn test_prevented_event_rejected() {
		let event = SyntheticEvent::click().prevented();
		assert_eq!(
			evaluate_event(&event),
			Err(GuardRejection::DefaultPrevented)
		);
		assert_eq!(event.suppress_count(), 0);
	}

	#[rstest]
	#[case("_blank", false)]
	#[case("_BLANK", false)]
	#[case("foo _blank bar", false)]
	#[case("_blanket", true)]
	#[case("_self", true)]
	#[case("", true)]
	fn test_blank_target(#[case] target: &str, #[case] navigates: bool) {
		let event = SyntheticEvent::click().with_target_attribute(target);
		assert_eq!(guard_event(&event), navigates);
		assert_eq!(event.suppress_count(), usize::from(navigates));
	}

	#[rstest]
	fn test_unsuppressible_event_still_navigates() {
		let event = SyntheticEvent::click().unsuppressible();
		assert!(guard_event(&event));
		assert_eq!(event.suppress_count(), 0);
	}

	#[rstest]
	fn test_rejection_display() {
		assert_eq!(
			GuardRejection::NonPrimaryButton(2).to_string(),
			"non-primary button 2"
		);
	}

	proptest! {
		#[test]
		fn test_any_modifier_blocks_navigation(
			meta in any::<bool>(),
			alt in any::<bool>(),
			ctrl in any::<bool>(),
			shift in any::<bool>(),
		) {
			prop_assume!(meta || alt || ctrl || shift);
			let event = SyntheticEvent::click()
				.with_modifiers(Modifiers { meta, alt, ctrl, shift });

			prop_assert!(!guard_event(&event));
			prop_assert_eq!(event.suppress_count(), 0);
		}

		#[test]
		fn test_blank_token_blocks_navigation(
			before in "[a-z]{0,6}",
			after in "[a-z]{0,6}",
		) {
			let target = format!("{before} _blank {after}");
			let event = SyntheticEvent::click().with_target_attribute(target);

			prop_assert!(!guard_event(&event));
			prop_assert_eq!(event.suppress_count(), 0);
		}
	}
}
