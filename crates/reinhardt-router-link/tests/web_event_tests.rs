//! Browser tests for the `web_sys::Event` navigation adapter
//!
//! Run with `wasm-pack test --headless --firefox crates/reinhardt-router-link`.

#[cfg(target_arch = "wasm32")]
mod web_event_tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use reinhardt_router_link::{GuardRejection, NavigationEvent, evaluate_event, guard_event};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::closure::Closure;
	use wasm_bindgen_test::*;
	use web_sys::{Event, EventTarget, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

	wasm_bindgen_test_configure!(run_in_browser);

	fn click(init: &MouseEventInit) -> MouseEvent {
		init.set_cancelable(true);
		MouseEvent::new_with_mouse_event_init_dict("click", init).expect("click event")
	}

	fn key(init: &KeyboardEventInit) -> KeyboardEvent {
		init.set_cancelable(true);
		KeyboardEvent::new_with_keyboard_event_init_dict("keydown", init).expect("keyboard event")
	}

	#[wasm_bindgen_test]
	fn test_primary_click_is_prevented() {
		let mouse = click(&MouseEventInit::new());
		let event: &Event = &mouse;

		assert_eq!(NavigationEvent::button(event), Some(0));
		assert!(guard_event(event));
		assert!(event.default_prevented());
	}

	#[wasm_bindgen_test]
	fn test_ctrl_click_is_left_to_browser() {
		let init = MouseEventInit::new();
		init.set_ctrl_key(true);
		let mouse = click(&init);
		let event: &Event = &mouse;

		assert!(NavigationEvent::modifiers(event).ctrl);
		assert_eq!(evaluate_event(event), Err(GuardRejection::ModifierKey));
		assert!(!guard_event(event));
		assert!(!event.default_prevented());
	}

	#[wasm_bindgen_test]
	fn test_middle_click_is_left_to_browser() {
		let init = MouseEventInit::new();
		init.set_button(1);
		let mouse = click(&init);
		let event: &Event = &mouse;

		assert_eq!(evaluate_event(event), Err(GuardRejection::NonPrimaryButton(1)));
		assert!(!event.default_prevented());
	}

	#[wasm_bindgen_test]
	fn test_keyboard_event_has_no_button() {
		let init = KeyboardEventInit::new();
		init.set_key("Enter");
		let keyboard = key(&init);
		let event: &Event = &keyboard;

		assert_eq!(NavigationEvent::button(event), None);
		assert!(guard_event(event));
		assert!(event.default_prevented());
	}

	#[wasm_bindgen_test]
	fn test_keyboard_modifier_is_read() {
		let init = KeyboardEventInit::new();
		init.set_shift_key(true);
		let keyboard = key(&init);
		let event: &Event = &keyboard;

		assert!(NavigationEvent::modifiers(event).shift);
		assert!(!guard_event(event));
	}

	#[wasm_bindgen_test]
	fn test_blank_target_of_current_target_is_read() {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.expect("document");
		let anchor = document.create_element("a").expect("anchor");
		anchor.set_attribute("target", "_blank").expect("target attribute");

		let outcome = Rc::new(Cell::new(None));
		let recorded = Rc::clone(&outcome);
		let listener = Closure::<dyn Fn(Event)>::new(move |event: Event| {
			recorded.set(Some(evaluate_event(&event)));
		});
		let target: &EventTarget = &anchor;
		target
			.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
			.expect("listener");

		let mouse = click(&MouseEventInit::new());
		target.dispatch_event(&mouse).expect("dispatch");

		assert_eq!(outcome.get(), Some(Err(GuardRejection::BlankTarget)));
		assert!(!mouse.default_prevented());
	}
}
