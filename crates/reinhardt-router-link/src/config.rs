//! Link configuration.
//!
//! [`LinkDefaults`] is the application-wide part, read once from settings and
//! shared read-only by every link. [`LinkConfig`] is the per-link part.

use serde::{Deserialize, Serialize};

use crate::error::LinkError;
use crate::route::Destination;

/// Class applied to a link whose target is included in the current route.
pub const DEFAULT_ACTIVE_CLASS: &str = "router-link-active";
/// Class applied to a link whose target is the current route.
pub const DEFAULT_EXACT_ACTIVE_CLASS: &str = "router-link-exact-active";
/// Tag a link renders as unless configured otherwise.
pub const DEFAULT_TAG: &str = "a";
/// Event that triggers navigation unless configured otherwise.
pub const DEFAULT_EVENT: &str = "click";

/// Application-wide link defaults.
///
/// `Some("")` is a valid value and disables the class globally; only `None`
/// falls through to the built-in class names.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::LinkDefaults;
///
/// let defaults: LinkDefaults =
/// 	serde_json::from_str(r#"{"link_active_class": "is-active"}"#).unwrap();
/// assert_eq!(defaults.active_class(), "is-active");
/// assert_eq!(defaults.exact_active_class(), "router-link-exact-active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkDefaults {
	/// Global active class.
	pub link_active_class: Option<String>,
	/// Global exact-active class.
	pub link_exact_active_class: Option<String>,
}

impl LinkDefaults {
	/// Creates defaults that use the built-in class names.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the global active class.
	pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
		self.link_active_class = Some(class.into());
		self
	}

	/// Sets the global exact-active class.
	pub fn with_exact_active_class(mut self, class: impl Into<String>) -> Self {
		self.link_exact_active_class = Some(class.into());
		self
	}

	/// Returns the global active class, or the built-in one.
	pub fn active_class(&self) -> &str {
		self.link_active_class
			.as_deref()
			.unwrap_or(DEFAULT_ACTIVE_CLASS)
	}

	/// Returns the global exact-active class, or the built-in one.
	pub fn exact_active_class(&self) -> &str {
		self.link_exact_active_class
			.as_deref()
			.unwrap_or(DEFAULT_EXACT_ACTIVE_CLASS)
	}
}

/// How a link hands its location to the dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
	/// Add a history entry.
	#[default]
	Push,
	/// Replace the current history entry.
	Replace,
}

/// Per-link configuration.
///
/// Built through [`LinkConfig::builder`], which rejects an empty set of
/// trigger events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
	destination: Destination,
	tag: String,
	exact: bool,
	append: bool,
	mode: NavigationMode,
	active_class: Option<String>,
	exact_active_class: Option<String>,
	events: Vec<String>,
}

impl LinkConfig {
	/// Creates a configuration with every option at its default.
	pub fn new(destination: impl Into<Destination>) -> Self {
		Self {
			destination: destination.into(),
			tag: DEFAULT_TAG.to_string(),
			exact: false,
			append: false,
			mode: NavigationMode::Push,
			active_class: None,
			exact_active_class: None,
			events: vec![DEFAULT_EVENT.to_string()],
		}
	}

	/// Starts a builder for `destination`.
	pub fn builder(destination: impl Into<Destination>) -> LinkConfigBuilder {
		LinkConfigBuilder {
			config: Self::new(destination),
		}
	}

	/// Returns the destination.
	pub fn destination(&self) -> &Destination {
		&self.destination
	}

	/// Returns the tag the link renders as.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns whether the active class requires an exact match.
	pub fn is_exact(&self) -> bool {
		self.exact
	}

	/// Returns whether relative destinations append to the current path.
	pub fn is_append(&self) -> bool {
		self.append
	}

	/// Returns the navigation mode.
	pub fn mode(&self) -> NavigationMode {
		self.mode
	}

	/// Returns the per-link active class.
	pub fn active_class(&self) -> Option<&str> {
		self.active_class.as_deref()
	}

	/// Returns the per-link exact-active class.
	pub fn exact_active_class(&self) -> Option<&str> {
		self.exact_active_class.as_deref()
	}

	/// Returns the trigger events, never empty.
	pub fn events(&self) -> &[String] {
		&self.events
	}
}

/// Builder for [`LinkConfig`].
#[derive(Debug, Clone)]
pub struct LinkConfigBuilder {
	config: LinkConfig,
}

impl LinkConfigBuilder {
	/// Sets the tag to render.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.config.tag = tag.into();
		self
	}

	/// Requires an exact match for the active class.
	pub fn exact(mut self, exact: bool) -> Self {
		self.config.exact = exact;
		self
	}

	/// Appends relative destinations to the current path.
	pub fn append(mut self, append: bool) -> Self {
		self.config.append = append;
		self
	}

	/// Uses `replace` instead of `push` when `replace` is true.
	pub fn replace(mut self, replace: bool) -> Self {
		self.config.mode = if replace {
			NavigationMode::Replace
		} else {
			NavigationMode::Push
		};
		self
	}

	/// Sets the navigation mode.
	pub fn mode(mut self, mode: NavigationMode) -> Self {
		self.config.mode = mode;
		self
	}

	/// Overrides the active class for this link.
	pub fn active_class(mut self, class: impl Into<String>) -> Self {
		self.config.active_class = Some(class.into());
		self
	}

	/// Overrides the exact-active class for this link.
	pub fn exact_active_class(mut self, class: impl Into<String>) -> Self {
		self.config.exact_active_class = Some(class.into());
		self
	}

	/// Uses a single trigger event.
	pub fn event(self, event: impl Into<String>) -> Self {
		self.events([event.into()])
	}

	/// Replaces the trigger events. Duplicates are dropped.
	pub fn events<I, S>(mut self, events: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut unique: Vec<String> = Vec::new();
		for event in events {
			let event = event.into();
			if !unique.contains(&event) {
				unique.push(event);
			}
		}
		self.config.events = unique;
		self
	}

	/// Validates and returns the configuration.
	///
	/// # Errors
	///
	/// Returns [`LinkError::EmptyTriggerEvents`] when no event is configured
	/// and [`LinkError::InvalidEventName`] for a blank event name.
	pub fn build(self) -> Result<LinkConfig, LinkError> {
		if self.config.events.is_empty() {
			return Err(LinkError::EmptyTriggerEvents);
		}
		if let Some(blank) = self
			.config
			.events
			.iter()
			.find(|event| event.trim().is_empty())
		{
			return Err(LinkError::InvalidEventName(blank.clone()));
		}
		Ok(self.config)
	}
}
