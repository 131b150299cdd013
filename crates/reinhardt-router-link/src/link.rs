//! The `RouterLink` component.
//!
//! Per render the link resolves its destination, compares the result with the
//! current route to compute its classes, binds the guarded navigation handler
//! to its trigger events and places handlers and `href` on the right element.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use reinhardt_router_link::testing::{RecordingDispatcher, TableResolver};
//! use reinhardt_router_link::{
//! 	LinkConfig, LinkContext, LinkDefaults, Route, RouteRecord, RouterLink, SyntheticEvent, VNode,
//! };
//!
//! let users = RouteRecord::named("users", "/users");
//! let resolver = Arc::new(TableResolver::new().record(users.clone()));
//! let dispatcher = Arc::new(RecordingDispatcher::new());
//! let context = LinkContext::new(resolver, dispatcher.clone(), Arc::new(LinkDefaults::new()));
//!
//! let link = RouterLink::new(LinkConfig::new("/users"), context);
//! let current = Route::new("/users").with_matched(vec![users]);
//! let node = link.render(Some(&current), vec![Arc::new(VNode::text("Users"))]).unwrap();
//!
//! assert_eq!(
//! 	node.render_to_string(),
//! 	"<a class=\"router-link-active router-link-exact-active\" href=\"/users\">Users</a>"
//! );
//!
//! let anchor = node.as_element().unwrap();
//! anchor.data.on.dispatch("click", &SyntheticEvent::click());
//! assert_eq!(dispatcher.pushed().len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::classes::compute_classes;
use crate::compare::{ActivationVerdict, candidate_for, compare};
use crate::config::{LinkConfig, LinkDefaults, NavigationMode};
use crate::error::{LinkError, ResolveError};
use crate::event::NavigationEvent;
use crate::guard::guard_event;
use crate::node::{ElementNode, EventHandler, HandlerMap, VNode};
use crate::route::{Destination, Location, Route};
use crate::target::{Target, attach_at, is_anchor_tag, select_target};

/// What a resolver returns for a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
	/// Normalized location handed to the dispatcher.
	pub location: Location,
	/// Route the location resolves to.
	pub route: Route,
	/// URL rendered into `href`.
	pub href: String,
}

/// Resolves link destinations against the application's route table.
pub trait RouteResolver: Send + Sync {
	/// Resolves `destination` relative to `current`.
	///
	/// With `append`, relative paths are appended to the current path instead
	/// of replacing its last segment.
	///
	/// # Errors
	///
	/// Returns a [`ResolveError`] for destinations that cannot be resolved.
	fn resolve(
		&self,
		destination: &Destination,
		current: Option<&Route>,
		append: bool,
	) -> Result<Resolution, ResolveError>;
}

/// Performs history navigation.
///
/// Calls are fire-and-forget: the link neither waits for nor inspects the
/// outcome.
pub trait NavigationDispatcher: Send + Sync {
	/// Navigates by adding a history entry.
	fn push(&self, location: &Location);

	/// Navigates by replacing the current history entry.
	fn replace(&self, location: &Location);
}

/// Collaborators shared by every link of an application.
#[derive(Clone)]
pub struct LinkContext {
	resolver: Arc<dyn RouteResolver>,
	dispatcher: Arc<dyn NavigationDispatcher>,
	defaults: Arc<LinkDefaults>,
}

impl LinkContext {
	/// Creates a context.
	pub fn new(
		resolver: Arc<dyn RouteResolver>,
		dispatcher: Arc<dyn NavigationDispatcher>,
		defaults: Arc<LinkDefaults>,
	) -> Self {
		Self {
			resolver,
			dispatcher,
			defaults,
		}
	}

	/// Returns the application-wide defaults.
	pub fn defaults(&self) -> &LinkDefaults {
		&self.defaults
	}
}

impl fmt::Debug for LinkContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LinkContext")
			.field("defaults", &self.defaults)
			.finish_non_exhaustive()
	}
}

/// A navigation link.
#[derive(Debug, Clone)]
pub struct RouterLink {
	config: LinkConfig,
	context: LinkContext,
}

impl RouterLink {
	/// Creates a link.
	pub fn new(config: LinkConfig, context: LinkContext) -> Self {
		Self { config, context }
	}

	/// Returns the link configuration.
	pub fn config(&self) -> &LinkConfig {
		&self.config
	}

	/// Resolves the destination against `current`.
	///
	/// # Errors
	///
	/// Propagates the resolver's error.
	pub fn resolve(&self, current: Option<&Route>) -> Result<Resolution, LinkError> {
		Ok(self.context.resolver.resolve(
			self.config.destination(),
			current,
			self.config.is_append(),
		)?)
	}

	/// Computes whether the link is active for `current`.
	///
	/// # Errors
	///
	/// Propagates the resolver's error.
	pub fn verdict(&self, current: Option<&Route>) -> Result<ActivationVerdict, LinkError> {
		let resolution = self.resolve(current)?;
		Ok(compare(current, &candidate_for(&resolution)))
	}

	/// Renders the link around `children`.
	///
	/// Classes always go on the link's own element. Listeners and `href` go on
	/// the element chosen by [`select_target`]; a root that is not an anchor
	/// gets listeners but no `href`.
	///
	/// # Errors
	///
	/// Propagates the resolver's error.
	pub fn render(
		&self,
		current: Option<&Route>,
		children: Vec<Arc<VNode>>,
	) -> Result<VNode, LinkError> {
		let resolution = self.resolve(current)?;
		let verdict = compare(current, &candidate_for(&resolution));
		let on = self.handlers(&resolution.location);
		let tag = self.config.tag().to_string();
		let target = select_target(&tag, &children);

		tracing::debug!(
			href = %resolution.href,
			exact = verdict.exact,
			included = verdict.included,
			?target,
			"rendering router link"
		);

		let mut root = ElementNode::new(tag);
		root.data.classes = compute_classes(&self.config, &self.context.defaults, verdict);
		match target {
			Target::Root => {
				if is_anchor_tag(&root.tag) {
					root.data
						.attrs
						.insert("href".to_string(), resolution.href.clone());
				}
				root.data.on = on;
				root.children = children;
			}
			Target::Descendant(path) => {
				root.children = attach_at(&children, &path, |data| {
					data.with_navigation(&on, &resolution.href)
				});
			}
		}
		Ok(VNode::Element(root))
	}

	fn handlers(&self, location: &Location) -> HandlerMap {
		let navigate: EventHandler = {
			let location = Arc::new(location.clone());
			let dispatcher = Arc::clone(&self.context.dispatcher);
			let mode = self.config.mode();
			Arc::new(move |event: &dyn NavigationEvent| {
				if !guard_event(event) {
					return;
				}
				tracing::debug!(?mode, location = ?location, "dispatching navigation");
				match mode {
					NavigationMode::Push => dispatcher.push(&location),
					NavigationMode::Replace => dispatcher.replace(&location),
				}
			})
		};

		let mut on = HandlerMap::new();
		// Intercept the anchor's own navigation even when click is not a trigger.
		on.insert(
			"click",
			Arc::new(|event: &dyn NavigationEvent| {
				guard_event(event);
			}),
		);
		for event in self.config.events() {
			on.insert(event.clone(), Arc::clone(&navigate));
		}
		on
	}
}
