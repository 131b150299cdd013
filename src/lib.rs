//! # Reinhardt Link
//!
//! Navigation links for Reinhardt client-side routing.
//!
//! A link decides whether it is active for the application's current route,
//! which CSS classes follow from that, and whether an input event should
//! become a client-side navigation instead of a page load.
//!
//! ## Feature Flags
//!
//! - `router-link` (default) - the [`router_link`] module
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_link::prelude::*;
//! use reinhardt_link::router_link::testing::{RecordingDispatcher, TableResolver};
//! use std::sync::Arc;
//!
//! let home = RouteRecord::named("home", "/");
//! let context = LinkContext::new(
//! 	Arc::new(TableResolver::new().record(home)),
//! 	Arc::new(RecordingDispatcher::new()),
//! 	Arc::new(LinkDefaults::new()),
//! );
//!
//! let link = RouterLink::new(LinkConfig::new("/"), context);
//! let html = link.render(None, vec![Arc::new(VNode::text("Home"))]).unwrap().render_to_string();
//! assert_eq!(html, "<a href=\"/\">Home</a>");
//! ```

#[cfg(feature = "router-link")]
pub mod router_link;

/// Commonly used types.
#[cfg(feature = "router-link")]
pub mod prelude {
	pub use crate::router_link::{
		Destination, LinkConfig, LinkContext, LinkDefaults, LinkError, Location,
		NavigationDispatcher, NavigationEvent, NavigationMode, Route, RouteDescriptor,
		RouteRecord, RouteResolver, RouterLink, VNode,
	};
}
