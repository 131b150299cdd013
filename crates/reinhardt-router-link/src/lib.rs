//! Reinhardt Router Link - navigation links for client-side routing
//!
//! `RouterLink` is the clickable element of a Reinhardt client-side router.
//! Given a destination and the application's current route it decides:
//!
//! - whether the link is *active* (its target is included in the current
//!   route) and *exact-active* (its target is the current route),
//! - which CSS classes follow from that,
//! - whether an input event should become a client-side navigation,
//! - which element receives the navigation listeners and `href` when the link
//!   renders as something other than `<a>`.
//!
//! Route resolution and history manipulation stay with the application's
//! router through the [`RouteResolver`] and [`NavigationDispatcher`] traits.
//!
//! ## Architecture
//!
//! - [`guard`]: event qualification (modifier keys, buttons, `target="_blank"`)
//! - [`compare`]: exact and included route matching
//! - [`classes`]: activation class computation
//! - [`target`]: attachment target selection with copy-on-write
//! - [`link`]: the [`RouterLink`] component
//! - [`testing`]: in-memory resolver and recording dispatcher
//!
//! ## Logging
//!
//! Decisions are traced with [`tracing`]; install a subscriber (for example
//! `tracing-wasm` in the browser) to see them.

#![warn(missing_docs)]

pub mod classes;
pub mod compare;
pub mod config;
pub mod error;
pub mod event;
pub mod guard;
pub mod link;
pub mod node;
pub mod route;
pub mod target;
pub mod testing;

pub use classes::{ActivationClasses, compute_classes, resolve_class_names};
pub use compare::{ActivationVerdict, candidate_for, compare, is_included_route, is_same_route};
pub use config::{
	DEFAULT_ACTIVE_CLASS, DEFAULT_EVENT, DEFAULT_EXACT_ACTIVE_CLASS, DEFAULT_TAG, LinkConfig,
	LinkConfigBuilder, LinkDefaults, NavigationMode,
};
pub use error::{LinkError, ResolveError};
pub use event::{Modifiers, NavigationEvent, SyntheticEvent};
pub use guard::{GuardRejection, evaluate_event, guard_event};
pub use link::{LinkContext, NavigationDispatcher, Resolution, RouteResolver, RouterLink};
pub use node::{ClassMap, ElementNode, EventHandler, HandlerMap, NodeData, VNode};
pub use route::{
	Destination, Location, Query, QueryValue, RecordId, Route, RouteDescriptor, RouteRecord,
};
pub use target::{NodePath, Target, attach_at, find_anchor, is_anchor_tag, node_at, select_target};
