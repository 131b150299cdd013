//! Test doubles for the link's collaborators.
//!
//! [`TableResolver`] resolves destinations against an in-memory list of
//! [`RouteRecord`]s whose patterns use `{name}` segments. It understands just
//! enough path syntax to drive links in tests and examples.
//! [`RecordingDispatcher`] records every navigation request.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::NavigationMode;
use crate::error::ResolveError;
use crate::link::{NavigationDispatcher, Resolution, RouteResolver};
use crate::route::{Destination, Location, Query, Route, RouteRecord, normalize_hash};

/// Resolver backed by a list of route records.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
	records: Vec<Arc<RouteRecord>>,
}

impl TableResolver {
	/// Creates an empty resolver.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a record. Earlier records win when several patterns match.
	pub fn record(mut self, record: Arc<RouteRecord>) -> Self {
		self.records.push(record);
		self
	}

	fn match_path(&self, path: &str) -> Option<(&Arc<RouteRecord>, BTreeMap<String, String>)> {
		self.records
			.iter()
			.find_map(|record| match_pattern(record.path(), path).map(|params| (record, params)))
	}

	fn resolve_path(&self, path: String, query: Query, hash: String) -> Resolution {
		let mut route = Route::new(path.clone()).with_query(query.clone()).with_hash(&hash);
		if let Some((record, params)) = self.match_path(&path) {
			route = route
				.with_matched(RouteRecord::lineage(record))
				.with_params(params);
			if let Some(name) = record.name() {
				route = route.with_name(name);
			}
		}
		Resolution {
			href: route.full_path(),
			location: Location {
				path: Some(path),
				query,
				hash,
				..Location::default()
			},
			route,
		}
	}

	fn resolve_named(
		&self,
		name: &str,
		params: &BTreeMap<String, String>,
		query: Query,
		hash: String,
	) -> Result<Resolution, ResolveError> {
		let record = self
			.records
			.iter()
			.find(|record| record.name() == Some(name))
			.ok_or_else(|| ResolveError::UnknownRoute(name.to_string()))?;
		let path = fill_pattern(name, record.path(), params)?;

		let route = Route::new(path)
			.with_name(name)
			.with_matched(RouteRecord::lineage(record))
			.with_params(params.clone())
			.with_query(query.clone())
			.with_hash(&hash);
		Ok(Resolution {
			href: route.full_path(),
			location: Location {
				name: Some(name.to_string()),
				path: None,
				params: params.clone(),
				query,
				hash,
			},
			route,
		})
	}
}

impl RouteResolver for TableResolver {
	fn resolve(
		&self,
		destination: &Destination,
		current: Option<&Route>,
		append: bool,
	) -> Result<Resolution, ResolveError> {
		let base = current.map(Route::path).unwrap_or("/");
		match destination {
			Destination::Path(raw) => {
				let (path, query, hash) = split_raw(raw);
				Ok(self.resolve_path(join_path(base, path, append), query, hash))
			}
			Destination::Descriptor(descriptor) => {
				let hash = descriptor.hash.as_deref().map(normalize_hash);
				if let Some(name) = &descriptor.name {
					return self.resolve_named(
						name,
						&descriptor.params,
						descriptor.query.clone(),
						hash.unwrap_or_default(),
					);
				}
				match (&descriptor.path, current) {
					(Some(raw), _) => {
						let (path, mut query, raw_hash) = split_raw(raw);
						for (key, value) in descriptor.query.iter() {
							query.insert(key, value.clone());
						}
						Ok(self.resolve_path(
							join_path(base, path, append),
							query,
							hash.unwrap_or(raw_hash),
						))
					}
					// Query- or hash-only descriptors stay on the current path.
					(None, Some(current)) => Ok(self.resolve_path(
						current.path().to_string(),
						descriptor.query.clone(),
						hash.unwrap_or_default(),
					)),
					(None, None) => Err(ResolveError::InvalidDestination(
						"destination has neither a name nor a path".to_string(),
					)),
				}
			}
		}
	}
}

/// Dispatcher that records every request.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
	navigations: Mutex<Vec<(NavigationMode, Location)>>,
}

impl RecordingDispatcher {
	/// Creates a dispatcher with no recorded navigation.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns every request in order.
	pub fn navigations(&self) -> Vec<(NavigationMode, Location)> {
		self.navigations.lock().clone()
	}

	/// Returns the locations passed to `push`.
	pub fn pushed(&self) -> Vec<Location> {
		self.by_mode(NavigationMode::Push)
	}

	/// Returns the locations passed to `replace`.
	pub fn replaced(&self) -> Vec<Location> {
		self.by_mode(NavigationMode::Replace)
	}

	/// Forgets every recorded request.
	pub fn clear(&self) {
		self.navigations.lock().clear();
	}

	fn by_mode(&self, mode: NavigationMode) -> Vec<Location> {
		self.navigations
			.lock()
			.iter()
			.filter(|(m, _)| *m == mode)
			.map(|(_, location)| location.clone())
			.collect()
	}
}

impl NavigationDispatcher for RecordingDispatcher {
	fn push(&self, location: &Location) {
		self.navigations
			.lock()
			.push((NavigationMode::Push, location.clone()));
	}

	fn replace(&self, location: &Location) {
		self.navigations
			.lock()
			.push((NavigationMode::Replace, location.clone()));
	}
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|segment| !segment.is_empty())
}

fn param_name(segment: &str) -> Option<&str> {
	segment.strip_prefix('{')?.strip_suffix('}')
}

fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
	let pattern: Vec<&str> = segments(pattern).collect();
	let path: Vec<&str> = segments(path).collect();
	if pattern.len() != path.len() {
		return None;
	}

	let mut params = BTreeMap::new();
	for (expected, actual) in pattern.iter().zip(&path) {
		match param_name(expected) {
			Some(name) => {
				params.insert(name.to_string(), (*actual).to_string());
			}
			None if expected == actual => {}
			None => return None,
		}
	}
	Some(params)
}

fn fill_pattern(
	route: &str,
	pattern: &str,
	params: &BTreeMap<String, String>,
) -> Result<String, ResolveError> {
	let mut filled = Vec::new();
	for segment in segments(pattern) {
		match param_name(segment) {
			Some(name) => {
				let value = params
					.get(name)
					.ok_or_else(|| ResolveError::MissingParameter {
						route: route.to_string(),
						param: name.to_string(),
					})?;
				filled.push(value.as_str());
			}
			None => filled.push(segment),
		}
	}
	Ok(format!("/{}", filled.join("/")))
}

/// Splits `/path?query#hash`.
fn split_raw(raw: &str) -> (&str, Query, String) {
	let (rest, hash) = raw.split_once('#').unwrap_or((raw, ""));
	let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
	(path, Query::parse(query), hash.to_string())
}

fn join_path(base: &str, relative: &str, append: bool) -> String {
	if relative.starts_with('/') {
		return relative.to_string();
	}
	if relative.is_empty() {
		return base.to_string();
	}
	let parent = if append {
		base.trim_end_matches('/')
	} else {
		base.rsplit_once('/').map_or("", |(parent, _)| parent)
	};
	format!("{}/{}", parent, relative)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route::RouteDescriptor;
	use rstest::rstest;

	fn resolver() -> TableResolver {
		let root = RouteRecord::named("home", "/");
		let users = RouteRecord::child_of(&root, Some("users"), "/users");
		let user = RouteRecord::child_of(&users, Some("user"), "/users/{id}");
		TableResolver::new()
			.record(root)
			.record(users)
			.record(user)
	}

	#[rstest]
	fn test_resolve_path_matches_lineage() {
		let resolution = resolver()
			.resolve(&Destination::from("/users/7?tab=posts#bio"), None, false)
			.unwrap();

		assert_eq!(resolution.route.path(), "/users/7");
		assert_eq!(resolution.route.name(), Some("user"));
		assert_eq!(resolution.route.matched().len(), 3);
		assert_eq!(resolution.route.params().get("id").map(String::as_str), Some("7"));
		assert_eq!(resolution.href, "/users/7?tab=posts#bio");
		assert_eq!(resolution.location.path.as_deref(), Some("/users/7"));
	}

	#[rstest]
	fn test_resolve_named_route() {
		let destination = Destination::from(RouteDescriptor::named("user").param("id", "3"));
		let resolution = resolver().resolve(&destination, None, false).unwrap();

		assert_eq!(resolution.href, "/users/3");
		assert_eq!(resolution.location.path, None);
		assert_eq!(resolution.location.name.as_deref(), Some("user"));
	}

	#[rstest]
	fn test_resolve_named_missing_param() {
		let destination = Destination::from(RouteDescriptor::named("user"));
		let error = resolver().resolve(&destination, None, false).unwrap_err();
		assert_eq!(
			error,
			ResolveError::MissingParameter {
				route: "user".to_string(),
				param: "id".to_string(),
			}
		);
	}

	#[rstest]
	fn test_resolve_unknown_name() {
		let destination = Destination::from(RouteDescriptor::named("nope"));
		assert!(matches!(
			resolver().resolve(&destination, None, false),
			Err(ResolveError::UnknownRoute(_))
		));
	}

	#[rstest]
	fn test_resolve_empty_descriptor_without_current() {
		let destination = Destination::from(RouteDescriptor::default());
		assert!(matches!(
			resolver().resolve(&destination, None, false),
			Err(ResolveError::InvalidDestination(_))
		));
	}

	#[rstest]
	fn test_resolve_query_only_descriptor_stays_on_current_path() {
		let current = Route::new("/users");
		let destination = Destination::from(RouteDescriptor::default().query("page", "2"));
		let resolution = resolver().resolve(&destination, Some(&current), false).unwrap();
		assert_eq!(resolution.href, "/users?page=2");
	}

	#[rstest]
	#[case("/users/1", "2", false, "/users/2")]
	#[case("/users", "2", true, "/users/2")]
	#[case("/users/", "2", true, "/users/2")]
	#[case("/users", "/abs", true, "/abs")]
	fn test_relative_paths(
		#[case] base: &str,
		#[case] relative: &str,
		#[case] append: bool,
		#[case] expected: &str,
	) {
		assert_eq!(join_path(base, relative, append), expected);
	}

	#[rstest]
	fn test_recording_dispatcher() {
		let dispatcher = RecordingDispatcher::new();
		dispatcher.push(&Location::path("/a"));
		dispatcher.replace(&Location::path("/b"));

		assert_eq!(dispatcher.pushed(), vec![Location::path("/a")]);
		assert_eq!(dispatcher.replaced(), vec![Location::path("/b")]);
		assert_eq!(dispatcher.navigations().len(), 2);

		dispatcher.clear();
		assert!(dispatcher.navigations().is_empty());
	}
}
