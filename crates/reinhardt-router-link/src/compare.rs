//! Route activation matching.
//!
//! A link is *exact-active* when the current route denotes the same location
//! as the link's target, and *active* when the target is included in the
//! current route (a parent route, a subset of the query, an unset fragment).

use std::borrow::Cow;

use crate::link::Resolution;
use crate::route::Route;

/// Result of comparing the current route against a link's target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationVerdict {
	/// The target denotes the current location.
	pub exact: bool,
	/// The target is included in the current location.
	pub included: bool,
}

impl ActivationVerdict {
	/// Neither exact nor included.
	pub const INACTIVE: Self = Self {
		exact: false,
		included: false,
	};
}

/// Compares the current route against a candidate.
///
/// An unresolved current route is never active. Exactness always implies
/// inclusion.
pub fn compare(current: Option<&Route>, candidate: &Route) -> ActivationVerdict {
	let Some(current) = current else {
		return ActivationVerdict::INACTIVE;
	};

	let exact = is_same_route(current, candidate);
	ActivationVerdict {
		exact,
		included: exact || is_included_route(current, candidate),
	}
}

/// Returns true when both routes denote the same location.
///
/// Paths compare without trailing slashes, queries as sets of key/value pairs.
pub fn is_same_route(a: &Route, b: &Route) -> bool {
	strip_trailing_slash(a.path()) == strip_trailing_slash(b.path())
		&& a.hash() == b.hash()
		&& a.query() == b.query()
}

/// Returns true when `candidate` is included in `current`.
///
/// A candidate carrying matched records must be a record-identity prefix of
/// the current chain. A candidate without records (derived from a bare path)
/// must be a path prefix of the current route on a segment boundary.
pub fn is_included_route(current: &Route, candidate: &Route) -> bool {
	let prefix = if candidate.matched().is_empty() {
		with_trailing_slash(current.path()).starts_with(&with_trailing_slash(candidate.path()))
	} else {
		is_record_prefix(current, candidate)
	};

	prefix
		&& (candidate.hash().is_empty() || candidate.hash() == current.hash())
		&& current.query().includes(candidate.query())
}

fn is_record_prefix(current: &Route, candidate: &Route) -> bool {
	let (current, candidate) = (current.matched(), candidate.matched());
	candidate.len() <= current.len()
		&& candidate
			.iter()
			.zip(current)
			.all(|(a, b)| a.id() == b.id())
}

/// Picks the route a link compares against.
///
/// When the resolved location carries an explicit path, the route is derived
/// from that location alone; named destinations use the resolver's route.
pub fn candidate_for(resolution: &Resolution) -> Cow<'_, Route> {
	if resolution.location.explicit_path().is_some() {
		Cow::Owned(Route::from_location(&resolution.location))
	} else {
		Cow::Borrowed(&resolution.route)
	}
}

fn strip_trailing_slash(path: &str) -> &str {
	path.trim_end_matches('/')
}

fn with_trailing_slash(path: &str) -> String {
	format!("{}/", strip_trailing_slash(path))
}
