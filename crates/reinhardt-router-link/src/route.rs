//! Resolved route representations.
//!
//! These are the value types a [`RouteResolver`](crate::RouteResolver) hands
//! back and the [comparator](crate::compare) reads. Nothing in this crate
//! mutates a [`Route`] after it has been built.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a [`RouteRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
	fn next() -> Self {
		Self(NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// A registered route definition.
///
/// Records are compared by identity: two records built from the same pattern
/// are still different records. Clones share the identity of the original.
#[derive(Debug, Clone)]
pub struct RouteRecord {
	id: RecordId,
	name: Option<String>,
	path: String,
	parent: Option<Arc<RouteRecord>>,
}

impl RouteRecord {
	/// Creates a top-level record.
	pub fn new(path: impl Into<String>) -> Arc<Self> {
		Arc::new(Self {
			id: RecordId::next(),
			name: None,
			path: path.into(),
			parent: None,
		})
	}

	/// Creates a named top-level record.
	pub fn named(name: impl Into<String>, path: impl Into<String>) -> Arc<Self> {
		Arc::new(Self {
			id: RecordId::next(),
			name: Some(name.into()),
			path: path.into(),
			parent: None,
		})
	}

	/// Creates a nested record below `parent`.
	pub fn child_of(
		parent: &Arc<RouteRecord>,
		name: Option<&str>,
		path: impl Into<String>,
	) -> Arc<Self> {
		Arc::new(Self {
			id: RecordId::next(),
			name: name.map(str::to_string),
			path: path.into(),
			parent: Some(Arc::clone(parent)),
		})
	}

	/// Returns the record identity.
	pub fn id(&self) -> RecordId {
		self.id
	}

	/// Returns the record name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the full path pattern of this record.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the parent record.
	pub fn parent(&self) -> Option<&Arc<RouteRecord>> {
		self.parent.as_ref()
	}

	/// Returns the chain of records from the outermost ancestor down to `record`.
	pub fn lineage(record: &Arc<RouteRecord>) -> Vec<Arc<RouteRecord>> {
		let mut chain = vec![Arc::clone(record)];
		let mut cursor = record.parent.as_ref();
		while let Some(parent) = cursor {
			chain.push(Arc::clone(parent));
			cursor = parent.parent.as_ref();
		}
		chain.reverse();
		chain
	}
}

impl PartialEq for RouteRecord {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for RouteRecord {}

/// A query value: a single string or a repeated key.
///
/// Values compare as multisets, so `Single("a")` equals `Multi(["a"])` and
/// the order of repeated values does not matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
	/// `?key=value`
	Single(String),
	/// `?key=a&key=b`. An empty list is not encoded into URLs.
	Multi(Vec<String>),
}

impl QueryValue {
	/// Returns every value carried for the key.
	pub fn values(&self) -> Vec<&str> {
		match self {
			Self::Single(value) => vec![value.as_str()],
			Self::Multi(values) => values.iter().map(String::as_str).collect(),
		}
	}

	fn sorted_values(&self) -> Vec<&str> {
		let mut values = self.values();
		values.sort_unstable();
		values
	}
}

impl PartialEq for QueryValue {
	fn eq(&self, other: &Self) -> bool {
		self.sorted_values() == other.sorted_values()
	}
}

impl Eq for QueryValue {}

impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}

impl From<Vec<String>> for QueryValue {
	fn from(values: Vec<String>) -> Self {
		Self::Multi(values)
	}
}

impl From<Vec<&str>> for QueryValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Multi(values.into_iter().map(str::to_string).collect())
	}
}

/// Query parameters of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, QueryValue>);

impl Query {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a parameter, replacing any previous value for `key`.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts a parameter, replacing any previous value for `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
		self.0.insert(key.into(), value.into());
	}

	/// Appends a value, turning the key into a repeated key when it already exists.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let value = value.into();
		match self.0.entry(key.into()) {
			std::collections::btree_map::Entry::Vacant(slot) => {
				slot.insert(QueryValue::Single(value));
			}
			std::collections::btree_map::Entry::Occupied(mut slot) => {
				let mut values: Vec<String> =
					slot.get().values().into_iter().map(str::to_string).collect();
				values.push(value);
				slot.insert(QueryValue::Multi(values));
			}
		}
	}

	/// Returns the value for `key`.
	pub fn get(&self, key: &str) -> Option<&QueryValue> {
		self.0.get(key)
	}

	/// Returns the number of distinct keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameter is present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over keys and values in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns true when every key of `required` is present here with an equal value.
	///
	/// Keys present here but absent from `required` are ignored.
	pub fn includes(&self, required: &Query) -> bool {
		required
			.iter()
			.all(|(key, value)| self.get(key).is_some_and(|own| own == value))
	}

	/// Parses a raw query string (without the leading `?`).
	///
	/// Malformed input yields an empty query.
	pub fn parse(raw: &str) -> Self {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_default();
		let mut query = Self::new();
		for (key, value) in pairs {
			query.append(key, value);
		}
		query
	}

	/// Encodes the query as `application/x-www-form-urlencoded` (without `?`).
	///
	/// A key holding an empty [`QueryValue::Multi`] has no pair to encode and
	/// is omitted, so parsing the result yields a query without that key.
	pub fn to_query_string(&self) -> String {
		let pairs: Vec<(&str, &str)> = self
			.iter()
			.flat_map(|(key, value)| value.values().into_iter().map(move |v| (key, v)))
			.collect();
		serde_urlencoded::to_string(pairs).unwrap_or_default()
	}
}

impl<K, V> FromIterator<(K, V)> for Query
where
	K: Into<String>,
	V: Into<QueryValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// Strips the leading `#` of a fragment.
pub(crate) fn normalize_hash(hash: &str) -> String {
	hash.strip_prefix('#').unwrap_or(hash).to_string()
}

/// Normalized destination produced by a resolver and handed to the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
	/// Route name, for named-route destinations.
	pub name: Option<String>,
	/// Explicit path, for path destinations.
	pub path: Option<String>,
	/// Route parameters.
	pub params: BTreeMap<String, String>,
	/// Query parameters.
	pub query: Query,
	/// Fragment without the leading `#`.
	pub hash: String,
}

impl Location {
	/// Creates a path location.
	pub fn path(path: impl Into<String>) -> Self {
		Self {
			path: Some(path.into()),
			..Self::default()
		}
	}

	/// Creates a named location.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Returns the explicit path when it is present and non-empty.
	pub fn explicit_path(&self) -> Option<&str> {
		self.path.as_deref().filter(|path| !path.is_empty())
	}
}

/// A resolved route: either the application's current route or the route a
/// link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	name: Option<String>,
	path: String,
	matched: Vec<Arc<RouteRecord>>,
	params: BTreeMap<String, String>,
	query: Query,
	hash: String,
}

impl Route {
	/// Creates a route for `path` with no matched records.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			name: None,
			path: path.into(),
			matched: Vec::new(),
			params: BTreeMap::new(),
			query: Query::new(),
			hash: String::new(),
		}
	}

	/// Derives a route from a location, without consulting any route table.
	///
	/// The result has no matched records, so it compares structurally by path.
	pub fn from_location(location: &Location) -> Self {
		Self {
			name: location.name.clone(),
			path: location
				.explicit_path()
				.unwrap_or("/")
				.to_string(),
			matched: Vec::new(),
			params: location.params.clone(),
			query: location.query.clone(),
			hash: normalize_hash(&location.hash),
		}
	}

	/// Sets the route name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the matched record chain, outermost first.
	pub fn with_matched(mut self, matched: Vec<Arc<RouteRecord>>) -> Self {
		self.matched = matched;
		self
	}

	/// Sets the route parameters.
	pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
		self.params = params;
		self
	}

	/// Sets the query.
	pub fn with_query(mut self, query: Query) -> Self {
		self.query = query;
		self
	}

	/// Sets the fragment. A leading `#` is dropped.
	pub fn with_hash(mut self, hash: &str) -> Self {
		self.hash = normalize_hash(hash);
		self
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the path without query or fragment.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the path with query string and fragment.
	pub fn full_path(&self) -> String {
		let mut full = self.path.clone();
		if !self.query.is_empty() {
			full.push('?');
			full.push_str(&self.query.to_query_string());
		}
		if !self.hash.is_empty() {
			full.push('#');
			full.push_str(&self.hash);
		}
		full
	}

	/// Returns the matched record chain, outermost first.
	pub fn matched(&self) -> &[Arc<RouteRecord>] {
		&self.matched
	}

	/// Returns the route parameters.
	pub fn params(&self) -> &BTreeMap<String, String> {
		&self.params
	}

	/// Returns the query.
	pub fn query(&self) -> &Query {
		&self.query
	}

	/// Returns the fragment without the leading `#`.
	pub fn hash(&self) -> &str {
		&self.hash
	}
}

/// Structured link destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
	/// Named route to link to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Path to link to, used when no name is given.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path: Option<String>,
	/// Route parameters for named routes.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub params: BTreeMap<String, String>,
	/// Query parameters.
	#[serde(default, skip_serializing_if = "Query::is_empty")]
	pub query: Query,
	/// Fragment.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,
}

impl RouteDescriptor {
	/// Creates a descriptor for a named route.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Creates a descriptor for a path.
	pub fn path(path: impl Into<String>) -> Self {
		Self {
			path: Some(path.into()),
			..Self::default()
		}
	}

	/// Adds a route parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	/// Adds a query parameter.
	pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		self.query.insert(key, value);
		self
	}

	/// Sets the fragment.
	pub fn hash(mut self, hash: impl Into<String>) -> Self {
		self.hash = Some(hash.into());
		self
	}
}

/// Where a link points: a plain path string or a structured descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
	/// A path string such as `/users/42?tab=posts#bio`.
	Path(String),
	/// A named route or path with parameters, query and fragment.
	Descriptor(RouteDescriptor),
}

impl From<&str> for Destination {
	fn from(path: &str) -> Self {
		Self::Path(path.to_string())
	}
}

impl From<String> for Destination {
	fn from(path: String) -> Self {
		Self::Path(path)
	}
}

impl From<RouteDescriptor> for Destination {
	fn from(descriptor: RouteDescriptor) -> Self {
		Self::Descriptor(descriptor)
	}
}
