//! Property-based tests for route activation.

use proptest::prelude::*;
use reinhardt_router_link::{Query, Route, compare, is_included_route, is_same_route};

fn segment() -> impl Strategy<Value = String> {
	"[a-z]{1,6}"
}

fn path() -> impl Strategy<Value = String> {
	prop::collection::vec(segment(), 0..4).prop_map(|segments| format!("/{}", segments.join("/")))
}

fn query() -> impl Strategy<Value = Query> {
	prop::collection::btree_map("[a-c]", "[0-2]", 0..3).prop_map(|pairs| {
		pairs.into_iter().fold(Query::new(), |query, (key, value)| query.with(key, value))
	})
}

fn hash() -> impl Strategy<Value = String> {
	prop_oneof![Just(String::new()), "[a-z]{1,4}"]
}

fn route() -> impl Strategy<Value = Route> {
	(path(), query(), hash())
		.prop_map(|(path, query, hash)| Route::new(path).with_query(query).with_hash(&hash))
}

proptest! {
	#[test]
	fn test_route_is_same_as_itself(route in route()) {
		let verdict = compare(Some(&route), &route);
		prop_assert!(verdict.exact);
		prop_assert!(verdict.included);
	}

	#[test]
	fn test_exact_implies_included(current in route(), candidate in route()) {
		let verdict = compare(Some(&current), &candidate);
		prop_assert!(!verdict.exact || verdict.included);
	}

	#[test]
	fn test_same_route_is_symmetric(a in route(), b in route()) {
		prop_assert_eq!(is_same_route(&a, &b), is_same_route(&b, &a));
	}

	#[test]
	fn test_query_superset_keeps_inclusion(
		base in path(),
		child in segment(),
		candidate_query in query(),
		extra_key in "[d-f]",
		extra_value in "[0-9]",
	) {
		let candidate = Route::new(base.clone()).with_query(candidate_query.clone());
		let mut current_query = candidate_query;
		current_query.insert(extra_key, extra_value);
		let current = Route::new(format!("{}/{}", base.trim_end_matches('/'), child))
			.with_query(current_query);

		prop_assert!(is_included_route(&current, &candidate));
	}

	#[test]
	fn test_unresolved_current_is_inactive(candidate in route()) {
		let verdict = compare(None, &candidate);
		prop_assert!(!verdict.exact);
		prop_assert!(!verdict.included);
	}
}
