//! Activation classes.

use crate::compare::ActivationVerdict;
use crate::config::{LinkConfig, LinkDefaults};
use crate::node::ClassMap;

/// Class names a link uses after applying the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationClasses<'a> {
	/// Class set while the target is active.
	pub active: &'a str,
	/// Class set while the target is exact-active.
	pub exact_active: &'a str,
}

/// Resolves class names: per-link name, then global default, then built-in.
pub fn resolve_class_names<'a>(
	config: &'a LinkConfig,
	defaults: &'a LinkDefaults,
) -> ActivationClasses<'a> {
	ActivationClasses {
		active: config
			.active_class()
			.unwrap_or_else(|| defaults.active_class()),
		exact_active: config
			.exact_active_class()
			.unwrap_or_else(|| defaults.exact_active_class()),
	}
}

/// Computes the class map of a link.
///
/// The exact-active class is written first and the active class second, so
/// when both resolve to the same name the active flag wins.
pub fn compute_classes(
	config: &LinkConfig,
	defaults: &LinkDefaults,
	verdict: ActivationVerdict,
) -> ClassMap {
	let names = resolve_class_names(config, defaults);
	let mut classes = ClassMap::new();
	classes.set(names.exact_active, verdict.exact);
	classes.set(
		names.active,
		if config.is_exact() {
			verdict.exact
		} else {
			verdict.included
		},
	);
	classes
}
