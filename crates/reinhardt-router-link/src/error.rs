//! Error types for link configuration and resolution.

use thiserror::Error;

/// Errors signalled by a [`RouteResolver`](crate::RouteResolver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
	/// The destination names neither a route nor a path.
	#[error("invalid destination: {0}")]
	InvalidDestination(String),

	/// No route is registered under the given name.
	#[error("unknown route: {0}")]
	UnknownRoute(String),

	/// A named route needs a parameter the destination does not supply.
	#[error("route '{route}' is missing parameter '{param}'")]
	MissingParameter {
		/// Route name.
		route: String,
		/// Parameter name.
		param: String,
	},
}

/// Errors raised while configuring or rendering a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LinkError {
	/// The link was configured without any trigger event.
	#[error("a link needs at least one trigger event")]
	EmptyTriggerEvents,

	/// A trigger event name is blank.
	#[error("invalid trigger event name: {0:?}")]
	InvalidEventName(String),

	/// The resolver rejected the destination.
	#[error(transparent)]
	Resolve(#[from] ResolveError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_display() {
		assert_eq!(
			ResolveError::UnknownRoute("user".to_string()).to_string(),
			"unknown route: user"
		);
		assert_eq!(
			ResolveError::MissingParameter {
				route: "user".to_string(),
				param: "id".to_string(),
			}
			.to_string(),
			"route 'user' is missing parameter 'id'"
		);
		assert_eq!(
			LinkError::EmptyTriggerEvents.to_string(),
			"a link needs at least one trigger event"
		);
	}

	#[rstest]
	fn test_resolve_error_is_transparent() {
		let error: LinkError = ResolveError::InvalidDestination("{}".to_string()).into();
		assert_eq!(error.to_string(), "invalid destination: {}");
	}
}
