//! Router links
//!
//! This module provides access to reinhardt-router-link: activation matching
//! between a link's destination and the current route, activation classes,
//! the navigation event guard, and attachment of listeners to a nested
//! anchor when the link does not render as `<a>`.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_link::router_link::{SyntheticEvent, guard_event};
//!
//! let event = SyntheticEvent::click();
//! assert!(guard_event(&event));
//! ```

// Re-export all reinhardt-router-link functionality
pub use reinhardt_router_link::*;
