//! Render tree handed to the rendering host.
//!
//! Child nodes are held behind [`Arc`] and treated as shared: the link never
//! writes into a node it did not create. See [`attach_at`](crate::target::attach_at).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::event::NavigationEvent;

/// Handler attached to a rendered node.
pub type EventHandler = Arc<dyn Fn(&dyn NavigationEvent) + Send + Sync + 'static>;

/// CSS class name to enabled flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap(BTreeMap<String, bool>);

impl ClassMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a class, overwriting any earlier value for the same name.
	pub fn set(&mut self, class: impl Into<String>, enabled: bool) {
		self.0.insert(class.into(), enabled);
	}

	/// Returns the flag for `class`.
	pub fn get(&self, class: &str) -> Option<bool> {
		self.0.get(class).copied()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when there is no entry.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over enabled, non-empty class names.
	pub fn enabled(&self) -> impl Iterator<Item = &str> {
		self.0
			.iter()
			.filter(|(class, enabled)| **enabled && !class.is_empty())
			.map(|(class, _)| class.as_str())
	}
}

/// Event name to handler.
#[derive(Clone, Default)]
pub struct HandlerMap(BTreeMap<String, EventHandler>);

impl HandlerMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `handler` to `event`, replacing any earlier binding.
	pub fn insert(&mut self, event: impl Into<String>, handler: EventHandler) {
		self.0.insert(event.into(), handler);
	}

	/// Returns the handler bound to `event`.
	pub fn get(&self, event: &str) -> Option<&EventHandler> {
		self.0.get(event)
	}

	/// Returns true when a handler is bound to `event`.
	pub fn contains(&self, event: &str) -> bool {
		self.0.contains_key(event)
	}

	/// Returns the bound event names in order.
	pub fn events(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Returns the number of bindings.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Invokes the handler bound to `event`. Returns false when none is bound.
	pub fn dispatch(&self, event: &str, payload: &dyn NavigationEvent) -> bool {
		match self.0.get(event) {
			Some(handler) => {
				handler(payload);
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for HandlerMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.0.keys()).finish()
	}
}

/// Host-facing data of an element: classes, listeners and attributes.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
	/// Class flags.
	pub classes: ClassMap,
	/// Event listeners.
	pub on: HandlerMap,
	/// Attributes.
	pub attrs: BTreeMap<String, String>,
}

impl NodeData {
	/// Returns a copy carrying the link's listeners and `href`.
	///
	/// Existing listeners are replaced; existing attributes are kept.
	pub fn with_navigation(&self, on: &HandlerMap, href: &str) -> Self {
		let mut data = self.clone();
		data.on = on.clone();
		data.attrs.insert("href".to_string(), href.to_string());
		data
	}
}

/// An element in the render tree.
#[derive(Debug, Clone)]
pub struct ElementNode {
	/// Tag name.
	pub tag: Cow<'static, str>,
	/// Classes, listeners and attributes.
	pub data: NodeData,
	/// Child nodes, possibly shared with other trees.
	pub children: Vec<Arc<VNode>>,
	/// Static content the host may cache and skip when patching.
	pub is_static: bool,
}

impl ElementNode {
	/// Creates an empty element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			data: NodeData::default(),
			children: Vec::new(),
			is_static: false,
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.data.attrs.insert(name.into(), value.into());
		self
	}

	/// Adds an always-enabled class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.data.classes.set(class, true);
		self
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl Into<VNode>) -> Self {
		self.children.push(Arc::new(child.into()));
		self
	}

	/// Adds an already shared child node.
	pub fn shared_child(mut self, child: Arc<VNode>) -> Self {
		self.children.push(child);
		self
	}

	/// Marks the element as static content.
	pub fn static_node(mut self) -> Self {
		self.is_static = true;
		self
	}

	/// Wraps the element into a shared node.
	pub fn into_shared(self) -> Arc<VNode> {
		Arc::new(VNode::Element(self))
	}
}

/// A node of the render tree.
#[derive(Debug, Clone)]
pub enum VNode {
	/// An element.
	Element(ElementNode),
	/// A text node.
	Text(Cow<'static, str>),
}

impl VNode {
	/// Creates an element node.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementNode {
		ElementNode::new(tag)
	}

	/// Creates a text node.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	/// Returns the tag for elements.
	pub fn tag(&self) -> Option<&str> {
		match self {
			Self::Element(el) => Some(el.tag.as_ref()),
			Self::Text(_) => None,
		}
	}

	/// Returns the element, if this is one.
	pub fn as_element(&self) -> Option<&ElementNode> {
		match self {
			Self::Element(el) => Some(el),
			Self::Text(_) => None,
		}
	}

	/// Returns the children of an element; text nodes have none.
	pub fn children(&self) -> &[Arc<VNode>] {
		match self {
			Self::Element(el) => &el.children,
			Self::Text(_) => &[],
		}
	}

	/// Renders the tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	fn write_html(&self, out: &mut String) {
		match self {
			Self::Text(text) => out.push_str(&escape_html(text)),
			Self::Element(el) => {
				out.push('<');
				out.push_str(&el.tag);

				let classes: Vec<&str> = el.data.classes.enabled().collect();
				if !classes.is_empty() {
					out.push_str(&format!(" class=\"{}\"", escape_html(&classes.join(" "))));
				}
				for (name, value) in &el.data.attrs {
					out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
				}
				out.push('>');

				if is_void_element(&el.tag) {
					return;
				}
				for child in &el.children {
					child.write_html(out);
				}
				out.push_str(&format!("</{}>", el.tag));
			}
		}
	}
}

impl From<ElementNode> for VNode {
	fn from(el: ElementNode) -> Self {
		Self::Element(el)
	}
}

impl From<&'static str> for VNode {
	fn from(text: &'static str) -> Self {
		Self::Text(Cow::Borrowed(text))
	}
}

impl From<String> for VNode {
	fn from(text: String) -> Self {
		Self::Text(Cow::Owned(text))
	}
}

fn is_void_element(tag: &str) -> bool {
	matches!(
		tag,
		"area"
			| "base" | "br"
			| "col" | "embed"
			| "hr" | "img"
			| "input" | "link"
			| "meta" | "source"
			| "track" | "wbr"
	)
}

fn escape_html(raw: &str) -> Cow<'_, str> {
	if !raw.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(raw);
	}
	let mut escaped = String::with_capacity(raw.len() + 8);
	for ch in raw.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}
