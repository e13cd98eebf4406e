use std::borrow::Cow;

use crate::DataAccessor;
use crate::Map;
use crate::ReschemaError;
use crate::ReschemaOptions;
use crate::ReschemaResult;
use crate::Template;
use crate::Value;
use crate::dict::DictReschemer;
use crate::list::ListReschemer;

const NO_MORE_PARENTS: &str =
	"cannot retrieve data from parent, because there are no more parents";
const BROKEN_PATH: &str = "given path is broken";
const MISSING_PATH: &str = "given path does not exist";

/// Where a [`TemplateNode`] takes its data from.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeSource {
	/// Data supplied up front. A node built this way can be resolved on its
	/// own as a root.
	Data(Value),
	/// A path resolved against the parent scope once the node is attached.
	Path(String),
}

/// An embedded sub-schema: a template together with the data it reads from.
///
/// A node whose data is a map is driven by the dict reschemer and yields a
/// map. A node whose data is a list applies its template to every element
/// and yields a list of maps.
///
/// ```
/// use reschema_core::Resolution;
/// use reschema_core::Template;
/// use reschema_core::TemplateNode;
/// use reschema_core::Value;
///
/// let data = Value::from(serde_json::json!({ "user": { "name": "ada" } }));
/// let node = TemplateNode::new(data, Template::new().path("name", "user/name"));
///
/// let Resolution::Resolved(value) = node.resolve().unwrap() else {
/// 	unreachable!("nodes with data never wait for a parent");
/// };
/// assert_eq!(value.to_json(), serde_json::json!({ "name": "ada" }));
///
/// // A node reading from a path has nothing to resolve until it is embedded
/// // in a template and visited.
/// let pending = TemplateNode::at("user", Template::new().path("name", "name"));
/// assert!(matches!(pending.resolve().unwrap(), Resolution::Pending(_)));
/// ```
#[derive(Debug, Clone)]
pub struct TemplateNode {
	source: NodeSource,
	template: Template,
	options: ReschemaOptions,
}

impl TemplateNode {
	/// A node over concrete data.
	pub fn new(data: impl Into<Value>, template: Template) -> Self {
		Self {
			source: NodeSource::Data(data.into().prune_undefined()),
			template,
			options: ReschemaOptions::default(),
		}
	}

	/// A node whose data is the value at `path` in the parent scope.
	pub fn at(path: impl Into<String>, template: Template) -> Self {
		Self {
			source: NodeSource::Path(path.into()),
			template,
			options: ReschemaOptions::default(),
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: ReschemaOptions) -> Self {
		self.options = options;
		self
	}

	pub fn source(&self) -> &NodeSource {
		&self.source
	}

	pub fn template(&self) -> &Template {
		&self.template
	}

	pub fn options(&self) -> ReschemaOptions {
		self.options
	}

	/// The path waiting to be resolved against a parent, if any.
	pub fn pending_path(&self) -> Option<&str> {
		match &self.source {
			NodeSource::Path(path) => Some(path.as_str()),
			NodeSource::Data(_) => None,
		}
	}

	/// Returns `true` when the node cannot resolve without a parent.
	pub fn is_child(&self) -> bool {
		self.pending_path().is_some()
	}

	/// Resolve the node as a root.
	///
	/// A node that reads from a path has no data before it is attached, so it
	/// is handed back as [`Resolution::Pending`].
	pub fn resolve(&self) -> ReschemaResult<Resolution<'_>> {
		match &self.source {
			NodeSource::Path(_) => Ok(Resolution::Pending(self)),
			NodeSource::Data(data) => {
				resolve_data(data, &self.template, self.options, None).map(Resolution::Resolved)
			}
		}
	}

	/// Bind the node to the scope visiting it. A pending path is resolved
	/// now, one level up from the node.
	pub(crate) fn attach<'p>(&self, parent: &'p Scope<'p>) -> ReschemaResult<AttachedNode<'_, 'p>> {
		let data = match &self.source {
			NodeSource::Data(data) => Cow::Borrowed(data),
			NodeSource::Path(path) => {
				let data = parent.get(path, self.options.raise_missing_keys)?;
				tracing::debug!(path = %path, kind = data.kind(), "attached template node");
				Cow::Owned(data)
			}
		};

		Ok(AttachedNode {
			node: self,
			data,
			parent,
		})
	}
}

/// The outcome of [`TemplateNode::resolve`].
#[derive(Debug)]
pub enum Resolution<'n> {
	Resolved(Value),
	/// The node still needs a parent before it can be resolved.
	Pending(&'n TemplateNode),
}

impl Resolution<'_> {
	pub fn into_value(self) -> Option<Value> {
		match self {
			Self::Resolved(value) => Some(value),
			Self::Pending(_) => None,
		}
	}
}

/// A node bound to its parent scope, with its data source resolved.
#[derive(Debug)]
pub(crate) struct AttachedNode<'n, 'p> {
	node: &'n TemplateNode,
	data: Cow<'n, Value>,
	parent: &'p Scope<'p>,
}

impl AttachedNode<'_, '_> {
	pub(crate) fn resolve(&self) -> ReschemaResult<Value> {
		resolve_data(
			&self.data,
			&self.node.template,
			self.node.options,
			Some(self.parent),
		)
	}
}

/// Pick the reschemer from the shape of the data.
fn resolve_data<'a>(
	data: &'a Value,
	template: &Template,
	options: ReschemaOptions,
	parent: Option<&'a Scope<'a>>,
) -> ReschemaResult<Value> {
	match data {
		Value::Undefined => Ok(Value::Undefined),
		Value::Null => Ok(Value::Null),
		Value::Map(map) => {
			let scope = Scope::map(map, parent);
			DictReschemer::new(&scope, options)
				.reschema(template)
				.map(Value::Map)
		}
		Value::List(items) => {
			let scope = Scope::list(parent);
			ListReschemer::new(&scope, items, options)
				.reschema(template)
				.map(Value::from)
		}
		other => {
			Err(ReschemaError::InvalidInput(format!(
				"template node data should be a map or a list and not a {}",
				other.kind()
			)))
		}
	}
}

#[derive(Debug, Clone, Copy)]
enum ScopeData<'a> {
	Map(DataAccessor<'a>),
	/// A list cannot answer key lookups itself.
	List,
}

/// The data context a node resolves paths against, linked to the scope of
/// the node that encloses it.
#[derive(Debug)]
pub(crate) struct Scope<'a> {
	data: ScopeData<'a>,
	parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
	pub(crate) fn map(data: &'a Map, parent: Option<&'a Scope<'a>>) -> Self {
		Self {
			data: ScopeData::Map(DataAccessor::from_map(data)),
			parent,
		}
	}

	pub(crate) fn list(parent: Option<&'a Scope<'a>>) -> Self {
		Self {
			data: ScopeData::List,
			parent,
		}
	}

	fn is_map(&self) -> bool {
		matches!(self.data, ScopeData::Map(_))
	}

	/// Resolve `path` from this scope.
	///
	/// A leading `../` climbs exactly one scope per occurrence and a leading
	/// `/` climbs to the outermost scope. When `required` is set an absent
	/// path is an error instead of [`Value::Undefined`].
	pub(crate) fn get(&self, path: &str, required: bool) -> ReschemaResult<Value> {
		self.lookup(path, required, None)
	}

	fn lookup(&self, path: &str, required: bool, child: Option<&Scope<'_>>) -> ReschemaResult<Value> {
		match self.parent {
			Some(parent) if path.starts_with("../") || path.starts_with('/') => {
				let path = path.strip_prefix("../").unwrap_or(path);
				tracing::trace!(path, "delegating lookup to parent scope");
				return parent.lookup(path, required, Some(self));
			}
			None if path.starts_with("../") => {
				return Err(ReschemaError::path_not_found(NO_MORE_PARENTS, path));
			}
			_ => {}
		}

		let path = path.trim_start_matches(['.', '/']);

		match self.data {
			ScopeData::Map(accessor) => {
				let value = accessor.get(path);
				tracing::trace!(path, found = !value.is_undefined(), "resolved path");

				if required && value.is_undefined() {
					return Err(ReschemaError::path_not_found(MISSING_PATH, path));
				}

				Ok(value)
			}
			ScopeData::List => {
				if let Some(parent) = self.parent {
					return match child {
						Some(child) => parent.lookup(path, required, Some(child)),
						None => parent.lookup(path, required, Some(self)),
					};
				}

				// A root list has no map of its own, so the lookup is answered
				// by the element scope that asked for it.
				match child {
					Some(child) if child.is_map() => {
						child.lookup(path.trim_matches('/'), required, None)
					}
					_ => Err(ReschemaError::path_not_found(BROKEN_PATH, path)),
				}
			}
		}
	}
}
