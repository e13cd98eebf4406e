use derive_more::Deref;
use derive_more::DerefMut;
use indexmap::IndexMap;

use crate::ReschemaError;
use crate::ReschemaResult;
use crate::TemplateNode;

/// The declarative shape of a reschema output.
///
/// Each key of the template becomes a key of the output, and each entry
/// describes where its value comes from.
///
/// ```
/// use reschema_core::Template;
/// use reschema_core::TemplateNode;
///
/// let template = Template::new()
/// 	.path("name", "user/name")
/// 	.nested("meta", Template::new().path("id", "user/id"))
/// 	.node(
/// 		"tags",
/// 		TemplateNode::at("user/tags", Template::new().path("label", "name")),
/// 	);
///
/// assert_eq!(template.len(), 3);
/// ```
#[derive(Debug, Clone, Default, Deref, DerefMut)]
pub struct Template(IndexMap<String, TemplateEntry>);

impl Template {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an entry that resolves `path` in the current scope.
	#[must_use]
	pub fn path(self, key: impl Into<String>, path: impl Into<String>) -> Self {
		self.entry(key, TemplateEntry::Path(path.into()))
	}

	/// Add a sub-template evaluated in the same scope.
	#[must_use]
	pub fn nested(self, key: impl Into<String>, template: Template) -> Self {
		self.entry(key, TemplateEntry::Nested(template))
	}

	/// Add an embedded sub-schema with its own data source.
	#[must_use]
	pub fn node(self, key: impl Into<String>, node: TemplateNode) -> Self {
		self.entry(key, TemplateEntry::Node(node))
	}

	#[must_use]
	pub fn entry(mut self, key: impl Into<String>, entry: impl Into<TemplateEntry>) -> Self {
		self.0.insert(key.into(), entry.into());
		self
	}

	/// Parse a template from JSON text. See the `TryFrom<serde_json::Value>`
	/// implementation for the accepted shapes.
	pub fn from_json_str(content: &str) -> ReschemaResult<Self> {
		let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
			ReschemaError::Configuration {
				key: String::new(),
				reason: e.to_string(),
			}
		})?;

		Self::try_from(value)
	}
}

impl<K: Into<String>> FromIterator<(K, TemplateEntry)> for Template {
	fn from_iter<T: IntoIterator<Item = (K, TemplateEntry)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(key, entry)| (key.into(), entry)).collect())
	}
}

/// Builds a template from JSON: objects are nested templates and strings are
/// paths. Arrays are kept as [`TemplateEntry::Sequence`] so the reschemer
/// can report the key that holds them.
impl TryFrom<serde_json::Value> for Template {
	type Error = ReschemaError;

	fn try_from(value: serde_json::Value) -> ReschemaResult<Self> {
		match value {
			serde_json::Value::Object(object) => {
				object
					.into_iter()
					.map(|(key, value)| {
						let entry = TemplateEntry::from_json(&key, value)?;
						Ok::<_, ReschemaError>((key, entry))
					})
					.collect()
			}
			other => {
				Err(ReschemaError::Configuration {
					key: String::new(),
					reason: format!("a template must be an object, found `{other}`"),
				})
			}
		}
	}
}

/// One entry of a [`Template`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum TemplateEntry {
	/// A path resolved in the current scope.
	Path(String),
	/// A sub-template evaluated in the same scope, without a parent hop.
	Nested(Template),
	/// An embedded sub-schema attached to the scope that visits it.
	Node(TemplateNode),
	/// A bare list. Never valid: lists are declared with a [`TemplateNode`].
	Sequence(Vec<TemplateEntry>),
}

impl TemplateEntry {
	fn from_json(key: &str, value: serde_json::Value) -> ReschemaResult<Self> {
		match value {
			serde_json::Value::String(path) => Ok(Self::Path(path)),
			serde_json::Value::Object(_) => Template::try_from(value).map(Self::Nested),
			serde_json::Value::Array(items) => {
				items
					.into_iter()
					.map(|item| Self::from_json(key, item))
					.collect::<ReschemaResult<Vec<_>>>()
					.map(Self::Sequence)
			}
			other => {
				Err(ReschemaError::Configuration {
					key: key.to_string(),
					reason: format!("expected a path or an object, found `{other}`"),
				})
			}
		}
	}
}

impl From<&str> for TemplateEntry {
	fn from(path: &str) -> Self {
		Self::Path(path.to_string())
	}
}

impl From<String> for TemplateEntry {
	fn from(path: String) -> Self {
		Self::Path(path)
	}
}

impl From<Template> for TemplateEntry {
	fn from(template: Template) -> Self {
		Self::Nested(template)
	}
}

impl From<TemplateNode> for TemplateEntry {
	fn from(node: TemplateNode) -> Self {
		Self::Node(node)
	}
}
