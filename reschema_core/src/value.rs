//! The value model that flows through the reschema engine.
//!
//! [`Value`] mirrors the shape of JSON data with one extra variant:
//! [`Value::Undefined`]. It marks a path that does not exist, which is not
//! the same thing as a path that holds an explicit [`Value::Null`]. The
//! omission and coercion rules of the dict reschemer depend on keeping the
//! two apart.

use indexmap::IndexMap;

/// An ordered map of keys to values. Insertion order is kept so the output
/// of a reschema follows the order of its template.
pub type Map = IndexMap<String, Value>;

/// A tagged value flowing through the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// The path does not exist. Never returned inside a reschema result.
	#[default]
	Undefined,
	/// The path exists and holds an explicit null.
	Null,
	Bool(bool),
	Number(serde_json::Number),
	String(String),
	List(Vec<Value>),
	Map(Map),
}

impl Value {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Self::Undefined)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns `true` for a list with no elements.
	pub fn is_empty_list(&self) -> bool {
		matches!(self, Self::List(list) if list.is_empty())
	}

	/// Returns `true` for a map with no entries.
	pub fn is_empty_map(&self) -> bool {
		matches!(self, Self::Map(map) if map.is_empty())
	}

	pub fn as_map(&self) -> Option<&Map> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(list) => Some(list.as_slice()),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s.as_str()),
			_ => None,
		}
	}

	/// A short name for the variant, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Undefined => "undefined",
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::List(_) => "list",
			Self::Map(_) => "map",
		}
	}

	/// Recursively drop every `Undefined` map entry and list element, so a
	/// stored `Undefined` reads the same as an absent key.
	#[must_use]
	pub fn prune_undefined(self) -> Self {
		match self {
			Self::List(list) => {
				Self::List(
					list.into_iter()
						.filter(|value| !value.is_undefined())
						.map(Self::prune_undefined)
						.collect(),
				)
			}
			Self::Map(map) => {
				Self::Map(
					map.into_iter()
						.filter(|(_, value)| !value.is_undefined())
						.map(|(key, value)| (key, value.prune_undefined()))
						.collect(),
				)
			}
			other => other,
		}
	}

	/// Convert into a `serde_json::Value`. `Undefined` becomes JSON `null`.
	pub fn into_json(self) -> serde_json::Value {
		match self {
			Self::Undefined | Self::Null => serde_json::Value::Null,
			Self::Bool(b) => serde_json::Value::Bool(b),
			Self::Number(n) => serde_json::Value::Number(n),
			Self::String(s) => serde_json::Value::String(s),
			Self::List(list) => {
				serde_json::Value::Array(list.into_iter().map(Self::into_json).collect())
			}
			Self::Map(map) => {
				serde_json::Value::Object(
					map.into_iter()
						.map(|(key, value)| (key, value.into_json()))
						.collect(),
				)
			}
		}
	}

	pub fn to_json(&self) -> serde_json::Value {
		self.clone().into_json()
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(b),
			serde_json::Value::Number(n) => Self::Number(n),
			serde_json::Value::String(s) => Self::String(s),
			serde_json::Value::Array(array) => Self::List(array.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(object) => {
				Self::Map(
					object
						.into_iter()
						.map(|(key, value)| (key, Self::from(value)))
						.collect(),
				)
			}
		}
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		value.into_json()
	}
}

impl From<Map> for Value {
	fn from(map: Map) -> Self {
		Self::Map(map)
	}
}

impl From<Vec<Value>> for Value {
	fn from(list: Vec<Value>) -> Self {
		Self::List(list)
	}
}

impl From<Vec<Map>> for Value {
	fn from(maps: Vec<Map>) -> Self {
		Self::List(maps.into_iter().map(Self::Map).collect())
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Self::String(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Self::String(s)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Self::Number(n.into())
	}
}

impl From<u64> for Value {
	fn from(n: u64) -> Self {
		Self::Number(n.into())
	}
}

impl From<f64> for Value {
	/// Non-finite floats have no number representation and become `Null`.
	fn from(n: f64) -> Self {
		serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number)
	}
}
