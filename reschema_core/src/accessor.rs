use crate::Map;
use crate::ReschemaError;
use crate::ReschemaResult;
use crate::Value;

/// Resolves slash delimited paths against a map.
///
/// ```
/// use reschema_core::DataAccessor;
/// use reschema_core::Value;
///
/// let data = Value::from(serde_json::json!({ "a": { "b": 1 } }));
/// let accessor = DataAccessor::new(&data).unwrap();
///
/// assert_eq!(accessor.get("/a/b/"), Value::from(1_i64));
/// assert!(accessor.get("a/c").is_undefined());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DataAccessor<'a> {
	data: &'a Map,
}

impl<'a> DataAccessor<'a> {
	/// Wrap map shaped data. Anything else is rejected.
	pub fn new(data: &'a Value) -> ReschemaResult<Self> {
		match data {
			Value::Map(map) => Ok(Self::from_map(map)),
			other => {
				Err(ReschemaError::InvalidInput(format!(
					"schema data should only be a map and not a {}",
					other.kind()
				)))
			}
		}
	}

	pub fn from_map(data: &'a Map) -> Self {
		Self { data }
	}

	pub fn data(&self) -> &'a Map {
		self.data
	}

	/// Return the value stored at `path`, or [`Value::Undefined`] as soon as
	/// a segment is missing.
	pub fn get(&self, path: &str) -> Value {
		self.lookup(path).cloned().unwrap_or_default()
	}

	fn lookup(&self, path: &str) -> Option<&'a Value> {
		let mut fields = path.trim_matches('/').split('/');
		let first = fields.next()?;
		let mut value = self.data.get(first)?;

		for field in fields {
			value = value.as_map()?.get(field)?;
		}

		Some(value)
	}
}
