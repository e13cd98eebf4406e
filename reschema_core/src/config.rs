use serde::Deserialize;
use serde::Serialize;

use crate::ReschemaError;
use crate::ReschemaResult;

/// Policy flags controlling how missing and empty values are reported.
///
/// Every flag defaults to `false`. The struct deserializes from any serde
/// format, so it can live inside a host application's own configuration:
///
/// ```toml
/// add_empty_dict = false
/// add_empty_lists = true
/// add_missing_keys = true
/// raise_missing_keys = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReschemaOptions {
	/// Keep keys whose value resolved to an empty map. In a list, keep
	/// records whose every field was omitted.
	pub add_empty_dict: bool,
	/// Keep keys whose value resolved to an empty list.
	pub add_empty_lists: bool,
	/// Report a path that does not exist as `null` instead of omitting the
	/// key.
	pub add_missing_keys: bool,
	/// Fail with [`ReschemaError::PathNotFound`] when a path does not exist.
	pub raise_missing_keys: bool,
}

impl ReschemaOptions {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn add_empty_dict(mut self, value: bool) -> Self {
		self.add_empty_dict = value;
		self
	}

	#[must_use]
	pub fn add_empty_lists(mut self, value: bool) -> Self {
		self.add_empty_lists = value;
		self
	}

	#[must_use]
	pub fn add_missing_keys(mut self, value: bool) -> Self {
		self.add_missing_keys = value;
		self
	}

	#[must_use]
	pub fn raise_missing_keys(mut self, value: bool) -> Self {
		self.raise_missing_keys = value;
		self
	}

	/// Parse options from TOML. Absent keys keep their default.
	pub fn from_toml_str(content: &str) -> ReschemaResult<Self> {
		toml::from_str(content).map_err(|e| ReschemaError::OptionsParse(e.to_string()))
	}
}
