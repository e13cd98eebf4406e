use crate::Map;
use crate::ReschemaError;
use crate::ReschemaOptions;
use crate::ReschemaResult;
use crate::Template;
use crate::Value;
use crate::dict::DictReschemer;
use crate::list::ListReschemer;
use crate::node::Scope;

/// Reshape map shaped `data` according to `template`.
///
/// The data becomes the root scope: it has no parent, so a `../` path that
/// climbs out of it fails with [`ReschemaError::PathNotFound`].
///
/// ```
/// use reschema_core::ReschemaOptions;
/// use reschema_core::Template;
/// use reschema_core::Value;
/// use reschema_core::reschema_dict;
///
/// let data = Value::from(serde_json::json!({ "user": { "first": "Ada", "id": 7 } }));
/// let template = Template::new()
/// 	.path("name", "user/first")
/// 	.path("missing", "user/last");
///
/// let result = reschema_dict(data, &template, ReschemaOptions::default()).unwrap();
///
/// assert_eq!(
/// 	Value::from(result).to_json(),
/// 	serde_json::json!({ "name": "Ada" })
/// );
/// ```
pub fn reschema_dict(
	data: impl Into<Value>,
	template: &Template,
	options: ReschemaOptions,
) -> ReschemaResult<Map> {
	let data = data.into().prune_undefined();
	let Value::Map(map) = &data else {
		return Err(ReschemaError::InvalidInput(format!(
			"`reschema_dict` expects a map and not a {}",
			data.kind()
		)));
	};

	tracing::debug!(keys = template.len(), ?options, "reschema dict");
	let scope = Scope::map(map, None);

	DictReschemer::new(&scope, options).reschema(template)
}

/// Reshape every record of list shaped `data` with the same `template`.
///
/// Records that resolve to an empty map are dropped unless `add_empty_dict`
/// is set. Order is kept.
pub fn reschema_list(
	data: impl Into<Value>,
	template: &Template,
	options: ReschemaOptions,
) -> ReschemaResult<Vec<Map>> {
	let data = data.into().prune_undefined();
	let Value::List(items) = &data else {
		return Err(ReschemaError::InvalidInput(format!(
			"`reschema_list` expects a list of maps and not a {}",
			data.kind()
		)));
	};

	if let Some((index, item)) = items
		.iter()
		.enumerate()
		.find(|(_, item)| item.as_map().is_none())
	{
		return Err(ReschemaError::InvalidInput(format!(
			"`reschema_list` expects a list of maps, element {index} is a {}",
			item.kind()
		)));
	}

	tracing::debug!(records = items.len(), ?options, "reschema list");
	let scope = Scope::list(None);

	ListReschemer::new(&scope, items, options).reschema(template)
}
