use crate::Map;
use crate::ReschemaError;
use crate::ReschemaOptions;
use crate::ReschemaResult;
use crate::Template;
use crate::TemplateEntry;
use crate::Value;
use crate::node::Scope;

/// Walks a map template against a map scope.
pub(crate) struct DictReschemer<'s, 'a> {
	scope: &'s Scope<'a>,
	options: ReschemaOptions,
}

impl<'s, 'a> DictReschemer<'s, 'a> {
	pub(crate) fn new(scope: &'s Scope<'a>, options: ReschemaOptions) -> Self {
		Self { scope, options }
	}

	/// Resolve every entry of `template`. Keys whose value ends up undefined
	/// are left out, so the result never holds [`Value::Undefined`].
	pub(crate) fn reschema(&self, template: &Template) -> ReschemaResult<Map> {
		let mut reschema = Map::with_capacity(template.len());

		for (key, entry) in template.iter() {
			let value = match entry {
				TemplateEntry::Sequence(_) => {
					return Err(ReschemaError::Configuration {
						key: key.clone(),
						reason: "to reschema a list please use `reschema_list` or a `TemplateNode` \
						         instead of passing a list"
							.to_string(),
					});
				}
				TemplateEntry::Nested(nested) => Value::Map(self.reschema(nested)?),
				TemplateEntry::Node(node) => node.attach(self.scope)?.resolve()?,
				TemplateEntry::Path(path) => self.scope.get(path, self.options.raise_missing_keys)?,
			};

			if let Some(value) = self.apply_policy(value) {
				reschema.insert(key.clone(), value);
			}
		}

		Ok(reschema)
	}

	/// Missing values become `null` under `add_missing_keys`. Empty lists and
	/// maps that are present are dropped unless kept by their flag.
	fn apply_policy(&self, value: Value) -> Option<Value> {
		match value {
			Value::Undefined if self.options.add_missing_keys => Some(Value::Null),
			Value::Undefined => None,
			Value::List(list) if list.is_empty() && !self.options.add_empty_lists => None,
			Value::Map(map) if map.is_empty() && !self.options.add_empty_dict => None,
			value => Some(value),
		}
	}
}
