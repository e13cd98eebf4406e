use crate::Map;
use crate::ReschemaError;
use crate::ReschemaOptions;
use crate::ReschemaResult;
use crate::Template;
use crate::Value;
use crate::dict::DictReschemer;
use crate::node::Scope;

/// Applies one template to every record of a list scope.
pub(crate) struct ListReschemer<'s, 'a> {
	scope: &'s Scope<'a>,
	items: &'a [Value],
	options: ReschemaOptions,
}

impl<'s, 'a> ListReschemer<'s, 'a> {
	pub(crate) fn new(scope: &'s Scope<'a>, items: &'a [Value], options: ReschemaOptions) -> Self {
		Self {
			scope,
			items,
			options,
		}
	}

	/// Each record gets its own map scope whose parent is the list scope, so
	/// `../` from inside the template reaches past the current record.
	pub(crate) fn reschema(&self, template: &Template) -> ReschemaResult<Vec<Map>> {
		let mut reschema = Vec::with_capacity(self.items.len());

		for (index, item) in self.items.iter().enumerate() {
			let Value::Map(record) = item else {
				return Err(ReschemaError::InvalidInput(format!(
					"list element {index} should be a map and not a {}",
					item.kind()
				)));
			};

			let element = Scope::map(record, Some(self.scope));
			let reschemed = DictReschemer::new(&element, self.options).reschema(template)?;

			if !reschemed.is_empty() || self.options.add_empty_dict {
				reschema.push(reschemed);
			}
		}

		Ok(reschema)
	}
}
