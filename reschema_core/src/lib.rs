//! `reschema_core` reshapes nested map and list data according to a
//! declarative template. The output follows the shape of the template, and
//! every value is pulled from a path in the source data, including paths
//! that climb out of a nested template into an enclosing scope.
//!
//! ## Resolution Pipeline
//!
//! ```text
//! reschema_dict / reschema_list
//!   → root scope over the caller's data
//!   → Dict reschemer (walks template entries in order)
//!       → path entry    → scope lookup (`../` one level up, `/` outermost)
//!       → nested entry  → same scope, nested output map
//!       → template node → attach to the visiting scope, resolve its path
//!                         → Dict reschemer (map data) / List reschemer (list data)
//!   → omission and coercion policies
//! ```
//!
//! ## Key Types
//!
//! - [`Value`]: The value model, with [`Value::Undefined`] for paths that do
//!   not exist and [`Value::Null`] for paths that hold an explicit null.
//! - [`Template`]: Ordered map of output keys to [`TemplateEntry`] values.
//! - [`TemplateNode`]: An embedded sub-schema with its own data source.
//! - [`ReschemaOptions`]: The four policy flags.
//! - [`ReschemaError`]: Invalid input, path and template errors.
//!
//! ## Paths
//!
//! Paths are `/` delimited. `a/b`, `/a/b`, `./a/b` and `a/b/` all address
//! the same value from a root scope. Inside a template node, `../key` reads
//! `key` from the enclosing scope and `/key` reads it from the outermost one.
//!
//! ## Quick Start
//!
//! ```rust
//! use reschema_core::ReschemaOptions;
//! use reschema_core::Template;
//! use reschema_core::TemplateNode;
//! use reschema_core::Value;
//! use reschema_core::reschema_dict;
//!
//! let data = Value::from(serde_json::json!({
//! 	"currency": "EUR",
//! 	"order": {
//! 		"lines": [
//! 			{ "sku": "a-1", "price": 10 },
//! 			{ "sku": "b-2", "price": 4 }
//! 		]
//! 	}
//! }));
//!
//! let template = Template::new().node(
//! 	"items",
//! 	TemplateNode::at(
//! 		"order/lines",
//! 		Template::new()
//! 			.path("id", "sku")
//! 			.path("amount", "price")
//! 			.path("currency", "/currency"),
//! 	),
//! );
//!
//! let result = reschema_dict(data, &template, ReschemaOptions::default()).unwrap();
//!
//! assert_eq!(
//! 	Value::from(result).to_json(),
//! 	serde_json::json!({
//! 		"items": [
//! 			{ "id": "a-1", "amount": 10, "currency": "EUR" },
//! 			{ "id": "b-2", "amount": 4, "currency": "EUR" }
//! 		]
//! 	})
//! );
//! ```

pub use accessor::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use node::NodeSource;
pub use node::Resolution;
pub use node::TemplateNode;
pub use template::*;
pub use value::*;

mod accessor;
pub mod config;
mod dict;
mod engine;
#[allow(unused_assignments)]
mod error;
mod list;
mod node;
mod template;
mod value;

#[cfg(test)]
mod __fixtures;
