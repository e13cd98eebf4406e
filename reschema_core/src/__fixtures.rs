use serde_json::json;

use crate::Map;
use crate::Template;
use crate::TemplateNode;
use crate::Value;

pub fn to_json(map: Map) -> serde_json::Value {
	Value::from(map).into_json()
}

pub fn list_to_json(maps: Vec<Map>) -> serde_json::Value {
	Value::from(maps).into_json()
}

pub fn nested_data() -> Value {
	json!({
		"a": {
			"b": "deep",
			"c": null
		}
	})
	.into()
}

/// A catalogue with shared values at the root and records two levels down.
pub fn catalogue_data() -> Value {
	json!({
		"shared": "S",
		"currency": "EUR",
		"items": [
			{ "id": 1, "parent_name": "root", "name": "first" },
			{ "id": 2, "parent_name": "root", "name": "second" }
		]
	})
	.into()
}

pub fn catalogue_template() -> Template {
	Template::new().node(
		"items",
		TemplateNode::at(
			"items",
			Template::new().path("id", "id").path("up", "../../shared"),
		),
	)
}

/// Authors with nested books, for lookups that cross two list scopes.
pub fn library_data() -> Value {
	json!({
		"library": "central",
		"authors": [
			{
				"name": "Le Guin",
				"books": [
					{ "title": "The Dispossessed" },
					{ "title": "The Lathe of Heaven" }
				]
			},
			{
				"name": "Banks",
				"books": []
			}
		]
	})
	.into()
}

pub fn library_template() -> Template {
	Template::new().path("library", "library").node(
		"authors",
		TemplateNode::at(
			"authors",
			Template::new().path("name", "name").node(
				"books",
				TemplateNode::at(
					"books",
					Template::new()
						.path("title", "title")
						.path("author", "../../name")
						.path("library", "/library"),
				),
			),
		),
	)
}
