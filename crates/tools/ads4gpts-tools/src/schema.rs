//! Schema generation for tool inputs.

use schemars::generate::SchemaSettings;
use schemars::transform::RestrictFormats;
use schemars::{JsonSchema, Schema};
use serde_json::Value as Json;

/// Draft 2020-12 schema for `T`, with non-standard formats (e.g. `uint32`) dropped.
pub fn input_schema_for<T: JsonSchema>() -> Schema {
    SchemaSettings::draft2020_12()
        .with_transform(RestrictFormats::default())
        .into_generator()
        .into_root_schema_for::<T>()
}

/// Rewrite an object schema for strict function calling.
///
/// Sets `additionalProperties: false` and lists every property as required.
/// Non-object schemas are returned untouched.
pub fn strict(schema: &Schema) -> Json {
    let mut v = schema.as_value().clone();
    if let Some(obj) = v.as_object_mut() {
        let names: Vec<Json> = obj
            .get("properties")
            .and_then(Json::as_object)
            .map(|props| props.keys().cloned().map(Json::String).collect())
            .unwrap_or_default();
        if obj.contains_key("properties") {
            obj.insert("required".into(), Json::Array(names));
            obj.insert("additionalProperties".into(), Json::Bool(false));
        }
    }
    v
}
