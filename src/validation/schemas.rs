use serde_json::Value;

// Embed schemas at compile time
const RESOURCE_SCHEMA: &str = include_str!("../../schemas/v1/resource-schema.json");

pub fn get_resource_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(RESOURCE_SCHEMA)
}
