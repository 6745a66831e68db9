//! Helpers shared by the site modules.

use std::sync::Arc;

use serde_json::{json, Value};
use studio_http::AppError;
use studio_storage::Storage;
use uuid::Uuid;

/// Store handle every module routes against.
pub type Store = Arc<dyn Storage>;

/// Ids are opaque to clients, so anything that is not a UUID is simply unknown.
pub fn parse_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found(entity, raw))
}

pub fn not_found(entity: &str, id: &str) -> AppError {
    AppError::not_found(format!("{} '{}' not found", entity, id))
}

/// `(name, schema)` for a type deriving `utoipa::ToSchema`.
pub fn schema_entry<T: utoipa::ToSchema>() -> (String, Value) {
    (
        T::name().into_owned(),
        serde_json::to_value(T::schema()).unwrap_or(Value::Null),
    )
}

/// Collect schema entries into an OpenAPI `components.schemas` object.
pub fn schemas(entries: impl IntoIterator<Item = (String, Value)>) -> Value {
    Value::Object(entries.into_iter().collect())
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn error_response(description: &str) -> Value {
    json!({ "description": description, "content": json_content(schema_ref("ErrorResponse")) })
}

/// `GET` returning every entity of a collection.
pub fn list_operation(tag: &str, summary: &str, entity: &str) -> Value {
    json!({
        "summary": summary,
        "tags": [tag],
        "responses": {
            "200": {
                "description": format!("All {} entries", entity),
                "content": json_content(json!({ "type": "array", "items": schema_ref(entity) }))
            }
        }
    })
}

/// `GET` of one entity by a path parameter.
pub fn get_operation(tag: &str, summary: &str, entity: &str, param: &str) -> Value {
    json!({
        "summary": summary,
        "tags": [tag],
        "parameters": [{
            "name": param,
            "in": "path",
            "required": true,
            "schema": { "type": "string" }
        }],
        "responses": {
            "200": { "description": entity, "content": json_content(schema_ref(entity)) },
            "404": error_response(&format!("{} not found", entity))
        }
    })
}

/// `POST` creating an entity from its payload type.
pub fn create_operation(tag: &str, summary: &str, entity: &str, payload: &str) -> Value {
    json!({
        "summary": summary,
        "tags": [tag],
        "requestBody": {
            "required": true,
            "content": json_content(schema_ref(payload))
        },
        "responses": {
            "201": { "description": format!("Created {}", entity), "content": json_content(schema_ref(entity)) },
            "400": error_response("Malformed JSON body"),
            "422": error_response("Validation error")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_storage::models::Booking;

    #[test]
    fn non_uuid_ids_are_not_found() {
        assert!(parse_id("booking-1", "booking").is_err());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "booking").unwrap(), id);
    }

    #[test]
    fn schema_entry_uses_type_name() {
        let (name, schema) = schema_entry::<Booking>();
        assert_eq!(name, "Booking");
        assert!(schema["properties"]["createdAt"].is_object());
        assert!(schema["properties"]["preferredDate"].is_object());
    }
}
