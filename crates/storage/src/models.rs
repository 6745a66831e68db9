//! Entity and payload types for every collection held by the store.
//!
//! Entities carry server-assigned fields (`id`, `createdAt`, `status`).
//! The matching `New*` payloads carry only what a caller may supply; any
//! server-owned field present in a request body is ignored on decode.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Status every booking starts with.
pub const BOOKING_STATUS_PENDING: &str = "pending";

/// String-encoded boolean used by the site for the "popular" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    True,
    False,
}

impl Flag {
    pub fn is_set(self) -> bool {
        matches!(self, Flag::True)
    }
}

/// A site account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Stored as supplied; no hashing is applied.
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl NewUser {
    pub(crate) fn into_entity(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}

/// A gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    /// Free-form tag the gallery filters on (`wedding`, `portrait`, ...).
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub image_url: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
}

impl NewPortfolioItem {
    pub(crate) fn into_entity(self, id: Uuid, created_at: OffsetDateTime) -> PortfolioItem {
        PortfolioItem {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub description: String,
    pub image_url: String,
    /// Years of experience.
    pub experience: Option<i32>,
    pub social_links: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(url)]
    pub image_url: String,
    #[validate(range(min = 0))]
    pub experience: Option<i32>,
    #[validate(custom(function = "all_urls"))]
    pub social_links: Option<Vec<String>>,
}

impl NewTeamMember {
    pub(crate) fn into_entity(self, id: Uuid) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            description: self.description,
            image_url: self.image_url,
            experience: self.experience,
            social_links: self.social_links,
        }
    }
}

/// A bookable package. A missing `price` is shown as "custom quote".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Option<i32>,
    pub features: Vec<String>,
    pub is_popular: Option<Flag>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    pub features: Vec<String>,
    pub is_popular: Option<Flag>,
}

impl NewService {
    pub(crate) fn into_entity(self, id: Uuid) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            features: self.features,
            is_popular: self.is_popular,
        }
    }
}

/// A contact-form request. `service` is the free-text name of a package,
/// not a reference to a stored [`Service`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub phone: String,
    #[validate(custom(function = "not_blank"))]
    pub service: String,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
}

impl NewBooking {
    pub(crate) fn into_entity(self, id: Uuid, created_at: OffsetDateTime) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            preferred_date: self.preferred_date,
            message: self.message,
            created_at,
            status: BOOKING_STATUS_PENDING.to_string(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn all_urls(links: &[String]) -> Result<(), ValidationError> {
    use validator::ValidateUrl;

    if links.iter().all(|link| link.validate_url()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("url");
        err.message = Some("every social link must be a URL".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booking_payload_ignores_server_owned_fields() {
        let payload: NewBooking = serde_json::from_value(json!({
            "id": "not-a-uuid",
            "status": "confirmed",
            "createdAt": "yesterday",
            "name": "Lina",
            "email": "lina@example.com",
            "phone": "0500000000",
            "service": "Portrait"
        }))
        .unwrap();

        assert!(payload.preferred_date.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn absent_optionals_serialize_as_null() {
        let item = NewPortfolioItem {
            title: "Dunes".to_string(),
            description: None,
            image_url: "https://example.com/dunes.jpg".to_string(),
            category: "landscape".to_string(),
        }
        .into_entity(Uuid::new_v4(), OffsetDateTime::UNIX_EPOCH);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(value["imageUrl"], "https://example.com/dunes.jpg");
        assert_eq!(value["createdAt"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn flag_uses_string_encoding() {
        assert_eq!(serde_json::to_value(Flag::True).unwrap(), json!("true"));
        let parsed: Flag = serde_json::from_value(json!("false")).unwrap();
        assert!(!parsed.is_set());
    }

    #[test]
    fn blank_and_malformed_fields_fail_validation() {
        let payload = NewBooking {
            name: "   ".to_string(),
            email: "not-an-email".to_string(),
            phone: "0500000000".to_string(),
            service: "Wedding".to_string(),
            preferred_date: None,
            message: None,
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("phone"));
    }

    #[test]
    fn social_links_must_all_be_urls() {
        let payload = NewTeamMember {
            name: "Omar".to_string(),
            role: "Editor".to_string(),
            description: "Colour grading".to_string(),
            image_url: "https://example.com/omar.jpg".to_string(),
            experience: Some(3),
            social_links: Some(vec![
                "https://instagram.com".to_string(),
                "instagram".to_string(),
            ]),
        };

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }
}
