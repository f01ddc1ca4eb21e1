use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Pet entity - a pet profile as exposed over the API.
///
/// The `id` is the hex string form of the stored ObjectId; the repository
/// owns the translation to the native storage representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    /// Unique identifier, generated at creation, immutable
    pub id: String,
    /// Pet name
    pub name: String,
    /// Owner name
    pub owner: String,
    /// Set at creation, immutable afterwards
    pub birthdate: DateTime<Utc>,
    /// Category used for by-type retrieval (e.g. "dog", "cat"); free text
    #[serde(rename = "type")]
    pub pet_type: String,
    /// Height in whatever unit the owner fancies
    pub height: i32,
    pub width: i32,
    /// Favorite toy
    pub favtoy: String,
}

/// DTO for creating a new pet profile.
///
/// A caller-supplied `id` is ignored (the identifier is always generated
/// server-side). `birthdate` may be supplied here and only here; when
/// omitted it defaults to the creation instant.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePet {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    pub birthdate: Option<DateTime<Utc>>,
    #[serde(rename = "type", default)]
    pub pet_type: String,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub favtoy: String,
}

/// DTO for a merge patch against an existing pet profile.
///
/// Only the fields present in the request body are applied; everything else
/// is left untouched. The write-once fields (`id`, `birthdate`) are not part
/// of this type, so payloads that include them have those keys silently
/// stripped during decoding, as are any unknown keys.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePet {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub owner: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub height: Option<i32>,
    pub width: Option<i32>,
    pub favtoy: Option<String>,
}

impl UpdatePet {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.owner.is_none()
            && self.pet_type.is_none()
            && self.height.is_none()
            && self.width.is_none()
            && self.favtoy.is_none()
    }
}
