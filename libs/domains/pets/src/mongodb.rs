//! MongoDB implementation of PetRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{PetError, PetResult};
use crate::models::{CreatePet, Pet, UpdatePet};
use crate::repository::PetRepository;

/// Storage representation of a pet.
///
/// The repository is the sole owner of the translation between this shape
/// (native ObjectId `_id`, BSON datetime) and the public [`Pet`].
#[derive(Debug, Serialize, Deserialize)]
struct PetDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    owner: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    birthdate: DateTime<Utc>,
    #[serde(rename = "type")]
    pet_type: String,
    height: i32,
    width: i32,
    favtoy: String,
}

impl PetDocument {
    /// Build a fresh document from a create payload. The identifier is
    /// always generated here; a missing birthdate defaults to now.
    fn from_input(input: CreatePet) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            owner: input.owner,
            birthdate: input.birthdate.unwrap_or_else(Utc::now),
            pet_type: input.pet_type,
            height: input.height,
            width: input.width,
            favtoy: input.favtoy,
        }
    }
}

impl From<PetDocument> for Pet {
    fn from(doc: PetDocument) -> Self {
        Pet {
            id: doc.id.to_hex(),
            name: doc.name,
            owner: doc.owner,
            birthdate: doc.birthdate,
            pet_type: doc.pet_type,
            height: doc.height,
            width: doc.width,
            favtoy: doc.favtoy,
        }
    }
}

/// MongoDB implementation of the PetRepository
pub struct MongoPetRepository {
    collection: Collection<PetDocument>,
}

impl MongoPetRepository {
    /// Create a new MongoPetRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("pets_profiles");
    /// let repo = MongoPetRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, "pets")
    }

    /// Create a new MongoPetRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<PetDocument>(collection_name);
        Self { collection }
    }

    /// Parse an external identifier into its native form.
    ///
    /// A string that is not 24 hex characters is a malformed identifier,
    /// reported as `InvalidId` rather than "not found".
    fn parse_id(id: &str) -> PetResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| PetError::InvalidId(id.to_string()))
    }

    /// Build the `$set` document for a merge patch.
    ///
    /// Only the fields present in the payload appear; the write-once fields
    /// never do (they are not representable in `UpdatePet`).
    fn build_update(input: &UpdatePet) -> Document {
        let mut set = doc! {};

        if let Some(ref name) = input.name {
            set.insert("name", name);
        }
        if let Some(ref owner) = input.owner {
            set.insert("owner", owner);
        }
        if let Some(ref pet_type) = input.pet_type {
            set.insert("type", pet_type);
        }
        if let Some(height) = input.height {
            set.insert("height", height);
        }
        if let Some(width) = input.width {
            set.insert("width", width);
        }
        if let Some(ref favtoy) = input.favtoy {
            set.insert("favtoy", favtoy);
        }

        set
    }

    async fn collect_pets(
        &self,
        filter: Document,
    ) -> PetResult<Vec<Pet>> {
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<PetDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Pet::from).collect())
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {
    #[instrument(skip(self, input), fields(pet_name = %input.name))]
    async fn insert(&self, input: CreatePet) -> PetResult<Pet> {
        let document = PetDocument::from_input(input);

        self.collection.insert_one(&document).await?;

        tracing::info!(pet_id = %document.id, "Pet created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> PetResult<Vec<Pet>> {
        self.collect_pets(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> PetResult<Option<Pet>> {
        let oid = Self::parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Pet::from))
    }

    #[instrument(skip(self))]
    async fn find_by_type(&self, pet_type: &str) -> PetResult<Vec<Pet>> {
        self.collect_pets(doc! { "type": pet_type }).await
    }

    #[instrument(skip(self, input))]
    async fn update_by_id(&self, id: &str, input: UpdatePet) -> PetResult<()> {
        let oid = Self::parse_id(id)?;
        let set = Self::build_update(&input);

        // Mongo rejects an empty $set, so an empty patch degrades to an
        // existence check: the caller still learns whether the id is absent.
        if set.is_empty() {
            self.collection
                .find_one(doc! { "_id": oid })
                .await?
                .ok_or_else(|| PetError::NotFound(id.to_string()))?;
            return Ok(());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Err(PetError::NotFound(id.to_string()));
        }

        tracing::info!(pet_id = %id, "Pet updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> PetResult<()> {
        let oid = Self::parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(PetError::NotFound(id.to_string()));
        }

        tracing::info!(pet_id = %id, "Pet deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_hex() {
        assert!(MongoPetRepository::parse_id("68b1f00000000000000000aa").is_ok());
    }

    #[test]
    fn test_parse_id_rejects_wrong_length_and_charset() {
        for bad in ["abc", "zzzzzzzzzzzzzzzzzzzzzzzz", "", "68b1f00000000000000000aaff"] {
            match MongoPetRepository::parse_id(bad) {
                Err(PetError::InvalidId(id)) => assert_eq!(id, bad),
                other => panic!("expected InvalidId for {:?}, got {:?}", bad, other.err()),
            }
        }
    }

    #[test]
    fn test_build_update_includes_only_present_fields() {
        let patch = UpdatePet {
            height: Some(45),
            ..Default::default()
        };
        let set = MongoPetRepository::build_update(&patch);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_i32("height").unwrap(), 45);
    }

    #[test]
    fn test_build_update_never_touches_write_once_fields() {
        let patch: UpdatePet = serde_json::from_str(
            r#"{"_id":"aaaaaaaaaaaaaaaaaaaaaaaa","id":"aaaaaaaaaaaaaaaaaaaaaaaa","birthdate":"2024-01-01T00:00:00Z","owner":"Ana"}"#,
        )
        .unwrap();
        let set = MongoPetRepository::build_update(&patch);
        assert!(!set.contains_key("_id"));
        assert!(!set.contains_key("id"));
        assert!(!set.contains_key("birthdate"));
        assert_eq!(set.get_str("owner").unwrap(), "Ana");
    }

    #[test]
    fn test_build_update_empty_patch_is_empty() {
        let set = MongoPetRepository::build_update(&UpdatePet::default());
        assert!(set.is_empty());
    }

    #[test]
    fn test_document_conversion_uses_hex_id() {
        let oid = ObjectId::new();
        let document = PetDocument {
            id: oid,
            name: "Rex".to_string(),
            owner: "Ana".to_string(),
            birthdate: Utc::now(),
            pet_type: "dog".to_string(),
            height: 40,
            width: 20,
            favtoy: "ball".to_string(),
        };

        let pet = Pet::from(document);
        assert_eq!(pet.id, oid.to_hex());
        assert_eq!(pet.id.len(), 24);
        assert_eq!(pet.pet_type, "dog");
    }

    #[test]
    fn test_from_input_generates_id_and_defaults_birthdate() {
        let input: CreatePet = serde_json::from_str(r#"{"name":"Rex"}"#).unwrap();
        let before = Utc::now();
        let document = PetDocument::from_input(input);

        assert_eq!(document.name, "Rex");
        assert!(document.birthdate >= before);

        // Two creations never share an identifier
        let other = PetDocument::from_input(serde_json::from_str(r#"{"name":"Rex"}"#).unwrap());
        assert_ne!(document.id, other.id);
    }

    #[test]
    fn test_from_input_keeps_supplied_birthdate() {
        let input: CreatePet =
            serde_json::from_str(r#"{"name":"Rex","birthdate":"2020-05-01T00:00:00Z"}"#).unwrap();
        let document = PetDocument::from_input(input);
        assert_eq!(
            document.birthdate,
            "2020-05-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
