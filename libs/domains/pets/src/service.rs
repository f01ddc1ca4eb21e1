//! Pet Service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PetError, PetResult};
use crate::models::{CreatePet, Pet, UpdatePet};
use crate::repository::PetRepository;

/// Pet service providing business logic operations
///
/// The service layer handles payload validation and orchestrates repository
/// operations; identifier syntax is validated by the repository itself.
pub struct PetService<R: PetRepository> {
    repository: Arc<R>,
}

impl<R: PetRepository> PetService<R> {
    /// Create a new PetService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new pet profile
    #[instrument(skip(self, input), fields(pet_name = %input.name))]
    pub async fn create_pet(&self, input: CreatePet) -> PetResult<Pet> {
        input
            .validate()
            .map_err(|e| PetError::Validation(e.to_string()))?;

        self.repository.insert(input).await
    }

    /// List every stored pet
    #[instrument(skip(self))]
    pub async fn list_pets(&self) -> PetResult<Vec<Pet>> {
        self.repository.find_all().await
    }

    /// Get a pet by id
    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: &str) -> PetResult<Pet> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| PetError::NotFound(id.to_string()))
    }

    /// List the pets of one type (exact match)
    #[instrument(skip(self))]
    pub async fn list_pets_by_type(&self, pet_type: &str) -> PetResult<Vec<Pet>> {
        self.repository.find_by_type(pet_type).await
    }

    /// Merge a partial field set into an existing pet
    #[instrument(skip(self, input))]
    pub async fn update_pet(&self, id: &str, input: UpdatePet) -> PetResult<()> {
        input
            .validate()
            .map_err(|e| PetError::Validation(e.to_string()))?;

        self.repository.update_by_id(id, input).await
    }

    /// Delete a pet
    #[instrument(skip(self))]
    pub async fn delete_pet(&self, id: &str) -> PetResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: PetRepository> Clone for PetService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockPetRepository;

    fn sample_pet(id: &str) -> Pet {
        Pet {
            id: id.to_string(),
            name: "Rex".to_string(),
            owner: "Ana".to_string(),
            birthdate: "2020-05-01T00:00:00Z".parse().unwrap(),
            pet_type: "dog".to_string(),
            height: 40,
            width: 20,
            favtoy: "ball".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_pet_rejects_empty_name_without_touching_store() {
        let mut repo = MockPetRepository::new();
        repo.expect_insert().never();

        let service = PetService::new(repo);
        let input: CreatePet = serde_json::from_str(r#"{"name":""}"#).unwrap();

        match service.create_pet(input).await {
            Err(PetError::Validation(_)) => {}
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_get_pet_maps_absent_to_not_found() {
        let mut repo = MockPetRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = PetService::new(repo);
        let result = service.get_pet("68b1f00000000000000000aa").await;

        match result {
            Err(PetError::NotFound(id)) => assert_eq!(id, "68b1f00000000000000000aa"),
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_get_pet_returns_match() {
        let mut repo = MockPetRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "68b1f00000000000000000aa")
            .returning(|id| Ok(Some(sample_pet(id))));

        let service = PetService::new(repo);
        let pet = service.get_pet("68b1f00000000000000000aa").await.unwrap();
        assert_eq!(pet.name, "Rex");
    }

    #[tokio::test]
    async fn test_update_pet_rejects_invalid_patch_without_touching_store() {
        let mut repo = MockPetRepository::new();
        repo.expect_update_by_id().never();

        let service = PetService::new(repo);
        let patch: UpdatePet = serde_json::from_str(r#"{"name":""}"#).unwrap();

        assert!(matches!(
            service.update_pet("68b1f00000000000000000aa", patch).await,
            Err(PetError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_pet_propagates_not_found() {
        let mut repo = MockPetRepository::new();
        repo.expect_delete_by_id()
            .returning(|id| Err(PetError::NotFound(id.to_string())));

        let service = PetService::new(repo);
        assert!(matches!(
            service.delete_pet("68b1f00000000000000000aa").await,
            Err(PetError::NotFound(_))
        ));
    }
}
