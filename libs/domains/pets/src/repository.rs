use async_trait::async_trait;

use crate::error::PetResult;
use crate::models::{CreatePet, Pet, UpdatePet};

/// Repository trait for Pet persistence
///
/// Defines the data access interface for pet profiles. Identifiers are
/// accepted in their external string form; implementations validate the
/// syntax and signal `PetError::InvalidId` for malformed values, which is
/// distinct from a well-formed identifier with no matching document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Store a new pet under a freshly generated identifier
    async fn insert(&self, input: CreatePet) -> PetResult<Pet>;

    /// Every stored pet, in store iteration order
    async fn find_all(&self) -> PetResult<Vec<Pet>>;

    /// Get a pet by id; `None` when no document matches
    async fn find_by_id(&self, id: &str) -> PetResult<Option<Pet>>;

    /// All pets whose type exactly equals the argument (case-sensitive)
    async fn find_by_type(&self, pet_type: &str) -> PetResult<Vec<Pet>>;

    /// Merge the present fields of `input` into the stored document
    async fn update_by_id(&self, id: &str, input: UpdatePet) -> PetResult<()>;

    /// Remove the matching document
    async fn delete_by_id(&self, id: &str) -> PetResult<()>;
}
