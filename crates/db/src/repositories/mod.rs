//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories for validated
//! entities add `validate`, `save` and `update_from_form`, which run the
//! `vetsoft_core` checks (including foreign-key lookups) before writing.

pub mod breed_repo;
pub mod city_repo;
pub mod client_repo;
pub mod medicine_repo;
pub mod pet_repo;
pub mod product_repo;
pub mod provider_repo;
pub mod vet_repo;

pub use breed_repo::BreedRepo;
pub use city_repo::CityRepo;
pub use client_repo::ClientRepo;
pub use medicine_repo::MedicineRepo;
pub use pet_repo::PetRepo;
pub use product_repo::ProductRepo;
pub use provider_repo::ProviderRepo;
pub use vet_repo::VetRepo;
