//! VetSoft domain core.
//!
//! Pure logic shared by the database and HTTP layers: form types decoded at
//! the boundary, per-entity field checks, and the field error map returned
//! to users. Nothing here touches the database; referential checks (does a
//! city or breed exist?) are answered by the caller and passed in.

pub mod client;
pub mod error;
pub mod form;
pub mod medicine;
pub mod pet;
pub mod product;
pub mod provider;
pub mod types;
pub mod vet;
