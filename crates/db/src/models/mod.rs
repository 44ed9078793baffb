//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Validated entities also expose `to_form`, the row seen
//! as a fully-populated form, used as the base of partial updates.
//! City and breed carry their own create DTOs with declarative length rules.

pub mod breed;
pub mod city;
pub mod client;
pub mod medicine;
pub mod pet;
pub mod product;
pub mod provider;
pub mod vet;
