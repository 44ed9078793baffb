pub mod breed;
pub mod city;
pub mod client;
pub mod medicine;
pub mod pet;
pub mod product;
pub mod provider;
pub mod vet;
