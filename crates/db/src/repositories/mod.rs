//! Repository layer: one zero-sized struct per table with async query methods.

pub mod person_repo;

pub use person_repo::PersonRepo;
