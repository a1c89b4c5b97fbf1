pub mod association_repository;

pub use association_repository::SqliteAssociationRepository;
