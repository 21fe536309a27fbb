//! Implementations of [`crate::ports::InventoryRepository`].

#[cfg(any(test, feature = "test-util"))]
pub mod memory_inventory_repository;
pub mod postgres_inventory_repository;

#[cfg(any(test, feature = "test-util"))]
pub use memory_inventory_repository::InMemoryInventoryRepository;
pub use postgres_inventory_repository::PostgresInventoryRepository;
