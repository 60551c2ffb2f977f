//! Database repository layer for all domain entities.
//!
//! Each repository wraps SeaORM queries for one table and returns domain models.
//! Repositories are generic over `ConnectionTrait` so that services can run them
//! against the pool or inside a `DatabaseTransaction`.

pub mod member;
pub mod reservation;
pub mod theme;
pub mod time_slot;
pub mod waiting;

#[cfg(test)]
mod test;
