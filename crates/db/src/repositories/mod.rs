//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod cube_card_repo;
pub mod cube_repo;

pub use cube_card_repo::CubeCardRepo;
pub use cube_repo::CubeRepo;
