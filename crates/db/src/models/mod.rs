//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the table row and
//! the `Deserialize` DTOs used to write it.

pub mod cube;
pub mod cube_card;
