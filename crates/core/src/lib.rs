//! Domain logic for cubekit.
//!
//! Everything in this crate is pure: card and cube-card models, the error
//! taxonomy, search-term resolution, the Japanese card-name dictionary and
//! the cube analyzer. Database and network concerns live in `cubekit-db` and
//! `cubekit-catalog`.

pub mod analysis;
pub mod card;
pub mod error;
pub mod terms;
pub mod translation;
pub mod types;
pub mod validation;
