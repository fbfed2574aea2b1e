pub mod cards;
pub mod cubes;
