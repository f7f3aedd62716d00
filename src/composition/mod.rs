//! Authoring layer: builders for movies, scenes and title cards, plus the frozen data model they
//! produce.

pub mod dsl;
pub mod estimate;
pub mod model;
pub mod opening;
pub mod scene;
pub mod script;
pub mod telop;
