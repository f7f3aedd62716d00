pub mod presets;
pub mod registry;
pub mod transitions;
