pub mod components;
pub mod wizard;

pub use components::*;
