mod advanced_search;
mod collections;
mod drm;
mod export;
mod favourite;
mod search;
mod settings;
mod user;

pub use export::EXPORT_PATH;
pub use search::FACET_SETTINGS_PATH;
