pub mod error;
pub mod feature_flags;

// Search model
pub mod classification;
pub mod date_range;
pub mod my_resources;
pub mod preferences;
pub mod search;
pub mod settings;
pub mod share;
pub mod status;

// Item actions and lookups
pub mod drm;
pub mod favourite;
pub mod user;

// Advanced search controls
pub mod wizard;

pub use error::*;
pub use feature_flags::*;

pub use classification::*;
pub use date_range::*;
pub use my_resources::*;
pub use preferences::*;
pub use search::*;
pub use settings::*;
pub use share::*;
pub use status::*;

pub use drm::*;
pub use favourite::*;
pub use user::*;
pub use wizard::*;
