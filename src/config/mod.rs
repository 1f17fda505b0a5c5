//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::HorizonPaths;
pub use settings::Settings;
