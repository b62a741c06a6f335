pub mod manager;
pub mod types;
pub mod validation;

pub use manager::{load_or_default, ConfigEvent, ConfigFormat, ConfigManager};
pub use types::*;
pub use validation::ConfigValidator;
