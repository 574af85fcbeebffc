mod settings;

pub use settings::{Config, StarsConfig, EXAMPLE_CONFIG};
