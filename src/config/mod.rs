mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem,
};
pub use model::{CharsetConfig, Config, OutputConfig, ScannerConfig, default_extensions};
pub use validation::validate_config_semantics;
