use std::path::Path;

use crate::store::config_io::{self, ConfigError};

/// Handle `tp init`: scaffold the config file
pub fn cmd_init(config_path: Option<&Path>) -> Result<(), ConfigError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_io::default_config_path);
    config_io::write_config_template(&path)?;
    println!("wrote {}", path.display());
    println!("set [auth] api_key before signing in");
    Ok(())
}
