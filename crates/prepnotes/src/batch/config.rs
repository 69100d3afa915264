use std::path::PathBuf;

use crate::config::Config;

pub struct BatchConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub eligible_status: String,
    pub dry_run: bool,
}

impl BatchConfig {
    /// In-place rewrite of `path`, enhancing `published` records.
    pub fn in_place<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        Self {
            output_path: path.clone(),
            input_path: path,
            eligible_status: "published".to_string(),
            dry_run: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            input_path: PathBuf::from(&config.input_path),
            output_path: PathBuf::from(config.resolved_output_path()),
            eligible_status: config.eligible_status.clone(),
            dry_run: config.dry_run,
        }
    }
}
