use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Defaults to `input_path` (in-place rewrite).
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default = "default_eligible_status")]
    pub eligible_status: String,
    #[serde(default)]
    pub dry_run: bool,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_input_path() -> String {
    "materials_rows.csv".to_string()
}

fn default_eligible_status() -> String {
    "published".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            input_path: default_input_path(),
            output_path: None,
            eligible_status: default_eligible_status(),
            dry_run: false,
        }
    }
}

impl Config {
    pub fn resolved_output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(&self.input_path)
    }
}
