//! API Configuration
//!
//! Endpoint addresses for the complaints API.

/// Default base origin of the complaints API
pub const DEFAULT_BASE_URL: &str = "https://sugarytestapi.azurewebsites.net/";
/// Path of the list endpoint, relative to the base origin
pub const LIST_PATH: &str = "TestApi/GetComplains";
/// Path of the save endpoint, relative to the base origin
pub const SAVE_PATH: &str = "TestApi/SaveComplain";

/// Where the complaints API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub list_path: String,
    pub save_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_path: LIST_PATH.to_string(),
            save_path: SAVE_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults, with the base origin overridable at build time through
    /// `COMPLAINTS_API_BASE`.
    pub fn from_build_env() -> Self {
        Self::with_base_override(option_env!("COMPLAINTS_API_BASE"))
    }

    fn with_base_override(base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            config.base_url = base.to_string();
        }
        config
    }

    pub fn list_url(&self) -> String {
        join_url(&self.base_url, &self.list_path)
    }

    pub fn save_url(&self) -> String {
        join_url(&self.base_url, &self.save_path)
    }
}

/// Join a base origin and a path with exactly one `/` between them.
/// An empty base leaves the path untouched.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
