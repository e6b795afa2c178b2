#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub arcgis_base_url: String,
    pub arcgis_token: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub shop_category: String,
    pub max_locations: u32,
    pub max_suggestions: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("arcgis_base_url", &self.arcgis_base_url)
            .field(
                "arcgis_token",
                &self.arcgis_token.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("shop_category", &self.shop_category)
            .field("max_locations", &self.max_locations)
            .field("max_suggestions", &self.max_suggestions)
            .finish()
    }
}
