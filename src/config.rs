use log::{debug, info};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const META_NAME: &str = "wallet-api-url";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(compiled_base_url())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn load() -> Self {
        match meta_base_url() {
            Some(url) => {
                info!("Using wallet service from page metadata: {}", url);
                Self::new(url)
            }
            None => {
                let config = Self::default();
                debug!("Using wallet service {}", config.base_url);
                config
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn compiled_base_url() -> &'static str {
    option_env!("WALLET_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", META_NAME))
        .ok()??;
    meta.get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
