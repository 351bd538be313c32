use crate::error::{Result, ShowroomError};
use crate::meta::RouteTable;
use crate::model::ContentKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "site.json";
pub const DEFAULT_ORIGIN: &str = "https://danvion.com";
pub const DEFAULT_SITE_NAME: &str = "Danvion Ltd.";
pub const DEFAULT_CONTENT_FILE: &str = "content.json";

/// Contact channels shown on the sticky contact rail and product modals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    /// Dialable number, used in the `tel:` link.
    pub phone: String,
    pub phone_display: String,
    pub email: String,
    pub linkedin: String,
    pub calendly: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+8801700000000".to_string(),
            phone_display: "+880 1700-000000".to_string(),
            email: "info@danvion.com".to_string(),
            linkedin: "https://www.linkedin.com/company/danvion".to_string(),
            calendly: "https://calendly.com/danvion/30min".to_string(),
        }
    }
}

/// Site configuration, stored as `site.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Scheme and host used for canonical and image URLs.
    #[serde(default = "default_origin")]
    pub origin: String,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_products_per_page")]
    pub products_per_page: usize,

    #[serde(default = "default_blogs_per_page")]
    pub blogs_per_page: usize,

    /// Catalog file. Relative paths resolve against the config directory.
    #[serde(default = "default_content_file")]
    pub content_file: PathBuf,

    #[serde(default)]
    pub contact: ContactConfig,

    /// Replaces the built-in route table when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<RouteTable>,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_products_per_page() -> usize {
    ContentKind::Products.default_page_size()
}

fn default_blogs_per_page() -> usize {
    ContentKind::Blogs.default_page_size()
}

fn default_content_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_FILE)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            site_name: default_site_name(),
            products_per_page: default_products_per_page(),
            blogs_per_page: default_blogs_per_page(),
            content_file: default_content_file(),
            contact: ContactConfig::default(),
            routes: None,
        }
    }
}

impl SiteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShowroomError::Io)?;
        let config: SiteConfig =
            serde_json::from_str(&content).map_err(ShowroomError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShowroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShowroomError::Serialization)?;
        fs::write(config_path, content).map_err(ShowroomError::Io)?;
        Ok(())
    }

    /// Rejects zero page sizes, an origin without a scheme, and route tables
    /// with shadowed entries.
    pub fn validate(&self) -> Result<()> {
        if self.products_per_page == 0 || self.blogs_per_page == 0 {
            return Err(ShowroomError::Config(
                "page sizes must be at least 1".to_string(),
            ));
        }
        if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
            return Err(ShowroomError::Config(format!(
                "origin must start with http:// or https://, got `{}`",
                self.origin
            )));
        }
        if let Some(routes) = &self.routes {
            routes.validate()?;
        }
        Ok(())
    }

    pub fn page_size(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Products => self.products_per_page,
            ContentKind::Blogs => self.blogs_per_page,
        }
    }

    /// The configured route table, or the built-in one.
    pub fn route_table(&self) -> RouteTable {
        self.routes.clone().unwrap_or_default()
    }

    pub fn content_path(&self, config_dir: &Path) -> PathBuf {
        if self.content_file.is_absolute() {
            self.content_file.clone()
        } else {
            config_dir.join(&self.content_file)
        }
    }
}
