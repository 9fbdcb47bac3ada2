use serde::Deserialize;

/// Main configuration structure for pricewalk
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base origin used to absolutize relative category hrefs
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the catalog root page, fetched first
    #[serde(rename = "root-path")]
    pub root_path: String,
}

/// HTTP request configuration
///
/// The header set simulates an ordinary browser so the site does not reject
/// the requests as automated traffic.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(rename = "accept-language", default = "default_accept_language")]
    pub accept_language: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Cap on simultaneously in-flight requests across the whole traversal
    #[serde(rename = "max-concurrent-requests", default = "default_max_concurrent")]
    pub max_concurrent_requests: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
            timeout_seconds: default_timeout_seconds(),
            max_concurrent_requests: default_max_concurrent(),
        }
    }
}

/// Class names the extractor matches against the site's markup
///
/// These are bare class names rather than full CSS selectors: the product
/// matcher works in document order and only needs class membership tests.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    /// Class of a product card element on a leaf page
    #[serde(rename = "product-item", default = "default_product_item")]
    pub product_item: String,

    /// Class of the product name element
    #[serde(rename = "product-name", default = "default_product_name")]
    pub product_name: String,

    /// Class of the current-price element
    #[serde(rename = "product-price", default = "default_product_price")]
    pub product_price: String,

    /// Class of an anchor pointing at a child category
    #[serde(rename = "section-link", default = "default_section_link")]
    pub section_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            product_item: default_product_item(),
            product_name: default_product_name(),
            product_price: default_product_price(),
            section_link: default_section_link(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the dated CSV files are written into
    #[serde(rename = "table-dir")]
    pub table_dir: String,

    /// Path of the plain-text backup file used when the CSV write fails
    #[serde(rename = "backup-path")]
    pub backup_path: String,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36"
        .to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_concurrent() -> u32 {
    16
}

fn default_product_item() -> String {
    "product-item".to_string()
}

fn default_product_name() -> String {
    "product-item__name".to_string()
}

fn default_product_price() -> String {
    "cur-price".to_string()
}

fn default_section_link() -> String {
    "section-item".to_string()
}
