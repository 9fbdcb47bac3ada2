//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! crawl-and-write cycle end-to-end against a small category tree.

use pricewalk::config::{Config, FetchConfig, OutputConfig, SelectorConfig, SiteConfig};
use pricewalk::crawler::crawl;
use pricewalk::output::write_results;
use pricewalk::Price;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the given mock server
fn create_test_config(base_url: &str, table_dir: &str, backup_path: &str) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            root_path: "/catalog".to_string(),
        },
        fetch: FetchConfig {
            user_agent: "TestAgent/1.0".to_string(),
            timeout_seconds: 5,
            max_concurrent_requests: 4,
            ..FetchConfig::default()
        },
        selectors: SelectorConfig::default(),
        output: OutputConfig {
            table_dir: table_dir.to_string(),
            backup_path: backup_path.to_string(),
        },
    }
}

fn category_page(links: &[(&str, &str)]) -> String {
    let anchors: String = links
        .iter()
        .map(|(href, label)| format!(r#"<a class="section-item" href="{}">{}</a>"#, href, label))
        .collect();
    format!("<html><body>{}</body></html>", anchors)
}

fn leaf_page(products: &[(&str, Option<&str>)]) -> String {
    let cards: String = products
        .iter()
        .map(|(name, price)| {
            let price_span = match price {
                Some(p) => format!(r#"<span class="cur-price">{}</span>"#, p),
                None => String::new(),
            };
            format!(
                r#"<div class="product-item"><div class="product-item__name">{}</div>{}</div>"#,
                name, price_span
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", cards)
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts the standard two-branch tree used by most tests:
/// root -> Shoes (leaf), Hats (interior) -> Winter Hats (leaf)
async fn mount_sample_tree(server: &MockServer) {
    mount_page(
        server,
        "/catalog",
        category_page(&[("/catalog/shoes", "Shoes"), ("/catalog/hats", "Hats")]),
    )
    .await;
    mount_page(
        server,
        "/catalog/shoes",
        leaf_page(&[("Red Shoe", Some("$10")), ("Blue Shoe", None)]),
    )
    .await;
    mount_page(
        server,
        "/catalog/hats",
        category_page(&[("/catalog/hats/winter", "Winter Hats")]),
    )
    .await;
    mount_page(
        server,
        "/catalog/hats/winter",
        leaf_page(&[("Beanie", Some("$5"))]),
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_collects_all_leaf_sections() {
    let mock_server = MockServer::start().await;
    mount_sample_tree(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        dir.path().to_str().unwrap(),
        dir.path().join("Backup_data.txt").to_str().unwrap(),
    );

    let results = crawl(config).await.unwrap();

    assert_eq!(results.len(), 2);

    let shoes = results.iter().find(|s| s.label == "Shoes").unwrap();
    assert_eq!(shoes.products.len(), 2);
    assert_eq!(shoes.products["Red Shoe"], Price::Text("$10".to_string()));
    assert_eq!(shoes.products["Blue Shoe"], Price::Unset);

    let winter = results.iter().find(|s| s.label == "Winter Hats").unwrap();
    assert_eq!(winter.products["Beanie"], Price::Text("$5".to_string()));

    // The interior "Hats" page contributes no section of its own
    assert!(results.iter().all(|s| s.label != "Hats"));
}

#[tokio::test]
async fn test_crawl_and_write_produces_the_sorted_dated_table() {
    let mock_server = MockServer::start().await;
    mount_sample_tree(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        dir.path().to_str().unwrap(),
        dir.path().join("Backup_data.txt").to_str().unwrap(),
    );
    let output = config.output.clone();

    let results = crawl(config).await.unwrap();
    let written = write_results(&results, &output).unwrap();

    let name = written.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("20") && name.ends_with(".csv"), "{}", name);

    let content = std::fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Number_id,Section_name,Product_name,Price",
            "1,Shoes,Blue Shoe,0",
            "2,Shoes,Red Shoe,$10",
            "3,Winter Hats,Beanie,$5",
        ]
    );
}

#[tokio::test]
async fn test_failed_branch_does_not_lose_sibling_results() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/catalog",
        category_page(&[("/catalog/shoes", "Shoes"), ("/catalog/broken", "Broken")]),
    )
    .await;
    mount_page(
        &mock_server,
        "/catalog/shoes",
        leaf_page(&[("Red Shoe", Some("$10"))]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/catalog/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        dir.path().to_str().unwrap(),
        dir.path().join("Backup_data.txt").to_str().unwrap(),
    );

    let results = crawl(config).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "Shoes");
    assert_eq!(results[0].products["Red Shoe"], Price::Text("$10".to_string()));
}

#[tokio::test]
async fn test_dead_end_page_contributes_nothing() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/catalog",
        category_page(&[("/catalog/empty", "Empty"), ("/catalog/shoes", "Shoes")]),
    )
    .await;
    // No product cards and no category links
    mount_page(
        &mock_server,
        "/catalog/empty",
        "<html><body><p>Coming soon</p></body></html>".to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/catalog/shoes",
        leaf_page(&[("Red Shoe", Some("$10"))]),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        dir.path().to_str().unwrap(),
        dir.path().join("Backup_data.txt").to_str().unwrap(),
    );

    let results = crawl(config).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "Shoes");
}

#[tokio::test]
async fn test_root_fetch_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        dir.path().to_str().unwrap(),
        dir.path().join("Backup_data.txt").to_str().unwrap(),
    );

    assert!(crawl(config).await.is_err());
}

#[tokio::test]
async fn test_table_write_failure_falls_back_to_backup() {
    let mock_server = MockServer::start().await;
    mount_sample_tree(&mock_server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &mock_server.uri(),
        // Table directory does not exist, so the CSV write fails
        dir.path().join("missing/tables").to_str().unwrap(),
        dir.path().join("Backup_data.txt").to_str().unwrap(),
    );
    let output = config.output.clone();

    let results = crawl(config).await.unwrap();
    let written = write_results(&results, &output).unwrap();

    assert_eq!(written.to_str().unwrap(), output.backup_path);
    let content = std::fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["1ShoesBlue Shoe0", "2ShoesRed Shoe$10", "3Winter HatsBeanie$5"]
    );
}
