#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONTENT: &str = r#"{
  "products": [
    {"id": 1, "name": "Edge Gateway", "category": "Edge AI", "description": "Runs models at the edge."},
    {"id": 2, "name": "Sensor Board", "category": "Hardware", "description": "Eight channel sensor board."},
    {"id": "3", "name": "Boot Loader", "category": "Firmware", "description": "Safe field updates.", "details": "Supports **A/B** slots."},
    {"id": 4, "name": "Vision Kit", "category": "Edge AI", "description": "Camera and accelerator."}
  ],
  "blogs": [
    {"id": "b1", "title": "Shipping Firmware", "category": "Guides", "excerpt": "Lessons from the field.", "author": "ada", "published_date": "2024-01-05", "read_time": 4, "content": "Body text."},
    {"id": "b2", "title": "Company News", "category": "News", "description": "What happened this year."}
  ]
}"#;

fn showroom_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("showroom"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir);
    cmd
}

fn site_dir(site_json: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("content.json"), CONTENT).unwrap();
    fs::write(temp.path().join("site.json"), site_json).unwrap();
    temp
}

#[test]
fn test_list_pages_through_products() {
    let temp = site_dir(r#"{"products_per_page": 3}"#);

    showroom_cmd(temp.path())
        .args(["list", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 2"))
        .stdout(predicate::str::contains("Edge Gateway"))
        .stdout(predicate::str::contains("Vision Kit").not());

    showroom_cmd(temp.path())
        .args(["list", "products", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vision Kit"))
        .stdout(predicate::str::contains("Edge Gateway").not());
}

#[test]
fn test_list_filters_by_category() {
    let temp = site_dir("{}");

    showroom_cmd(temp.path())
        .args(["ls", "products", "-c", "Edge AI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edge Gateway"))
        .stdout(predicate::str::contains("Vision Kit"))
        .stdout(predicate::str::contains("Sensor Board").not());

    showroom_cmd(temp.path())
        .args(["list", "products", "-c", "Robotics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found in category"));
}

#[test]
fn test_categories_are_sorted() {
    let temp = site_dir("{}");

    showroom_cmd(temp.path())
        .args(["categories", "products"])
        .assert()
        .success()
        .stdout("Edge AI\nFirmware\nHardware\n");
}

#[test]
fn test_view_accepts_string_form_of_numeric_id() {
    let temp = site_dir("{}");

    showroom_cmd(temp.path())
        .args(["view", "products", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edge Gateway"))
        .stdout(predicate::str::contains("Runs models at the edge."));

    showroom_cmd(temp.path())
        .args(["view", "blogs", "b9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No blogs with id `b9`."));
}

#[test]
fn test_render_deep_linked_product_to_file() {
    let temp = site_dir("{}");
    let out = temp.path().join("products.html");

    showroom_cmd(temp.path())
        .args(["render", "/products?productId=3", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Danvion Ltd. | Products</title>"));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains("Boot Loader"));
    assert!(html.contains("Request Demo"));
    assert!(html.contains("Quick contact actions"));
}

#[test]
fn test_render_empty_catalog_shows_coming_soon() {
    let temp = TempDir::new().unwrap();

    showroom_cmd(temp.path())
        .args(["render", "/blogs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming Soon"))
        .stdout(predicate::str::contains("Back to Home"));
}

#[test]
fn test_meta_uses_configured_origin() {
    let temp = site_dir(r#"{"origin": "https://example.org"}"#);

    showroom_cmd(temp.path())
        .args(["meta", "/admin/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Danvion Ltd. | Admin Login"))
        .stdout(predicate::str::contains("noindex,nofollow"))
        .stdout(predicate::str::contains("https://example.org/admin/login"));
}

#[test]
fn test_routes_lists_table_and_validates() {
    let temp = site_dir("{}");

    showroom_cmd(temp.path())
        .args(["routes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(fallback)"))
        .stdout(predicate::str::contains("Route table is valid."));
}

#[test]
fn test_config_prints_effective_values() {
    let temp = site_dir(r#"{"blogs_per_page": 2}"#);

    showroom_cmd(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""blogs_per_page": 2"#))
        .stdout(predicate::str::contains(r#""products_per_page": 9"#));
}

#[test]
fn test_content_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("catalog.json");
    fs::write(&content, CONTENT).unwrap();

    showroom_cmd(temp.path())
        .arg("--content")
        .arg(&content)
        .args(["list", "blogs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shipping Firmware"));
}

#[test]
fn test_unknown_kind_fails() {
    let temp = site_dir("{}");

    showroom_cmd(temp.path())
        .args(["list", "pages"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = site_dir(r#"{"products_per_page": 0}"#);

    showroom_cmd(temp.path())
        .args(["list", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
