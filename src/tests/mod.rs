//! Integration and unit tests for the bookstore application.
//!
//! - **api_tests**: the `/books` endpoints driven through the router
//! - **store_tests**: `BookStore` against a temporary SQLite file
//! - **db_tests**: table bootstrap
//! - **error_tests**: `AppError` status codes and bodies
//! - **config_tests**: configuration loading and validation
//! - **health_api_tests**: liveness, readiness, version and metrics


use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::config::{AppConfig, DatabaseConfig};
use crate::types::Book;

/// A bootstrapped database in a temporary directory. The directory lives as
/// long as this value does.
pub struct TestDb {
    pub pool: SqlitePool,
    pub config: AppConfig,
    _dir: TempDir,
}

pub async fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", dir.path().join("books.db").display());

    let mut config = AppConfig::default();
    config.database = DatabaseConfig { url: db_url, max_connections: 1 };

    let pool = crate::db::connect(&config.database).await.unwrap();
    crate::db::init_db(&pool).await.unwrap();

    TestDb { pool, config, _dir: dir }
}

pub fn watership_down() -> Book {
    Book {
        isbn: "9780743277709".to_string(),
        amazon_url: "https://www.amazon.com/Watership-Down-Novel-Richard-Adams/dp/0743277708/".to_string(),
        author: "Richard Adams".to_string(),
        language: "English".to_string(),
        pages: 476,
        publisher: "Puffin Books".to_string(),
        title: "Watership Down".to_string(),
        year: 2005,
    }
}

pub fn dawn_treader() -> Book {
    Book {
        isbn: "0064405028".to_string(),
        amazon_url: "https://www.amazon.com/Voyage-Dawn-Treader-Chronicles-Narnia/dp/0064405028/".to_string(),
        author: "C. S. Lewis".to_string(),
        language: "English".to_string(),
        pages: 256,
        publisher: "HarperCollins".to_string(),
        title: "The Voyage of the Dawn Treader".to_string(),
        year: 1994,
    }
}
