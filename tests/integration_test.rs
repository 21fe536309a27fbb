use chrono::{Duration, NaiveDate, Utc};
use inventory_dashboard::adapters::PostgresInventoryRepository;
use inventory_dashboard::config::{Config, LogFormat};
use inventory_dashboard::{create_app, db, AppState};
use reqwest::StatusCode;
use sqlx::{migrate::Migrator, PgPool};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;

async fn setup_test_app() -> (String, PgPool, impl std::any::Any) {
    let container = Postgres::default().start().await.unwrap();
    let host_port = container.get_host_port_ipv4(5432).await.unwrap();

    let config = Config {
        server_port: 0,
        db_host: "127.0.0.1".to_string(),
        db_port: host_port,
        db_user: "postgres".to_string(),
        db_password: "postgres".to_string(),
        db_name: "postgres".to_string(),
        db_max_connections: 5,
        db_acquire_timeout_secs: 5,
        public_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("public"),
        cors_allowed_origins: None,
        log_format: LogFormat::Text,
    };

    let pool = db::create_pool(&config).await.unwrap();
    let migrator = Migrator::new(Path::join(
        Path::new(env!("CARGO_MANIFEST_DIR")),
        "migrations",
    ))
    .await
    .unwrap();
    migrator.run(&pool).await.unwrap();

    let app_state = AppState::new(
        Arc::new(PostgresInventoryRepository::new(pool.clone())),
        config.public_dir.clone(),
    );
    let app = create_app(app_state);

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let actual_addr = server.local_addr();

    tokio::spawn(async move {
        server.await.unwrap();
    });

    let base_url = format!("http://{}", actual_addr);
    (base_url, pool, container)
}

fn days_ago(days: i64) -> NaiveDate {
    (Utc::now() - Duration::days(days)).date_naive()
}

async fn insert_stock(pool: &PgPool, name: &str, quantity: i32) -> i32 {
    sqlx::query_scalar("INSERT INTO Stock (name, quantity, unit_price) VALUES ($1, $2, 9.99) RETURNING id")
        .bind(name)
        .bind(quantity)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_supplier_tx(pool: &PgPool, amount: &str, status: &str, date: NaiveDate) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO SupplierTransactions (supplier_id, amount, payment_status, date)
        VALUES (1, $1::numeric, $2, $3)
        RETURNING id
        "#,
    )
    .bind(amount)
    .bind(status)
    .bind(date)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_customer_tx(pool: &PgPool, amount: &str, status: &str, date: NaiveDate) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO CustomerTransactions (customer_id, amount, payment_status, date)
        VALUES (2, $1::numeric, $2, $3)
        RETURNING id
        "#,
    )
    .bind(amount)
    .bind(status)
    .bind(date)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[tokio::test]
async fn test_login_flow() {
    let (base_url, pool, _container) = setup_test_app().await;
    sqlx::query("INSERT INTO Users (username, password) VALUES ($1, $2)")
        .bind("manager")
        .bind("letmein")
        .execute(&pool)
        .await
        .unwrap();

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let res = client
        .post(format!("{}/login", base_url))
        .form(&[("username", "manager"), ("password", "letmein")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/dashboard");

    let res = client
        .post(format!("{}/login", base_url))
        .form(&[("username", "manager"), ("password", "nope")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Invalid username or password"));
}

#[tokio::test]
async fn test_alerts_against_postgres() {
    let (base_url, pool, _container) = setup_test_app().await;

    let low = insert_stock(&pool, "Widgets", 5).await;
    insert_stock(&pool, "Gadgets", 20).await;
    insert_stock(&pool, "Sprockets", 10).await;

    let overdue_supplier = insert_supplier_tx(&pool, "100.00", "Pending", days_ago(40)).await;
    insert_supplier_tx(&pool, "75.00", "Pending", days_ago(30)).await;
    let boundary_supplier = insert_supplier_tx(&pool, "60.00", "Pending", days_ago(31)).await;
    insert_supplier_tx(&pool, "80.00", "Paid", days_ago(90)).await;
    insert_customer_tx(&pool, "50.00", "Paid", days_ago(40)).await;
    let overdue_customer = insert_customer_tx(&pool, "20.00", "Pending", days_ago(100)).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/alerts", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let low_ids: Vec<i64> = body["lowStock"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(low_ids, vec![low as i64]);

    let pending: Vec<i64> = body["pendingPayments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(
        pending,
        vec![
            overdue_supplier as i64,
            boundary_supplier as i64,
            overdue_customer as i64
        ]
    );
    assert!(body["pendingPayments"][2].get("customerId").is_some());
}

#[tokio::test]
async fn test_listings_and_reports_against_postgres() {
    let (base_url, pool, _container) = setup_test_app().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/reports", base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["totalPurchases"].is_null());
    assert!(body["totalSales"].is_null());

    insert_stock(&pool, "Widgets", 5).await;
    insert_stock(&pool, "Gadgets", 20).await;
    insert_supplier_tx(&pool, "100.50", "Paid", days_ago(2)).await;
    insert_supplier_tx(&pool, "20.25", "Pending", days_ago(2)).await;
    insert_customer_tx(&pool, "50.00", "Paid", days_ago(2)).await;

    let stocks: serde_json::Value = client
        .get(format!("{}/api/stocks", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stocks.as_array().unwrap().len(), 2);
    assert_eq!(stocks[0]["name"], "Widgets");
    assert_eq!(stocks[0]["unitPrice"], "9.99");

    let suppliers: serde_json::Value = client
        .get(format!("{}/api/supplier-transactions", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(suppliers.as_array().unwrap().len(), 2);
    assert_eq!(suppliers[0]["amount"], "100.50");

    let report: serde_json::Value = client
        .get(format!("{}/api/reports", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["totalPurchases"], "120.75");
    assert_eq!(report["totalSales"], "50.00");

    let first = client
        .get(format!("{}/api/stocks", base_url))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    let second = client
        .get(format!("{}/api/stocks", base_url))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unreachable_database_fails_pool_creation() {
    let config = Config {
        server_port: 0,
        db_host: "127.0.0.1".to_string(),
        db_port: 1,
        db_user: "postgres".to_string(),
        db_password: "postgres".to_string(),
        db_name: "postgres".to_string(),
        db_max_connections: 1,
        db_acquire_timeout_secs: 1,
        public_dir: PathBuf::from("public"),
        cors_allowed_origins: None,
        log_format: LogFormat::Text,
    };

    assert!(db::create_pool(&config).await.is_err());
}
