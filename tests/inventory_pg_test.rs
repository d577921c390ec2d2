//! Integration tests for the PostgreSQL inventory store
//!
//! Runs against the database in `DATABASE_URL`, each test inside its own schema
//! so an existing `inventario` table is never touched. Skipped when the variable is unset.

use inventory_store::prelude::*;
use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;

async fn setup_pool(schema: &'static str, id_type: &str) -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL integration test");
        return None;
    };

    let admin = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    admin
        .execute(format!("DROP SCHEMA IF EXISTS {schema} CASCADE").as_str())
        .await
        .expect("Failed to drop test schema");
    admin
        .execute(format!("CREATE SCHEMA {schema}").as_str())
        .await
        .expect("Failed to create test schema");
    admin.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                conn.execute(format!("SET search_path TO {schema}").as_str())
                    .await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    pool.execute(
        format!(
            "CREATE TABLE inventario (
                id {id_type} PRIMARY KEY,
                nombre VARCHAR(50) NOT NULL,
                categoria VARCHAR(50) NOT NULL,
                metal VARCHAR(50) NOT NULL,
                precio INT NOT NULL,
                stock INT NOT NULL
            )"
        )
        .as_str(),
    )
    .await
    .expect("Failed to create inventario");

    pool.execute(
        "INSERT INTO inventario (nombre, categoria, metal, precio, stock) VALUES
            ('Collar Heart', 'collar', 'oro', 20000, 2),
            ('Collar History', 'collar', 'plata', 15000, 5),
            ('Aros Berry', 'aros', 'oro', 12000, 10),
            ('Aros Hook Blue', 'aros', 'oro', 25000, 4),
            ('Anillo Wish', 'aros', 'plata', 30000, 4),
            ('Anillo Cuarzo Greece', 'anillo', 'oro', 40000, 2)",
    )
    .await
    .expect("Failed to seed inventario");

    Some(pool)
}

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_postgres_inventory_queries() {
    let Some(pool) = setup_pool("joyeria_it", "SERIAL").await else {
        return;
    };
    let store = PgInventoryStore::new(pool);

    store.health_check().await.unwrap();

    // Everything, default order
    let all = store
        .list_items(&ListQuery::from_params(&QueryParams::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(all.len(), 6);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    // Bounds, metal and descending price
    let query = ListQuery::from_params(&params(&[
        ("precio_min", "12000"),
        ("precio_max", "30000"),
        ("metal", "oro"),
        ("order_by", "precio_DESC"),
    ]))
    .unwrap();
    let rows = store.list_items(&query).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.nombre.as_str()).collect();
    assert_eq!(names, vec!["Aros Hook Blue", "Collar Heart", "Aros Berry"]);

    // Second page of two
    let query = ListQuery::from_params(&params(&[("limits", "2"), ("page", "2")])).unwrap();
    let rows = store.list_items(&query).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(InventorySummary::from_items(&rows).total_stock, 14);

    // Injection attempts stay values
    let filter = InventoryFilter::from_params(&params(&[(
        "categoria",
        "aros' OR '1'='1",
    )]))
    .unwrap();
    assert!(store.list_by_filter(&filter).await.unwrap().is_empty());

    // Filter endpoint query
    let filter = InventoryFilter::from_params(&params(&[("categoria", "aros")])).unwrap();
    let rows = store.list_by_filter(&filter).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.categoria == "aros"));
}

#[tokio::test]
async fn test_postgres_bigserial_ids_decode() {
    let Some(pool) = setup_pool("joyeria_it_bigserial", "BIGSERIAL").await else {
        return;
    };
    let store = PgInventoryStore::new(pool);

    let rows = store
        .list_by_filter(&InventoryFilter::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 6);

    let query = ListQuery::from_params(&params(&[("order_by", "id_DESC"), ("limits", "2")])).unwrap();
    let rows = store.list_items(&query).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![6, 5]);
    assert_eq!(InventorySummary::from_items(&rows).joyas[0].href, "/joyas/6");

    // INT prices come back widened to double precision
    let row = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(row["precio"], serde_json::json!(40000.0));
    assert_eq!(row["stock"], serde_json::json!(2));
}
