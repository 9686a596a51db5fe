use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    tracing::info!("Fetch product {}", id);
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            *
        FROM products
        WHERE id=$1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .map(|product| Some(product))
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        e => {
            tracing::error!("Failed to fetch product, error: {:?}", e);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn fetch_all(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<(Vec<models::Product>, i64), String> {
    let query_span = tracing::info_span!("Fetch a page of products.");
    let products = sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            *
        FROM products
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch products, error: {:?}", err);
        "Could not fetch data".to_string()
    })?;

    let total = count_all(pool).await?;
    Ok((products, total))
}

pub async fn fetch_active(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<(Vec<models::Product>, i64), String> {
    let query_span = tracing::info_span!("Fetch a page of active products.");
    let products = sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            *
        FROM products
        WHERE active=true
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch active products, error: {:?}", err);
        "Could not fetch data".to_string()
    })?;

    let total = count_by_active(pool, true).await?;
    Ok((products, total))
}

pub async fn fetch_by_category(
    pool: &PgPool,
    category: models::Category,
    active_only: bool,
    limit: i64,
    offset: i64,
) -> Result<(Vec<models::Product>, i64), String> {
    let query_span = tracing::info_span!("Fetch products by category.");
    let select = if active_only {
        r#"SELECT * FROM products WHERE category=$1 AND active=true ORDER BY id LIMIT $2 OFFSET $3"#
    } else {
        r#"SELECT * FROM products WHERE category=$1 ORDER BY id LIMIT $2 OFFSET $3"#
    };
    let products = sqlx::query_as::<_, models::Product>(select)
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products by category, error: {:?}", err);
            "Could not fetch data".to_string()
        })?;

    let count = if active_only {
        r#"SELECT COUNT(*) FROM products WHERE category=$1 AND active=true"#
    } else {
        r#"SELECT COUNT(*) FROM products WHERE category=$1"#
    };
    let total = sqlx::query_scalar::<_, i64>(count)
        .bind(category)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products by category, error: {:?}", err);
            "Could not fetch data".to_string()
        })?;

    Ok((products, total))
}

// Case-insensitive substring match on name, active rows only.
pub async fn search_by_name(
    pool: &PgPool,
    name: &str,
    limit: i64,
    offset: i64,
) -> Result<(Vec<models::Product>, i64), String> {
    let query_span = tracing::info_span!("Search products by name.");
    let products = sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            *
        FROM products
        WHERE active=true AND name ILIKE '%' || $1 || '%'
        ORDER BY id
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(name)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to search products, error: {:?}", err);
        "Could not fetch data".to_string()
    })?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM products WHERE active=true AND name ILIKE '%' || $1 || '%'"#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to count searched products, error: {:?}", err);
        "Could not fetch data".to_string()
    })?;

    Ok((products, total))
}

// Inclusive bounds, active rows only.
pub async fn fetch_by_price_range(
    pool: &PgPool,
    min_price: rust_decimal::Decimal,
    max_price: rust_decimal::Decimal,
    limit: i64,
    offset: i64,
) -> Result<(Vec<models::Product>, i64), String> {
    let query_span = tracing::info_span!("Fetch products by price range.");
    let products = sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            *
        FROM products
        WHERE active=true AND price BETWEEN $1 AND $2
        ORDER BY id
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(min_price)
    .bind(max_price)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch products by price range, error: {:?}", err);
        "Could not fetch data".to_string()
    })?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM products WHERE active=true AND price BETWEEN $1 AND $2"#,
    )
    .bind(min_price)
    .bind(max_price)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to count products by price range, error: {:?}", err);
        "Could not fetch data".to_string()
    })?;

    Ok((products, total))
}

pub async fn count_all(pool: &PgPool) -> Result<i64, String> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM products"#)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn count_by_active(pool: &PgPool, active: bool) -> Result<i64, String> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM products WHERE active=$1"#)
        .bind(active)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products by active flag, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn count_by_category(
    pool: &PgPool,
    category: models::Category,
) -> Result<i64, String> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM products WHERE category=$1"#)
        .bind(category)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products by category, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

// Timestamps come in on the product value; the id comes back from the
// sequence.
pub async fn insert(
    pool: &PgPool,
    mut product: models::Product,
) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO products (name, description, price, stock, category, active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(product.name.clone())
    .bind(product.description.clone())
    .bind(product.price)
    .bind(product.stock)
    .bind(product.category)
    .bind(product.active)
    .bind(product.created_at)
    .bind(product.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |id| {
        product.id = id;
        product
    })
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Updating product");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET
            name=$2,
            description=$3,
            price=$4,
            stock=$5,
            category=$6,
            active=$7,
            updated_at=$8
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(product.id)
    .bind(product.name.clone())
    .bind(product.description.clone())
    .bind(product.price)
    .bind(product.stock)
    .bind(product.category)
    .bind(product.active)
    .bind(product.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        tracing::info!("Product {} has been saved", result.id);
        result
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete product.")]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    tracing::info!("Delete product {}", id);
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            "Failed to delete product".to_string()
        })
}

pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)"#)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to check product existence: {:?}", err);
            "Could not fetch data".to_string()
        })
}
