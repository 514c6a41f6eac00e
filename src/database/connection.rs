//! Conexión a PostgreSQL
//!
//! Este módulo crea el pool de conexiones y aplica las migraciones
//! embebidas en el binario.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear el pool y dejar el schema al día
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));

    let pool = config
        .create_pool()
        .await
        .context("Error conectando a la base de datos")?;

    run_migrations(&pool).await?;

    info!("✅ Base de datos lista");
    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Error aplicando migraciones")?;
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|pos| pos + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }

    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
