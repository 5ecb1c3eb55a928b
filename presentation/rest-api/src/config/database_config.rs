use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::{ConfigError, required_var};

/// Initialize the connection pool and bring the schema up to date
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: directory of SQL migrations (default: "./migrations")
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = required_var("DATABASE_URL")?;
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?;
    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;

    tracing::info!(
        "Database ready ({} max connections, migrations from {})",
        config.max_connections,
        migrations_path
    );
    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(DatabaseConfig::DEFAULT_MAX_CONNECTIONS),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_max_connections_when_unset() {
        assert_eq!(parse_max_connections(None).unwrap(), 5);
    }

    #[test]
    fn should_parse_max_connections() {
        assert_eq!(parse_max_connections(Some(" 12 ".to_string())).unwrap(), 12);
    }

    #[test]
    fn should_reject_non_numeric_max_connections() {
        let result = parse_max_connections(Some("many".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS"))
        ));
    }
}
