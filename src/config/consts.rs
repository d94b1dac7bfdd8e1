/// Prefix marking a DSL string as an environment variable reference
pub const ENV_PREFIX: &str = "$ENV.";
/// Connect timeout applied when a connector DSL sets none (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Standard MySQL port
pub const MYSQL_DEFAULT_PORT: &str = "3306";
/// Standard PostgreSQL port
pub const POSTGRES_DEFAULT_PORT: &str = "5432";
/// Standard Redis port
pub const REDIS_DEFAULT_PORT: &str = "6379";
/// Standard MongoDB port
pub const MONGO_DEFAULT_PORT: &str = "27017";
/// Default log filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
