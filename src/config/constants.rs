//! Configuration constants.
//!
//! Defaults for the reputation API, the document store and the lookup request.

/// AbuseIPDB `check` endpoint queried for every run.
pub const DEFAULT_API_URL: &str = "https://api.abuseipdb.com/api/v2/check";

/// Request header carrying the API key.
pub const HEADER_API_KEY: &str = "Key";

/// Query parameter carrying the address.
pub const QUERY_IP_ADDRESS: &str = "ipAddress";
/// Query parameter carrying the lookback window.
pub const QUERY_MAX_AGE_DAYS: &str = "maxAgeInDays";

/// Lookback window used when neither `--days` nor `MAX_AGE_DAYS` is given.
pub const DEFAULT_MAX_AGE_DAYS: u32 = 90;

/// Document store host used when `DB_HOST` is unset.
pub const DEFAULT_DB_HOST: &str = "localhost:5432";

/// Database name used when `DB_NAME` is unset.
pub const DEFAULT_DB_NAME: &str = "etl_database";

/// Collection (table) receiving one document per run.
pub const COLLECTION_NAME: &str = "abuseipdb_raw";

/// Scheme of connection strings assembled from `DB_*` pieces.
pub const DB_SCHEME: &str = "postgres";

/// User-Agent sent with API requests.
pub const USER_AGENT: &str = concat!("abuseipdb_etl/", env!("CARGO_PKG_VERSION"));

// Environment variable names
/// Required API key.
pub const ENV_API_KEY: &str = "API_KEY";
/// Endpoint override.
pub const ENV_API_URL: &str = "ABUSEIPDB_API_URL";
/// Full connection string override.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Store `host[:port]`.
pub const ENV_DB_HOST: &str = "DB_HOST";
/// Store login user.
pub const ENV_DB_USER: &str = "DB_USER";
/// Store login password.
pub const ENV_DB_PASS: &str = "DB_PASS";
/// Database name.
pub const ENV_DB_NAME: &str = "DB_NAME";
/// Default lookback window in days.
pub const ENV_MAX_AGE_DAYS: &str = "MAX_AGE_DAYS";
