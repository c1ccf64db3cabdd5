//! Transform stage: raw API document to [`NormalizedRecord`].
//!
//! Every field is read from `data.<field>`; missing structure never fails the
//! transform, it only produces `None`.

pub mod accessor;
mod record;

pub use record::NormalizedRecord;

use chrono::{DateTime, Utc};
use serde_json::Value;

use accessor::lookup_owned;

/// Top-level key holding the reputation attributes.
const DATA_KEY: &str = "data";

/// Maps a raw response into a record stamped with the current UTC time.
pub fn transform(raw: &Value) -> NormalizedRecord {
    transform_at(raw, Utc::now())
}

/// Maps a raw response into a record stamped with `fetched_at`.
pub fn transform_at(raw: &Value, fetched_at: DateTime<Utc>) -> NormalizedRecord {
    let field = |name: &str| lookup_owned(raw, &[DATA_KEY, name]);

    let record = NormalizedRecord {
        ip_address: field("ipAddress"),
        is_public: field("isPublic"),
        abuse_confidence_score: field("abuseConfidenceScore"),
        country_code: field("countryCode"),
        usage_type: field("usageType"),
        isp: field("isp"),
        domain: field("domain"),
        hostnames: field("hostnames"),
        total_reports: field("totalReports"),
        last_reported_at: field("lastReportedAt"),
        fetched_at,
    };

    if raw.get(DATA_KEY).is_none() {
        log::warn!("Reputation response has no \"data\" object; storing an empty snapshot");
    }

    record
}
