//! Normalized record stored for every run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat reputation snapshot with a fixed set of fields.
///
/// Field values are passed through from the API unchanged; a field the API did
/// not return is `None` and serializes as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    /// Address as echoed by the API
    pub ip_address: Option<Value>,
    /// Whether the address is publicly routable
    pub is_public: Option<Value>,
    /// Abuse confidence, 0-100
    pub abuse_confidence_score: Option<Value>,
    /// ISO 3166 country code
    pub country_code: Option<Value>,
    /// Usage classification (data center, ISP, ...)
    pub usage_type: Option<Value>,
    /// Network operator
    pub isp: Option<Value>,
    /// Domain associated with the network
    pub domain: Option<Value>,
    /// Reverse DNS hostnames
    pub hostnames: Option<Value>,
    /// Reports within the lookback window
    pub total_reports: Option<Value>,
    /// Time of the most recent report
    pub last_reported_at: Option<Value>,
    /// Capture time, always UTC
    pub fetched_at: DateTime<Utc>,
}

impl NormalizedRecord {
    /// Serialized key names, in document order.
    pub const FIELDS: [&'static str; 11] = [
        "ipAddress",
        "isPublic",
        "abuseConfidenceScore",
        "countryCode",
        "usageType",
        "isp",
        "domain",
        "hostnames",
        "totalReports",
        "lastReportedAt",
        "fetchedAt",
    ];

    /// The record as a JSON document.
    pub fn to_document(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// `ipAddress` as text, when the API returned a string.
    pub fn ip_address_str(&self) -> Option<&str> {
        self.ip_address.as_ref().and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_record() -> NormalizedRecord {
        NormalizedRecord {
            ip_address: None,
            is_public: None,
            abuse_confidence_score: None,
            country_code: None,
            usage_type: None,
            isp: None,
            domain: None,
            hostnames: None,
            total_reports: None,
            last_reported_at: None,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_document_has_exactly_the_fixed_keys() {
        let doc = empty_record().to_document().unwrap();
        let object = doc.as_object().unwrap();
        assert_eq!(object.len(), NormalizedRecord::FIELDS.len());
        for key in NormalizedRecord::FIELDS {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let doc = empty_record().to_document().unwrap();
        assert_eq!(doc["isp"], Value::Null);
        assert_eq!(doc["hostnames"], Value::Null);
    }

    #[test]
    fn test_fetched_at_is_offset_qualified() {
        let doc = empty_record().to_document().unwrap();
        let fetched_at = doc["fetchedAt"].as_str().unwrap();
        assert!(fetched_at.ends_with('Z'), "{fetched_at}");
        assert!(DateTime::parse_from_rfc3339(fetched_at).is_ok());
    }

    #[test]
    fn test_ip_address_str() {
        let mut record = empty_record();
        assert_eq!(record.ip_address_str(), None);
        record.ip_address = Some(json!("1.1.1.1"));
        assert_eq!(record.ip_address_str(), Some("1.1.1.1"));
    }
}
