//! Lookup request type.

use std::fmt;
use std::net::IpAddr;

use crate::config::{DEFAULT_MAX_AGE_DAYS, QUERY_IP_ADDRESS, QUERY_MAX_AGE_DAYS};

/// One reputation lookup: the address to check and how far back reports count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRequest {
    /// Address to check
    pub ip_address: IpAddr,
    /// Lookback window in days
    pub max_age_days: u32,
}

impl LookupRequest {
    /// Creates a request with an explicit lookback window.
    pub fn new(ip_address: IpAddr, max_age_days: u32) -> Self {
        Self {
            ip_address,
            max_age_days,
        }
    }

    /// Query parameters sent to the `check` endpoint.
    pub(crate) fn query_params(&self) -> [(&'static str, String); 2] {
        [
            (QUERY_IP_ADDRESS, self.ip_address.to_string()),
            (QUERY_MAX_AGE_DAYS, self.max_age_days.to_string()),
        ]
    }
}

impl From<IpAddr> for LookupRequest {
    fn from(ip_address: IpAddr) -> Self {
        Self::new(ip_address, DEFAULT_MAX_AGE_DAYS)
    }
}

impl fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (last {} days)", self.ip_address, self.max_age_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookback_window() {
        let request = LookupRequest::from("8.8.8.8".parse::<IpAddr>().unwrap());
        assert_eq!(request.max_age_days, 90);
    }

    #[test]
    fn test_query_params() {
        let request = LookupRequest::new("2001:4860:4860::8888".parse().unwrap(), 7);
        let params = request.query_params();
        assert_eq!(params[0], ("ipAddress", "2001:4860:4860::8888".to_string()));
        assert_eq!(params[1], ("maxAgeInDays", "7".to_string()));
    }
}
