//! Optional-path access into untyped JSON documents.

use serde_json::Value;

/// Follows `path` through nested objects.
///
/// Returns `None` when any segment is missing, when an intermediate value is not
/// an object, or when the final value is JSON `null`.
pub fn lookup<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let found = path
        .iter()
        .try_fold(document, |current, key| current.as_object()?.get(*key))?;
    (!found.is_null()).then_some(found)
}

/// Owned variant of [`lookup`].
pub fn lookup_owned(document: &Value, path: &[&str]) -> Option<Value> {
    lookup(document, path).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_value_found() {
        let doc = json!({"data": {"isp": "Google LLC"}});
        assert_eq!(lookup(&doc, &["data", "isp"]), Some(&json!("Google LLC")));
    }

    #[test]
    fn test_missing_container() {
        let doc = json!({"errors": []});
        assert_eq!(lookup(&doc, &["data", "isp"]), None);
    }

    #[test]
    fn test_intermediate_not_an_object() {
        let doc = json!({"data": ["isp"]});
        assert_eq!(lookup(&doc, &["data", "isp"]), None);

        let doc = json!({"data": "unexpected"});
        assert_eq!(lookup(&doc, &["data", "isp"]), None);
    }

    #[test]
    fn test_null_is_absent() {
        let doc = json!({"data": {"domain": null}});
        assert_eq!(lookup(&doc, &["data", "domain"]), None);
    }

    #[test]
    fn test_falsy_values_are_present() {
        let doc = json!({"data": {"isPublic": false, "totalReports": 0, "hostnames": []}});
        assert_eq!(lookup(&doc, &["data", "isPublic"]), Some(&json!(false)));
        assert_eq!(lookup(&doc, &["data", "totalReports"]), Some(&json!(0)));
        assert_eq!(lookup_owned(&doc, &["data", "hostnames"]), Some(json!([])));
    }

    #[test]
    fn test_empty_path_returns_document() {
        let doc = json!({"a": 1});
        assert_eq!(lookup(&doc, &[]), Some(&doc));
        assert_eq!(lookup(&Value::Null, &[]), None);
    }
}
