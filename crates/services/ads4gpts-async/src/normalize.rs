//! Reduces the envelope's `data.ads` to the shape the caller asked for.
//!
//! The server may answer with one object or an array regardless of `num_ads`.
//! An array collapses to its first element when one ad was requested. A bare
//! object is passed through unchanged even when several were requested; it is
//! never wrapped into a one-element list.

use crate::error::AdsError;
use crate::types::{Ads, AdsResponse, AdsStatus, OneOrMany};

/// Shapes `response` for a request of `num_ads` ads.
///
/// # Errors
///
/// Returns [`AdsError::InvalidResponse`] when `data.ads` is missing or null, or
/// when a single ad was requested and the array is empty.
pub fn normalize<T>(response: AdsResponse<T>, num_ads: u32) -> Result<Ads<T>, AdsError> {
    let AdsResponse {
        status,
        data,
        message,
    } = response;

    let Some(ads) = data.and_then(|d| d.ads) else {
        let mut msg = String::from("no 'ads' field found");
        if status == Some(AdsStatus::Error) {
            if let Some(m) = message.filter(|m| !m.trim().is_empty()) {
                msg.push_str(": ");
                msg.push_str(&m);
            }
        }
        return Err(AdsError::InvalidResponse(msg));
    };

    match ads {
        OneOrMany::One(ad) => Ok(Ads::One(ad)),
        OneOrMany::Many(list) if num_ads > 1 => Ok(Ads::Many(list)),
        OneOrMany::Many(list) => list.into_iter().next().map(Ads::One).ok_or_else(|| {
            AdsError::InvalidResponse("'ads' array is empty".into())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn resp(v: Value) -> AdsResponse<Value> {
        serde_json::from_value(v).unwrap()
    }

    fn two_ads() -> AdsResponse<Value> {
        resp(json!({"status": "success", "data": {"ads": [{"id": "A"}, {"id": "B"}]}}))
    }

    #[test]
    fn array_collapses_to_first_for_single_ad() {
        assert_eq!(normalize(two_ads(), 1).unwrap(), Ads::One(json!({"id": "A"})));
    }

    #[test]
    fn array_passes_through_for_many() {
        assert_eq!(
            normalize(two_ads(), 2).unwrap(),
            Ads::Many(vec![json!({"id": "A"}), json!({"id": "B"})])
        );
    }

    #[test]
    fn array_is_not_truncated_to_num_ads() {
        let r = resp(json!({"data": {"ads": [{"id": 1}, {"id": 2}, {"id": 3}]}}));
        assert_eq!(normalize(r, 2).unwrap().len(), 3);
    }

    #[test]
    fn single_object_is_returned_as_is() {
        for n in [1, 2] {
            let r = resp(json!({"status": "success", "data": {"ads": {"id": "A"}}}));
            assert_eq!(normalize(r, n).unwrap(), Ads::One(json!({"id": "A"})));
        }
    }

    #[test]
    fn missing_ads_is_invalid_response() {
        let err = normalize(resp(json!({"status": "success", "data": {}})), 1).unwrap_err();
        assert!(matches!(err, AdsError::InvalidResponse(_)));
        assert!(err.to_string().contains("ads"));
    }

    #[test]
    fn missing_data_and_null_ads_are_invalid() {
        assert!(normalize(resp(json!({"status": "success"})), 1).is_err());
        assert!(normalize(resp(json!({"data": {"ads": null}})), 3).is_err());
    }

    #[test]
    fn error_status_message_is_surfaced() {
        let r = resp(json!({"status": "error", "message": "quota exceeded"}));
        let err = normalize(r, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid response: no 'ads' field found: quota exceeded"
        );
    }

    #[test]
    fn empty_array() {
        let empty = || resp(json!({"data": {"ads": []}}));
        assert!(normalize(empty(), 1).is_err());
        assert_eq!(normalize(empty(), 2).unwrap(), Ads::Many(vec![]));
    }
}
