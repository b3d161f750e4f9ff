use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::address::AddressQuery;

/// Availability reported by a provider for the queried address.
///
/// Codes outside the known set are kept verbatim in
/// [`CoverageStatus::Unrecognized`] so they survive a round trip. Decoding
/// never fails: `null` becomes an empty code and any other non-string value
/// keeps its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum CoverageStatus {
    Available,
    Soon,
    InBuild,
    NotAvailable,
    Unrecognized(String),
}

impl CoverageStatus {
    #[must_use]
    pub fn as_code(&self) -> &str {
        match self {
            CoverageStatus::Available => "available",
            CoverageStatus::Soon => "soon",
            CoverageStatus::InBuild => "in_build",
            CoverageStatus::NotAvailable => "not_available",
            CoverageStatus::Unrecognized(code) => code,
        }
    }
}

impl Default for CoverageStatus {
    fn default() -> Self {
        CoverageStatus::Unrecognized(String::new())
    }
}

impl From<String> for CoverageStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "available" => CoverageStatus::Available,
            "soon" => CoverageStatus::Soon,
            "in_build" => CoverageStatus::InBuild,
            "not_available" => CoverageStatus::NotAvailable,
            _ => CoverageStatus::Unrecognized(code),
        }
    }
}

impl<'de> Deserialize<'de> for CoverageStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let status = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(code) => CoverageStatus::from(code),
            serde_json::Value::Null => CoverageStatus::default(),
            other => CoverageStatus::Unrecognized(other.to_string()),
        };
        Ok(status)
    }
}

impl From<CoverageStatus> for String {
    fn from(status: CoverageStatus) -> Self {
        match status {
            CoverageStatus::Unrecognized(code) => code,
            known => known.as_code().to_string(),
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// One provider's availability at the queried address.
///
/// Optional fields are `None` only when absent (or unusable) on the wire;
/// `0` and empty strings are kept as values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    #[serde(default, deserialize_with = "lenient_provider")]
    pub provider: String,
    #[serde(default)]
    pub status: CoverageStatus,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tech: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_down_mbps: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_up_mbps: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_activation_days: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub offers_url: Option<Url>,
}

impl CoverageResult {
    /// A result with only provider and status set.
    #[must_use]
    pub fn new(provider: impl Into<String>, status: CoverageStatus) -> Self {
        Self {
            provider: provider.into(),
            status,
            tech: None,
            max_down_mbps: None,
            max_up_mbps: None,
            estimated_activation_days: None,
            notes: None,
            offers_url: None,
        }
    }
}

/// Body of a successful lookup. Both members may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<AddressQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<CoverageResult>>,
}

/// Accepts any JSON value; anything but a string reads as an empty name.
fn lenient_provider<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Accepts any JSON value; keeps it only when it is a string.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Accepts any JSON value; keeps it only when it is a number.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

/// Accepts any JSON value; keeps it only when it is an absolute URL string.
fn lenient_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|raw| Url::parse(raw).ok()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_status_codes_decode_to_variants() {
        let statuses: Vec<CoverageStatus> =
            serde_json::from_value(json!(["available", "soon", "in_build", "not_available"]))
                .expect("status list");
        assert_eq!(
            statuses,
            vec![
                CoverageStatus::Available,
                CoverageStatus::Soon,
                CoverageStatus::InBuild,
                CoverageStatus::NotAvailable,
            ]
        );
    }

    #[test]
    fn unknown_status_code_is_preserved() {
        let status: CoverageStatus = serde_json::from_value(json!("mystery_code")).unwrap();
        assert_eq!(
            status,
            CoverageStatus::Unrecognized("mystery_code".to_string())
        );
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("mystery_code"));
    }

    #[test]
    fn result_decodes_camel_case_fields() {
        let result: CoverageResult = serde_json::from_value(json!({
            "provider": "Acme",
            "status": "available",
            "tech": "FTTH",
            "maxDownMbps": 1000,
            "maxUpMbps": 300,
            "estimatedActivationDays": 15,
            "notes": "Posa entro 2 settimane",
            "offersUrl": "https://acme.example.com/offerte"
        }))
        .expect("result should decode");

        assert_eq!(result.provider, "Acme");
        assert_eq!(result.status, CoverageStatus::Available);
        assert_eq!(result.tech.as_deref(), Some("FTTH"));
        assert_eq!(result.max_down_mbps, Some(1000.0));
        assert_eq!(result.max_up_mbps, Some(300.0));
        assert_eq!(result.estimated_activation_days, Some(15.0));
        assert_eq!(
            result.offers_url.as_ref().map(Url::as_str),
            Some("https://acme.example.com/offerte")
        );
    }

    #[test]
    fn zero_and_empty_values_are_not_treated_as_absent() {
        let result: CoverageResult = serde_json::from_value(json!({
            "provider": "Acme",
            "status": "soon",
            "tech": "",
            "maxDownMbps": 0,
            "estimatedActivationDays": 0
        }))
        .unwrap();
        assert_eq!(result.tech.as_deref(), Some(""));
        assert_eq!(result.max_down_mbps, Some(0.0));
        assert_eq!(result.estimated_activation_days, Some(0.0));
        assert_eq!(result.max_up_mbps, None);
    }

    #[test]
    fn non_numeric_numbers_and_bad_urls_decode_as_none() {
        let result: CoverageResult = serde_json::from_value(json!({
            "provider": "Acme",
            "status": "available",
            "maxDownMbps": "fast",
            "estimatedActivationDays": "presto",
            "offersUrl": "not a url"
        }))
        .expect("lenient fields should not fail the payload");
        assert_eq!(result.max_down_mbps, None);
        assert_eq!(result.estimated_activation_days, None);
        assert_eq!(result.offers_url, None);
    }

    #[test]
    fn missing_status_falls_back_to_unrecognized() {
        let result: CoverageResult = serde_json::from_value(json!({"provider": "Acme"})).unwrap();
        assert!(matches!(result.status, CoverageStatus::Unrecognized(ref c) if c.is_empty()));
    }

    #[test]
    fn non_string_status_decodes_as_unrecognized() {
        let statuses: Vec<CoverageStatus> =
            serde_json::from_value(json!([null, 3, true, {"code": "x"}])).expect("status list");
        assert_eq!(
            statuses,
            vec![
                CoverageStatus::Unrecognized(String::new()),
                CoverageStatus::Unrecognized("3".to_string()),
                CoverageStatus::Unrecognized("true".to_string()),
                CoverageStatus::Unrecognized(r#"{"code":"x"}"#.to_string()),
            ]
        );
    }

    #[test]
    fn wrongly_typed_text_fields_do_not_fail_the_response() {
        let response: CoverageResponse = serde_json::from_value(json!({
            "results": [
                {"provider": null, "status": null, "tech": 5, "notes": ["a"]},
                {"provider": 42, "status": 3, "tech": "FTTC", "notes": "ok"}
            ]
        }))
        .expect("malformed fields should not fail the response");
        let results = response.results.expect("results present");

        assert_eq!(results[0].provider, "");
        assert_eq!(results[0].status, CoverageStatus::Unrecognized(String::new()));
        assert_eq!(results[0].tech, None);
        assert_eq!(results[0].notes, None);

        assert_eq!(results[1].provider, "");
        assert_eq!(results[1].status, CoverageStatus::Unrecognized("3".to_string()));
        assert_eq!(results[1].tech.as_deref(), Some("FTTC"));
        assert_eq!(results[1].notes.as_deref(), Some("ok"));
    }

    #[test]
    fn response_tolerates_missing_members() {
        let response: CoverageResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.query.is_none());
        assert!(response.results.is_none());
    }

    #[test]
    fn serialized_result_omits_absent_fields() {
        let result = CoverageResult::new("Acme", CoverageStatus::InBuild);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"provider": "Acme", "status": "in_build"}));
    }
}
