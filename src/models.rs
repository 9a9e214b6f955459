//! Data models for parsed security bulletins.
//!
//! - [`Bulletin`]: one record produced from a matched bulletin line
//! - [`BulletinImport`]: the document handed to the bulk importer
//!
//! Field names are snake case and match the importer's JSON schema exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity attached to every parsed record. The copy-pasted bulletin list
/// carries no severity, so none is inferred.
pub const DEFAULT_SEVERITY: &str = "Important";

/// A single Adobe security bulletin, ready for import.
///
/// Records are built once per matched input line and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bulletin {
    /// Bulletin identifier, e.g. `APSB25-85`.
    pub apsb: String,
    /// `"<apsb>: <title>"`.
    pub title: String,
    /// Templated description naming the affected products.
    pub description: String,
    /// Link to the bulletin page on helpx.adobe.com.
    pub url: String,
    /// Publication date, serialized as RFC 3339 in UTC.
    pub date: DateTime<Utc>,
    /// Affected product names, without duplicates.
    pub products: Vec<String>,
    /// Always [`DEFAULT_SEVERITY`].
    pub severity: String,
}

/// Top-level JSON document consumed by the bulk importer.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BulletinImport {
    /// Parsed records in input line order.
    pub bulletins: Vec<Bulletin>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Bulletin {
        Bulletin {
            apsb: "APSB25-85".to_string(),
            title: "APSB25-85: Security update available for Adobe Acrobat Reader".to_string(),
            description: "Adobe has released security updates for Adobe Acrobat. More details in the security bulletin.".to_string(),
            url: "https://helpx.adobe.com/security/products/acrobat/apsb25-85.html".to_string(),
            date: Utc.with_ymd_and_hms(2025, 9, 9, 0, 0, 0).unwrap(),
            products: vec!["Adobe Acrobat".to_string()],
            severity: DEFAULT_SEVERITY.to_string(),
        }
    }

    #[test]
    fn test_bulletin_serializes_importer_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["apsb"], "APSB25-85");
        assert_eq!(json["date"], "2025-09-09T00:00:00Z");
        assert_eq!(json["severity"], "Important");
        assert_eq!(json["products"][0], "Adobe Acrobat");
    }

    #[test]
    fn test_import_document_shape() {
        let import = BulletinImport {
            bulletins: vec![sample()],
        };
        let json = serde_json::to_value(&import).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["bulletins"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_import_document_deserialization() {
        let json = r#"{
            "bulletins": [{
                "apsb": "APSB25-84",
                "title": "APSB25-84: Security update available for Adobe Photoshop",
                "description": "Adobe has released security updates for Adobe Photoshop. More details in the security bulletin.",
                "url": "https://helpx.adobe.com/security/products/photoshop/apsb25-84.html",
                "date": "2025-09-02T00:00:00Z",
                "products": ["Adobe Photoshop"],
                "severity": "Important"
            }]
        }"#;

        let import: BulletinImport = serde_json::from_str(json).unwrap();
        assert_eq!(import.bulletins.len(), 1);
        assert_eq!(
            import.bulletins[0].date,
            Utc.with_ymd_and_hms(2025, 9, 2, 0, 0, 0).unwrap()
        );
    }
}
