//! Row normalization
//!
//! Turns stored rows into export records: every null text column becomes an
//! empty string, `id` passes through, and `zenbun_url` is emitted as
//! `pdf_url`. No field is trimmed, parsed or validated.

use crate::domain::record::{ExportRecord, MetadataRecord};

impl From<MetadataRecord> for ExportRecord {
    fn from(record: MetadataRecord) -> Self {
        Self {
            id: record.id,
            case_category: record.case_category.unwrap_or_default(),
            right_category: record.right_category.unwrap_or_default(),
            case_type: record.case_type.unwrap_or_default(),
            invention_title: record.invention_title.unwrap_or_default(),
            case_number: record.case_number.unwrap_or_default(),
            department: record.department.unwrap_or_default(),
            decision_date: record.decision_date.unwrap_or_default(),
            outcome: record.outcome.unwrap_or_default(),
            plaintiff: record.plaintiff.unwrap_or_default(),
            defendant: record.defendant.unwrap_or_default(),
            disputed_points: record.disputed_points.unwrap_or_default(),
            pdf_url: record.full_text_url.unwrap_or_default(),
        }
    }
}

/// Normalize a single row
pub fn normalize_record(record: MetadataRecord) -> ExportRecord {
    record.into()
}

/// Normalize rows, preserving their order
pub fn normalize_all(records: Vec<MetadataRecord>) -> Vec<ExportRecord> {
    records.into_iter().map(ExportRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_become_empty_strings() {
        let record = MetadataRecord {
            case_category: Some("特許".to_string()),
            decision_date: Some("2023-01-01".to_string()),
            ..MetadataRecord::new(1)
        };

        let exported = normalize_record(record);
        assert_eq!(exported.id, 1);
        assert_eq!(exported.case_category, "特許");
        assert_eq!(exported.decision_date, "2023-01-01");
        assert_eq!(exported.pdf_url, "");
        assert_eq!(exported.plaintiff, "");
        assert_eq!(exported.disputed_points, "");
    }

    #[test]
    fn test_full_text_url_renamed() {
        let record = MetadataRecord {
            full_text_url: Some("https://www.courts.go.jp/hanrei/1/detail.pdf".to_string()),
            ..MetadataRecord::new(9)
        };

        let value = serde_json::to_value(normalize_record(record)).unwrap();
        assert_eq!(value["pdf_url"], "https://www.courts.go.jp/hanrei/1/detail.pdf");
        assert!(value.get("zenbun_url").is_none());
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let record = MetadataRecord {
            outcome: Some("  棄却 ".to_string()),
            ..MetadataRecord::new(2)
        };
        assert_eq!(normalize_record(record).outcome, "  棄却 ");
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let records = vec![
            MetadataRecord::new(3),
            MetadataRecord::new(1),
            MetadataRecord::new(2),
        ];
        let ids: Vec<i64> = normalize_all(records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_every_key_is_a_string_except_id() {
        let value = serde_json::to_value(normalize_record(MetadataRecord::new(5))).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 13);
        for (key, field) in object {
            if key == "id" {
                assert_eq!(field.as_i64(), Some(5));
            } else {
                assert_eq!(field.as_str(), Some(""), "field {key}");
            }
        }
    }
}
