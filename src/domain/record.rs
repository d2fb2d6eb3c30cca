//! Case metadata records
//!
//! [`MetadataRecord`] mirrors one row of the source table, with every
//! classification and text column nullable. [`ExportRecord`] is the
//! normalized shape written to the JSON document: all 13 keys always present,
//! strings everywhere except `id`.

use serde::{Deserialize, Serialize};

/// Source column names, in the order they are selected and emitted.
pub const SOURCE_COLUMNS: [&str; 13] = [
    "id",
    "jiken_shubetsu",
    "kenri_shubetsu",
    "jiken_shurui",
    "hatsumei_meisho",
    "jiken_bango",
    "bumei",
    "saiban_nengappi",
    "hanketsu_kekka",
    "genkoku",
    "hikoku",
    "soten",
    "zenbun_url",
];

/// Output keys, in document order. Only the last one differs from
/// [`SOURCE_COLUMNS`].
pub const OUTPUT_KEYS: [&str; 13] = [
    "id",
    "jiken_shubetsu",
    "kenri_shubetsu",
    "jiken_shurui",
    "hatsumei_meisho",
    "jiken_bango",
    "bumei",
    "saiban_nengappi",
    "hanketsu_kekka",
    "genkoku",
    "hikoku",
    "soten",
    "pdf_url",
];

/// One row of the metadata table as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct MetadataRecord {
    pub id: i64,

    #[sqlx(rename = "jiken_shubetsu")]
    pub case_category: Option<String>,

    #[sqlx(rename = "kenri_shubetsu")]
    pub right_category: Option<String>,

    #[sqlx(rename = "jiken_shurui")]
    pub case_type: Option<String>,

    #[sqlx(rename = "hatsumei_meisho")]
    pub invention_title: Option<String>,

    #[sqlx(rename = "jiken_bango")]
    pub case_number: Option<String>,

    #[sqlx(rename = "bumei")]
    pub department: Option<String>,

    /// Sort key; compared as stored text, never parsed as a date
    #[sqlx(rename = "saiban_nengappi")]
    pub decision_date: Option<String>,

    #[sqlx(rename = "hanketsu_kekka")]
    pub outcome: Option<String>,

    #[sqlx(rename = "genkoku")]
    pub plaintiff: Option<String>,

    #[sqlx(rename = "hikoku")]
    pub defendant: Option<String>,

    #[sqlx(rename = "soten")]
    pub disputed_points: Option<String>,

    #[sqlx(rename = "zenbun_url")]
    pub full_text_url: Option<String>,
}

impl MetadataRecord {
    /// Creates a record with only the identifier set
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// One element of the exported JSON array.
///
/// Field order here is the key order in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: i64,

    #[serde(rename = "jiken_shubetsu")]
    pub case_category: String,

    #[serde(rename = "kenri_shubetsu")]
    pub right_category: String,

    #[serde(rename = "jiken_shurui")]
    pub case_type: String,

    #[serde(rename = "hatsumei_meisho")]
    pub invention_title: String,

    #[serde(rename = "jiken_bango")]
    pub case_number: String,

    #[serde(rename = "bumei")]
    pub department: String,

    #[serde(rename = "saiban_nengappi")]
    pub decision_date: String,

    #[serde(rename = "hanketsu_kekka")]
    pub outcome: String,

    #[serde(rename = "genkoku")]
    pub plaintiff: String,

    #[serde(rename = "hikoku")]
    pub defendant: String,

    #[serde(rename = "soten")]
    pub disputed_points: String,

    pub pdf_url: String,
}
