use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title shown when the upstream record carries no usable title.
pub const NO_TITLE: &str = "No title";

/// Link target used when the upstream record carries no link.
pub const NO_LINK: &str = "#";

/// One bibliographic entry, normalized at ingestion.
///
/// `None` in `year` or `citations` is the "Unknown" sentinel: the upstream
/// endpoint omits or garbles these fields freely, and [`Publication::from_raw`]
/// is the only place that raw shape is inspected. Downstream code relies on
/// the defaults instead of re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub year: Option<i32>,
    pub citations: Option<u64>,
    pub link: String,
}

/// Upstream record as the endpoint actually serves it: every field optional,
/// with `year` and `citations` loosely typed because the service mixes
/// numbers and strings in the same array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPublication {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub citations: Option<Value>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Publication {
    /// Normalize a raw upstream record.
    ///
    /// Total: malformed fields become defaults or the unknown sentinel,
    /// never an error, so no record can fault the pipeline downstream.
    pub fn from_raw(raw: RawPublication) -> Self {
        Publication {
            title: non_empty(raw.title).unwrap_or_else(|| NO_TITLE.to_owned()),
            year: raw.year.as_ref().and_then(parse_year),
            citations: raw.citations.as_ref().and_then(parse_citations),
            link: non_empty(raw.link).unwrap_or_else(|| NO_LINK.to_owned()),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// Year 0 doubles as "no date" upstream, so it maps to unknown.
fn parse_year(value: &Value) -> Option<i32> {
    let year = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    if year == 0 {
        return None;
    }
    i32::try_from(year).ok()
}

fn parse_citations(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
