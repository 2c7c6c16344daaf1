use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal value of `working_hours` for stores that never close.
pub const ALL_DAY_SENTINEL: &str = "24/7";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор магазина
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub i64);

impl StoreId {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Active,
    Inactive,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, StoreStatus::Active)
    }
}

// ============================================================================
// Working hours
// ============================================================================

/// Parsed view of the free-form `working_hours` text.
///
/// `"24/7"` is `AllDay`. `"HH:MM-HH:MM"` splits on the first `-` into a
/// trimmed `Range`. Anything else (no dash, an empty half, extra segments)
/// is `Unparsed` and never satisfies an hour constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingHours<'a> {
    AllDay,
    Range { open: &'a str, close: &'a str },
    Unparsed,
}

impl<'a> WorkingHours<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw == ALL_DAY_SENTINEL {
            return WorkingHours::AllDay;
        }
        let Some((open, close)) = raw.split_once('-') else {
            return WorkingHours::Unparsed;
        };
        let (open, close) = (open.trim(), close.trim());
        if open.is_empty() || close.is_empty() || close.contains('-') {
            return WorkingHours::Unparsed;
        }
        WorkingHours::Range { open, close }
    }

    pub fn opening(&self) -> Option<&'a str> {
        match self {
            WorkingHours::Range { open, .. } => Some(*open),
            _ => None,
        }
    }

    pub fn closing(&self) -> Option<&'a str> {
        match self {
            WorkingHours::Range { close, .. } => Some(*close),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Магазин / филиал с рабочими метаданными
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub branch: String,
    pub address: String,
    pub status: StoreStatus,
    /// Opaque, shown and copied verbatim
    pub server_token: String,
    /// Either `"24/7"` or `"HH:MM-HH:MM"`
    pub working_hours: String,
    pub created_at: DateTime<Utc>,
}

impl Store {
    pub fn hours(&self) -> WorkingHours<'_> {
        WorkingHours::parse(&self.working_hours)
    }

    pub fn is_all_day(&self) -> bool {
        self.working_hours == ALL_DAY_SENTINEL
    }

    /// Branch name for table cells, `-` when the store has none.
    pub fn branch_display(&self) -> &str {
        if self.branch.trim().is_empty() {
            "-"
        } else {
            &self.branch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(
            WorkingHours::parse("09:00-21:00"),
            WorkingHours::Range {
                open: "09:00",
                close: "21:00"
            }
        );
        assert_eq!(
            WorkingHours::parse(" 08:00 - 22:00 "),
            WorkingHours::Range {
                open: "08:00",
                close: "22:00"
            }
        );
    }

    #[test]
    fn test_parse_all_day() {
        assert_eq!(WorkingHours::parse("24/7"), WorkingHours::AllDay);
        assert_eq!(WorkingHours::parse("24/7").opening(), None);
        // only the exact sentinel counts
        assert_eq!(WorkingHours::parse(" 24/7"), WorkingHours::Unparsed);
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(WorkingHours::parse("closed"), WorkingHours::Unparsed);
        assert_eq!(WorkingHours::parse("09:00-"), WorkingHours::Unparsed);
        assert_eq!(WorkingHours::parse("-21:00"), WorkingHours::Unparsed);
        assert_eq!(
            WorkingHours::parse("09:00-12:00-18:00"),
            WorkingHours::Unparsed
        );
        assert_eq!(WorkingHours::parse(""), WorkingHours::Unparsed);
    }

    #[test]
    fn test_status_serde_matches_as_str() {
        for status in [StoreStatus::Active, StoreStatus::Inactive] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert!(serde_json::from_str::<StoreStatus>("\"Active\"").is_err());
    }
}
