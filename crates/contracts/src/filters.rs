use crate::dates::is_iso_date_shape;
use serde::{Deserialize, Serialize};

/// Columns the document history can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query parameters for `GET /documents`.
///
/// Serialized camelCase for the query string. Empty `name`/`date` are
/// omitted; `page` and `limit` are always forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilters {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

impl Default for ListFilters {
    fn default() -> Self {
        // History opens sorted by date, newest first
        Self {
            name: String::new(),
            date: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: Some(SortBy::Date),
            sort_order: Some(SortOrder::Desc),
        }
    }
}

impl ListFilters {
    /// Copy with values the server would reject scrubbed out.
    ///
    /// The list state never stores a malformed date, but the transport layer
    /// scrubs again so a bad value can never reach the query string: the name
    /// is trimmed, a date without the `YYYY-MM-DD` shape is dropped, and
    /// page/limit fall back to their defaults when out of range.
    pub fn cleaned(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            date: if is_iso_date_shape(&self.date) {
                self.date.clone()
            } else {
                String::new()
            },
            page: self.page.max(DEFAULT_PAGE),
            limit: if self.limit == 0 {
                DEFAULT_LIMIT
            } else {
                self.limit
            },
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaned_trims_name_and_drops_bad_date() {
        let filters = ListFilters {
            name: "  acme  ".to_string(),
            date: "2024-1-5".to_string(),
            page: 0,
            limit: 0,
            ..ListFilters::default()
        };
        let cleaned = filters.cleaned();
        assert_eq!(cleaned.name, "acme");
        assert_eq!(cleaned.date, "");
        assert_eq!(cleaned.page, 1);
        assert_eq!(cleaned.limit, 10);
    }

    #[test]
    fn test_cleaned_keeps_valid_date() {
        let filters = ListFilters {
            date: "2024-03-05".to_string(),
            ..ListFilters::default()
        };
        assert_eq!(filters.cleaned().date, "2024-03-05");
    }

    #[test]
    fn test_serialization_omits_empty_filters() {
        let json = serde_json::to_value(ListFilters::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("name"));
        assert!(!obj.contains_key("date"));
        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 10);
        assert_eq!(json["sortBy"], "date");
        assert_eq!(json["sortOrder"], "desc");
    }

    #[test]
    fn test_sort_order_flipped() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
    }
}
