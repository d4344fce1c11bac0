use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single filter condition in the ERP list format: `[field, operator, value]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition(pub String, pub String, pub Value);

impl FilterCondition {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(field.into(), operator.into(), value.into())
    }

    /// `field = value`
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, "=", value)
    }

    pub fn field(&self) -> &str {
        &self.0
    }

    pub fn operator(&self) -> &str {
        &self.1
    }

    pub fn value(&self) -> &Value {
        &self.2
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Parameters of one list request to the ERP backend.
///
/// `offset` is zero-based; the conversion from the one-based page number
/// happens once, when the query is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub offset: usize,
    pub limit: usize,
    /// `"<column> <asc|desc>"`
    pub order_by: String,
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
}

impl ListQuery {
    /// Query parameters as understood by the ERP resource API
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit_start", self.offset.to_string()),
            ("limit_page_length", self.limit.to_string()),
            ("order_by", self.order_by.clone()),
        ];
        if !self.filters.is_empty() {
            // Vec<FilterCondition> always serializes: keys are plain strings
            let filters = serde_json::to_string(&self.filters).unwrap_or_default();
            pairs.push(("filters", filters));
        }
        pairs
    }

    /// The page of an already fetched list that this query addresses
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = self.offset.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

/// Paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: usize,
    /// One-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_serializes_as_triple() {
        let filter = FilterCondition::equals("custom_district", "North");
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!(["custom_district", "=", "North"])
        );
        let parsed: FilterCondition =
            serde_json::from_value(json!(["status", "in", ["Submitted", "Pending"]])).unwrap();
        assert_eq!(parsed.field(), "status");
        assert_eq!(parsed.operator(), "in");
        assert_eq!(parsed.value(), &json!(["Submitted", "Pending"]));
    }

    #[test]
    fn test_query_pairs() {
        let query = ListQuery {
            offset: 20,
            limit: 10,
            order_by: "name desc".to_string(),
            filters: vec![],
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("limit_start", "20".to_string()),
                ("limit_page_length", "10".to_string()),
                ("order_by", "name desc".to_string()),
            ]
        );

        let filtered = ListQuery {
            filters: vec![FilterCondition::equals("docstatus", 1)],
            ..query
        };
        let pairs = filtered.to_query_pairs();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[3], ("filters", r#"[["docstatus","=",1]]"#.to_string()));
    }

    #[test]
    fn test_window() {
        let items: Vec<u32> = (1..=25).collect();
        let query = ListQuery {
            offset: 20,
            limit: 10,
            order_by: "name asc".to_string(),
            filters: vec![],
        };
        assert_eq!(query.window(&items), &[21, 22, 23, 24, 25]);

        let past_end = ListQuery { offset: 40, ..query };
        assert!(past_end.window(&items).is_empty());
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled().as_str(), "asc");
    }
}
