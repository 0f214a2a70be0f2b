//! Store-side query model: filters, ordered clauses and a limit.
//!
//! Evaluation follows hosted document store semantics: a document that lacks
//! a filtered or ordered field is excluded from the result.

use serde_json::Value;
use std::cmp::Ordering;

use super::document::Document;
use crate::utils::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    fn matches(&self, doc: &Document) -> bool {
        let Some(actual) = doc.get(&self.field) else {
            return false;
        };
        if type_rank(actual) != type_rank(&self.value) {
            return false;
        }
        let ord = compare_values(actual, &self.value);
        match self.op {
            FilterOp::Eq => ord == Ordering::Equal,
            FilterOp::Lt => ord == Ordering::Less,
            FilterOp::Lte => ord != Ordering::Greater,
            FilterOp::Gt => ord == Ordering::Greater,
            FilterOp::Gte => ord != Ordering::Less,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op,
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOp::Eq, value)
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The same query without ordering or limit.
    #[must_use]
    pub fn filters_only(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Whether a hosted store would need a composite index for this query:
    /// any filter combined with more than one ordered field.
    #[must_use]
    pub fn needs_composite_index(&self) -> bool {
        !self.filters.is_empty() && self.order_by.len() > 1
    }

    /// Fields a composite index for this query would cover.
    #[must_use]
    pub fn index_fields(&self) -> Vec<String> {
        self.filters
            .iter()
            .map(|f| f.field.clone())
            .chain(self.order_by.iter().map(|o| o.field.clone()))
            .collect()
    }

    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        self.filters.iter().all(|f| f.matches(doc))
            && self.order_by.iter().all(|o| doc.get(&o.field).is_some())
    }

    /// Evaluate the query over `docs`. Ties keep the input order.
    #[must_use]
    pub fn apply(&self, docs: Vec<Document>) -> Vec<Document> {
        let mut matched: Vec<Document> = docs.into_iter().filter(|d| self.matches(d)).collect();
        if !self.order_by.is_empty() {
            matched.sort_by(|a, b| compare_documents(a, b, &self.order_by));
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}

/// Compare two documents by a chain of ordered clauses.
#[must_use]
pub fn compare_documents(a: &Document, b: &Document, order_by: &[OrderBy]) -> Ordering {
    for clause in order_by {
        let ord = match (a.get(&clause.field), b.get(&clause.field)) {
            (Some(x), Some(y)) => compare_values(x, y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        let ord = match clause.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values: by type first, then by value.
///
/// Strings that both parse as RFC 3339 timestamps compare chronologically.
#[must_use]
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            match (x.as_i64(), y.as_i64()) {
                (Some(i), Some(j)) => i.cmp(&j),
                _ => {
                    let fx = x.as_f64().unwrap_or(0.0);
                    let fy = y.as_f64().unwrap_or(0.0);
                    fx.partial_cmp(&fy).unwrap_or(Ordering::Equal)
                }
            }
        }
        (Value::String(x), Value::String(y)) => match (parse_timestamp(x), parse_timestamp(y)) {
            (Some(tx), Some(ty)) => tx.cmp(&ty),
            _ => x.cmp(y),
        },
        (Value::Array(x), Value::Array(y)) => {
            for (xi, yi) in x.iter().zip(y.iter()) {
                let ord = compare_values(xi, yi);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::document::Fields;
    use serde_json::json;

    fn doc(id: &str, value: Value) -> Document {
        let fields: Fields = value.as_object().cloned().unwrap();
        Document::new(id, fields)
    }

    fn ids(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_equality_filter() {
        let docs = vec![
            doc("a", json!({"published": true})),
            doc("b", json!({"published": false})),
            doc("c", json!({})),
        ];
        let q = Query::new().where_eq("published", true);
        assert_eq!(ids(&q.apply(docs)), vec!["a"]);
    }

    #[test]
    fn test_range_filter() {
        let docs = vec![
            doc("a", json!({"order": 1})),
            doc("b", json!({"order": 5})),
            doc("c", json!({"order": "5"})),
        ];
        let q = Query::new().filter("order", FilterOp::Gte, 2);
        assert_eq!(ids(&q.apply(docs)), vec!["b"]);
    }

    #[test]
    fn test_chained_ordering() {
        let docs = vec![
            doc("a", json!({"featured": false, "order": 1})),
            doc("b", json!({"featured": true, "order": 2})),
            doc("c", json!({"featured": true, "order": 1})),
        ];
        let q = Query::new()
            .order_by("featured", Direction::Desc)
            .order_by("order", Direction::Asc);
        assert_eq!(ids(&q.apply(docs)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ordering_excludes_missing_field() {
        let docs = vec![doc("a", json!({"order": 1})), doc("b", json!({}))];
        let q = Query::new().order_by("order", Direction::Asc);
        assert_eq!(ids(&q.apply(docs)), vec!["a"]);
    }

    #[test]
    fn test_limit_after_sort() {
        let docs = vec![
            doc("a", json!({"order": 3})),
            doc("b", json!({"order": 1})),
            doc("c", json!({"order": 2})),
        ];
        let q = Query::new().order_by("order", Direction::Asc).limit(2);
        assert_eq!(ids(&q.apply(docs)), vec!["b", "c"]);
    }

    #[test]
    fn test_timestamps_compare_chronologically() {
        let a = json!("2024-01-01T00:00:00Z");
        let b = json!("2024-01-01T00:00:00.500Z");
        assert_eq!(compare_values(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_needs_composite_index() {
        let simple = Query::new()
            .where_eq("published", true)
            .order_by("createdAt", Direction::Desc);
        assert!(!simple.needs_composite_index());

        let featured = simple.clone().order_by("order", Direction::Asc);
        assert!(featured.needs_composite_index());
        assert_eq!(
            featured.index_fields(),
            vec!["published", "createdAt", "order"]
        );
        assert!(!featured.filters_only().needs_composite_index());
    }
}
