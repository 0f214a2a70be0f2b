use crate::collections::SortField;
use crate::store::{compare_documents, Direction, Document, OrderBy, Query};

/// One ordered clause of a multi-field sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

impl SortSpec {
    #[must_use]
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    #[must_use]
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }

    fn to_order_by(self) -> OrderBy {
        OrderBy {
            field: self.field.as_str().to_string(),
            direction: self.direction,
        }
    }
}

/// Default listing order: newest first.
#[must_use]
pub fn newest_first() -> Vec<SortSpec> {
    vec![SortSpec::desc(SortField::CreatedAt)]
}

/// Featured entries first, then manual order.
#[must_use]
pub fn featured_first() -> Vec<SortSpec> {
    vec![
        SortSpec::desc(SortField::Featured),
        SortSpec::asc(SortField::Order),
    ]
}

/// Append the sort clauses to a query, in sequence.
#[must_use]
pub fn apply_to_query(query: Query, specs: &[SortSpec]) -> Query {
    specs
        .iter()
        .fold(query, |q, spec| q.order_by(spec.field.as_str(), spec.direction))
}

/// Sort documents in memory by the given clauses.
///
/// Used when the store cannot execute the ordering itself. Unlike the
/// store, documents missing a sort field are kept (they sort first in
/// ascending order).
pub fn sort_documents(docs: &mut [Document], specs: &[SortSpec]) {
    let order_by: Vec<OrderBy> = specs.iter().map(|s| s.to_order_by()).collect();
    docs.sort_by(|a, b| compare_documents(a, b, &order_by));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fields;
    use serde_json::json;

    fn doc(id: &str, value: serde_json::Value) -> Document {
        let fields: Fields = value.as_object().cloned().unwrap();
        Document::new(id, fields)
    }

    #[test]
    fn test_apply_to_query_keeps_sequence() {
        let q = apply_to_query(Query::new(), &featured_first());
        let fields: Vec<_> = q.order_by.iter().map(|o| o.field.as_str()).collect();
        assert_eq!(fields, vec!["featured", "order"]);
        assert_eq!(q.order_by[0].direction, Direction::Desc);
    }

    #[test]
    fn test_sort_documents_featured_first() {
        let mut docs = vec![
            doc("a", json!({"featured": false, "order": 0})),
            doc("b", json!({"featured": true, "order": 9})),
            doc("c", json!({"featured": false, "order": -1})),
            doc("d", json!({"featured": true, "order": 1})),
        ];
        sort_documents(&mut docs, &featured_first());
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_newest_first() {
        let mut docs = vec![
            doc("old", json!({"createdAt": "2024-01-01T00:00:00.000000Z"})),
            doc("new", json!({"createdAt": "2024-03-01T00:00:00.000000Z"})),
        ];
        sort_documents(&mut docs, &newest_first());
        assert_eq!(docs[0].id, "new");
    }
}
