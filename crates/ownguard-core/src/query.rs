//! Ownership filter builders.
//!
//! Search bodies follow the store's bool-query shape; realtime filters use
//! the `and`/`equals` operator form. Both narrow with logical AND only.

use serde_json::{json, Map, Value};

/// `{"term": {field: actor_id}}`
pub fn ownership_term(field: &str, actor_id: &str) -> Value {
    let mut term = Map::new();
    term.insert(field.to_string(), Value::String(actor_id.to_string()));
    json!({ "term": term })
}

/// `{"equals": {field: actor_id}}`
pub fn ownership_equals(field: &str, actor_id: &str) -> Value {
    let mut eq = Map::new();
    eq.insert(field.to_string(), Value::String(actor_id.to_string()));
    json!({ "equals": eq })
}

/// Restrict a search/count/deleteByQuery body to documents authored by `actor_id`.
///
/// The inbound `query` (if any) moves under `bool.must`, the ownership term
/// goes under `bool.filter`. Remaining body keys are kept as-is. A body that
/// is not a JSON object is kept whole under `bool.must`, so the store sees
/// (and rejects) it instead of running an ownership-only query.
pub fn restrict_search_body(body: Option<&Value>, field: &str, actor_id: &str) -> Value {
    let (mut out, inner) = match body {
        Some(Value::Object(m)) => {
            let mut m = m.clone();
            let inner = m.remove("query");
            (m, inner)
        }
        Some(other) => (Map::new(), Some(other.clone())),
        None => (Map::new(), None),
    };

    let mut bool_q = Map::new();
    if let Some(inner) = inner.filter(|q| !is_empty_clause(q)) {
        bool_q.insert("must".into(), Value::Array(vec![inner]));
    }
    bool_q.insert(
        "filter".into(),
        Value::Array(vec![ownership_term(field, actor_id)]),
    );

    out.insert("query".into(), json!({ "bool": bool_q }));
    Value::Object(out)
}

/// Restrict a realtime subscription filter to documents authored by `actor_id`.
pub fn restrict_subscription_filter(filter: Option<&Value>, field: &str, actor_id: &str) -> Value {
    let own = ownership_equals(field, actor_id);
    match filter {
        Some(f) if !is_empty_clause(f) => json!({ "and": [f.clone(), own] }),
        _ => own,
    }
}

fn is_empty_clause(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Object(m) => m.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "_kuzzle_info.author";

    #[test]
    fn no_body_yields_ownership_only_query() {
        let out = restrict_search_body(None, FIELD, "u1");
        assert_eq!(
            out,
            json!({"query": {"bool": {"filter": [{"term": {FIELD: "u1"}}]}}})
        );
    }

    #[test]
    fn empty_query_object_is_treated_as_absent() {
        let body = json!({"query": {}});
        let out = restrict_search_body(Some(&body), FIELD, "u1");
        assert!(out["query"]["bool"].get("must").is_none());
    }

    #[test]
    fn inner_query_is_anded_and_siblings_kept() {
        let body = json!({
            "query": {"match": {"title": "hello"}},
            "sort": ["_id"],
            "aggregations": {"a": {"terms": {"field": "tag"}}}
        });
        let out = restrict_search_body(Some(&body), FIELD, "u2");
        assert_eq!(out["query"]["bool"]["must"], json!([{"match": {"title": "hello"}}]));
        assert_eq!(out["query"]["bool"]["filter"], json!([{"term": {FIELD: "u2"}}]));
        assert_eq!(out["sort"], json!(["_id"]));
        assert!(out.get("aggregations").is_some());
    }

    #[test]
    fn non_object_body_is_kept_not_dropped() {
        let body = json!(["match_all"]);
        let out = restrict_search_body(Some(&body), FIELD, "u1");
        assert_eq!(out["query"]["bool"]["must"], json!([["match_all"]]));
        assert_eq!(out["query"]["bool"]["filter"], json!([{"term": {FIELD: "u1"}}]));

        let null = restrict_search_body(Some(&Value::Null), FIELD, "u1");
        assert_eq!(null, restrict_search_body(None, FIELD, "u1"));
    }

    #[test]
    fn subscription_filter_uses_and() {
        let f = json!({"equals": {"color": "red"}});
        let out = restrict_subscription_filter(Some(&f), FIELD, "u1");
        assert_eq!(
            out,
            json!({"and": [{"equals": {"color": "red"}}, {"equals": {FIELD: "u1"}}]})
        );
        assert_eq!(
            restrict_subscription_filter(Some(&json!({})), FIELD, "u1"),
            json!({"equals": {FIELD: "u1"}})
        );
    }
}
