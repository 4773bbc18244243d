//! Ownership query semantics checked against a tiny term/bool evaluator.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use ownguard_core::query::{restrict_search_body, restrict_subscription_filter};

const FIELD: &str = "_kuzzle_info.author";

fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |v, k| v.get(k))
}

/// Evaluates the subset of query DSL produced by the builders.
fn matches(query: &Value, doc: &Value) -> bool {
    let (op, arg) = query.as_object().unwrap().iter().next().unwrap();
    match op.as_str() {
        "bool" => {
            let all = |key: &str| {
                arg.get(key)
                    .and_then(Value::as_array)
                    .map(|cs| cs.iter().all(|c| matches(c, doc)))
                    .unwrap_or(true)
            };
            all("must") && all("filter")
        }
        "term" | "match" | "equals" => arg
            .as_object()
            .unwrap()
            .iter()
            .all(|(k, v)| lookup(doc, k) == Some(v)),
        "and" => arg.as_array().unwrap().iter().all(|c| matches(c, doc)),
        other => panic!("unsupported clause: {other}"),
    }
}

fn doc(author: &str, color: &str) -> Value {
    json!({"color": color, "_kuzzle_info": {"author": author}})
}

#[test]
fn search_requires_both_inbound_and_ownership() {
    let body = json!({"query": {"term": {"color": "red"}}});
    let out = restrict_search_body(Some(&body), FIELD, "u1");
    let q = &out["query"];

    assert!(matches(q, &doc("u1", "red")));
    assert!(!matches(q, &doc("u2", "red")), "foreign author must not match");
    assert!(!matches(q, &doc("u1", "blue")), "inbound filter must still apply");
}

#[test]
fn ownership_only_query_matches_on_author() {
    let out = restrict_search_body(None, FIELD, "u1");
    assert!(matches(&out["query"], &doc("u1", "any")));
    assert!(!matches(&out["query"], &doc("u2", "any")));
}

#[test]
fn rewriting_twice_nests_without_new_top_level_terms() {
    let body = json!({"query": {"term": {"color": "red"}}});
    let once = restrict_search_body(Some(&body), FIELD, "u1");
    let twice = restrict_search_body(Some(&once), FIELD, "u1");

    let top = &twice["query"]["bool"];
    assert_eq!(top["filter"].as_array().unwrap().len(), 1);
    assert_eq!(top["must"], json!([once["query"].clone()]));

    for d in [doc("u1", "red"), doc("u2", "red"), doc("u1", "blue")] {
        assert_eq!(matches(&once["query"], &d), matches(&twice["query"], &d));
    }
}

#[test]
fn subscription_filter_requires_both() {
    let f = json!({"equals": {"color": "red"}});
    let out = restrict_subscription_filter(Some(&f), FIELD, "u1");
    assert!(matches(&out, &doc("u1", "red")));
    assert!(!matches(&out, &doc("u2", "red")));
    assert!(!matches(&out, &doc("u1", "blue")));
}

#[test]
fn subscription_rewritten_twice_nests_under_and() {
    let f = json!({"equals": {"color": "red"}});
    let once = restrict_subscription_filter(Some(&f), FIELD, "u1");
    let twice = restrict_subscription_filter(Some(&once), FIELD, "u1");

    assert_eq!(
        twice,
        json!({"and": [once.clone(), {"equals": {FIELD: "u1"}}]})
    );
    let top = twice["and"].as_array().unwrap();
    let own_terms = top.iter().filter(|c| c.get("equals").is_some_and(|e| e.get(FIELD).is_some())).count();
    assert_eq!(own_terms, 1);

    for d in [doc("u1", "red"), doc("u2", "red"), doc("u1", "blue")] {
        assert_eq!(matches(&once, &d), matches(&twice, &d));
    }
}
