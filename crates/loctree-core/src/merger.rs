//! Source-of-truth tree merger
//!
//! Reconciles a freshly extracted tree (`incoming`) against a previously
//! hand-edited tree (`existing`). The shape of the result always tracks
//! `incoming`: stale keys and stale array tails on the `existing` side are
//! pruned, new keys are added. Per string leaf, a hand-edited translation is
//! never silently lost — it is only replaced when the incoming value itself
//! carries target-alphabet text.

use serde_json::Value;

use crate::alphabet::Alphabet;

/// Merge `incoming` into `existing`, returning a new tree.
///
/// Policy per node pair:
/// - object/object: recurse per incoming key; keys only in `existing` are
///   dropped, keys only in `incoming` are taken as-is
/// - array/array: element-wise recursion over incoming indices; if
///   `existing` is longer, its tail is dropped (source arrays are
///   authoritative for length)
/// - string leaf: incoming wins when it is script-bearing; otherwise the
///   existing string is kept (the extraction carries no translation signal)
/// - any other leaf, or mismatched container shapes: incoming wins
pub fn merge_trees(alphabet: &Alphabet, incoming: &Value, existing: &Value) -> Value {
    match (incoming, existing) {
        (Value::Object(incoming_map), Value::Object(existing_map)) => Value::Object(
            incoming_map
                .iter()
                .map(|(key, value)| {
                    let merged = match existing_map.get(key) {
                        Some(prior) => merge_trees(alphabet, value, prior),
                        None => value.clone(),
                    };
                    (key.clone(), merged)
                })
                .collect(),
        ),
        (Value::Array(incoming_items), Value::Array(existing_items)) => Value::Array(
            incoming_items
                .iter()
                .enumerate()
                .map(|(index, value)| match existing_items.get(index) {
                    Some(prior) => merge_trees(alphabet, value, prior),
                    None => value.clone(),
                })
                .collect(),
        ),
        (Value::String(text), prior) => {
            if alphabet.appears_in(text) {
                // New or updated translation: source of truth wins
                incoming.clone()
            } else if prior.is_string() {
                // No translation signal in the extraction: keep the edit
                prior.clone()
            } else {
                incoming.clone()
            }
        }
        // Non-text leaves and mismatched shapes: recursing is meaningless,
        // take the source subtree wholesale
        _ => incoming.clone(),
    }
}
