//! loctree core - transforms for localized JSON trees
//!
//! This is the single source of truth for the two algorithms the `loctree`
//! tool is built around. Both operate on `serde_json::Value` trees (flat lang
//! maps and nested book/document trees) and share one script model.
//!
//! # Architecture
//!
//! ```text
//! JSON text → Document → Normalizer → sentence-cased Document
//!                 ↓
//!              Merger → reconciled Document (incoming ⊕ existing)
//! ```
//!
//! # Guarantees
//!
//! - **Pure**: neither transform mutates its inputs; each builds a new tree
//! - **Total**: any string input is accepted, no panic paths
//! - **Deterministic**: same input always produces identical output
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`

pub mod alphabet;
pub mod document;
pub mod error;
pub mod merger;
pub mod normalizer;

pub use alphabet::Alphabet;
pub use error::{Error, Result};
pub use merger::merge_trees;
pub use normalizer::{normalize_string, normalize_tree};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Full sync-then-fix pass over a small resource tree, the way the CLI
    // composes the two transforms.

    #[test]
    fn test_sync_then_fix_case() {
        let alphabet = Alphabet::cyrillic();
        let incoming = json!({
            "item.wrench.name": "Wrench",
            "item.wrench.tooltip": "гаечный Ключ. очень полезный.",
            "page": {"title": "новая Глава", "anchor": "ch1", "sort": 2}
        });
        let existing = json!({
            "item.wrench.name": "Гаечный ключ",
            "item.wrench.tooltip": "старый текст",
            "page": {"title": "старая глава", "anchor": "old", "sort": 1},
            "item.removed.name": "Удалено"
        });

        let merged = merge_trees(&alphabet, &incoming, &existing);
        let fixed = normalize_tree(&alphabet, &merged);

        assert_eq!(
            fixed,
            json!({
                // No Cyrillic in the incoming value, prior translation kept
                "item.wrench.name": "Гаечный ключ",
                // Cyrillic incoming wins, then gets sentence-cased
                "item.wrench.tooltip": "Гаечный ключ. Очень полезный.",
                // Same rule for any string leaf; non-string leaves follow the source
                "page": {"title": "Новая глава", "anchor": "old", "sort": 2}
            })
        );
        assert!(fixed.get("item.removed.name").is_none());
    }

    #[test]
    fn test_transforms_leave_inputs_untouched() {
        let alphabet = Alphabet::cyrillic();
        let incoming = json!({"a": "новый Текст"});
        let existing = json!({"a": "старый", "b": "лишний"});
        let incoming_before = incoming.clone();
        let existing_before = existing.clone();

        let _ = merge_trees(&alphabet, &incoming, &existing);
        let _ = normalize_tree(&alphabet, &incoming);

        assert_eq!(incoming, incoming_before);
        assert_eq!(existing, existing_before);
    }
}
