//! Sentence-case normalizer for localized strings
//!
//! Rewrites the casing of target-alphabet text inside a string while leaving
//! everything else (Latin words, format codes, placeholders, punctuation)
//! byte-for-byte intact. Three casing regimes are distinguished:
//!
//! - sentence-initial letters are uppercased
//! - mid-sentence Title-Case words are demoted to lowercase (translation
//!   tools routinely over-capitalize item names)
//! - all-caps abbreviations like МЭ, ЦП, ТЭС survive untouched (a word with
//!   no lowercase alphabet letter is never demoted)
//!
//! Guarantees:
//! - Idempotent: `normalize_string(normalize_string(s)) == normalize_string(s)`
//! - Total: any string is accepted, including an unterminated trailing
//!   format marker
//! - Strings with no target-alphabet character are returned unchanged

use serde_json::Value;

use crate::alphabet::Alphabet;

/// Lead-in for two-character format codes (`§a`, `§l`, ...). The marker and
/// the character after it are copied as one atomic unit.
pub const FORMAT_MARKER: char = '§';

/// Apply sentence-casing to a single string value.
///
/// Fast path: if `text` has no letter of `alphabet`, it is returned as-is.
pub fn normalize_string(alphabet: &Alphabet, text: &str) -> String {
    if !alphabet.appears_in(text) {
        return text.to_string();
    }
    Scanner::new(alphabet, text).run()
}

/// Apply [`normalize_string`] to every string leaf of a JSON tree.
///
/// Container structure, key order, element order, and non-string leaves are
/// preserved exactly.
pub fn normalize_tree(alphabet: &Alphabet, tree: &Value) -> Value {
    match tree {
        Value::String(text) => Value::String(normalize_string(alphabet, text)),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), normalize_tree(alphabet, value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| normalize_tree(alphabet, item))
                .collect(),
        ),
        Value::Number(_) | Value::Bool(_) | Value::Null => tree.clone(),
    }
}

/// Single-pass character scanner over one string
struct Scanner<'a> {
    alphabet: &'a Alphabet,
    input: Vec<char>,
    position: usize,
    output: Vec<char>,
    at_sentence_start: bool,
}

impl<'a> Scanner<'a> {
    fn new(alphabet: &'a Alphabet, text: &str) -> Self {
        let input: Vec<char> = text.chars().collect();
        let capacity = input.len();
        Scanner {
            alphabet,
            input,
            position: 0,
            output: Vec::with_capacity(capacity),
            at_sentence_start: true,
        }
    }

    fn run(mut self) -> String {
        while let Some(c) = self.peek() {
            match c {
                FORMAT_MARKER => self.scan_format_code(),
                '\n' => {
                    self.emit(c);
                    self.advance();
                    self.at_sentence_start = true;
                }
                '.' | '!' | '?' => self.scan_terminator(c),
                ' ' | '\t' => {
                    self.emit(c);
                    self.advance();
                }
                c if self.alphabet.contains(c) => self.scan_letter(c),
                c if c.is_alphabetic() => {
                    // Foreign-script letter: copied verbatim, but it does end
                    // the sentence-start window
                    self.emit(c);
                    self.advance();
                    self.at_sentence_start = false;
                }
                _ => {
                    // Digits, symbols, other punctuation: state unchanged
                    self.emit(c);
                    self.advance();
                }
            }
        }
        self.output.into_iter().collect()
    }

    // ── Character helpers ──────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn emit(&mut self, c: char) {
        self.output.push(c);
    }

    // ── Scan rules ─────────────────────────────────────────

    /// `§` plus the following character, copied as one unit with no state
    /// change. A lone trailing `§` is copied as a literal.
    fn scan_format_code(&mut self) {
        self.emit(FORMAT_MARKER);
        self.advance();
        if let Some(next) = self.peek() {
            self.emit(next);
            self.advance();
        }
    }

    /// `.`, `!` or `?`. Declares a sentence boundary only when followed by
    /// horizontal whitespace and not terminating a single-letter
    /// abbreviation ("т.", "е.").
    fn scan_terminator(&mut self, c: char) {
        self.emit(c);
        self.advance();

        // "3.14" and glued abbreviations: no trailing blank, no boundary
        let mut lookahead = self.position;
        while matches!(self.input.get(lookahead).copied(), Some(' ' | '\t')) {
            lookahead += 1;
        }
        if lookahead == self.position {
            return;
        }

        if !self.ends_single_letter_word() {
            self.at_sentence_start = true;
        }
    }

    /// Look back past the terminator just emitted: does it close a lone
    /// single-letter alphabet word? If the char before the terminator is one
    /// alphabet letter whose own predecessor is blank, another terminator,
    /// or start-of-string, the pattern is an abbreviation like "т. е.".
    fn ends_single_letter_word(&self) -> bool {
        let n = self.output.len();
        if n < 2 {
            return false;
        }
        let before = self.output[n - 2];
        if !self.alphabet.contains(before) {
            return false;
        }
        if n < 3 {
            return true; // letter is at start of string
        }
        matches!(self.output[n - 3], ' ' | '\t' | '.' | '!' | '?')
    }

    /// One letter of the target alphabet
    fn scan_letter(&mut self, c: char) {
        let emitted = if self.at_sentence_start {
            self.alphabet.to_uppercase(c)
        } else if self.alphabet.is_uppercase(c) && self.word_has_lowercase() {
            // Title-Case word mid-sentence: demote. An all-caps run (no
            // lowercase alphabet letter anywhere in the word) is kept.
            self.alphabet.to_lowercase(c)
        } else {
            c
        };
        self.emit(emitted);
        self.advance();
        self.at_sentence_start = false;
    }

    /// Scan the remainder of the current word span (up to blank, newline or
    /// end of input) for a lowercase alphabet letter.
    fn word_has_lowercase(&self) -> bool {
        let mut lookahead = self.position + 1;
        while let Some(c) = self.input.get(lookahead).copied() {
            if matches!(c, ' ' | '\t' | '\n') {
                break;
            }
            if self.alphabet.is_lowercase(c) {
                return true;
            }
            lookahead += 1;
        }
        false
    }
}
