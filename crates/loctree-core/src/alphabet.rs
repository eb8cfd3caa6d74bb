//! Target alphabet model
//!
//! An [`Alphabet`] is an immutable table of uppercase/lowercase letter pairs.
//! It is injected into both transforms, which keeps them script-agnostic:
//! the normalizer and merger only ever ask "is this character one of yours,
//! and what is its other case?". Characters outside the alphabet are inert.

/// Paired uppercase/lowercase code points for one script
#[derive(Debug, Clone, Copy)]
pub struct Alphabet {
    /// (uppercase, lowercase) pairs
    pairs: &'static [(char, char)],
}

/// The 33 Russian letter pairs, А..Я plus Ё
const CYRILLIC: &[(char, char)] = &[
    ('А', 'а'),
    ('Б', 'б'),
    ('В', 'в'),
    ('Г', 'г'),
    ('Д', 'д'),
    ('Е', 'е'),
    ('Ё', 'ё'),
    ('Ж', 'ж'),
    ('З', 'з'),
    ('И', 'и'),
    ('Й', 'й'),
    ('К', 'к'),
    ('Л', 'л'),
    ('М', 'м'),
    ('Н', 'н'),
    ('О', 'о'),
    ('П', 'п'),
    ('Р', 'р'),
    ('С', 'с'),
    ('Т', 'т'),
    ('У', 'у'),
    ('Ф', 'ф'),
    ('Х', 'х'),
    ('Ц', 'ц'),
    ('Ч', 'ч'),
    ('Ш', 'ш'),
    ('Щ', 'щ'),
    ('Ъ', 'ъ'),
    ('Ы', 'ы'),
    ('Ь', 'ь'),
    ('Э', 'э'),
    ('Ю', 'ю'),
    ('Я', 'я'),
];

impl Alphabet {
    /// The production alphabet: Russian Cyrillic
    pub const fn cyrillic() -> Self {
        Alphabet { pairs: CYRILLIC }
    }

    /// Build an alphabet from a static pair table (used by tests with
    /// synthetic alphabets)
    pub const fn from_pairs(pairs: &'static [(char, char)]) -> Self {
        Alphabet { pairs }
    }

    pub fn is_uppercase(&self, c: char) -> bool {
        self.pairs.iter().any(|&(upper, _)| upper == c)
    }

    pub fn is_lowercase(&self, c: char) -> bool {
        self.pairs.iter().any(|&(_, lower)| lower == c)
    }

    /// Whether `c` is a letter of this alphabet, either case
    pub fn contains(&self, c: char) -> bool {
        self.pairs
            .iter()
            .any(|&(upper, lower)| upper == c || lower == c)
    }

    /// Uppercase form of `c`; identity for characters outside the alphabet
    pub fn to_uppercase(&self, c: char) -> char {
        self.pairs
            .iter()
            .find(|&&(_, lower)| lower == c)
            .map(|&(upper, _)| upper)
            .unwrap_or(c)
    }

    /// Lowercase form of `c`; identity for characters outside the alphabet
    pub fn to_lowercase(&self, c: char) -> char {
        self.pairs
            .iter()
            .find(|&&(upper, _)| upper == c)
            .map(|&(_, lower)| lower)
            .unwrap_or(c)
    }

    /// Whether `text` contains at least one letter of this alphabet.
    ///
    /// This is the script-bearing test shared by both transforms: a string
    /// with no hit is passed through untouched by the normalizer, and carries
    /// no translation signal for the merger.
    pub fn appears_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}
