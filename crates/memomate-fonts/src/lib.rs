//! Block-letter ASCII art for the MEMOMATE logo.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Letter A
const LETTER_A: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
];

/// Letter E
const LETTER_E: [&str; GLYPH_HEIGHT] = [
    "██████",
    "██    ",
    "█████ ",
    "██    ",
    "██████",
];

/// Letter M
const LETTER_M: [&str; GLYPH_HEIGHT] = [
    "██   ██",
    "███ ███",
    "██ █ ██",
    "██   ██",
    "██   ██",
];

/// Letter O
const LETTER_O: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Letter T
const LETTER_T: [&str; GLYPH_HEIGHT] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Blank used for spaces and letters without a glyph.
const BLANK: [&str; GLYPH_HEIGHT] = ["   ", "   ", "   ", "   ", "   "];

fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match ch.to_ascii_uppercase() {
        'A' => Some(&LETTER_A),
        'E' => Some(&LETTER_E),
        'M' => Some(&LETTER_M),
        'O' => Some(&LETTER_O),
        'T' => Some(&LETTER_T),
        _ => None,
    }
}

/// Build block-letter art for `word`, one string per row, letters separated
/// by a single column.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings of equal display width.
pub fn build_word_art(word: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            word.chars()
                .map(|ch| glyph(ch).unwrap_or(&BLANK)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Whether `word` can be drawn without falling back to blanks.
pub fn is_supported(word: &str) -> bool {
    word.chars().all(|ch| ch == ' ' || glyph(ch).is_some())
}
