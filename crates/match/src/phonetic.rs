//! Soundex phonetic matching.
//!
//! Reference: Russell & Odell (1918), American Soundex as used by the US
//! National Archives.
//!
//! # Encoding
//! - Keep the first letter
//! - Map remaining consonants to digits:
//!
//! | Digit | Letters |
//! |-------|---------|
//! | 1 | B F P V |
//! | 2 | C G J K Q S X Z |
//! | 3 | D T |
//! | 4 | L |
//! | 5 | M N |
//! | 6 | R |
//!
//! - Adjacent letters with the same digit collapse, also across H and W
//! - Vowels (and Y) separate letters with the same digit
//! - Pad with zeros or truncate to 4 characters

use crate::dictionary::NameDictionary;

/// Length of every Soundex code.
pub const CODE_LEN: usize = 4;

/// Score the aggregator gives a phonetic hit.
pub const PHONETIC_MATCH_SCORE: u8 = 65;

fn digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Soundex code for `name`, e.g. `"Smith"` -> `"S530"`.
///
/// Characters other than ASCII letters are skipped. Returns `None` when no
/// ASCII letter is left to encode.
pub fn phonetic_code(name: &str) -> Option<String> {
    let mut letters = name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());

    let first = letters.next()?;
    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);

    let mut prev = digit(first);
    for c in letters {
        if code.len() == CODE_LEN {
            break;
        }
        if matches!(c, 'H' | 'W') {
            continue;
        }

        let current = digit(c);
        if let Some(d) = current {
            if current != prev {
                code.push(d);
            }
        }
        prev = current;
    }

    while code.len() < CODE_LEN {
        code.push('0');
    }

    Some(code)
}

/// Formal names whose own Soundex code equals that of `name`.
///
/// The formal name is encoded, not its nicknames. Returns nothing when `name`
/// has no code. Results follow dictionary order.
pub fn search_by_soundex(name: &str, dict: &NameDictionary) -> Vec<String> {
    let Some(code) = phonetic_code(name) else {
        tracing::debug!(query = name, "no soundex code for query");
        return Vec::new();
    };

    let matches: Vec<String> = dict
        .keys()
        .filter(|formal_name| phonetic_code(formal_name).as_deref() == Some(code.as_str()))
        .map(str::to_string)
        .collect();

    tracing::debug!(query = name, %code, hits = matches.len(), "soundex match");
    matches
}
