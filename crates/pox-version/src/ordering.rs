//! Total order over version strings
//!
//! Versions are split into runs of digits and runs of letters; every other
//! character separates runs. Runs are compared pairwise, a missing run
//! compares as an empty letter run.

use std::cmp::Ordering;

/// Compare two version strings, returning `Ordering::Greater` if `a` is newer.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = Segments::new(a);
    let mut right = Segments::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let cmp = compare_segment(l.unwrap_or(EMPTY), r.unwrap_or(EMPTY));
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment<'a> {
    Number(&'a str),
    Word(&'a str),
}

const EMPTY: Segment<'static> = Segment::Word("");

struct Segments<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    fn new(input: &'a str) -> Self {
        Segments { input, pos: 0 }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphanumeric() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let numeric = bytes[start].is_ascii_digit();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            let same_kind = if numeric {
                b.is_ascii_digit()
            } else {
                b.is_ascii_alphabetic()
            };
            if !same_kind {
                break;
            }
            self.pos += 1;
        }

        let text = &self.input[start..self.pos];
        Some(if numeric {
            Segment::Number(text)
        } else {
            Segment::Word(text)
        })
    }
}

fn compare_segment(a: Segment<'_>, b: Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Number(x), Segment::Number(y)) => compare_numeric(x, y),
        (Segment::Number(_), Segment::Word(_)) => Ordering::Greater,
        (Segment::Word(_), Segment::Number(_)) => Ordering::Less,
        (Segment::Word(x), Segment::Word(y)) => word_rank(x).cmp(&word_rank(y)),
    }
}

// Digit runs of arbitrary length compare without overflowing: strip leading
// zeros, then the longer run is larger, then lexicographic.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn word_rank(word: &str) -> u8 {
    match word.to_ascii_lowercase().as_str() {
        "dev" => 0,
        "alpha" | "a" => 1,
        "beta" | "b" => 2,
        "rc" => 3,
        "patch" | "pl" | "p" => 5,
        _ => 4,
    }
}
