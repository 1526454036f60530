//! Tolerant character-based slicing for noisy extracted text.
//!
//! Offsets count characters, not bytes. Out-of-range offsets are clamped
//! into the string and reversed ranges are swapped, so a line that is
//! shorter than a layout expects yields a truncated or empty value.

/// Character offset of the first occurrence of `needle`, or -1 when absent.
///
/// Callers feed the result straight into offset arithmetic; a missing
/// marker then behaves as if it sat just before the start of the line.
pub fn position(haystack: &str, needle: &str) -> isize {
    match haystack.find(needle) {
        Some(byte) => haystack[..byte].chars().count() as isize,
        None => -1,
    }
}

fn clamp(offset: isize, len: usize) -> usize {
    offset.clamp(0, len as isize) as usize
}

/// Characters in `[start, end)`.
pub fn substring(s: &str, start: isize, end: isize) -> String {
    let len = s.chars().count();
    let (mut from, mut to) = (clamp(start, len), clamp(end, len));
    if from > to {
        std::mem::swap(&mut from, &mut to);
    }
    s.chars().skip(from).take(to - from).collect()
}

/// Characters from `start` to the end of the string.
pub fn substring_from(s: &str, start: isize) -> String {
    let len = s.chars().count();
    s.chars().skip(clamp(start, len)).collect()
}

/// The last `n` characters, or the whole string when it is shorter.
pub fn last_chars(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}

/// Everything except the last `n` characters (empty when shorter).
pub fn without_last_chars(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().take(len.saturating_sub(n)).collect()
}

/// The character `n` places from the end (`n = 1` is the last one).
pub fn char_from_end(s: &str, n: usize) -> Option<char> {
    let len = s.chars().count();
    if n == 0 || n > len {
        return None;
    }
    s.chars().nth(len - n)
}

/// Remove every whitespace character.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(position("2401-ABCD", "-"), 4);
        assert_eq!(position("ÄÖ-x", "-"), 2);
        assert_eq!(position("no dash", "-"), -1);
    }

    #[test]
    fn test_substring_clamps_and_swaps() {
        assert_eq!(substring("abcdef", 1, 3), "bc");
        assert_eq!(substring("abcdef", -3, 2), "ab");
        assert_eq!(substring("abcdef", 4, 100), "ef");
        assert_eq!(substring("abcdef", 0, -3), "");
        assert_eq!(substring("abcdef", 5, 2), "cde");
    }

    #[test]
    fn test_substring_from() {
        assert_eq!(substring_from("C.1NPWP / NIK:123", 14), "123");
        assert_eq!(substring_from("short", 14), "");
        assert_eq!(substring_from("short", -9), "short");
    }

    #[test]
    fn test_tail_helpers() {
        assert_eq!(last_chars("Faktur01022023", 8), "01022023");
        assert_eq!(last_chars("0102", 8), "0102");
        assert_eq!(without_last_chars("Faktur01022023", 8), "Faktur");
        assert_eq!(without_last_chars("0102", 8), "");
    }

    #[test]
    fn test_char_from_end() {
        assert_eq!(char_from_end("abc", 1), Some('c'));
        assert_eq!(char_from_end("abc", 3), Some('a'));
        assert_eq!(char_from_end("abc", 4), None);
        assert_eq!(char_from_end("abc", 0), None);
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" 01 234\t567 "), "01234567");
        assert_eq!(char_count("ÄÖÜ"), 3);
    }
}
