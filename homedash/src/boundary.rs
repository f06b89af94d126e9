//! Word-boundary substring matching
//!
//! A term matches when some occurrence starts a "word": the start of the
//! text, a letter after a non-letter, or an uppercase letter after a
//! non-uppercase one (camelCase humps). Letter classes are ASCII-only;
//! any other character is never considered part of a word.
//!
//! Only the first character of an occurrence and the one before it are
//! inspected. Nothing checks where the occurrence ends.

/// Check whether `term` occurs at a word boundary in `target`.
///
/// `cased_target` must be byte-aligned with `target` and carries the
/// original casing used to classify boundaries, so a lowercased `target`
/// still detects camelCase boundaries in the real text.
pub fn matches_boundary(term: &str, target: &str, cased_target: &str) -> bool {
    let Some(mut pos) = target.find(term) else {
        return false;
    };

    // Matching at the very beginning is always a boundary
    if pos == 0 {
        return true;
    }

    let cased = cased_target.as_bytes();
    loop {
        if is_boundary_at(cased, pos) {
            return true;
        }

        // Overlapping occurrences count: resume just past the match start
        let resume = pos + char_width_at(target, pos);
        match target.get(resume..).and_then(|rest| rest.find(term)) {
            Some(offset) => pos = resume + offset,
            None => return false,
        }
    }
}

/// Classify the boundary at byte offset `pos` of the original-case text.
fn is_boundary_at(cased: &[u8], pos: usize) -> bool {
    let Some(&at) = cased.get(pos) else {
        return true;
    };
    let Some(&prev) = pos.checked_sub(1).and_then(|p| cased.get(p)) else {
        return true;
    };

    if at.is_ascii_lowercase() {
        !prev.is_ascii_alphabetic()
    } else if at.is_ascii_uppercase() {
        !prev.is_ascii_uppercase()
    } else {
        // Not a letter, so it starts a word by itself
        true
    }
}

fn char_width_at(text: &str, pos: usize) -> usize {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}
