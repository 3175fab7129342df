use crate::error::{Result, TrueGotoError};
use regex::RegexBuilder;
use truegoto_api::{SelectionAnchor, TextPoint, TextSelection};

/// Identifier recovered from an editor selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedWord {
    pub word: String,
    /// Where the selection was before expansion; it has been restored there.
    pub anchor: SelectionAnchor,
    /// Whether the word came from expanding the selection rather than the raw text.
    pub expanded: bool,
}

/// Expand the selection one word left, then one word right, and take the
/// concatenation as the identifier under the caret.
///
/// The expansion is used when the original selection was blank or occurs in
/// it (ignoring case); otherwise the raw selection text wins. The host
/// selection is put back to where it was in every case.
pub fn extract_word(selection: &mut dyn TextSelection) -> Result<ExtractedWord> {
    let target = selection.text();
    let anchor = SelectionAnchor {
        top: selection.top_point(),
        length: target.chars().count(),
    };

    let expanded = expand(selection, &target);
    let restored = restore_selection(selection, anchor);
    let expanded = expanded?;
    restored?;

    Ok(match expanded {
        Some(word) => ExtractedWord {
            word,
            anchor,
            expanded: true,
        },
        None => ExtractedWord {
            word: target,
            anchor,
            expanded: false,
        },
    })
}

fn expand(selection: &mut dyn TextSelection, target: &str) -> Result<Option<String>> {
    selection.word_left(true)?;
    let left_word = selection.text();
    selection.word_right(true)?;
    let right_word = selection.text();

    if left_word.trim().is_empty() || right_word.trim().is_empty() {
        return Ok(None);
    }

    let candidate = left_word + &right_word;
    if target.trim().is_empty() || contains_ignore_case(&candidate, target)? {
        Ok(Some(candidate.trim().to_string()))
    } else {
        Ok(None)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> Result<bool> {
    let pattern = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|e| TrueGotoError::Internal(e.to_string()))?;
    Ok(pattern.is_match(haystack))
}

/// Put the selection back to `anchor`: caret at the top point, then extend
/// right over the original length.
pub fn restore_selection(selection: &mut dyn TextSelection, anchor: SelectionAnchor) -> Result<()> {
    selection.move_to_line_and_offset(anchor.top)?;
    selection.char_right(true, anchor.length)?;
    Ok(())
}

/// Identifier around a caret in raw text, for hosts that hand over buffer
/// content instead of a live selection.
pub fn identifier_at(content: &str, point: TextPoint) -> Option<String> {
    let line_content = content.lines().nth(point.line)?;
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';

    let col = line_content
        .char_indices()
        .nth(point.offset)
        .map(|(i, _)| i)
        .unwrap_or(line_content.len());

    let start = line_content[..col]
        .rfind(|c| !is_ident(c))
        .map(|i| i + line_content[i..].chars().next().map_or(1, |c| c.len_utf8()))
        .unwrap_or(0);

    let end = line_content[col..]
        .find(|c| !is_ident(c))
        .map(|i| i + col)
        .unwrap_or(line_content.len());

    if start < end {
        Some(line_content[start..end].to_string())
    } else {
        None
    }
}
