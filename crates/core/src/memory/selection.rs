use truegoto_api::{HostResult, TextPoint, TextSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Blank,
    Newline,
    Punct,
}

fn class_of(c: char) -> CharClass {
    if c == '\n' {
        CharClass::Newline
    } else if c.is_whitespace() {
        CharClass::Blank
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

/// Selection over an in-memory text buffer with editor-style word motions.
///
/// The anchor stays put while extending; the active point moves. Word motions
/// stop at runs of identifier characters or punctuation, and a right motion
/// also swallows trailing blanks, as editors do.
#[derive(Debug, Clone)]
pub struct BufferSelection {
    chars: Vec<char>,
    anchor: usize,
    active: usize,
}

impl BufferSelection {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            anchor: 0,
            active: 0,
        }
    }

    /// Place a bare caret at `point`.
    pub fn with_caret(mut self, point: TextPoint) -> Self {
        let idx = self.index_of(point);
        self.anchor = idx;
        self.active = idx;
        self
    }

    /// Select from `anchor` to `active`.
    pub fn with_selection(mut self, anchor: TextPoint, active: TextPoint) -> Self {
        self.anchor = self.index_of(anchor);
        self.active = self.index_of(active);
        self
    }

    fn index_of(&self, point: TextPoint) -> usize {
        let mut line = 0;
        let mut idx = 0;
        while line < point.line && idx < self.chars.len() {
            if self.chars[idx] == '\n' {
                line += 1;
            }
            idx += 1;
        }
        let mut offset = 0;
        while offset < point.offset && idx < self.chars.len() && self.chars[idx] != '\n' {
            idx += 1;
            offset += 1;
        }
        idx
    }

    fn point_of(&self, idx: usize) -> TextPoint {
        let mut point = TextPoint::default();
        for &c in &self.chars[..idx.min(self.chars.len())] {
            if c == '\n' {
                point.line += 1;
                point.offset = 0;
            } else {
                point.offset += 1;
            }
        }
        point
    }

    fn prev_word_start(&self, from: usize) -> usize {
        let mut i = from;
        while i > 0 && class_of(self.chars[i - 1]) == CharClass::Blank {
            i -= 1;
        }
        if i == 0 {
            return 0;
        }
        let class = class_of(self.chars[i - 1]);
        if class == CharClass::Newline {
            return i - 1;
        }
        while i > 0 && class_of(self.chars[i - 1]) == class {
            i -= 1;
        }
        i
    }

    fn next_word_start(&self, from: usize) -> usize {
        let len = self.chars.len();
        let mut i = from;
        if i >= len {
            return len;
        }
        let class = class_of(self.chars[i]);
        if class == CharClass::Newline {
            return i + 1;
        }
        if class != CharClass::Blank {
            while i < len && class_of(self.chars[i]) == class {
                i += 1;
            }
        }
        while i < len && class_of(self.chars[i]) == CharClass::Blank {
            i += 1;
        }
        i
    }

    fn move_active(&mut self, to: usize, extend: bool) {
        self.active = to;
        if !extend {
            self.anchor = to;
        }
    }
}

impl TextSelection for BufferSelection {
    fn text(&self) -> String {
        let (start, end) = if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        };
        self.chars[start..end].iter().collect()
    }

    fn top_point(&self) -> TextPoint {
        self.point_of(self.anchor.min(self.active))
    }

    fn word_left(&mut self, extend: bool) -> HostResult<()> {
        let to = self.prev_word_start(self.active);
        self.move_active(to, extend);
        Ok(())
    }

    fn word_right(&mut self, extend: bool) -> HostResult<()> {
        let to = self.next_word_start(self.active);
        self.move_active(to, extend);
        Ok(())
    }

    fn move_to_line_and_offset(&mut self, point: TextPoint) -> HostResult<()> {
        let idx = self.index_of(point);
        self.move_active(idx, false);
        Ok(())
    }

    fn char_right(&mut self, extend: bool, count: usize) -> HostResult<()> {
        let to = (self.active + count).min(self.chars.len());
        self.move_active(to, extend);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_left_extends_to_word_start() {
        let mut sel = BufferSelection::new("int myVariable = 3;").with_caret(TextPoint::new(0, 6));
        sel.word_left(true).unwrap();
        assert_eq!(sel.text(), "my");
        assert_eq!(sel.top_point(), TextPoint::new(0, 4));
    }

    #[test]
    fn word_right_swallows_trailing_blanks() {
        let mut sel = BufferSelection::new("int myVariable = 3;").with_caret(TextPoint::new(0, 4));
        sel.word_right(true).unwrap();
        assert_eq!(sel.text(), "myVariable ");
    }

    #[test]
    fn punctuation_is_its_own_word() {
        let mut sel = BufferSelection::new("a.b").with_caret(TextPoint::new(0, 1));
        sel.word_right(true).unwrap();
        assert_eq!(sel.text(), ".");
    }

    #[test]
    fn positions_span_lines() {
        let mut sel = BufferSelection::new("first\n  second line").with_caret(TextPoint::new(1, 4));
        sel.word_left(true).unwrap();
        assert_eq!(sel.text(), "se");
        assert_eq!(sel.top_point(), TextPoint::new(1, 2));

        sel.move_to_line_and_offset(TextPoint::new(1, 2)).unwrap();
        sel.char_right(true, 6).unwrap();
        assert_eq!(sel.text(), "second");
    }

    #[test]
    fn motions_clamp_at_buffer_edges() {
        let mut sel = BufferSelection::new("abc").with_caret(TextPoint::new(0, 99));
        sel.word_right(true).unwrap();
        assert_eq!(sel.text(), "");
        sel.move_to_line_and_offset(TextPoint::new(0, 0)).unwrap();
        sel.word_left(true).unwrap();
        assert_eq!(sel.text(), "");
    }
}
