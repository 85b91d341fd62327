//! Delimiter balance tracking for getter bodies.
//!
//! Counts block (`{`/`}`) and list (`[`/`]`) nesting independently. The
//! counters are never clamped, so unbalanced input simply leaves a depth
//! that never returns to zero and the caller decides what that means.

/// Running depth of both delimiter kinds, threaded through a scan by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimiterBalance {
    /// Depth of `{`/`}` nesting.
    pub braces: i32,
    /// Depth of `[`/`]` nesting.
    pub brackets: i32,
    /// True once any opening delimiter has been seen.
    pub started: bool,
}

impl DelimiterBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a single character.
    pub fn feed_char(&mut self, ch: char) {
        match ch {
            '{' => {
                self.braces += 1;
                self.started = true;
            }
            '}' => self.braces -= 1,
            '[' => {
                self.brackets += 1;
                self.started = true;
            }
            ']' => self.brackets -= 1,
            _ => {}
        }
    }

    /// Account for every character of a line.
    pub fn feed_line(&mut self, line: &str) {
        for ch in line.chars() {
            self.feed_char(ch);
        }
    }

    /// Return a copy advanced past `line`.
    pub fn after_line(mut self, line: &str) -> Self {
        self.feed_line(line);
        self
    }
}
