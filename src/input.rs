//! Coefficient input form.

use crate::error::Coefficient;

/// Whether `c` may appear in a real-number literal.
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Three text fields for `a`, `b` and `c` with a focused field.
#[derive(Debug)]
pub struct InputForm {
    fields: [String; 3],
    focus: usize,
}

impl InputForm {
    /// Create an empty form focused on `a`.
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            focus: 0,
        }
    }

    /// Create a form with pre-filled fields.
    ///
    /// The text is kept as given so that malformed values are reported when
    /// the form is solved instead of being silently repaired.
    pub fn with_values(a: &str, b: &str, c: &str) -> Self {
        Self {
            fields: [a.to_string(), b.to_string(), c.to_string()],
            focus: 0,
        }
    }

    /// Currently focused coefficient.
    pub fn focused(&self) -> Coefficient {
        Coefficient::ALL[self.focus]
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        if self.focus == 0 {
            self.focus = self.fields.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Type a character into the focused field.
    ///
    /// Returns false if the character was rejected.
    pub fn input(&mut self, c: char) -> bool {
        if !is_numeric_char(c) {
            return false;
        }
        self.fields[self.focus].push(c);
        true
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        self.fields[self.focus].pop();
    }

    /// Clear all fields and focus `a`.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = 0;
    }

    /// Text of a field.
    pub fn value(&self, coefficient: Coefficient) -> &str {
        let idx = match coefficient {
            Coefficient::A => 0,
            Coefficient::B => 1,
            Coefficient::C => 2,
        };
        &self.fields[idx]
    }

    /// Texts of all three fields in order.
    pub fn values(&self) -> (&str, &str, &str) {
        (&self.fields[0], &self.fields[1], &self.fields[2])
    }

    /// Whether every field has text.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| !f.is_empty())
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}
