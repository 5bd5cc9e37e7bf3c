use unicode_width::UnicodeWidthStr;

/// Fields collected by the auth forms, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Name,
    Email,
    Password,
}

impl CredentialField {
    pub fn label(self) -> &'static str {
        match self {
            CredentialField::Name => "Full Name",
            CredentialField::Email => "Email",
            CredentialField::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CredentialField::Name => "John Doe",
            CredentialField::Email => "mail@example.com",
            CredentialField::Password => "",
        }
    }

    pub fn is_secret(self) -> bool {
        self == CredentialField::Password
    }
}

/// Single-line editable text with a byte-offset cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whitespace-only input counts as missing.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// Terminal columns when rendered with every char replaced by a mask.
    pub fn masked_cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn masked(&self) -> String {
        "•".repeat(self.text.chars().count())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

/// First field in `fields` that is blank.
pub(super) fn first_missing<'a>(
    fields: impl IntoIterator<Item = (CredentialField, &'a TextField)>,
) -> Option<CredentialField> {
    fields
        .into_iter()
        .find(|(_, field)| field.is_blank())
        .map(|(which, _)| which)
}
