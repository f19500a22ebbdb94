//! Form field value objects

/// What kind of input a field accepts, driving its validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

/// Represents a single form field with its configuration, value and
/// error annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Inline error annotation; at most one per field
    error: Option<String>,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    /// Create a required text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, true)
    }

    /// Create a required email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email, true)
    }

    /// Create an optional phone field
    pub fn tel(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Tel, false)
    }

    /// Create a required select field
    pub fn select(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Select, true)
    }

    /// Create a required multiline field
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::TextArea, true)
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::TextArea
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Attach an error annotation, replacing any existing one.
    ///
    /// Together with [`clear_error`](Self::clear_error) this is the only
    /// mutator of annotation state.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Remove the error annotation. Safe to call on a clean field.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}
