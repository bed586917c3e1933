//! Per-field form state shared by the registration and login forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Raw value plus the focus and validity flags that drive inline hints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub active: bool,
    pub valid: bool,
}

impl FieldState {
    /// Record a new raw value and recompute validity with `validator`.
    pub fn input(&mut self, value: String, validator: impl Fn(&str) -> bool) {
        self.valid = validator(&value);
        self.value = value;
        self.active = true;
    }

    pub fn focus(&mut self) {
        self.active = true;
    }

    pub fn blur(&mut self) {
        self.active = false;
    }

    /// Invalid hint: something was typed and it does not pass.
    pub fn shows_invalid_hint(&self) -> bool {
        !self.value.is_empty() && !self.valid
    }

    /// Valid hint: the value passes while the field has focus.
    pub fn shows_valid_hint(&self) -> bool {
        self.valid && self.active
    }
}
