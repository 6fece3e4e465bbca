use crate::server::error::Error;

/// Collects required request fields, remembering every one that is missing or blank
/// so the caller can report them all at once.
#[derive(Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field's value, recording it as missing when absent or blank
    pub fn take(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// Like [`Self::take`] but only an absent or empty value counts as missing, so
    /// whitespace is kept as provided
    pub fn take_verbatim(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// # Returns
    /// - `Ok(())` - Every required field was present
    /// - `Err(Error::ValidationError)` - Message naming each missing field
    pub fn finish(self) -> Result<(), Error> {
        if self.missing.is_empty() {
            return Ok(());
        }

        Err(Error::ValidationError(format!(
            "Missing required fields: {}",
            self.missing.join(", ")
        )))
    }
}

/// Rejects a provided but blank value for a field that cannot be empty
pub fn non_blank(field: &'static str, value: Option<String>) -> Result<Option<String>, Error> {
    match value {
        Some(value) if value.trim().is_empty() => Err(Error::ValidationError(format!(
            "Field '{}' must not be blank",
            field
        ))),
        value => Ok(value),
    }
}
