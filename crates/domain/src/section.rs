//! Section — a titled group of tool links bound to one web server port.

use crate::error::{DevDashError, ValidationError};
use crate::port::Port;

/// One `<h2>` block on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub port: Port,
}

impl Section {
    /// Create a section after checking that `heading` is not empty.
    ///
    /// # Errors
    ///
    /// Returns [`DevDashError::Validation`] when `heading` is empty.
    pub fn new(heading: impl Into<String>, port: Port) -> Result<Self, DevDashError> {
        let section = Self {
            heading: heading.into(),
            port,
        };
        section.validate()?;
        Ok(section)
    }

    /// The web server section every dashboard shows.
    #[must_use]
    pub fn webserver() -> Self {
        Self {
            heading: "Webserver (Nginx)".to_string(),
            port: Port::HTTP,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DevDashError::Validation`] when `heading` is empty.
    pub fn validate(&self) -> Result<(), DevDashError> {
        if self.heading.trim().is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }
        Ok(())
    }
}
