//! Dashboard — everything the page shell needs to render.

use crate::error::{DevDashError, ValidationError};
use crate::link::LinkList;
use crate::section::Section;

/// Page layout: a title, a heading, and one link list per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub title: String,
    pub heading: String,
    pub sections: Vec<Section>,
    pub links: LinkList,
}

impl Dashboard {
    /// Create a builder for constructing a [`Dashboard`].
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// The local development dashboard: the standard tools behind the web
    /// server on port 80.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            title: "Dashboard".to_string(),
            heading: "Local development - dashboard".to_string(),
            sections: vec![Section::webserver()],
            links: LinkList::standard(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DevDashError::Validation`] when the title or any section
    /// heading is empty.
    pub fn validate(&self) -> Result<(), DevDashError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }
        self.sections.iter().try_for_each(Section::validate)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::standard()
    }
}

/// Step-by-step builder for [`Dashboard`].
///
/// Missing fields fall back to the values of [`Dashboard::standard`], except
/// sections: adding one replaces the default web server section.
#[derive(Debug, Default)]
pub struct DashboardBuilder {
    title: Option<String>,
    heading: Option<String>,
    sections: Vec<Section>,
    links: Option<LinkList>,
}

impl DashboardBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn links(mut self, links: LinkList) -> Self {
        self.links = Some(links);
        self
    }

    /// Consume the builder, validate, and return a [`Dashboard`].
    ///
    /// # Errors
    ///
    /// Returns [`DevDashError::Validation`] if the title or a section heading
    /// is empty.
    pub fn build(self) -> Result<Dashboard, DevDashError> {
        let standard = Dashboard::standard();
        let dashboard = Dashboard {
            title: self.title.unwrap_or(standard.title),
            heading: self.heading.unwrap_or(standard.heading),
            sections: if self.sections.is_empty() {
                standard.sections
            } else {
                self.sections
            },
            links: self.links.unwrap_or(standard.links),
        };
        dashboard.validate()?;
        Ok(dashboard)
    }
}
