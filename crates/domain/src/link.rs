//! Link — a development tool reachable at a fixed path on the dev host.
//!
//! Every link resolves to `http://tools.dev:<port><path>`. The list of tools
//! is fixed at compile time and its order is the order links are shown in.

use serde::Serialize;

use crate::error::{DevDashError, ValidationError};
use crate::port::Port;

/// URL scheme shared by every tool link.
pub const SCHEME: &str = "http";

/// Hostname the development tools are served from.
pub const DEV_HOST: &str = "tools.dev";

/// A tool path paired with the label shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub path: &'static str,
    pub label: &'static str,
}

impl Link {
    #[must_use]
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DevDashError::Validation`] when `label` is empty or `path`
    /// does not start with `/`.
    pub fn validate(&self) -> Result<(), DevDashError> {
        if self.label.is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }
        if !self.path.starts_with('/') {
            return Err(ValidationError::RelativePath(self.path.to_string()).into());
        }
        Ok(())
    }

    /// Absolute URL of this tool when the dev server listens on `port`.
    #[must_use]
    pub fn href(&self, port: Port) -> String {
        format!("{SCHEME}://{DEV_HOST}:{port}{}", self.path)
    }

    /// Pair the label with its absolute URL for `port`.
    #[must_use]
    pub fn resolve(&self, port: Port) -> ResolvedLink {
        ResolvedLink {
            label: self.label,
            href: self.href(port),
        }
    }
}

/// A [`Link`] bound to a concrete port, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub label: &'static str,
    pub href: String,
}

const STANDARD_LINKS: &[Link] = &[
    Link::new("/projects/", "Projects"),
    Link::new("/database-admin/", "phpMyAdmin"),
    Link::new("/adminer/", "Adminer (MSSQL)"),
    Link::new("/memcached-admin/", "MemCache"),
    Link::new("/opcache-status/opcache.php", "OpCache"),
    Link::new("/webgrind/", "Webgrind"),
    Link::new("/phpinfo/", "PHP Info"),
];

/// Ordered, immutable list of tool links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkList {
    links: &'static [Link],
}

impl LinkList {
    /// The tools every local development box ships with.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            links: STANDARD_LINKS,
        }
    }

    /// Wrap an arbitrary static table after validating every entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`DevDashError::Validation`] raised by a link.
    pub fn from_static(links: &'static [Link]) -> Result<Self, DevDashError> {
        links.iter().try_for_each(Link::validate)?;
        Ok(Self { links })
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Link> {
        self.links.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Resolve every link against `port`, preserving list order.
    #[must_use]
    pub fn resolve(&self, port: Port) -> Vec<ResolvedLink> {
        self.iter().map(|link| link.resolve(port)).collect()
    }
}

impl IntoIterator for LinkList {
    type Item = &'static Link;
    type IntoIter = std::slice::Iter<'static, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl Default for LinkList {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_PATHS: [&str; 7] = [
        "/projects/",
        "/database-admin/",
        "/adminer/",
        "/memcached-admin/",
        "/opcache-status/opcache.php",
        "/webgrind/",
        "/phpinfo/",
    ];

    #[test]
    fn should_list_seven_tools_in_fixed_order() {
        let paths: Vec<_> = LinkList::standard().iter().map(|link| link.path).collect();
        assert_eq!(paths, EXPECTED_PATHS);
    }

    #[test]
    fn should_keep_standard_links_valid() {
        for link in LinkList::standard().iter() {
            link.validate().unwrap();
        }
    }

    #[test]
    fn should_build_href_for_default_port() {
        let resolved = LinkList::standard().resolve(Port::default());
        for (link, path) in resolved.iter().zip(EXPECTED_PATHS) {
            assert_eq!(link.href, format!("http://tools.dev:80{path}"));
        }
    }

    #[test]
    fn should_change_only_port_segment_when_port_changes() {
        let list = LinkList::standard();
        let default = list.resolve(Port::HTTP);
        let other = list.resolve(Port::new(81).unwrap());

        assert_eq!(default.len(), other.len());
        for (a, b) in default.iter().zip(&other) {
            assert_eq!(a.label, b.label);
            assert_eq!(a.href.replacen(":80/", ":81/", 1), b.href);
        }
    }

    #[test]
    fn should_label_opcache_link() {
        let link = LinkList::standard()
            .iter()
            .find(|link| link.path.ends_with("opcache.php"))
            .unwrap();
        assert_eq!(link.label, "OpCache");
    }

    #[test]
    fn should_reject_relative_path() {
        static BAD: [Link; 1] = [Link::new("projects/", "Projects")];
        let result = LinkList::from_static(&BAD);
        assert!(matches!(
            result,
            Err(DevDashError::Validation(ValidationError::RelativePath(_)))
        ));
    }

    #[test]
    fn should_reject_empty_label() {
        let result = Link::new("/x/", "").validate();
        assert!(matches!(
            result,
            Err(DevDashError::Validation(ValidationError::EmptyLabel))
        ));
    }

    #[test]
    fn should_serialize_resolved_link() {
        let link = Link::new("/phpinfo/", "PHP Info").resolve(Port::HTTP);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["label"], "PHP Info");
        assert_eq!(json["href"], "http://tools.dev:80/phpinfo/");
    }
}
