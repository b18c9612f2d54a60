//! Link list fragment — one `<ul>` of tool links for a given port.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;

use devdash_domain::link::{LinkList, ResolvedLink};
use devdash_domain::port::Port;

use super::PortQuery;
use crate::error::DashboardError;
use crate::state::AppState;

/// `<ul class="nav">` fragment template.
#[derive(Template)]
#[template(path = "nav.html")]
pub struct NavTemplate {
    links: Vec<ResolvedLink>,
}

impl NavTemplate {
    /// Resolve `links` against `port`.
    #[must_use]
    pub fn new(links: LinkList, port: Port) -> Self {
        Self {
            links: links.resolve(port),
        }
    }
}

/// `GET /nav?port=N` — the bare link list.
pub async fn fragment(
    State(state): State<AppState>,
    Query(query): Query<PortQuery>,
) -> Result<Html<String>, DashboardError> {
    tracing::debug!(port = %query.port, "rendering link list");
    let html = NavTemplate::new(state.dashboard.links, query.port).render()?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_one_anchor_per_link() {
        let html = NavTemplate::new(LinkList::standard(), Port::HTTP)
            .render()
            .unwrap();
        assert_eq!(html.matches("<a ").count(), 7);
        assert!(html.trim_start().starts_with("<ul class=\"nav\">"));
        assert!(html.trim_end().ends_with("</ul>"));
    }

    #[test]
    fn should_render_href_and_label() {
        let html = NavTemplate::new(LinkList::standard(), Port::HTTP)
            .render()
            .unwrap();
        assert!(
            html.contains(r#"<li><a href="http://tools.dev:80/projects/">Projects</a></li>"#)
        );
        assert!(html.contains(
            r#"<li><a href="http://tools.dev:80/opcache-status/opcache.php">OpCache</a></li>"#
        ));
    }

    #[test]
    fn should_render_links_in_list_order() {
        let html = NavTemplate::new(LinkList::standard(), Port::HTTP)
            .render()
            .unwrap();
        let positions: Vec<_> = LinkList::standard()
            .iter()
            .map(|link| html.find(&link.href(Port::HTTP)).unwrap())
            .collect();
        assert!(positions.is_sorted());
    }
}
