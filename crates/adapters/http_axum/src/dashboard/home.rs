//! Dashboard home page — the full page shell.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use devdash_domain::dashboard::Dashboard;

use super::nav::NavTemplate;
use crate::error::DashboardError;
use crate::state::AppState;

/// A section heading with its pre-rendered link list.
pub struct SectionView {
    heading: String,
    nav: String,
}

/// Home page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct HomeTemplate {
    title: String,
    heading: String,
    sections: Vec<SectionView>,
}

impl HomeTemplate {
    /// Lay out `dashboard`, rendering one link list per section.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Render`] if a link list fails to render.
    pub fn new(dashboard: &Dashboard) -> Result<Self, DashboardError> {
        let sections = dashboard
            .sections
            .iter()
            .map(|section| -> Result<SectionView, DashboardError> {
                Ok(SectionView {
                    heading: section.heading.clone(),
                    nav: NavTemplate::new(dashboard.links, section.port).render()?,
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            title: dashboard.title.clone(),
            heading: dashboard.heading.clone(),
            sections,
        })
    }
}

/// `GET /` — the dashboard page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let html = HomeTemplate::new(&state.dashboard)?.render()?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdash_domain::port::Port;
    use devdash_domain::section::Section;

    fn render(dashboard: &Dashboard) -> String {
        HomeTemplate::new(dashboard).unwrap().render().unwrap()
    }

    #[test]
    fn should_render_page_shell() {
        let html = render(&Dashboard::standard());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard</title>"));
        assert!(html.contains("<h1>Local development - dashboard</h1>"));
        assert!(html.contains("<h2>Webserver (Nginx)</h2>"));
        assert!(html.contains(r#"<meta name="viewport""#));
    }

    #[test]
    fn should_render_seven_links_for_standard_dashboard() {
        let html = render(&Dashboard::standard());
        assert_eq!(html.matches("<a href=\"http://tools.dev:80/").count(), 7);
    }

    #[test]
    fn should_render_one_link_list_per_section() {
        let dashboard = Dashboard::builder()
            .section(Section::new("Apache (Port: 80)", Port::HTTP).unwrap())
            .section(Section::new("Nginx (Port: 81)", Port::new(81).unwrap()).unwrap())
            .build()
            .unwrap();
        let html = render(&dashboard);

        assert_eq!(html.matches("<ul class=\"nav\">").count(), 2);
        assert_eq!(html.matches("http://tools.dev:80/").count(), 7);
        assert_eq!(html.matches("http://tools.dev:81/").count(), 7);
        assert!(html.find("Apache").unwrap() < html.find("Nginx").unwrap());
    }

    #[test]
    fn should_escape_section_heading() {
        let dashboard = Dashboard::builder()
            .section(Section::new("<b>", Port::HTTP).unwrap())
            .build()
            .unwrap();
        let html = render(&dashboard);
        assert!(html.contains("<h2>&lt;b&gt;</h2>"));
    }
}
