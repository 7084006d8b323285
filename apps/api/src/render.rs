use askama::Template;

use crate::models::{self, Entity};

pub const HOME_TITLE: &str = "HKRN API Home";
pub const HOME_HEADING: &str = "Welcome to the HKRN API";

pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
    pub heading: &'static str,
    pub links: Vec<NavLink>,
}

/// One entity's rows as a table. Cells are already projected and stringified.
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingPage {
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ListingPage {
    pub fn for_entity<E: Entity>(records: &[E]) -> Self {
        let view = &E::VIEW;
        ListingPage {
            title: view.title,
            labels: view.labels(),
            rows: records.iter().map(|r| view.project(r)).collect(),
        }
    }
}

pub fn render_home() -> askama::Result<String> {
    HomePage {
        title: HOME_TITLE,
        heading: HOME_HEADING,
        links: models::index()
            .into_iter()
            .map(|(path, label)| NavLink { path, label })
            .collect(),
    }
    .render()
}

pub fn render_listing<E: Entity>(records: &[E]) -> askama::Result<String> {
    ListingPage::for_entity(records).render()
}
