//! The release page: its DOM contract and the two load-time entry points.
//!
//! `dom_ready` starts the particle background; `load` fetches the release list
//! and writes it into `#release-message`. They touch disjoint elements and can
//! run in either order.

use crate::error::{PageError, ReleaseError};
use crate::fetch::FetchOptions;
use crate::origin::Origin;
use crate::particles::{self, ParticleRenderer, ParticlesConfig};
use crate::release::{self, ReleaseResponse};
use crate::render::{self, escape_html};
use std::fmt::Write;

pub const RELEASE_MESSAGE_ID: &str = "release-message";
pub const INTRO_ID: &str = "intro";
pub use crate::particles::PARTICLES_ELEMENT_ID as PARTICLES_ID;

pub const DEFAULT_TITLE: &str = "Latest release";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub inner_html: String,
}

impl Element {
    fn new(id: &str, inner_html: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            inner_html: inner_html.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    elements: Vec<Element>,
    particles_started: bool,
    library_src: String,
}

impl Page {
    /// A page with the three required elements: intro, particle canvas host, release message.
    pub fn new(title: &str) -> Self {
        let intro = format!("<h1>{}</h1>", escape_html(title));
        Self::from_elements(
            title,
            vec![
                Element::new(PARTICLES_ID, ""),
                Element::new(INTRO_ID, intro),
                Element::new(RELEASE_MESSAGE_ID, render::LOADING_MESSAGE),
            ],
        )
    }

    /// A page with an arbitrary element set (e.g. a template missing an id).
    pub fn from_elements(title: &str, elements: Vec<Element>) -> Self {
        Self {
            title: title.to_string(),
            elements,
            particles_started: false,
            library_src: particles::LIBRARY_SRC.to_string(),
        }
    }

    /// Loads the particle library from `src` instead of [`particles::LIBRARY_SRC`].
    pub fn with_library_src(mut self, src: impl Into<String>) -> Self {
        self.library_src = src.into();
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn set_inner_html(&mut self, id: &str, html: String) -> Result<(), PageError> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        element.inner_html = html;
        Ok(())
    }

    /// DOM-ready handler: hands the fixed configuration to the renderer.
    /// Returns false (and does nothing) if the background was already started.
    pub fn dom_ready<R: ParticleRenderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        if self.particles_started {
            return false;
        }
        self.particles_started = true;
        renderer.render(PARTICLES_ID, &ParticlesConfig::background());
        true
    }

    /// Writes the outcome of a release fetch into `#release-message`.
    pub fn show_release(
        &mut self,
        outcome: &Result<ReleaseResponse, ReleaseError>,
    ) -> Result<(), PageError> {
        let html = release::message_for(outcome);
        self.set_inner_html(RELEASE_MESSAGE_ID, html)
    }

    /// Load handler: one GET against the page's origin, then render.
    pub async fn load(&mut self, origin: &Origin, options: &FetchOptions) -> Result<(), PageError> {
        let outcome = release::fetch_release_info(origin, options).await;
        self.show_release(&outcome)
    }

    /// Serializes the page as a full HTML document. `inline_scripts` run after the library loads.
    pub fn to_html(&self, inline_scripts: &[String]) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<link rel=\"stylesheet\" href=\"/css/style.css\">\n</head>\n<body>\n",
            escape_html(&self.title)
        );
        for element in &self.elements {
            let _ = writeln!(
                out,
                "<div id=\"{}\">{}</div>",
                escape_html(&element.id),
                element.inner_html
            );
        }
        if !inline_scripts.is_empty() {
            let _ = writeln!(
                out,
                "<script src=\"{}\"></script>",
                escape_html(&self.library_src)
            );
            for script in inline_scripts {
                let _ = writeln!(out, "<script>{}</script>", script);
            }
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
