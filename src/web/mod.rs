pub mod handlers;
pub mod models;
pub mod routes;

use actix_cors::Cors;
use std::sync::Arc;
use tera::Tera;

use crate::model::LegalAdvisor;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Modes offered by the form's select control.
pub const MODES: &[&str] = &["concise", "detailed"];

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub advisor: Arc<LegalAdvisor>,
}

impl AppState {
    pub fn new(advisor: LegalAdvisor) -> tera::Result<Self> {
        Ok(Self {
            tera: load_templates()?,
            advisor: Arc::new(advisor),
        })
    }
}

/// The page template is compiled into the binary so the server does not depend on its cwd.
pub fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);
    tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
    Ok(tera)
}

/// Any origin, method and header, with credentials. The request's origin is echoed
/// back since browsers refuse `*` on credentialed requests.
pub fn cors() -> Cors {
    Cors::permissive()
}
