// Static demo pages
//
// Every module page is the same template fed from the route catalog;
// the home page lists both catalogs and hosts the AI navigation box.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, MethodRouter},
};
use std::sync::Arc;

use super::PortalServer;
use crate::catalog::{ModuleEntry, Role};

#[derive(Template)]
#[template(path = "index.html")]
struct HomePage {
    general: &'static [ModuleEntry],
    provider: &'static [ModuleEntry],
}

#[derive(Template)]
#[template(path = "page.html")]
struct ModulePage {
    title: &'static str,
    blurb: &'static str,
}

/// Handle GET / - Home page
pub(super) async fn home_page(State(server): State<Arc<PortalServer>>) -> Response {
    let catalog = server.catalog();
    render(HomePage {
        general: catalog.modules(Role::GeneralUser),
        provider: catalog.modules(Role::ServiceProvider),
    })
}

/// Build the GET handler for one catalog entry's fixed page.
pub(super) fn module_page(entry: &'static ModuleEntry) -> MethodRouter<Arc<PortalServer>> {
    get(move || async move {
        render(ModulePage {
            title: entry.title,
            blurb: entry.blurb,
        })
    })
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
