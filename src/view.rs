//! View contract between the page handlers and the rendering collaborator.
//!
//! Handlers never produce HTML themselves: they build a [`Page`] (a view
//! name plus a named-value model, or a redirect) and leave the render half
//! to whatever [`ViewRenderer`] the binary installed.

use actix_web::{http::header, HttpResponse};
use serde::Serialize;
use serde_json::Value;

/// Named values handed to the renderer next to the view name.
pub type ViewModel = serde_json::Map<String, Value>;

/// Outcome of a page request: render a named view, or send the client on.
#[derive(Debug)]
pub enum Page {
    Render {
        view: &'static str,
        model: ViewModel,
    },
    Redirect {
        location: String,
    },
}

impl Page {
    /// Start a render outcome for `view` with an empty model.
    pub fn render(view: &'static str) -> Self {
        Page::Render {
            view,
            model: ViewModel::new(),
        }
    }

    /// Redirect outcome; `respond` turns it into a 303 with `Location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Page::Redirect {
            location: location.into(),
        }
    }

    /// Bind `value` under `key` in the view model. No-op on redirects.
    pub fn value(mut self, key: &str, value: impl Serialize) -> Self {
        if let Page::Render { model, .. } = &mut self {
            let value = match serde_json::to_value(value) {
                Ok(v) => v,
                Err(e) => {
                    log::error!("view value {key:?} does not serialize: {e}");
                    Value::Null
                }
            };
            model.insert(key.to_owned(), value);
        }
        self
    }

    /// Resolve into an HTTP response, rendering through `renderer`.
    pub fn respond(self, renderer: &dyn ViewRenderer) -> HttpResponse {
        match self {
            Page::Render { view, model } => match renderer.render(view, &model) {
                Ok(html) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(html),
                Err(e) => {
                    log::error!("rendering {view:?} failed: {e:?}");
                    HttpResponse::InternalServerError().finish()
                }
            },
            Page::Redirect { location } => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}

/// The external templating collaborator: view name + model in, HTML out.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, model: &ViewModel) -> anyhow::Result<String>;
}

/// Stand-in renderer: the view name as heading, the model as escaped JSON.
// TODO: swap in the real template engine once the page designs land.
pub struct DebugRenderer;

impl ViewRenderer for DebugRenderer {
    fn render(&self, view: &str, model: &ViewModel) -> anyhow::Result<String> {
        let dump = serde_json::to_string_pretty(model)?;
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{view}</title></head>\n<body>\n<h1>{view}</h1>\n<pre>{}</pre>\n</body>\n</html>\n",
            escape(&dump)
        ))
    }
}

/// Minimal HTML escaping for text nodes.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
