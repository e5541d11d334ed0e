//! Request routing: mirror-list API first, then the page, then static files.

use super::files;
use super::ServerState;
use crate::page::{Page, RELEASE_MESSAGE_ID};
use crate::particles::ScriptRenderer;
use crate::release::{MirrorList, ReleaseResponse};
use crate::render;
use http_body_util::Full;
use hyper::body::Body as _;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ALLOW, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use std::path::Path;

pub(crate) type Body = Full<Bytes>;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";
const HTML: &str = "text/html; charset=utf-8";

fn respond(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<Body> {
    let mut res = Response::new(Full::new(body.into()));
    *res.status_mut() = status;
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    res
}

fn method_not_allowed(allow: &'static str) -> Response<Body> {
    let mut res = respond(StatusCode::METHOD_NOT_ALLOWED, TEXT, "Method not allowed\n");
    res.headers_mut().insert(ALLOW, HeaderValue::from_static(allow));
    res
}

fn not_found() -> Response<Body> {
    respond(StatusCode::NOT_FOUND, TEXT, "404 page not found\n")
}

/// Strips the body for HEAD while keeping the `Content-Length` a GET would send.
fn head_only(mut res: Response<Body>) -> Response<Body> {
    if let Some(len) = res.body().size_hint().exact() {
        res.headers_mut().insert(CONTENT_LENGTH, HeaderValue::from(len));
    }
    *res.body_mut() = Full::new(Bytes::new());
    res
}

/// `/api/mirrorlist/{version}/json` → decoded `version`.
fn api_version(path: &str) -> Option<String> {
    let rest = path.strip_prefix("/api/mirrorlist/")?;
    let version = rest.strip_suffix("/json")?;
    if version.is_empty() || version.contains('/') {
        return None;
    }
    urlencoding::decode(version).ok().map(|v| v.into_owned())
}

async fn load_mirrors(data_file: &Path) -> anyhow::Result<MirrorList> {
    let path = data_file.to_path_buf();
    tokio::task::spawn_blocking(move || MirrorList::load(&path)).await?
}

async fn mirrorlist_api(state: &ServerState, version: String) -> Response<Body> {
    let list = match load_mirrors(&state.config.data_file).await {
        Ok(list) => list,
        Err(e) => {
            let msg = format!("{:#}", e);
            tracing::error!(error = %msg, "mirror list unavailable");
            return respond(StatusCode::INTERNAL_SERVER_ERROR, TEXT, msg + "\n");
        }
    };
    let response = ReleaseResponse::new(version, list.mirrors);
    match serde_json::to_vec(&response) {
        Ok(json) => respond(StatusCode::OK, JSON, json),
        Err(e) => {
            tracing::error!(error = %e, "encode mirror list");
            respond(StatusCode::INTERNAL_SERVER_ERROR, TEXT, "Error generating JSON\n")
        }
    }
}

/// The page with the release list rendered from the data file.
async fn index(state: &ServerState) -> Response<Body> {
    let mut page = Page::new(&state.config.title).with_library_src(&state.config.particles_src);
    let mut renderer = ScriptRenderer::new();
    page.dom_ready(&mut renderer);

    let message = match load_mirrors(&state.config.data_file).await {
        Ok(list) => render::release_message(&ReleaseResponse::new(
            crate::origin::LATEST,
            list.mirrors,
        )),
        Err(e) => {
            let msg = format!("{:#}", e);
            tracing::error!(error = %msg, "error fetching release information");
            render::ERROR_MESSAGE.to_string()
        }
    };
    if let Err(e) = page.set_inner_html(RELEASE_MESSAGE_ID, message) {
        tracing::warn!(error = %e, "page template");
    }
    respond(StatusCode::OK, HTML, page.to_html(renderer.scripts()))
}

async fn static_file(state: &ServerState, path: &str) -> Response<Body> {
    let decoded = match urlencoding::decode(path) {
        Ok(d) => d.into_owned(),
        Err(_) => return not_found(),
    };
    let Some(file) = files::resolve(&state.config.static_dir, &decoded) else {
        tracing::debug!(path, "rejected static path");
        return not_found();
    };
    match tokio::fs::read(&file).await {
        Ok(bytes) => respond(StatusCode::OK, files::content_type(&file), bytes),
        Err(e) => {
            tracing::debug!(file = %file.display(), error = %e, "static file unavailable");
            not_found()
        }
    }
}

/// Dispatches one request. Only the method and path are inspected; the body is dropped.
pub(crate) async fn route<B>(state: &ServerState, req: Request<B>) -> Response<Body> {
    let (parts, _body) = req.into_parts();
    let path = parts.uri.path();
    let method = &parts.method;

    if let Some(version) = api_version(path) {
        if *method != Method::GET {
            return method_not_allowed("GET");
        }
        return mirrorlist_api(state, version).await;
    }

    let head = *method == Method::HEAD;
    if *method != Method::GET && !head {
        return method_not_allowed("GET, HEAD");
    }
    let res = if path == "/" || path == "/index.html" {
        index(state).await
    } else {
        static_file(state, path).await
    };
    if head {
        head_only(res)
    } else {
        res
    }
}
