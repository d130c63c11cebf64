//! Client for the host property store

use contracts::shared::host_state::{ListWidgetsResponse, WidgetRecord};
use contracts::shared::option_registry::OptionItem;
use contracts::shared::widgets::PropsUpdate;
use gloo_net::http::Request;

const BASE_PATH: &str = "/api/widgets";
/// Port the backend listens on by default (`server.port` in its config)
const HOST_PORT: u16 = 3000;

/// Origin of the host store: page protocol and hostname, backend port.
/// Empty outside a browser, which leaves requests relative to the page.
fn host_origin() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, HOST_PORT)
}

/// Store path of one widget resource, e.g. `/api/widgets/group-dropdown/props`
fn widget_path(id: &str, leaf: &str) -> String {
    format!("{}/{}/{}", BASE_PATH, id, leaf)
}

fn store_url(path: &str) -> String {
    format!("{}{}", host_origin(), path)
}

/// List every widget record the host keeps
pub async fn list_widgets() -> Result<ListWidgetsResponse, String> {
    Request::get(&store_url(BASE_PATH))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Report a partial state change of widget `id`
pub async fn post_props(id: &str, update: &PropsUpdate) -> Result<WidgetRecord, String> {
    let response = Request::post(&store_url(&widget_path(id, "props")))
        .json(update)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Replace the host's option list of widget `id`
pub async fn put_options(id: &str, options: &[OptionItem]) -> Result<WidgetRecord, String> {
    let response = Request::put(&store_url(&widget_path(id, "options")))
        .json(&options)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_paths_match_backend_routes() {
        assert_eq!(widget_path("group-dropdown", "props"), "/api/widgets/group-dropdown/props");
        assert_eq!(widget_path("event-selection", "options"), "/api/widgets/event-selection/options");
    }
}
