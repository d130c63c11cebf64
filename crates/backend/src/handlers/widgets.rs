use axum::{extract::Path, http::StatusCode, Json};
use contracts::shared::host_state::{ListWidgetsResponse, WidgetRecord};
use contracts::shared::option_registry::OptionItem;
use contracts::shared::widgets::PropsUpdate;

use crate::domain::widget_store::{service, WidgetStoreError};

fn into_status(
    id: &str,
    result: anyhow::Result<Result<WidgetRecord, WidgetStoreError>>,
) -> Result<Json<WidgetRecord>, StatusCode> {
    match result {
        Ok(Ok(record)) => Ok(Json(record)),
        Ok(Err(WidgetStoreError::NotFound(_))) => Err(StatusCode::NOT_FOUND),
        Ok(Err(e @ WidgetStoreError::KindMismatch { .. })) => {
            tracing::warn!("{}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            tracing::error!("Widget store failure for {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/widgets
pub async fn list_all() -> Result<Json<ListWidgetsResponse>, StatusCode> {
    match service::list_all() {
        Ok(widgets) => Ok(Json(ListWidgetsResponse { widgets })),
        Err(e) => {
            tracing::error!("Failed to list widgets: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/widgets/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<WidgetRecord>, StatusCode> {
    into_status(&id, service::get_by_id(&id))
}

/// POST /api/widgets/:id/props
pub async fn apply_props(
    Path(id): Path<String>,
    Json(update): Json<PropsUpdate>,
) -> Result<Json<WidgetRecord>, StatusCode> {
    tracing::debug!("Props for {}: {:?}", id, update);
    into_status(&id, service::apply_props(&id, update))
}

/// PUT /api/widgets/:id/options
pub async fn replace_options(
    Path(id): Path<String>,
    Json(options): Json<Vec<OptionItem>>,
) -> Result<Json<WidgetRecord>, StatusCode> {
    into_status(&id, service::replace_options(&id, options))
}
