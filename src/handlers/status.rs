use axum::{extract::Extension, response::Json};
use tracing::info;

use crate::database::SharedStore;
use crate::error::ApiResult;
use crate::middleware::ValidatedJson;
use crate::models::{StatusCheck, StatusCheckCreate};

/// POST /api/status - Record a status check for the calling client
#[tracing::instrument(name = "create_status_check", skip_all, fields(client_name = %input.client_name))]
pub async fn post(
    Extension(store): Extension<SharedStore>,
    ValidatedJson(input): ValidatedJson<StatusCheckCreate>,
) -> ApiResult<Json<StatusCheck>> {
    let record = StatusCheck::new(input);
    store.insert(&record).await?;

    info!(id = %record.id, "Created status check");
    Ok(Json(record))
}

/// GET /api/status - List every status check in insertion order
#[tracing::instrument(name = "list_status_checks", skip_all)]
pub async fn get(Extension(store): Extension<SharedStore>) -> ApiResult<Json<Vec<StatusCheck>>> {
    let records = store.list_all().await?;
    Ok(Json(records))
}
