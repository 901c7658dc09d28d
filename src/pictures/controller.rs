use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::Stream;
use tokio_retry::{strategy::FixedInterval, RetryIf};
use tokio_stream::{wrappers::ReceiverStream, StreamExt};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    pictures::{
        dtos::create_picture_dto::CreatePictureDto,
        errors::PictureApiError,
        models::create_picture_response::CreatePictureResponse,
        service,
    },
    AppState,
};

pub async fn generate_picture(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreatePictureDto>,
) -> Result<Json<CreatePictureResponse>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let retry_strategy = FixedInterval::from_millis(1000).take(2);

    match RetryIf::spawn(
        retry_strategy,
        || service::generate_picture(&dto, &state),
        |e: &PictureApiError| e.is_retryable(),
    )
    .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e.value()),
    }
}

pub async fn generate_picture_stream(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreatePictureDto>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let rx = match service::generate_picture_stream(&dto, &state).await {
        Ok(rx) => rx,
        Err(e) => return Err(e.value()),
    };

    let stream = ReceiverStream::new(rx).map(|event| Ok(event.to_sse_event()));

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
