use std::time::Duration;

use futures::StreamExt;
use reqwest::{header, StatusCode};
use serde_json::{json, Value};
use tokio::{sync::mpsc, time::Instant};

use crate::{
    app::env::Envy,
    pictures::{
        errors::{GatewayErrorKind, PictureApiError},
        util::image,
    },
};

use super::{
    config::{DEFAULT_STREAM_TIMEOUT_SECS, IMAGE_SIZE, MAX_IMAGES, MODEL},
    structs::seedream_stream_event::SeedreamStreamEvent,
};

const ERROR_BODY_LOG_LIMIT: usize = 800;

/// Invokes the Seedream image-to-image endpoint and forwards each generated
/// image through the returned channel as it arrives. The channel closes
/// after the gateway's completed event; failures arrive as a single `Err`.
pub fn spawn_generate_images_task(
    input_images: Vec<String>,
    prompt: String,
    envy: &Envy,
) -> mpsc::Receiver<Result<String, PictureApiError>> {
    let (tx, rx) = mpsc::channel(MAX_IMAGES as usize);
    let envy = envy.clone();

    tokio::spawn(async move {
        if let Err(e) = stream_generated_images(&input_images, &prompt, &envy, &tx).await {
            let _ = tx.send(Err(e)).await;
        }
    });

    rx
}

async fn stream_generated_images(
    input_images: &[String],
    prompt: &str,
    envy: &Envy,
    tx: &mpsc::Sender<Result<String, PictureApiError>>,
) -> Result<(), PictureApiError> {
    let body = json!({
        "model": MODEL,
        "prompt": prompt,
        "image": prepare_image_input(input_images)?,
        "size": IMAGE_SIZE,
        "sequential_image_generation": "auto",
        "sequential_image_generation_options": { "max_images": MAX_IMAGES },
        "response_format": "b64_json",
        "stream": true,
        "watermark": false,
    });

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert(
        "Authorization",
        match ["Bearer ", &envy.llm_api_key].concat().parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(PictureApiError::Gateway(
                    GatewayErrorKind::Auth,
                    "API key is not a valid header value.".to_string(),
                ))
            }
        },
    );
    if let Some(scene_id) = &envy.llm_scene_id {
        if let Ok(value) = scene_id.parse() {
            headers.insert("sceneId", value);
        }
    }

    let client = reqwest::Client::new();
    let url = format!("{}/images/generations", envy.llm_base_url);
    let result = client.post(url).headers(headers).json(&body).send().await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(classify_reqwest_error(&e));
        }
    };

    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        tracing::error!(
            "seedream returned {}: {}",
            status,
            truncate_for_log(&text, ERROR_BODY_LOG_LIMIT)
        );
        return Err(classify_status(status, &text));
    }

    let deadline = Instant::now()
        + Duration::from_secs(
            envy.stream_timeout_secs
                .unwrap_or(DEFAULT_STREAM_TIMEOUT_SECS),
        );

    let mut stream = res.bytes_stream();
    let mut buffer = String::new();

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(run_deadline_exceeded());
        }

        let chunk = match tokio::time::timeout(remaining, stream.next()).await {
            Err(_) => return Err(run_deadline_exceeded()),
            Ok(None) => break,
            Ok(Some(Err(e))) => {
                tracing::error!(%e);
                return Err(classify_reqwest_error(&e));
            }
            Ok(Some(Ok(bytes))) => bytes,
        };

        buffer.push_str(&String::from_utf8_lossy(&chunk));

        while let Some(pos) = buffer.find("\n\n") {
            let frame: String = buffer.drain(..pos + 2).collect();

            let Some(event) = parse_sse_frame(&frame)
            else {
                continue;
            };

            match event.event_type.as_str() {
                SeedreamStreamEvent::PARTIAL_IMAGE => {
                    let Some(b64_json) = event.b64_json
                    else {
                        continue;
                    };

                    tracing::debug!(
                        "received partial image (gateway index {:?}, {} bytes)",
                        event.partial_image_index,
                        b64_json.len()
                    );

                    let data_url = if b64_json.starts_with("data:image") {
                        b64_json
                    } else {
                        ["data:image/png;base64,", &b64_json].concat()
                    };

                    if tx.send(Ok(data_url)).await.is_err() {
                        // caller disconnected; stop consuming
                        return Ok(());
                    }
                }
                SeedreamStreamEvent::PARTIAL_FAILED => {
                    let (code, message) = match &event.error {
                        Some(error) => (
                            error.code.clone().unwrap_or_default(),
                            error
                                .message
                                .clone()
                                .unwrap_or("Image generation failed.".to_string()),
                        ),
                        None => (String::new(), "Image generation failed.".to_string()),
                    };

                    tracing::error!("seedream partial_failed ({}): {}", code, message);

                    if code.contains("SensitiveContent") {
                        return Err(PictureApiError::Gateway(
                            GatewayErrorKind::ContentFiltered,
                            message,
                        ));
                    }
                    if code == "InternalServiceError" {
                        return Err(PictureApiError::Gateway(GatewayErrorKind::Unknown, message));
                    }
                    // other partial failures may still be followed by images
                }
                SeedreamStreamEvent::PARTIAL_SUCCEEDED => {
                    if let Some(url) = &event.url {
                        tracing::info!("recv size: {:?}, url: {}", event.size, url);
                    }
                }
                SeedreamStreamEvent::COMPLETED => {
                    if let Some(usage) = &event.usage {
                        tracing::info!("recv usage: {}", usage);
                    }
                    return Ok(());
                }
                other => {
                    tracing::debug!("ignoring seedream event type {}", other);
                }
            }
        }
    }

    Ok(())
}

// single image goes up as a string, multiple as a list
fn prepare_image_input(input_images: &[String]) -> Result<Value, PictureApiError> {
    if input_images.is_empty() {
        return Err(PictureApiError::ParameterInvalid(
            "Input image list must not be empty.".to_string(),
        ));
    }

    for input in input_images {
        if !image::is_data_url(input) {
            return Err(PictureApiError::ParameterInvalid(
                "Input images must be base64 data URLs of type jpeg or png.".to_string(),
            ));
        }
    }

    if input_images.len() == 1 {
        Ok(Value::String(input_images[0].to_string()))
    } else {
        Ok(json!(input_images))
    }
}

fn parse_sse_frame(frame: &str) -> Option<SeedreamStreamEvent> {
    for line in frame.lines() {
        let Some(data) = line.strip_prefix("data:")
        else {
            continue;
        };

        let data = data.trim();
        if data.is_empty() || data == "[DONE]" {
            continue;
        }

        match serde_json::from_str::<SeedreamStreamEvent>(data) {
            Ok(event) => return Some(event),
            Err(e) => {
                tracing::warn!(
                    "skipping malformed seedream frame: {} ({})",
                    truncate_for_log(data, ERROR_BODY_LOG_LIMIT),
                    e
                );
            }
        }
    }

    None
}

fn run_deadline_exceeded() -> PictureApiError {
    PictureApiError::Gateway(
        GatewayErrorKind::Timeout,
        "Generation run exceeded its deadline.".to_string(),
    )
}

fn classify_reqwest_error(e: &reqwest::Error) -> PictureApiError {
    let kind = if e.is_timeout() {
        GatewayErrorKind::Timeout
    } else if e.is_connect() {
        GatewayErrorKind::Network
    } else {
        GatewayErrorKind::Unknown
    };

    PictureApiError::Gateway(kind, "Failed to reach the image generation service.".to_string())
}

fn classify_status(status: StatusCode, body: &str) -> PictureApiError {
    let kind = if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        GatewayErrorKind::Auth
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        GatewayErrorKind::Quota
    } else if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT {
        GatewayErrorKind::Timeout
    } else if body.contains("SensitiveContent") {
        GatewayErrorKind::ContentFiltered
    } else {
        GatewayErrorKind::Unknown
    };

    PictureApiError::Gateway(
        kind,
        format!("Image generation service returned {}.", status),
    )
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{}... (truncated)", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_input_image_is_sent_as_a_string() {
        let input = vec!["data:image/jpeg;base64,AAAA".to_string()];
        let value = prepare_image_input(&input).unwrap();
        assert!(value.is_string());
    }

    #[test]
    fn multiple_input_images_are_sent_as_a_list() {
        let input = vec![
            "data:image/jpeg;base64,AAAA".to_string(),
            "data:image/png;base64,BBBB".to_string(),
        ];
        let value = prepare_image_input(&input).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn malformed_input_image_is_a_parameter_error() {
        let input = vec!["not-a-data-url".to_string()];
        let err = prepare_image_input(&input).unwrap_err();
        assert_eq!(err.kind(), "ParameterInvalid");
    }

    #[test]
    fn parses_a_partial_image_frame() {
        let frame = "data: {\"type\":\"image_generation.partial_image\",\"b64_json\":\"QUJD\",\"partial_image_index\":1}\n\n";
        let event = parse_sse_frame(frame).unwrap();

        assert_eq!(event.event_type, SeedreamStreamEvent::PARTIAL_IMAGE);
        assert_eq!(event.b64_json.as_deref(), Some("QUJD"));
        assert_eq!(event.partial_image_index, Some(1));
    }

    #[test]
    fn skips_done_markers_and_comments() {
        assert!(parse_sse_frame("data: [DONE]\n\n").is_none());
        assert!(parse_sse_frame(": keep-alive\n\n").is_none());
        assert!(parse_sse_frame("data:\n\n").is_none());
    }

    #[test]
    fn auth_and_quota_statuses_classify_distinctly() {
        let auth = classify_status(StatusCode::UNAUTHORIZED, "");
        let quota = classify_status(StatusCode::TOO_MANY_REQUESTS, "");
        let filtered = classify_status(
            StatusCode::BAD_REQUEST,
            "{\"error\":{\"code\":\"InputImageSensitiveContentDetected\"}}",
        );

        assert_eq!(auth.kind(), "GatewayAuth");
        assert_eq!(quota.kind(), "GatewayQuota");
        assert_eq!(filtered.kind(), "GatewayContentFiltered");
        assert!(!auth.is_retryable());
    }
}
