use tokio::sync::mpsc;

use crate::{
    pictures::{
        apis::seedream::{self, config::MAX_IMAGES},
        dtos::create_picture_dto::CreatePictureDto,
        enums::{generation_phase::GenerationPhase, mode::Mode},
        errors::PictureApiError,
        models::{
            create_picture_response::{CreatePictureResponse, ImageItem},
            generated_image::GeneratedImage,
            generation_event::GenerationEvent,
            generation_request::GenerationRequest,
        },
        prompt,
        util::image,
    },
    AppState,
};

use super::garments;

/// Runs one generation and returns the event stream: zero to four images
/// in receipt order, then exactly one terminal event. Validation and
/// resolution failures surface before any gateway call is made.
pub async fn generate_picture_stream(
    dto: &CreatePictureDto,
    state: &AppState,
) -> Result<mpsc::Receiver<GenerationEvent>, PictureApiError> {
    tracing::debug!(phase = GenerationPhase::Validating.value(), "run started");

    let request = GenerationRequest::from_dto(dto)?;
    image::validate_origin_image(&request.origin_pic_base64)?;

    let prompt = prompt::service::assemble(&request);
    tracing::info!(
        phase = GenerationPhase::PromptReady.value(),
        "prompt assembled ({} chars)",
        prompt.len()
    );

    // origin image first, then garment references in Easy mode
    let mut input_images = vec![request.origin_pic_base64.to_string()];

    if request.mode == Mode::Easy {
        if let Some(selection) = &request.clothes {
            let garment_images = garments::service::resolve_garment_images(
                request.gender,
                selection.upper(),
                selection.lower(),
                selection.dress(),
                &state.garment_catalog,
            )
            .await?;

            input_images.extend(garment_images);
        }
    }

    tracing::info!(
        phase = GenerationPhase::Calling.value(),
        "invoking gateway with {} input image(s)",
        input_images.len()
    );

    let gateway_rx = seedream::service::spawn_generate_images_task(input_images, prompt, &state.envy);

    let (tx, rx) = mpsc::channel(MAX_IMAGES as usize);
    tokio::spawn(relay_generation_events(gateway_rx, tx));

    Ok(rx)
}

/// Batch wrapper around the stream: collects every image, tolerating an
/// incomplete run (fewer than four images) as a soft condition.
pub async fn generate_picture(
    dto: &CreatePictureDto,
    state: &AppState,
) -> Result<CreatePictureResponse, PictureApiError> {
    let rx = generate_picture_stream(dto, state).await?;
    collect_images(rx).await
}

/// Forwards gateway output as generation events: each image immediately
/// with a receipt-order index, then a single terminal event. Stops when
/// the consumer goes away.
pub(crate) async fn relay_generation_events(
    mut gateway_rx: mpsc::Receiver<Result<String, PictureApiError>>,
    tx: mpsc::Sender<GenerationEvent>,
) {
    let mut count: u8 = 0;

    while let Some(item) = gateway_rx.recv().await {
        match item {
            Ok(base64) => {
                if count == MAX_IMAGES {
                    tracing::warn!("dropping gateway image beyond the {} cap", MAX_IMAGES);
                    continue;
                }

                let image = GeneratedImage {
                    index: count,
                    base64,
                };
                count += 1;

                tracing::info!(
                    phase = GenerationPhase::Streaming.value(),
                    "pushing image {}/{}",
                    count,
                    MAX_IMAGES
                );

                if tx.send(GenerationEvent::Image(image)).await.is_err() {
                    // consumer disconnected; stop pulling from the gateway
                    return;
                }
            }
            Err(e) => {
                tracing::error!(
                    phase = GenerationPhase::Failed.value(),
                    "run failed after {} image(s) ({}): {}",
                    count,
                    e.kind(),
                    e.message()
                );
                let _ = tx.send(GenerationEvent::Failed(e)).await;
                return;
            }
        }
    }

    if count < MAX_IMAGES {
        tracing::warn!(
            "IncompleteResult: expected {} images, received {}",
            MAX_IMAGES,
            count
        );
    }

    tracing::info!(
        phase = GenerationPhase::Completed.value(),
        "run completed with {} image(s)",
        count
    );
    let _ = tx.send(GenerationEvent::Completed { total: count }).await;
}

pub(crate) async fn collect_images(
    mut rx: mpsc::Receiver<GenerationEvent>,
) -> Result<CreatePictureResponse, PictureApiError> {
    let mut images = Vec::with_capacity(MAX_IMAGES as usize);

    while let Some(event) = rx.recv().await {
        match event {
            GenerationEvent::Image(image) => {
                images.push(ImageItem {
                    id: image.index,
                    base64: image.base64,
                });
            }
            GenerationEvent::Completed { .. } => break,
            GenerationEvent::Failed(e) => return Err(e),
        }
    }

    Ok(CreatePictureResponse { images })
}
