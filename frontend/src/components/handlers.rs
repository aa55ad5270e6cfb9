use super::super::{INPUT_KEY, Model, Msg, Setup, VIEW_STATE_KEY};
use crate::api;
use gloo_storage::{SessionStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use shared::{PredictResponse, StatusResponse, UserInput, ViewState, compute_bmi};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Pause before each request so the spinner is visible.
const ANALYSIS_DELAY_MS: u32 = 500;

pub fn handle_input<F>(model: &mut Model, apply: F) -> bool
where
    F: FnOnce(&mut UserInput),
{
    apply(&mut model.input);
    if let Err(e) = SessionStorage::set(INPUT_KEY, &model.input) {
        log::warn!("Failed to store inputs: {}", e);
    }
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading || model.setup != Setup::Ready {
        return false;
    }

    model.loading = true;
    model.error = None;
    send_prediction_request(ctx, model.input.clone());
    true
}

pub fn handle_analysis_done(model: &mut Model, input: UserInput, response: PredictResponse) -> bool {
    let bmi = compute_bmi(input.weight_kg, input.height_cm);
    model.view = ViewState::result(input, bmi, response.prediction, response.activity_encoded);
    model.loading = false;

    if let Err(e) = SessionStorage::set(VIEW_STATE_KEY, &model.view) {
        log::warn!("Failed to store analysis result: {}", e);
    }
    log::info!("Analysis {} complete", response.request_id);
    true
}

pub fn handle_status(model: &mut Model, status: StatusResponse) -> bool {
    model.setup = if status.ready {
        Setup::Ready
    } else {
        Setup::Missing(
            status
                .message
                .unwrap_or_else(|| "Model files not found!".to_string()),
        )
    };
    true
}

pub fn send_status_request(ctx: &Context<Model>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_status().await {
            Ok(status) => link.send_message(Msg::StatusLoaded(status)),
            Err(e) => {
                log::error!("Status check failed: {}", e);
                link.send_message(Msg::SetError(Some(e)))
            }
        }
    });
}

pub fn send_prediction_request(ctx: &Context<Model>, input: UserInput) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(ANALYSIS_DELAY_MS).await;

        match api::request_prediction(&input).await {
            Ok(response) => link.send_message(Msg::AnalysisDone(input, response)),
            Err(e) => {
                log::error!("Prediction failed: {}", e);
                link.send_message(Msg::SetError(Some(e)))
            }
        }
    });
}
