use std::path::PathBuf;

use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::{error, info, warn};
use shared::{ErrorResponse, PredictResponse, PredictionResult, UserInput};
use uuid::Uuid;

use crate::state::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/api/status").route(web::get().to(get_status)))
        .service(web::resource("/api/predict").route(web::post().to(handle_predict)));
}

/// Malformed request bodies get the same `{error}` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {}", err);
        warn!("{}", message);
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse { error: message }),
        )
        .into()
    })
}

async fn get_status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.status())
}

async fn handle_predict(state: web::Data<AppState>, input: web::Json<UserInput>) -> HttpResponse {
    let request_id = Uuid::new_v4();

    let Some(predictor) = state.predictor() else {
        warn!("Prediction {} rejected: model artifacts are not loaded", request_id);
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: state.setup_error().to_string(),
        });
    };

    let input = input.into_inner();
    let out_of_range = input.out_of_range_fields();
    if !out_of_range.is_empty() {
        let fields = out_of_range
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        warn!("Prediction {} rejected, out of range: {}", request_id, fields);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: format!("Input out of range: {}", fields),
        });
    }

    match predictor.predict(request_id, &input) {
        Ok(estimate) => {
            let prediction = PredictionResult::from_calories(estimate.calories);
            info!(
                "Prediction {}: {} for {} min -> {:.0} kcal ({})",
                request_id, input.activity, input.duration_min, prediction.calories, prediction.food_equivalent
            );
            HttpResponse::Ok().json(PredictResponse {
                request_id: request_id.to_string(),
                prediction,
                activity_encoded: estimate.activity.is_encoded(),
            })
        }
        Err(e) => {
            let error_msg = format!("Model inference error: {}", e);
            error!("Prediction {} failed: {}", request_id, error_msg);
            HttpResponse::InternalServerError().json(ErrorResponse { error: error_msg })
        }
    }
}
