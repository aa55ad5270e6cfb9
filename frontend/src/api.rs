use gloo_net::http::Request;
use shared::{ErrorResponse, PredictResponse, StatusResponse, UserInput};

pub async fn fetch_status() -> Result<StatusResponse, String> {
    let response = Request::get("/api/status")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<StatusResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn request_prediction(input: &UserInput) -> Result<PredictResponse, String> {
    let response = Request::post("/api/predict")
        .json(input)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<PredictResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        let detail = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => response.text().await.unwrap_or_default(),
        };
        Err(format!("Server error: {} - {}", status, detail))
    }
}
