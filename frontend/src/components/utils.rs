use super::super::Model;
use yew::prelude::*;

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <p>{ format!("⚠️ {}", error_msg) }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_setup_error(message: &str) -> Html {
    html! {
        <div class="error-message setup-error">
            <p>{ format!("⚠️ {}", message) }</p>
        </div>
    }
}

/// Formats a slider value with the precision its step implies.
pub fn format_step_value(value: f64, step: f64) -> String {
    if step.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
