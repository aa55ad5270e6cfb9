use super::super::{Model, Msg, Setup};
use super::utils::format_step_value;
use shared::{Activity, DURATION_MIN, HEART_RATE_BPM, HEIGHT_CM, InputBounds, MET, WEIGHT_KG};
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_sidebar(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let input = &model.input;

    let on_weight = link.callback(|e: Event| {
        let field: HtmlInputElement = e.target_unchecked_into();
        Msg::SetWeight(WEIGHT_KG.clamp(field.value_as_number()))
    });
    let on_height = link.callback(|e: Event| {
        let field: HtmlInputElement = e.target_unchecked_into();
        Msg::SetHeight(HEIGHT_CM.clamp(field.value_as_number()))
    });
    let on_activity = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetActivity(Activity::from_str(&select.value()).unwrap_or_default())
    });
    let on_heart_rate = link.callback(|e: InputEvent| {
        let field: HtmlInputElement = e.target_unchecked_into();
        Msg::SetHeartRate(HEART_RATE_BPM.clamp(field.value_as_number()) as u32)
    });
    let on_duration = link.callback(|e: InputEvent| {
        let field: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDuration(DURATION_MIN.clamp(field.value_as_number()) as u32)
    });
    let on_met = link.callback(|e: InputEvent| {
        let field: HtmlInputElement = e.target_unchecked_into();
        Msg::SetMet(MET.clamp(field.value_as_number()))
    });

    html! {
        <aside class="sidebar">
            <h2>{"⚙️ Parameters"}</h2>

            <details class="sidebar-group" open=true>
                <summary>{"👤 Physical profile"}</summary>
                { number_field("Weight (kg)", "weight", WEIGHT_KG, input.weight_kg, on_weight) }
                { number_field("Height (cm)", "height", HEIGHT_CM, input.height_cm, on_height) }
            </details>

            <details class="sidebar-group" open=true>
                <summary>{"❤️ Condition & activity"}</summary>
                <label class="field" for="activity">
                    <span class="field-label">{"Exercise type"}</span>
                    <select id="activity" onchange={on_activity}>
                        { for Activity::ALL.into_iter().map(|activity| html! {
                            <option
                                value={activity.to_string()}
                                selected={activity == input.activity}
                            >
                                { activity.to_string() }
                            </option>
                        })}
                    </select>
                </label>
                { slider_field("Heart rate (bpm)", "heart-rate", HEART_RATE_BPM, input.heart_rate_bpm as f64, on_heart_rate, None) }
                { slider_field("Duration (minutes)", "duration", DURATION_MIN, input.duration_min as f64, on_duration, None) }
                { slider_field("Intensity (MET)", "met", MET, input.met, on_met, Some("Higher means a harder workout")) }
            </details>

            <button
                class="analyze-btn primary"
                onclick={link.callback(|_| Msg::Analyze)}
                disabled={model.loading || model.setup != Setup::Ready}
            >
                {
                    if model.loading {
                        html! { <><span class="spinner"></span>{" Calculating..."}</> }
                    } else {
                        html! { {"🔥 Analyze"} }
                    }
                }
            </button>
        </aside>
    }
}

fn number_field(label: &str, id: &str, bounds: InputBounds, value: f64, onchange: Callback<Event>) -> Html {
    html! {
        <label class="field" for={id.to_string()}>
            <span class="field-label">{ label }</span>
            <input
                type="number"
                id={id.to_string()}
                min={bounds.min.to_string()}
                max={bounds.max.to_string()}
                step={bounds.step.to_string()}
                value={value.to_string()}
                {onchange}
            />
        </label>
    }
}

fn slider_field(
    label: &str,
    id: &str,
    bounds: InputBounds,
    value: f64,
    oninput: Callback<InputEvent>,
    help: Option<&str>,
) -> Html {
    html! {
        <label class="field" for={id.to_string()} title={help.map(str::to_string)}>
            <span class="field-label">
                { label }
                <span class="field-value">{ format_step_value(value, bounds.step) }</span>
            </span>
            <input
                type="range"
                id={id.to_string()}
                min={bounds.min.to_string()}
                max={bounds.max.to_string()}
                step={bounds.step.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}
