use super::super::Model;
use shared::{
    BmiResult, PredictionResult, TipTone, UserInput, ViewState, bmi_scale_position, health_tip,
};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    match &model.view {
        ViewState::Empty => html! {
            <div class="info-message">
                <p>
                    {"👈 Enter your details and workout in the panel on the left, then press "}
                    <b>{"Analyze"}</b>{"."}
                </p>
            </div>
        },
        ViewState::Result {
            input,
            bmi,
            prediction,
            activity_encoded,
        } => html! {
            <div class="results-container">
                <hr />
                <div class="card-row">
                    { render_calorie_card(prediction) }
                    { render_bmi_card(bmi) }
                    { render_duration_card(input) }
                </div>
                {
                    if !*activity_encoded {
                        html! {
                            <p class="caveat">
                                { format!("The model was trained without {} sessions; this estimate ignores the activity type.", input.activity) }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="detail-row">
                    { render_bmi_explainer(bmi) }
                    { render_health_tip(bmi) }
                </div>
            </div>
        },
    }
}

fn render_calorie_card(prediction: &PredictionResult) -> Html {
    html! {
        <div class="metric-card-main">
            <h3>{"ESTIMATED CALORIES BURNED"}</h3>
            <h1>{ format!("{:.0} ", prediction.calories) }<span class="unit">{"kcal"}</span></h1>
            <p>{"Equivalent to: "}<b>{ &prediction.food_equivalent }</b></p>
        </div>
    }
}

fn render_bmi_card(bmi: &BmiResult) -> Html {
    html! {
        <div class="metric-card-info">
            <h4>{"BODY MASS INDEX (BMI)"}</h4>
            <h2>{ format!("{:.1}", bmi.value) }</h2>
            <span class={classes!("badge", format!("badge-{}", bmi.display_class))}>
                { bmi.category.to_string() }
            </span>
        </div>
    }
}

fn render_duration_card(input: &UserInput) -> Html {
    html! {
        <div class="metric-card-info">
            <h4>{"WORKOUT DURATION"}</h4>
            <h2>{ format!("{} ", input.duration_min) }<span class="unit-small">{"min"}</span></h2>
            <p class="muted">{ input.activity.to_string() }</p>
        </div>
    }
}

fn render_bmi_explainer(bmi: &BmiResult) -> Html {
    let position = bmi_scale_position(bmi.value) * 100.0;

    html! {
        <div class="bmi-info">
            <h3>{"📌 What is BMI?"}</h3>
            <div class="info-message">
                <p>
                    <b>{"Body Mass Index (BMI)"}</b>
                    {" estimates body fat from height and weight. Your current BMI is "}
                    <b>{ format!("{:.1}", bmi.value) }</b>
                    { format!(" ({}).", bmi.category) }
                </p>
            </div>
            <p>{"Where your BMI sits on the general scale:"}</p>
            <div class="meter">
                <div class="meter-fill" style={format!("width: {:.1}%", position)}></div>
            </div>
            <p class="caption">{"Scale: left (very thin) --- right (obese)"}</p>
        </div>
    }
}

fn render_health_tip(bmi: &BmiResult) -> Html {
    let tip = health_tip(bmi.category);
    let tone = match tip.tone {
        TipTone::Success => "tip-success",
        TipTone::Warning => "tip-warning",
    };

    html! {
        <div class="health-tip">
            <h3>{"💡 Health tip"}</h3>
            <div class={classes!("tip", tone)}>
                <p>{ tip.text }</p>
            </div>
        </div>
    }
}
