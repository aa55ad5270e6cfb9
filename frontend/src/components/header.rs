use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"🧘 Fitness Tracker Dashboard"}</h1>
            <p class="subtitle">{"Calorie burn analysis powered by "}<b>{"Machine Learning"}</b></p>
        </header>
    }
}
