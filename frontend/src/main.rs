mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::sidebar::render_sidebar;
use components::utils::{render_error_message, render_setup_error};
use gloo_storage::{SessionStorage, Storage};
use shared::{Activity, PredictResponse, StatusResponse, UserInput, ViewState};
use yew::prelude::*;

const VIEW_STATE_KEY: &str = "fitness_tracker.view_state";
const INPUT_KEY: &str = "fitness_tracker.input";

// Whether the backend has a model to predict with
#[derive(Clone, Debug, PartialEq)]
enum Setup {
    Checking,
    Ready,
    Missing(String),
}

// Yew msg components
enum Msg {
    // Input widgets
    SetWeight(f64),
    SetHeight(f64),
    SetActivity(Activity),
    SetHeartRate(u32),
    SetDuration(u32),
    SetMet(f64),

    // Analysis operations
    Analyze,
    AnalysisDone(UserInput, PredictResponse),

    // UI states
    StatusLoaded(StatusResponse),
    SetError(Option<String>),
}

// Main component
struct Model {
    input: UserInput,
    view: ViewState,
    setup: Setup,
    loading: bool,
    error: Option<String>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let view = SessionStorage::get::<ViewState>(VIEW_STATE_KEY).unwrap_or_default();
        let input = SessionStorage::get::<UserInput>(INPUT_KEY).unwrap_or_default();

        handlers::send_status_request(ctx);

        Self {
            input,
            view,
            setup: Setup::Checking,
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Input widgets
            Msg::SetWeight(value) => handlers::handle_input(self, |input| input.weight_kg = value),
            Msg::SetHeight(value) => handlers::handle_input(self, |input| input.height_cm = value),
            Msg::SetActivity(value) => handlers::handle_input(self, |input| input.activity = value),
            Msg::SetHeartRate(value) => {
                handlers::handle_input(self, |input| input.heart_rate_bpm = value)
            }
            Msg::SetDuration(value) => {
                handlers::handle_input(self, |input| input.duration_min = value)
            }
            Msg::SetMet(value) => handlers::handle_input(self, |input| input.met = value),

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisDone(input, response) => {
                handlers::handle_analysis_done(self, input, response)
            }

            // UI states
            Msg::StatusLoaded(status) => handlers::handle_status(self, status),
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_sidebar(self, ctx) }

                <main class="main-content">
                    { render_header() }
                    {
                        if let Setup::Missing(message) = &self.setup {
                            render_setup_error(message)
                        } else {
                            html! {
                                <>
                                    { render_error_message(self) }
                                    { render_results(self) }
                                </>
                            }
                        }
                    }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
