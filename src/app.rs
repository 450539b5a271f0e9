use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{Header, LogViewer};
use crate::state::{FetchAction, FetchState, RenderMode};

/// Poll cadence. Fixed-interval retry with no backoff: a failed poll simply
/// tries again on the next tick.
const POLL_INTERVAL_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Log collection endpoint served by the Game Agent.
    #[prop_or(AttrValue::Static(api::DEFAULT_LOGS_ENDPOINT))]
    pub endpoint: AttrValue,
}

impl Default for AppProps {
    fn default() -> Self {
        AppProps {
            endpoint: AttrValue::Static(api::DEFAULT_LOGS_ENDPOINT),
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(FetchState::default);

    // Poll immediately on mount, then every 5 seconds. Dropping the Interval
    // on unmount stops future ticks; an in-flight request is left to resolve
    // and its dispatch lands on a dead scope as a no-op.
    {
        let state = state.clone();
        let endpoint = props.endpoint.clone();
        use_effect_with((), move |_| {
            let poll = move || {
                let state = state.clone();
                let endpoint = endpoint.to_string();
                state.dispatch(FetchAction::PollStarted);
                spawn_local(async move {
                    match api::fetch_logs(&endpoint).await {
                        Ok(entries) => state.dispatch(FetchAction::PollSucceeded(entries)),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error fetching logs: {err}").into(),
                            );
                            state.dispatch(FetchAction::PollFailed);
                        }
                    }
                });
            };
            poll();
            let interval = Interval::new(POLL_INTERVAL_MS, poll);
            move || drop(interval)
        });
    }

    let body = match state.render_mode() {
        RenderMode::Loading => html! {
            <p style="color:#555;">{ "Loading logs..." }</p>
        },
        RenderMode::Error => html! {
            <div style="padding:1em; background:#f8d7da; border:1px solid #f5c6cb; border-radius:4px; color:#721c24;">
                { state.error.clone().unwrap_or_default() }
            </div>
        },
        RenderMode::Empty => html! {
            <p style="color:#555;">
                { "No command logs found. Try speaking a command to your Game Agent." }
            </p>
        },
        RenderMode::Table => html! {
            <LogViewer entries={state.entries.clone()} />
        },
    };

    html! {
        <div style="min-height:100vh; background:#f4f6f8; font-family:Arial,sans-serif;">
            <Header />
            <main style="max-width:960px; margin:0 auto; padding:1.5em;">
                <h2 style="color:#333;">{ "Voice Command Logs" }</h2>
                { body }
            </main>
        </div>
    }
}
