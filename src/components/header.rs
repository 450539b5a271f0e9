use yew::prelude::*;

/// Static page header; renders identically in every fetch state.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header style="background:#1f2430; color:#fff; padding:1.2em 0;">
            <div style="max-width:960px; margin:0 auto; padding:0 1.5em;">
                <h1 style="margin:0; font-size:1.6em;">{ "Game Agent Dashboard" }</h1>
                <p style="margin:0.3em 0 0 0; color:#aab2c0;">
                    { "Monitor and manage your voice commands for gaming" }
                </p>
            </div>
        </header>
    }
}
