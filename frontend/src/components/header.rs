use leptos::*;

use crate::config::API_BASE_URL;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"HVAC NOTES"</a>
            </div>
            <div class="header-right">
                <span class="badge" title="Notes extraction service">
                    {API_BASE_URL}
                </span>
            </div>
        </header>
    }
}
