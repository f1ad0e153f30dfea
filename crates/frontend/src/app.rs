use crate::document::form::DocumentForm;
use crate::document::history::DocumentHistory;
use crate::layout::{Page, Shell};
use crate::pages::home::HomePage;
use crate::shared::api::DocumentApi;
use crate::shared::config::ApiConfig;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // Context shared by the whole app: one transport client, one toast stack
    provide_context(ToastService::new());
    provide_context(DocumentApi::new(&config));

    let (page, set_page) = signal(Page::Home);
    let on_navigate = Callback::new(move |target: Page| set_page.set(target));

    view! {
        <Shell active=page on_navigate=on_navigate>
            {move || match page.get() {
                Page::Home => view! { <HomePage on_navigate=on_navigate /> }.into_any(),
                Page::Generate => view! {
                    // After a successful submit the user lands on the history
                    <DocumentForm on_created=Callback::new(move |_| set_page.set(Page::History)) />
                }.into_any(),
                Page::History => view! { <DocumentHistory /> }.into_any(),
            }}
        </Shell>
    }
}

/// Fatal startup screen shown instead of the app when configuration is
/// missing. Nothing else renders in that case.
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f3f4f6; font-family: system-ui, sans-serif;">
            <div style="background: #fff; border-left: 4px solid #c62828; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 24px; max-width: 480px;">
                <h1 style="margin: 0 0 8px; font-size: 1.25rem; color: #c62828;">"Configuration error"</h1>
                <p style="margin: 0; color: #444; font-size: 14px;">{message}</p>
            </div>
        </div>
    }
}
