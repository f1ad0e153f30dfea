use crate::layout::Page;
use leptos::prelude::*;

/// Landing page linking the two flows.
#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div style="background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 32px; text-align: center;">
            <h1 style="margin: 0 0 8px; font-size: 1.75rem; color: #111;">"Document Generator"</h1>
            <p style="margin: 0 0 24px; color: #666;">
                "Generate receipts, invoices and contracts, and browse everything you have generated before."
            </p>
            <div style="display: flex; gap: 12px; justify-content: center;">
                <button
                    style="padding: 10px 20px; background: #4f46e5; color: white; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;"
                    on:click=move |_| on_navigate.run(Page::Generate)
                >
                    "Generate a document"
                </button>
                <button
                    style="padding: 10px 20px; background: #fff; color: #4f46e5; border: 1px solid #4f46e5; border-radius: 4px; font-size: 14px; cursor: pointer;"
                    on:click=move |_| on_navigate.run(Page::History)
                >
                    "Browse history"
                </button>
            </div>
        </div>
    }
}
