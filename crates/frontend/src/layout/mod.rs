use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Top-level views the shell can show.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Generate,
    History,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Generate, Page::History];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Generate => "Generate",
            Page::History => "History",
        }
    }
}

/// Application shell: top navigation bar, content area, toast stack.
#[component]
pub fn Shell(
    #[prop(into)] active: Signal<Page>,
    on_navigate: Callback<Page>,
    children: Children,
) -> impl IntoView {
    view! {
        <div style="min-height: 100vh; background: #f3f4f6; font-family: system-ui, sans-serif;">
            <header style="background: #1f2937; color: white; padding: 0 24px; display: flex; align-items: center; gap: 24px; height: 56px;">
                <span style="font-weight: 600; font-size: 16px;">"Document Generator"</span>
                <nav style="display: flex; gap: 4px;">
                    {Page::ALL.iter().map(|&page| {
                        let is_active = move || active.get() == page;
                        view! {
                            <button
                                style=move || format!(
                                    "background: {}; color: white; border: none; padding: 8px 14px; border-radius: 4px; cursor: pointer; font-size: 14px;",
                                    if is_active() { "#4f46e5" } else { "transparent" }
                                )
                                on:click=move |_| on_navigate.run(page)
                            >
                                {page.title()}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </header>

            <main style="max-width: 960px; margin: 0 auto; padding: 24px;">
                {children()}
            </main>

            <ToastHost />
        </div>
    }
}
