pub mod state;

use crate::shared::api::DocumentApi;
use crate::shared::components::{DateInput, PaginationControls};
use crate::shared::toast::ToastService;
use contracts::dates::to_display_format;
use contracts::filters::{SortBy, SortOrder};
use leptos::prelude::*;
use state::HistoryState;

fn sort_indicator(
    current: Option<SortBy>,
    order: Option<SortOrder>,
    column: SortBy,
) -> &'static str {
    if current != Some(column) {
        return "↕";
    }
    match order {
        Some(SortOrder::Asc) => "↑",
        _ => "↓",
    }
}

/// Paginated, filterable, sortable history of generated documents.
///
/// Every filter mutation enqueues exactly one fetch; responses go through
/// the sequence guard in [`HistoryState`], so out-of-order resolutions
/// cannot clobber fresher results.
#[component]
pub fn DocumentHistory() -> impl IntoView {
    let api = StoredValue::new(
        use_context::<DocumentApi>().expect("DocumentApi not provided in context"),
    );
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let state = RwSignal::new(HistoryState::default());
    let (saving_id, set_saving_id) = signal(Option::<i64>::None);

    let load = move || {
        let seq = state.try_update(|s| s.begin_fetch()).unwrap_or_default();
        let filters = state.with_untracked(|s| s.filters.clone());
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let outcome = api.list(&filters).await;
            let applied = state
                .try_update(|s| s.apply_outcome(seq, outcome))
                .unwrap_or(false);
            if !applied {
                // Stale responses are dropped silently, never surfaced
                log::debug!("discarded stale documents response (seq {seq})");
            } else if let Some(message) = state.with_untracked(|s| s.error.clone()) {
                // An applied failure gets a notification on top of the banner;
                // after apply_outcome the error field is set iff this fetch failed
                toast.error(message);
            }
        });
    };

    // Initial fetch on mount
    leptos::task::spawn_local(async move {
        load();
    });

    let handle_name_change = move |value: String| {
        state.update(|s| s.set_name_filter(value));
        load();
    };

    let handle_date_change = move |value: String| {
        // Partial picker input is ignored; only empty or full dates re-query
        let accepted = state
            .try_update(|s| s.set_date_filter(value))
            .unwrap_or(false);
        if accepted {
            load();
        }
    };

    let handle_sort = move |column: SortBy| {
        state.update(|s| s.toggle_sort(column));
        load();
    };

    let handle_page_change = Callback::new(move |page: u32| {
        state.update(|s| s.set_page(page));
        load();
    });

    let handle_page_size_change = Callback::new(move |limit: u32| {
        state.update(|s| s.set_limit(limit));
        load();
    });

    let save_to_drive = move |id: i64| {
        if saving_id.get_untracked().is_some() {
            return;
        }
        set_saving_id.set(Some(id));
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match api.save_to_drive(id).await {
                Ok(document) => {
                    toast.success("Document saved to Google Drive");
                    state.update(|s| s.update_document(document));
                }
                Err(e) => toast.error(e.message),
            }
            set_saving_id.set(None);
        });
    };

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

    view! {
        <div style="background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 24px;">
            <div style="margin-bottom: 20px;">
                <h2 style="margin: 0; font-size: 1.5rem; color: #111;">"Document History"</h2>
                <p style="margin: 4px 0 0; color: #666; font-size: 14px;">
                    "View and manage your generated documents."
                </p>
            </div>

            // Filters
            <div style="display: flex; gap: 16px; margin-bottom: 16px; flex-wrap: wrap; align-items: flex-end;">
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style="font-size: 13px; color: #444;">"Search by name"</label>
                    <input
                        type="text"
                        placeholder="Search documents..."
                        style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 14px; width: 240px;"
                        prop:value=move || state.with(|s| s.filters.name.clone())
                        on:input=move |ev| handle_name_change(event_target_value(&ev))
                    />
                </div>
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style="font-size: 13px; color: #444;">"Filter by date"</label>
                    <DateInput
                        value=Signal::derive(move || state.with(|s| s.filters.date.clone()))
                        on_change=handle_date_change
                        max=today
                    />
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div style="background: #fee; color: #c33; padding: 8px 12px; border-radius: 4px; margin-bottom: 12px; font-size: 14px;">{e}</div>
            })}

            {move || {
                let s = state.get();
                if s.loading {
                    view! {
                        <div style="text-align: center; padding: 24px; color: #666;">"Loading..."</div>
                    }.into_any()
                } else if s.is_empty() {
                    view! {
                        <div style="text-align: center; padding: 24px; color: #888;">"No documents found"</div>
                    }.into_any()
                } else {
                    let shown = s.items.len();
                    let total = s.total;
                    view! {
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                                <thead style="background: #f9fafb;">
                                    <tr style="border-bottom: 2px solid #e5e7eb;">
                                        <th
                                            style="padding: 10px 12px; text-align: left; cursor: pointer; user-select: none; color: #555;"
                                            on:click=move |_| handle_sort(SortBy::Name)
                                        >
                                            {"Name "}
                                            {move || state.with(|s| sort_indicator(s.filters.sort_by, s.filters.sort_order, SortBy::Name))}
                                        </th>
                                        <th
                                            style="padding: 10px 12px; text-align: left; cursor: pointer; user-select: none; color: #555;"
                                            on:click=move |_| handle_sort(SortBy::Date)
                                        >
                                            {"Date "}
                                            {move || state.with(|s| sort_indicator(s.filters.sort_by, s.filters.sort_order, SortBy::Date))}
                                        </th>
                                        <th style="padding: 10px 12px; text-align: right; color: #555;">"Amount"</th>
                                        <th style="padding: 10px 12px; text-align: left; color: #555;">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {s.items.into_iter().enumerate().map(|(idx, doc)| {
                                        let bg = if idx % 2 == 0 { "#fff" } else { "#f9fafb" };
                                        let doc_id = doc.id;
                                        let is_saving = move || saving_id.get() == Some(doc_id);
                                        let actions = if let Some(url) = doc.doc_url.clone() {
                                            view! {
                                                <a
                                                    href=url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    style="color: #4f46e5;"
                                                >
                                                    "View document"
                                                </a>
                                            }.into_any()
                                        } else {
                                            view! {
                                                <button
                                                    class="button button--secondary"
                                                    style="font-size: 13px;"
                                                    disabled=is_saving
                                                    on:click=move |_| save_to_drive(doc_id)
                                                >
                                                    {move || if is_saving() { "Saving..." } else { "Save to Drive" }}
                                                </button>
                                            }.into_any()
                                        };
                                        view! {
                                            <tr style=format!("background: {}; border-bottom: 1px solid #eee;", bg)>
                                                <td style="padding: 10px 12px;">{doc.name.clone()}</td>
                                                <td style="padding: 10px 12px;">{to_display_format(&doc.date)}</td>
                                                <td style="padding: 10px 12px; text-align: right;">{format!("${:.2}", doc.amount)}</td>
                                                <td style="padding: 10px 12px;">{actions}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                            <p style="margin-top: 12px; color: #666; font-size: 14px;">
                                {format!("Showing {} of {} documents", shown, total)}
                            </p>
                        </div>
                    }.into_any()
                }
            }}

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.pages))
                total_count=Signal::derive(move || state.with(|s| s.total))
                page_size=Signal::derive(move || state.with(|s| s.filters.limit))
                on_page_change=handle_page_change
                on_page_size_change=handle_page_size_change
            />
        </div>
    }
}
