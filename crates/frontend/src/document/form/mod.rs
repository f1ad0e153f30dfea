pub mod view_model;

use crate::shared::api::DocumentApi;
use crate::shared::components::DateInput;
use crate::shared::toast::ToastService;
use contracts::document::{Document, TemplateType};
use leptos::prelude::*;
use view_model::DocumentFormViewModel;

fn field_error(error: Option<String>) -> impl IntoView {
    error.map(|e| view! {
        <span style="color: #c62828; font-size: 12px;">{e}</span>
    })
}

/// Form for requesting a generated document.
#[component]
pub fn DocumentForm(
    /// Called with the created document after a successful submit;
    /// the caller typically navigates to the history view.
    on_created: Callback<Document>,
) -> impl IntoView {
    let api = StoredValue::new(
        use_context::<DocumentApi>().expect("DocumentApi not provided in context"),
    );
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let vm = DocumentFormViewModel::new();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(api.get_value(), toast, on_created);
    };

    view! {
        <div style="background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 24px;">
            <div style="margin-bottom: 20px;">
                <h2 style="margin: 0; font-size: 1.5rem; color: #111;">"Generate New Document"</h2>
                <p style="margin: 4px 0 0; color: #666; font-size: 14px;">
                    "Fill in the details below to generate a new document."
                </p>
            </div>

            <form on:submit=handle_submit style="display: flex; flex-direction: column; gap: 16px; max-width: 640px;">
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label for="name" style="font-size: 13px; color: #444;">"Document Name"</label>
                        <input
                            type="text"
                            id="name"
                            style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 14px;"
                            prop:value=move || vm.state.with(|s| s.draft.name.clone())
                            on:input=move |ev| vm.set_name(event_target_value(&ev))
                        />
                        {move || field_error(vm.state.with(|s| s.errors.name.clone()))}
                    </div>

                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label for="date" style="font-size: 13px; color: #444;">"Date"</label>
                        <DateInput
                            value=Signal::derive(move || vm.state.with(|s| s.draft.date.clone()))
                            on_change=move |value| vm.set_date(value)
                        />
                        {move || field_error(vm.state.with(|s| s.errors.date.clone()))}
                    </div>
                </div>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label for="amount" style="font-size: 13px; color: #444;">"Amount"</label>
                        <div style="display: flex; align-items: center; gap: 6px;">
                            <span style="color: #666;">"$"</span>
                            <input
                                type="number"
                                id="amount"
                                min="0.01"
                                step="0.01"
                                style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 14px; flex: 1;"
                                prop:value=move || {
                                    let amount = vm.state.with(|s| s.draft.amount);
                                    if amount > 0.0 { amount.to_string() } else { String::new() }
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.set_amount(value);
                                }
                            />
                        </div>
                        {move || field_error(vm.state.with(|s| s.errors.amount.clone()))}
                    </div>

                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label for="template_type" style="font-size: 13px; color: #444;">"Template Type"</label>
                        <select
                            id="template_type"
                            style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 14px;"
                            prop:value=move || vm.state.with(|s| s.draft.template_type.as_str().to_string())
                            on:change=move |ev| {
                                vm.set_template(TemplateType::from_str_or_default(&event_target_value(&ev)));
                            }
                        >
                            {TemplateType::ALL.iter().map(|t| {
                                let t = *t;
                                view! {
                                    <option
                                        value=t.as_str()
                                        selected=move || vm.state.with(|s| s.draft.template_type == t)
                                    >
                                        {t.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div style="display: flex; justify-content: flex-end;">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.state.with(|s| s.submitting)
                        style="padding: 8px 16px; background: #4f46e5; color: white; border: none; border-radius: 4px; font-size: 14px; cursor: pointer;"
                    >
                        {move || if vm.state.with(|s| s.submitting) { "Generating..." } else { "Generate Document" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
