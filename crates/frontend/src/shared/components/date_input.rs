use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string value.
/// The browser displays the date in the user's locale; the value stays ISO.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// Upper bound in yyyy-mm-dd format (optional)
    #[prop(optional, into)]
    max: Option<String>,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <input
            type="date"
            prop:value=value
            max=max.unwrap_or_default()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            style=final_style
        />
    }
}
