use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Service for surfacing dismissable notifications.
///
/// Provided once via context; any component can push a success or error
/// message. Toasts auto-dismiss after a few seconds or on click.
///
/// ```ignore
/// let toast = use_context::<ToastService>().unwrap();
/// toast.success("Document generated successfully");
/// ```
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active toasts in a fixed stack, top right.
/// Place once in the layout.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div style="position: fixed; top: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px;">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let background = match toast.kind {
                            ToastKind::Success => "#2e7d32",
                            ToastKind::Error => "#c62828",
                        };
                        view! {
                            <div
                                style=format!(
                                    "background: {}; color: white; padding: 10px 16px; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); cursor: pointer; max-width: 360px; font-size: 14px;",
                                    background
                                )
                                on:click=move |_| service.dismiss(id)
                            >
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
