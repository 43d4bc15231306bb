use leptos::*;

/// Modal shown after a successful save
#[component]
pub fn SuccessModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: MaybeSignal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        open.get().then(|| {
            view! {
                <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <p class="modal-message">{message.get()}</p>
                        <button class="button primary" on:click=move |_| on_close.call(())>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

/// Yes/no confirmation before a destructive action
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    message: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    move || {
        open.get().then(|| {
            view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <p class="modal-message">{message}</p>
                        <div class="modal-actions">
                            <button class="button" on:click=move |_| on_cancel.call(())>
                                "Batal"
                            </button>
                            <button class="button danger" on:click=move |_| on_confirm.call(())>
                                "Ya"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
