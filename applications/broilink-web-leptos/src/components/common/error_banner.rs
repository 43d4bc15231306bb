use leptos::*;

/// Non-blocking banner shown while a page falls back to placeholder data
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <div class="error-banner-body">
                        <strong>"Gagal Memuat Data dari Backend"</strong>
                        <p>{text}</p>
                        <p class="error-banner-hint">
                            "Menampilkan data mock sebagai fallback. Periksa console untuk detail error."
                        </p>
                    </div>
                    <button
                        class="error-banner-close"
                        aria-label="Tutup"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
