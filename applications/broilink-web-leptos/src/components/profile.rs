use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::auth::Role;
use crate::components::common::{alert, ErrorBanner, SuccessModal};
use crate::forms::{check_photo_file, validate_otp, validate_phone};
use crate::models::{Profile, ProfileUpdate};
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

async fn fetch_profile(client: &ApiClient, role: Role) -> Result<Profile, ApiError> {
    match role {
        Role::Peternak => client.get_peternak_profile().await,
        _ => client.get_owner_profile().await,
    }
}

async fn save_profile(client: &ApiClient, role: Role, update: &ProfileUpdate) -> Result<Profile, ApiError> {
    match role {
        Role::Peternak => client.update_peternak_profile(update).await,
        _ => client.update_owner_profile(update).await,
    }
}

/// Profile page for owners and farm workers
#[component]
pub fn ProfilePage(role: Role) -> impl IntoView {
    let client = use_api_client();
    let state = create_rw_signal(FetchState::with_placeholder(Profile::default()));
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let saved = create_rw_signal(None::<String>);
    let sequence = RequestSequence::new();

    let fetch_client = client.clone();
    spawn_tracked_fetch(
        "profile",
        state,
        &sequence,
        async move { fetch_profile(&fetch_client, role).await },
        |_, profile| profile,
    );

    create_effect(move |_| {
        if let FetchState::Ready(profile) = state.get() {
            name.set(profile.name.unwrap_or_default());
            email.set(profile.email.unwrap_or_default());
        }
    });

    let save = create_action(move |update: &ProfileUpdate| {
        let client = client.clone();
        let update = update.clone();
        async move { save_profile(&client, role, &update).await }
    });

    create_effect(move |_| {
        if let Some(result) = save.value().get() {
            match result {
                Ok(profile) => {
                    state.update(|s| s.succeed(profile));
                    saved.set(Some("Profil berhasil diperbarui!".to_string()));
                }
                Err(e) => alert(&format!("Gagal memperbarui profil: {}", e.user_message())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let optional = |text: String| {
            let text = text.trim().to_string();
            (!text.is_empty()).then_some(text)
        };
        save.dispatch(ProfileUpdate {
            name: optional(name.get_untracked()),
            email: optional(email.get_untracked()),
        });
    };

    let profile = move || state.with(|s| s.current().cloned().unwrap_or_default());

    view! {
        <div class="profile-page">
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new(move |_| state.update(FetchState::dismiss))
            />

            <div class="page-header">
                <h2>"Profil"</h2>
            </div>

            <div class="profile-grid">
                <div class="card profile-summary">
                    {move || profile().profile_pic.map(|src| view! {
                        <img class="profile-photo" src=src alt="Foto profil" />
                    })}
                    <p class="profile-name">{move || profile().name_or_dash()}</p>
                    <p class="profile-role">{role.as_str()}</p>
                    {(role == Role::Peternak).then(|| view! {
                        <dl class="profile-details">
                            <dt>"Owner"</dt>
                            <dd>{move || profile().owner_or_dash()}</dd>
                            <dt>"Kandang"</dt>
                            <dd>{move || profile().farm_or_dash()}</dd>
                        </dl>
                    })}
                </div>

                <form class="card profile-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Nama"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Nomor Telepon"</span>
                        <input
                            type="text"
                            readonly=true
                            prop:value=move || profile().phone_number.unwrap_or_else(|| "-".to_string())
                        />
                    </label>
                    <button type="submit" class="button primary" disabled=move || save.pending().get()>
                        {move || if save.pending().get() { "Menyimpan..." } else { "Simpan Perubahan" }}
                    </button>
                </form>

                {(role == Role::Peternak).then(|| view! {
                    <PhotoUpload state=state />
                    <PhoneChange state=state />
                })}
            </div>

            <SuccessModal
                open=Signal::derive(move || saved.with(Option::is_some))
                message=Signal::derive(move || saved.get().unwrap_or_default())
                on_close=Callback::new(move |_| saved.set(None))
            />
        </div>
    }
}

#[component]
fn PhotoUpload(state: RwSignal<FetchState<Profile>>) -> impl IntoView {
    let client = use_api_client();

    let upload = create_action(move |photo: &web_sys::File| {
        let client = client.clone();
        let photo = photo.clone();
        async move { client.upload_profile_photo(&photo).await }
    });

    create_effect(move |_| {
        if let Some(result) = upload.value().get() {
            match result {
                Ok(uploaded) => {
                    log::info!("Profile photo updated");
                    if let Some(mut profile) = state.with_untracked(|s| s.current().cloned()) {
                        profile.profile_pic = uploaded.profile_pic.or(profile.profile_pic);
                        state.update(|s| s.succeed(profile));
                    }
                }
                Err(e) => alert(&format!("Gagal mengunggah foto: {}", e.user_message())),
            }
        }
    });

    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(photo) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match check_photo_file(&photo.name()) {
            Ok(()) => upload.dispatch(photo),
            Err(e) => {
                alert(&e.to_string());
                input.set_value("");
            }
        }
    };

    view! {
        <div class="card photo-upload">
            <h3>"Foto Profil"</h3>
            <input type="file" accept=".jpg,.jpeg,.png,image/jpeg,image/png" on:change=on_change />
            {move || upload.pending().get().then(|| view! { <span class="loading">"Mengunggah..."</span> })}
        </div>
    }
}

/// Two-step phone number change: request an OTP, then confirm it
#[component]
fn PhoneChange(state: RwSignal<FetchState<Profile>>) -> impl IntoView {
    let client = use_api_client();
    let phone = create_rw_signal(String::new());
    let otp = create_rw_signal(String::new());
    let pending_phone = create_rw_signal(None::<String>);
    let message = create_rw_signal(None::<String>);

    let send_client = client.clone();
    let send = create_action(move |number: &String| {
        let client = send_client.clone();
        let number = number.clone();
        async move { client.send_otp(&number).await.map(|reply| (number, reply)) }
    });

    let verify = create_action(move |(code, number): &(String, String)| {
        let client = client.clone();
        let code = code.clone();
        let number = number.clone();
        async move { client.verify_otp(&code, &number).await.map(|reply| (number, reply)) }
    });

    create_effect(move |_| {
        if let Some(result) = send.value().get() {
            match result {
                Ok((number, reply)) => {
                    pending_phone.set(Some(number));
                    message.set(Some(
                        reply
                            .message
                            .unwrap_or_else(|| "Kode OTP telah dikirim".to_string()),
                    ));
                }
                Err(e) => message.set(Some(e.user_message())),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = verify.value().get() {
            match result {
                Ok((number, reply)) => {
                    if let Some(mut profile) = state.with_untracked(|s| s.current().cloned()) {
                        profile.phone_number = Some(number);
                        state.update(|s| s.succeed(profile));
                    }
                    pending_phone.set(None);
                    otp.set(String::new());
                    message.set(Some(
                        reply
                            .message
                            .unwrap_or_else(|| "Nomor telepon berhasil diperbarui".to_string()),
                    ));
                }
                Err(e) => message.set(Some(e.user_message())),
            }
        }
    });

    let on_send = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match validate_phone(&phone.get_untracked()) {
            Ok(number) => {
                message.set(None);
                send.dispatch(number);
            }
            Err(e) => message.set(Some(e.to_string())),
        }
    };

    let on_verify = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(number) = pending_phone.get_untracked() else {
            return;
        };
        match validate_otp(&otp.get_untracked()) {
            Ok(code) => {
                message.set(None);
                verify.dispatch((code, number));
            }
            Err(e) => message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="card phone-change">
            <h3>"Ganti Nomor Telepon"</h3>
            {move || match pending_phone.get() {
                None => view! {
                    <form on:submit=on_send>
                        <label class="form-field">
                            <span>"Nomor Baru"</span>
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="button" disabled=move || send.pending().get()>
                            "Kirim OTP"
                        </button>
                    </form>
                }
                .into_view(),
                Some(number) => view! {
                    <form on:submit=on_verify>
                        <p class="hint">{format!("Kode OTP dikirim ke {}", number)}</p>
                        <label class="form-field">
                            <span>"Kode OTP"</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                maxlength="6"
                                prop:value=move || otp.get()
                                on:input=move |ev| otp.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="form-actions">
                            <button type="button" class="button" on:click=move |_| pending_phone.set(None)>
                                "Batal"
                            </button>
                            <button type="submit" class="button primary" disabled=move || verify.pending().get()>
                                "Verifikasi"
                            </button>
                        </div>
                    </form>
                }
                .into_view(),
            }}
            {move || message.get().map(|m| view! { <p class="form-message">{m}</p> })}
        </div>
    }
}
