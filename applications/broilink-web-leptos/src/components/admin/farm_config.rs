use leptos::*;
use leptos_router::use_query_map;

use super::csv_upload::CsvUpload;
use crate::components::common::{alert, ConfirmModal, ErrorBanner, SuccessModal};
use crate::forms::ConfigDraft;
use crate::models::{ConfigField, ConfigSection, Farm, FarmConfig, FarmWorker, CONFIG_SECTIONS};
use crate::state::{spawn_tracked_fetch, use_api_client, FetchState, RequestSequence};

/// Threshold editor for one farm, with its workers and IoT import
#[component]
pub fn FarmConfigPage() -> impl IntoView {
    let client = use_api_client();
    let session = client.session().clone();
    let query = use_query_map();

    let farms = create_rw_signal(FetchState::with_placeholder(Farm::mock_list()));
    let config = create_rw_signal(FetchState::with_placeholder(FarmConfig::default()));
    let workers = create_rw_signal(FetchState::with_placeholder(Vec::<FarmWorker>::new()));
    let draft = create_rw_signal(ConfigDraft::from_config(&FarmConfig::default()));

    let selected = create_rw_signal(
        query.with_untracked(|q| q.get("farm").and_then(|id| id.parse::<i64>().ok())),
    );
    let reload = create_rw_signal(0u32);
    let has_default = create_rw_signal(session.has_default_config());
    let form_error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);
    let confirm_reset = create_rw_signal(false);

    let farm_sequence = RequestSequence::new();
    let config_sequence = RequestSequence::new();
    let worker_sequence = RequestSequence::new();

    let fetch_client = client.clone();
    spawn_tracked_fetch(
        "admin farms",
        farms,
        &farm_sequence,
        async move { fetch_client.get_farms().await },
        |previous, fresh| {
            if fresh.is_empty() {
                previous.cloned().unwrap_or_else(Farm::mock_list)
            } else {
                fresh
            }
        },
    );

    // Pick the first farm once the list has settled
    create_effect(move |_| {
        if selected.get_untracked().is_some() {
            return;
        }
        let first = farms.with(|s| {
            if s.is_loading() {
                None
            } else {
                s.current().and_then(|list| list.first()).and_then(Farm::key)
            }
        });
        if first.is_some() {
            selected.set(first);
        }
    });

    let config_client = client.clone();
    create_effect(move |previous_farm: Option<Option<i64>>| {
        reload.track();
        let farm = selected.get();
        let Some(farm_id) = farm else {
            return farm;
        };
        let base = config.with_untracked(|s| {
            config_base(previous_farm.flatten(), farm_id, s.current())
        });
        if previous_farm.flatten() != Some(farm_id) {
            config.set(FetchState::with_placeholder(base.clone()));
            draft.set(ConfigDraft::from_config(&base));
        }
        let client = config_client.clone();
        spawn_tracked_fetch(
            "farm config",
            config,
            &config_sequence,
            async move { client.get_farm_config(farm_id, &base).await },
            |_, fresh| fresh,
        );
        farm
    });

    create_effect(move |_| {
        if let FetchState::Ready(loaded) = config.get() {
            draft.set(ConfigDraft::from_config(&loaded));
        }
    });

    let worker_client = client.clone();
    create_effect(move |_| {
        let Some(farm_id) = selected.get() else {
            return;
        };
        let owner_id = farms.with(|s| {
            s.current()
                .and_then(|list| list.iter().find(|f| f.key() == Some(farm_id)))
                .and_then(|f| f.owner_id)
        });
        let Some(owner_id) = owner_id else {
            workers.set(FetchState::Ready(Vec::new()));
            return;
        };
        let client = worker_client.clone();
        spawn_tracked_fetch(
            "farm workers",
            workers,
            &worker_sequence,
            async move { client.get_farm_workers(owner_id).await },
            |_, fresh| fresh,
        );
    });

    let save_client = client.clone();
    let save = create_action(move |(farm_id, updated): &(i64, FarmConfig)| {
        let client = save_client.clone();
        let farm_id = *farm_id;
        let updated = updated.clone();
        async move { client.update_farm_config(farm_id, &updated).await }
    });

    create_effect(move |_| {
        if let Some(result) = save.value().get() {
            match result {
                Ok(_) => {
                    success.set(Some("Konfigurasi berhasil disimpan!".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => alert(&format!("Gagal menyimpan konfigurasi: {}", e.user_message())),
            }
        }
    });

    let reset_client = client.clone();
    let reset = create_action(move |farm_id: &i64| {
        let client = reset_client.clone();
        let farm_id = *farm_id;
        async move { client.reset_farm_config(farm_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = reset.value().get() {
            match result {
                Ok(_) => {
                    success.set(Some("Konfigurasi berhasil direset ke default!".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => alert(&format!("Gagal reset konfigurasi: {}", e.user_message())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(farm_id) = selected.get_untracked() else {
            form_error.set(Some("Pilih kandang terlebih dahulu".to_string()));
            return;
        };
        let base = config.with_untracked(|s| s.current().cloned().unwrap_or_default());
        match draft.with_untracked(|d| d.to_config(&base)) {
            Ok(updated) => {
                form_error.set(None);
                if session.remember_default_config_once(&updated) {
                    log::info!("Stored first saved configuration as default");
                }
                has_default.set(true);
                save.dispatch((farm_id, updated));
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let on_confirm_reset = Callback::new(move |_| {
        confirm_reset.set(false);
        if let Some(farm_id) = selected.get_untracked() {
            reset.dispatch(farm_id);
        }
    });

    let banner = Signal::derive(move || {
        farms
            .with(|s| s.error().map(str::to_string))
            .or_else(|| config.with(|s| s.error().map(str::to_string)))
    });
    let dismiss = Callback::new(move |_| {
        farms.update(FetchState::dismiss);
        config.update(FetchState::dismiss);
    });

    view! {
        <div class="farm-config">
            <ErrorBanner message=banner on_dismiss=dismiss />

            <div class="page-header">
                <h2>"Konfigurasi Kandang"</h2>
                <label class="filter">
                    <span class="filter-label">"Pilih Kandang:"</span>
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                                selected.set(Some(id));
                            }
                        }
                    >
                        {move || {
                            farms
                                .with(|s| s.current().cloned().unwrap_or_default())
                                .into_iter()
                                .filter_map(|farm| {
                                    let id = farm.key()?;
                                    Some(view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || selected.get() == Some(id)
                                        >
                                            {farm.display_name()}
                                        </option>
                                    })
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
            </div>

            {move || config.with(FetchState::is_loading).then(|| {
                view! { <div class="loading">"Memuat konfigurasi..."</div> }
            })}

            <form class="config-form" on:submit=on_submit>
                <div class="config-grid">
                    {CONFIG_SECTIONS
                        .iter()
                        .map(|section| view! { <SectionCard section=*section draft=draft /> })
                        .collect_view()}
                    <WorkerList workers=Signal::derive(move || {
                        workers.with(|s| s.current().cloned().unwrap_or_default())
                    }) />
                </div>

                {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <div class="form-actions">
                    <button
                        type="button"
                        class="button"
                        disabled=move || !has_default.get()
                        on:click=move |_| confirm_reset.set(true)
                    >
                        "Reset ke Default"
                    </button>
                    <button type="submit" class="button primary" disabled=move || save.pending().get()>
                        {move || if save.pending().get() { "Menyimpan..." } else { "Simpan ke Konfigurasi" }}
                    </button>
                </div>
            </form>

            <CsvUpload farm_id=selected />

            <ConfirmModal
                open=confirm_reset
                message="Apakah Anda yakin ingin mereset konfigurasi ke default?"
                on_confirm=on_confirm_reset
                on_cancel=Callback::new(move |_| confirm_reset.set(false))
            />
            <SuccessModal
                open=Signal::derive(move || success.with(Option::is_some))
                message=Signal::derive(move || success.get().unwrap_or_default())
                on_close=Callback::new(move |_| success.set(None))
            />
        </div>
    }
}

#[component]
fn SectionCard(section: ConfigSection, draft: RwSignal<ConfigDraft>) -> impl IntoView {
    view! {
        <div class="card config-section">
            <h3>{section.title}</h3>
            <div class="config-fields">
                {section
                    .fields
                    .iter()
                    .map(|&field| view! { <ConfigInput field=field draft=draft /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ConfigInput(field: ConfigField, draft: RwSignal<ConfigDraft>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{field.label()}</span>
            <div class="input-with-unit">
                <input
                    type="number"
                    step="0.01"
                    name=field.key()
                    required=true
                    prop:value=move || draft.with(|d| d.text(field))
                    on:input=move |ev| draft.update(|d| d.set_text(field, event_target_value(&ev)))
                />
                <span class="unit">{field.unit()}</span>
            </div>
        </label>
    }
}

#[component]
fn WorkerList(workers: Signal<Vec<FarmWorker>>) -> impl IntoView {
    view! {
        <div class="card worker-list">
            <h3>"Peternak Penanggung Jawab"</h3>
            {move || {
                let list = workers.get();
                if list.is_empty() {
                    view! { <p class="empty">"Belum ada peternak yang ditugaskan"</p> }.into_view()
                } else {
                    list.into_iter()
                        .map(|worker| {
                            view! {
                                <div class="worker">
                                    <span class="avatar">{worker.initial()}</span>
                                    <div class="worker-info">
                                        <p class="worker-name">{worker.name.clone()}</p>
                                        <p class="worker-email">{worker.email.clone().unwrap_or_default()}</p>
                                    </div>
                                    <span class="status-badge normal">"Aktif"</span>
                                </div>
                            }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// Values a config fetch is overlaid on: the loaded ones when reloading the
/// same farm, defaults after switching farms.
fn config_base(previous_farm: Option<i64>, farm_id: i64, loaded: Option<&FarmConfig>) -> FarmConfig {
    match loaded {
        Some(loaded) if previous_farm == Some(farm_id) => loaded.clone(),
        _ => FarmConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_farms_starts_from_defaults() {
        let loaded = FarmConfig {
            amonia_max: 25.0,
            ..FarmConfig::default()
        };

        assert_eq!(config_base(Some(1), 2, Some(&loaded)), FarmConfig::default());
        assert_eq!(config_base(None, 1, Some(&loaded)), FarmConfig::default());
        assert_eq!(config_base(Some(1), 1, Some(&loaded)), loaded);
        assert_eq!(config_base(Some(1), 1, None), FarmConfig::default());
    }
}
