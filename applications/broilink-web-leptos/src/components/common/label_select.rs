use leptos::*;

use crate::chart::Choice;

/// Label of the option that turns a secondary series off
pub const NONE_LABEL: &str = "Tidak Ada";

/// Select box over a closed set of choices
#[component]
pub fn LabelSelect<C>(label: &'static str, value: RwSignal<C>) -> impl IntoView
where
    C: Choice,
{
    let on_change = move |ev| {
        if let Some(choice) = C::from_label(&event_target_value(&ev)) {
            value.set(choice);
        }
    };

    view! {
        <label class="filter">
            <span class="filter-label">{label}</span>
            <select class="filter-select" on:change=on_change>
                {C::all()
                    .iter()
                    .map(|&choice| {
                        view! {
                            <option
                                value=choice.label()
                                selected=move || value.get() == choice
                            >
                                {choice.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Select box whose last option is [`NONE_LABEL`]
#[component]
pub fn OptionalSelect<C>(label: &'static str, value: RwSignal<Option<C>>) -> impl IntoView
where
    C: Choice,
{
    let on_change = move |ev| value.set(C::from_label(&event_target_value(&ev)));

    view! {
        <label class="filter">
            <span class="filter-label">{label}</span>
            <select class="filter-select" on:change=on_change>
                {C::all()
                    .iter()
                    .map(|&choice| {
                        view! {
                            <option
                                value=choice.label()
                                selected=move || value.get() == Some(choice)
                            >
                                {choice.label()}
                            </option>
                        }
                    })
                    .collect_view()}
                <option value=NONE_LABEL selected=move || value.get().is_none()>
                    {NONE_LABEL}
                </option>
            </select>
        </label>
    }
}
