use dioxus::prelude::*;
use tallybook_core::filter::{from_key, max_key, min_key, to_key};
use tallybook_core::{AdvancedFilter, DatePreset, EntityKind, FilterField, FilterKind, FilterValues, RangeBound};

use crate::app::today;
use crate::theme::{AppColors, GHOST_BUTTON, INPUT_STYLE};

const PRESETS: [DatePreset; 5] = [
    DatePreset::Today,
    DatePreset::Yesterday,
    DatePreset::Last7Days,
    DatePreset::ThisMonth,
    DatePreset::LastMonth,
];

/// Primary filters inline, the rest behind "More filters". Reports the full value map on every change.
#[component]
pub fn FilterBar(is_dark: bool, kind: EntityKind, on_change: EventHandler<FilterValues>) -> Element {
    let filter = use_signal(move || {
        AdvancedFilter::new(kind.filter_fields()).on_change(move |values| on_change.call(values.clone()))
    });
    let mut expanded = use_signal(|| false);
    let mut filter_for_clear = filter;

    let (primary, secondary): (Vec<FilterField>, Vec<FilterField>) =
        filter.read().fields().iter().cloned().partition(|f| f.primary);
    let active = filter.read().active_filter_count();
    let primary_color = AppColors::primary(is_dark);

    rsx! {
        div { style: "margin-bottom: 16px;",
            div { style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;",
                for field in primary {
                    FilterControl { key: "{field.id}", field: field.clone(), filter }
                }
                if !secondary.is_empty() {
                    button {
                        style: GHOST_BUTTON,
                        onclick: move |_| expanded.toggle(),
                        if expanded() { "Fewer filters" } else { "More filters" }
                    }
                }
                if active > 0 {
                    button {
                        style: "background: none; border: none; color: {primary_color}; cursor: pointer;",
                        onclick: move |_| filter_for_clear.write().clear_all(),
                        "Clear All ({active})"
                    }
                }
            }
            if expanded() {
                div { style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 12px;",
                    for field in secondary {
                        FilterControl { key: "{field.id}", field: field.clone(), filter }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterControl(field: FilterField, filter: Signal<AdvancedFilter>) -> Element {
    let mut filter = filter;
    let id = field.id;
    let label_style = "display: block; font-size: 0.75rem; opacity: 0.75; margin-bottom: 4px;";

    let control = match field.kind {
        FilterKind::Select(options) => {
            let current = filter.read().text(id).to_string();
            rsx! {
                select {
                    style: INPUT_STYLE,
                    onchange: move |ev| filter.write().set_select(id, Some(&ev.value())),
                    option { value: "", selected: current.is_empty(), "All" }
                    for opt in options {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: opt.value == current,
                            "{opt.label}"
                        }
                    }
                }
            }
        }
        FilterKind::MultiSelect(options) => rsx! {
            div { style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for opt in options {
                    {
                        let checked = filter.read().is_selected(id, &opt.value);
                        let value = opt.value.clone();
                        rsx! {
                            label { key: "{opt.value}", style: "font-size: 0.85rem; display: flex; gap: 4px; align-items: center;",
                                input {
                                    r#type: "checkbox",
                                    checked,
                                    onchange: move |_| filter.write().toggle_option(id, &value),
                                }
                                "{opt.label}"
                            }
                        }
                    }
                }
            }
        },
        FilterKind::DateRange => {
            let from = filter.read().text(&from_key(id)).to_string();
            let to = filter.read().text(&to_key(id)).to_string();
            rsx! {
                div { style: "display: flex; gap: 6px;",
                    select {
                        style: INPUT_STYLE,
                        onchange: move |ev| {
                            let index = ev.value().parse::<usize>().ok();
                            if let Some(preset) = index.and_then(|i| PRESETS.get(i)) {
                                filter.write().apply_date_preset(id, preset, today());
                            }
                        },
                        option { value: "", "Custom range" }
                        for (i, preset) in PRESETS.iter().enumerate() {
                            option { key: "{i}", value: "{i}", "{preset.label()}" }
                        }
                    }
                    input {
                        r#type: "date",
                        style: INPUT_STYLE,
                        value: "{from}",
                        oninput: move |ev| filter.write().set_date_bound(id, RangeBound::Min, &ev.value()),
                    }
                    input {
                        r#type: "date",
                        style: INPUT_STYLE,
                        value: "{to}",
                        oninput: move |ev| filter.write().set_date_bound(id, RangeBound::Max, &ev.value()),
                    }
                }
            }
        }
        FilterKind::NumberRange => {
            let min = filter.read().text(&min_key(id)).to_string();
            let max = filter.read().text(&max_key(id)).to_string();
            rsx! {
                div { style: "display: flex; gap: 6px;",
                    input {
                        r#type: "number",
                        placeholder: "Min",
                        style: INPUT_STYLE,
                        value: "{min}",
                        oninput: move |ev| filter.write().set_number_bound(id, RangeBound::Min, &ev.value()),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max",
                        style: INPUT_STYLE,
                        value: "{max}",
                        oninput: move |ev| filter.write().set_number_bound(id, RangeBound::Max, &ev.value()),
                    }
                }
            }
        }
    };

    rsx! {
        div { style: "min-width: 180px;",
            span { style: label_style, "{field.label}" }
            {control}
        }
    }
}
