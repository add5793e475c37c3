use leptos::{ev, prelude::*, task::spawn_local};
use lookup_api_types::SearchResultItem;

use super::supersede;
use crate::{
    api::{self, InFlight},
    config::SearchConfig,
    render::{icon_class, safe_href},
    widget::HomeWidget,
};

#[component]
fn HomeSearchResult(item: SearchResultItem) -> impl IntoView {
    let SearchResultItem {
        url,
        title,
        key,
        result_type,
    } = item;
    view! {
        <a href=safe_href(&url)>
            <i class=icon_class(&result_type)></i>
            <span class="here-title">{title}</span>
            <span class="here-key">{key}</span>
        </a>
    }
}

#[component]
pub fn HomeSearch(#[prop(optional)] config: SearchConfig) -> impl IntoView {
    let widget = RwSignal::new(HomeWidget::new(&config));
    let in_flight = StoredValue::new_local(None::<InFlight>);
    let config = StoredValue::new(config);

    let on_keyup = move |ev: ev::KeyboardEvent| {
        let value = event_target_value(&ev);
        let Some(dispatch) = widget.try_update_untracked(|widget| widget.keystroke(&value)) else {
            return;
        };
        let request = supersede(in_flight, config.with_value(|c| c.abort_superseded));
        let config = config.get_value();
        spawn_local(async move {
            let result = api::search(&config, &dispatch.query, request.as_ref()).await;
            widget.maybe_update(|widget| widget.receive(dispatch.ticket, result));
        });
    };

    // results can repeat, so the position is part of the key
    let results = move || {
        widget.with(|widget| {
            widget
                .items()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <input
            id="home-search-input"
            type="search"
            autocomplete="off"
            on:keyup=on_keyup
        />
        <div id="home-search-result">
            <For
                each=results
                key=|entry| entry.clone()
                children=move |(_, item)| view! { <HomeSearchResult item /> }
            />
        </div>
    }
}
