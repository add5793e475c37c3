use leptos::{ev, prelude::*, task::spawn_local};
use lookup_api_types::SearchResultItem;

use super::{dismissal::DismissalSlot, supersede};
use crate::{
    api::{self, InFlight},
    config::SearchConfig,
    render::safe_href,
    widget::{Dismissal, NavWidget},
};

type ListenerSlot = StoredValue<DismissalSlot<WindowListenerHandle>, LocalStorage>;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn root_lang() -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute("lang")
}

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
fn root_lang() -> Option<String> {
    None
}

fn apply_dismissal(widget: RwSignal<NavWidget>, listener: ListenerSlot, dismissal: Dismissal) {
    listener.update_value(|slot| {
        slot.apply(dismissal, || {
            window_event_listener(ev::click, move |_| {
                let dismissal = widget.try_maybe_update(|widget| {
                    let dismissal = widget.dismiss();
                    (dismissal != Dismissal::Unchanged, dismissal)
                });
                if let Some(dismissal) = dismissal {
                    apply_dismissal(widget, listener, dismissal);
                }
            })
        })
    });
}

#[component]
fn NavSearchResult(item: SearchResultItem) -> impl IntoView {
    view! { <a href=safe_href(&item.url)>{item.title}</a> }
}

#[component]
pub fn NavSearch(#[prop(optional)] config: SearchConfig) -> impl IntoView {
    let widget = RwSignal::new(NavWidget::new(&config));
    let in_flight = StoredValue::new_local(None::<InFlight>);
    let listener: ListenerSlot = StoredValue::new_local(DismissalSlot::default());
    let config = StoredValue::new(config);

    let on_keyup = move |ev: ev::KeyboardEvent| {
        let value = event_target_value(&ev);
        let lang = root_lang();
        let Some(dispatch) =
            widget.try_update_untracked(|widget| widget.keystroke(&value, lang))
        else {
            return;
        };
        let request = supersede(in_flight, config.with_value(|c| c.abort_superseded));
        let config = config.get_value();
        spawn_local(async move {
            let result = api::search(&config, &dispatch.query, request.as_ref()).await;
            let dismissal = widget
                .try_maybe_update(|widget| {
                    let dismissal = widget.receive(dispatch.ticket, result);
                    (dismissal.is_some(), dismissal)
                })
                .flatten();
            if let Some(dismissal) = dismissal {
                apply_dismissal(widget, listener, dismissal);
            }
        });
    };

    on_cleanup(move || {
        listener.try_update_value(DismissalSlot::clear);
    });

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
            id="frame-nav-search-input"
            type="search"
            autocomplete="off"
            on:keyup=on_keyup
        />
        <div
            id="frame-nav-search-result"
            class:show=move || widget.with(NavWidget::is_open)
        >
            <For
                each=results
                key=|entry| entry.clone()
                children=move |(_, item)| view! { <NavSearchResult item /> }
            />
        </div>
    }
}
