pub mod dismissal;
pub mod home_search;
pub mod nav_search;

use leptos::prelude::*;

use crate::api::InFlight;

/// Registers the request for a new keystroke and, when `abort` is set,
/// cancels the one it replaces.
pub(crate) fn supersede(
    slot: StoredValue<Option<InFlight>, LocalStorage>,
    abort: bool,
) -> Option<InFlight> {
    let request = InFlight::new();
    slot.update_value(|current| {
        if let Some(previous) = std::mem::replace(current, request.clone()) {
            if abort {
                previous.abort();
            }
        }
    });
    request
}
