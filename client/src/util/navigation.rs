//! Deferred navigation for handlers that run outside the component body.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth_form::Navigation;

/// Returns a signal handlers write a `Navigation` into; an effect owned by the
/// current component performs it and clears the slot.
pub fn pending_navigation<F>(navigate: F) -> RwSignal<Option<Navigation>>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let pending = RwSignal::new(None::<Navigation>);
    Effect::new(move || {
        if let Some(nav) = pending.get() {
            pending.set(None);
            navigate(nav.path, nav.options());
        }
    });
    pending
}
