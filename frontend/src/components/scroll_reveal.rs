use anomaly_archive_shared::{
    visibility::{REVEAL_INITIAL_CLASS, REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS},
    ObserverOptions, Result, RevealState,
};
use web_sys::Document;

use crate::{dom, observer::VisibilityStream};

/// Fade content blocks in as they scroll into view.
pub fn mount(document: &Document) -> Result<bool> {
    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(false);
    }

    for target in &targets {
        let _ = target.class_list().add_1(REVEAL_INITIAL_CLASS);
    }
    let mut changes = VisibilityStream::observe(&targets, ObserverOptions::REVEAL)?;

    wasm_bindgen_futures::spawn_local(async move {
        let mut states = vec![RevealState::default(); targets.len()];
        while let Some(change) = changes.next().await {
            let Some(state) = states.get_mut(change.target) else {
                continue;
            };
            *state = state.on_change(change.intersecting);
            // Re-adding on later intersections is harmless.
            if change.intersecting && *state == RevealState::Visible {
                let _ = targets[change.target].class_list().add_1(REVEAL_VISIBLE_CLASS);
            }
        }
    });
    Ok(true)
}
