use anomaly_archive_shared::{ObserverOptions, Result, VisibilityChange};
use futures::{
    channel::mpsc::{self, UnboundedReceiver},
    StreamExt,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

/// An `IntersectionObserver` exposed as an unbounded sequence of
/// [`VisibilityChange`]s.
///
/// Targets are identified by their index in the slice passed to
/// [`VisibilityStream::observe`]. Dropping the stream disconnects the observer.
pub struct VisibilityStream {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    receiver: UnboundedReceiver<VisibilityChange>,
}

impl VisibilityStream {
    pub fn observe(targets: &[HtmlElement], options: ObserverOptions) -> Result<Self> {
        let (sender, receiver) = mpsc::unbounded();
        let observed: Vec<Element> = targets
            .iter()
            .map(|target| {
                let element: &Element = target;
                element.clone()
            })
            .collect();

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if let Some(index) = observed.iter().position(|el| *el == target) {
                    // The receiver only goes away together with the observer.
                    let _ = sender.unbounded_send(VisibilityChange {
                        target: index,
                        intersecting: entry.is_intersecting(),
                    });
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(dom::js_err("new IntersectionObserver"))?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
            receiver,
        })
    }

    /// Wait for the next notification.
    pub async fn next(&mut self) -> Option<VisibilityChange> {
        self.receiver.next().await
    }
}

impl Drop for VisibilityStream {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
