use futures::future::LocalBoxFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::rates::{RateFetch, RateSnapshot, RateSourceHandle};

/// Mount-time effect body: starts the fetch through `spawn` and returns the
/// destructor that cancels it.
pub fn start_rate_fetch<A, S>(
    source: RateSourceHandle,
    vnd_per_usd: f64,
    apply: A,
    spawn: S,
) -> impl FnOnce()
where
    A: FnOnce(RateSnapshot) + 'static,
    S: FnOnce(LocalBoxFuture<'static, ()>),
{
    let (fetch, run) = RateFetch::prepare(source.0, vnd_per_usd, apply);
    spawn(Box::pin(run));
    move || fetch.cancel()
}

/// Current Bitcoin rates for the mounted component.
///
/// Starts at zero, fetches once on mount and cancels the fetch on unmount.
#[hook]
pub fn use_bitcoin_rates(source: RateSourceHandle, vnd_per_usd: f64) -> RateSnapshot {
    let rates = use_state(RateSnapshot::default);

    {
        let rates = rates.clone();
        use_effect_with_deps(
            move |_| {
                start_rate_fetch(
                    source,
                    vnd_per_usd,
                    move |snapshot| rates.set(snapshot),
                    |run| spawn_local(run),
                )
            },
            (),
        );
    }

    *rates
}
