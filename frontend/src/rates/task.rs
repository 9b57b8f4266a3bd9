use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use log::debug;

use super::{fetch_snapshot, RateSnapshot, RateSource};

/// Handle to the one rate fetch a mounted page runs.
///
/// Cancelling drops any result that has not been applied yet, so a response
/// arriving after unmount never touches the old component's state.
pub struct RateFetch {
    abort: AbortHandle,
}

impl RateFetch {
    /// Builds the fetch future without scheduling it. `apply` runs at most
    /// once, only on success and only if the fetch was not cancelled.
    pub fn prepare<F>(
        source: Rc<dyn RateSource>,
        vnd_per_usd: f64,
        apply: F,
    ) -> (Self, impl Future<Output = ()>)
    where
        F: FnOnce(RateSnapshot) + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let work = Abortable::new(
            async move {
                if let Some(snapshot) = fetch_snapshot(source.as_ref(), vnd_per_usd).await {
                    apply(snapshot);
                }
            },
            registration,
        );
        let run = async move {
            if work.await.is_err() {
                debug!("rate fetch cancelled, discarding result");
            }
        };
        (Self { abort }, run)
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::rates::testing::{FailingSource, PendingSource, StaticSource};
    use crate::rates::BpiQuote;

    const SAMPLE_BODY: &str = r#"{"bpi":{"USD":{"rate_float":100},"EUR":{"rate_float":90}}}"#;

    fn recorder() -> (Rc<RefCell<Vec<RateSnapshot>>>, impl FnOnce(RateSnapshot) + 'static) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = applied.clone();
        (applied, move |snapshot| sink.borrow_mut().push(snapshot))
    }

    #[test]
    fn success_applies_snapshot_once() {
        let (applied, apply) = recorder();
        let (_fetch, run) = RateFetch::prepare(Rc::new(StaticSource(SAMPLE_BODY)), 25380.0, apply);
        block_on(run);
        assert_eq!(
            *applied.borrow(),
            vec![RateSnapshot {
                usd: 100.0,
                eur: 90.0,
                vnd: 2538000.0,
            }]
        );
    }

    #[test]
    fn failure_leaves_snapshot_untouched() {
        let (applied, apply) = recorder();
        let (_fetch, run) = RateFetch::prepare(Rc::new(FailingSource), 25380.0, apply);
        block_on(run);
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn nothing_is_applied_before_resolution() {
        let (applied, apply) = recorder();
        let (source, tx) = PendingSource::new();
        let (_fetch, run) = RateFetch::prepare(Rc::new(source), 25380.0, apply);
        let mut run = Box::pin(run);

        assert!(run.as_mut().now_or_never().is_none());
        assert!(applied.borrow().is_empty());

        tx.send(Ok(BpiQuote { usd: 1.0, eur: 2.0 })).unwrap();
        block_on(run);
        assert_eq!(applied.borrow().len(), 1);
        assert_eq!(applied.borrow()[0].vnd, 25380.0);
    }

    #[test]
    fn late_result_after_cancel_is_discarded() {
        let (applied, apply) = recorder();
        let (source, tx) = PendingSource::new();
        let (fetch, run) = RateFetch::prepare(Rc::new(source), 25380.0, apply);
        let mut run = Box::pin(run);

        assert!(run.as_mut().now_or_never().is_none());
        fetch.cancel();
        tx.send(Ok(BpiQuote { usd: 1.0, eur: 2.0 })).unwrap();

        block_on(run);
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn cancel_before_first_poll_skips_the_fetch() {
        let (applied, apply) = recorder();
        let (fetch, run) = RateFetch::prepare(Rc::new(StaticSource(SAMPLE_BODY)), 25380.0, apply);
        fetch.cancel();
        block_on(run);
        assert!(applied.borrow().is_empty());
    }
}
