use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{parse_current_price, BpiQuote};
use crate::error::RateError;

/// Something that can produce a current Bitcoin quote.
#[async_trait(?Send)]
pub trait RateSource {
    async fn fetch(&self) -> Result<BpiQuote, RateError>;
}

/// Shared source handle passed through component props.
///
/// Two handles are equal when they point at the same source.
#[derive(Clone)]
pub struct RateSourceHandle(pub Rc<dyn RateSource>);

impl RateSourceHandle {
    pub fn new<S: RateSource + 'static>(source: S) -> Self {
        Self(Rc::new(source))
    }
}

impl PartialEq for RateSourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The public current-price endpoint. Plain GET, no headers or auth.
pub struct CoindeskSource {
    endpoint: String,
}

impl CoindeskSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl RateSource for CoindeskSource {
    async fn fetch(&self) -> Result<BpiQuote, RateError> {
        let resp = Request::get(&self.endpoint).send().await?;
        if !resp.ok() {
            return Err(RateError::Status(resp.status()));
        }
        let body = resp.text().await?;
        parse_current_price(&body)
    }
}
