use yew::prelude::*;

mod components;
mod config;
mod error;
mod format;
mod hooks;
mod logging;
mod rates;
mod totals;

use components::HomePage;
use config::load_rate_config;
use totals::{load_category_store, CategoryStore, TotalsHandle};

#[function_component(App)]
fn app() -> Html {
    let rate_config = use_state(load_rate_config);
    let store = use_state(load_category_store);

    let totals = use_memo(
        |store: &CategoryStore| TotalsHandle::new(store.clone()),
        (*store).clone(),
    );
    let history = use_memo(|store: &CategoryStore| store.history(), (*store).clone());

    html! {
        <HomePage
            totals={(*totals).clone()}
            history={history}
            rate_config={(*rate_config).clone()}
        />
    }
}

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
