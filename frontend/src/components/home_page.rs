use std::rc::Rc;

use yew::prelude::*;

use super::{CardTone, DisplayCard, HistoryStack, PageContainer, PieChart};
use crate::config::RateConfig;
use crate::format::format_number;
use crate::hooks::use_bitcoin_rates;
use crate::rates::{CoindeskSource, RateSourceHandle};
use crate::totals::{Entry, TotalsHandle, TotalsProvider, BUDGET, EXPENSES};

/// The two totals the page is built from, read once per render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceSummary {
    pub budget: f64,
    pub expenses: f64,
}

impl BalanceSummary {
    pub fn read(totals: &dyn TotalsProvider) -> Self {
        Self {
            budget: totals.total_amount(BUDGET),
            expenses: totals.total_amount(EXPENSES),
        }
    }

    pub fn balance(&self) -> f64 {
        self.budget - self.expenses
    }

    pub fn balance_label(&self) -> String {
        format!("YOUR BALANCE IS: ${}", format_number(self.balance()))
    }

    /// The chart only makes sense with something positive to split.
    pub fn shows_chart(&self) -> bool {
        self.budget > 0.0 || self.expenses > 0.0
    }
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub totals: TotalsHandle,
    pub history: Rc<Vec<Entry>>,
    #[prop_or_default]
    pub rate_config: RateConfig,
    /// Defaults to the configured price API endpoint.
    #[prop_or_default]
    pub rate_source: Option<RateSourceHandle>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let summary = BalanceSummary::read(&*props.totals);
    let source = props.rate_source.clone().unwrap_or_else(|| {
        RateSourceHandle::new(CoindeskSource::new(props.rate_config.endpoint.clone()))
    });
    let rates = use_bitcoin_rates(source, props.rate_config.vnd_per_usd);
    let [usd, eur, vnd] = rates.readout();

    html! {
        <PageContainer>
            <div class="flex items-center justify-between mb-5">
                <h1 class="text-[35px] font-bold text-foreground">{ summary.balance_label() }</h1>
                <p class="text-[15px] font-bold text-foreground">
                    {"BITCOIN RATE:"}
                    <br />
                    { usd }
                    <br />
                    { eur }
                    <br />
                    { vnd }
                </p>
            </div>
            <div class="grid grid-cols-2 gap-4 justify-center">
                <DisplayCard label="Income / Budget" amount={summary.budget} tone={CardTone::Positive} />
                <DisplayCard label="Expenses" amount={summary.expenses} tone={CardTone::Negative} />
                <HistoryStack entries={props.history.clone()} />
                if summary.shows_chart() {
                    <PieChart budget={summary.budget} expenses={summary.expenses} />
                }
            </div>
        </PageContainer>
    }
}
