use std::rc::Rc;

use yew::prelude::*;

use crate::format::format_currency;
use crate::totals::Entry;

#[derive(Properties, PartialEq)]
pub struct HistoryStackProps {
    /// Already ordered newest first.
    pub entries: Rc<Vec<Entry>>,
}

/// Signed amount for a history row: expenses read as money going out, and
/// any positive flow gets a leading `+`.
pub fn signed_amount(entry: &Entry) -> String {
    let flow = if entry.is_expense() {
        -entry.amount
    } else {
        entry.amount
    };
    if flow > 0.0 {
        format!("+{}", format_currency(flow, "$"))
    } else {
        format_currency(flow, "$")
    }
}

#[function_component(HistoryStack)]
pub fn history_stack(props: &HistoryStackProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border">
            <h3 class="text-sm font-bold text-foreground mb-3">{"History"}</h3>
            {
                if props.entries.is_empty() {
                    html! { <p class="text-sm text-muted-foreground">{"No entries yet."}</p> }
                } else {
                    html! {
                        <ul class="divide-y divide-border">
                            { for props.entries.iter().map(|entry| {
                                let amount_class = if entry.is_expense() {
                                    "text-sm font-semibold text-red-500"
                                } else {
                                    "text-sm font-semibold text-green-600"
                                };
                                html! {
                                    <li key={entry.id} class="flex items-center justify-between py-2">
                                        <div>
                                            <p class="text-sm text-foreground">{ entry.description.clone() }</p>
                                            <p class="text-[11px] text-muted-foreground">{ format!("{} · {}", entry.category, entry.date) }</p>
                                        </div>
                                        <span class={amount_class}>{ signed_amount(entry) }</span>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}
