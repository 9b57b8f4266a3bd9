use yew::prelude::*;

use crate::format::format_currency;

#[derive(Clone, Copy, PartialEq)]
pub enum CardTone {
    Positive,
    Negative,
}

impl CardTone {
    fn amount_class(self) -> &'static str {
        match self {
            CardTone::Positive => "text-2xl font-bold text-green-600 tracking-tight",
            CardTone::Negative => "text-2xl font-bold text-red-500 tracking-tight",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DisplayCardProps {
    pub label: &'static str,
    pub amount: f64,
    pub tone: CardTone,
}

#[function_component(DisplayCard)]
pub fn display_card(props: &DisplayCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border">
            <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.label }</p>
            <h3 class={props.tone.amount_class()}>{ format_currency(props.amount, "$") }</h3>
        </div>
    }
}
