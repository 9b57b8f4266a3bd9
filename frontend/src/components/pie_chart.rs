use yew::prelude::*;

const BUDGET_COLOR: &str = "#51cf66";
const EXPENSES_COLOR: &str = "#ff6b6b";

/// One donut segment, `share` in percent of the whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub share: f64,
    pub color: &'static str,
}

/// Segments for the positive totals. Empty when neither total is positive.
pub fn slices(budget: f64, expenses: f64) -> Vec<Slice> {
    let parts = [
        ("Income / Budget", budget, BUDGET_COLOR),
        ("Expenses", expenses, EXPENSES_COLOR),
    ];
    let total: f64 = parts.iter().map(|(_, v, _)| *v).filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return vec![];
    }
    parts
        .iter()
        .filter(|(_, value, _)| *value > 0.0)
        .map(|&(label, value, color)| Slice {
            label,
            share: value / total * 100.0,
            color,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub budget: f64,
    pub expenses: f64,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let parts = slices(props.budget, props.expenses);

    // r = 100 / 2π so the circumference is 100 and dash lengths are percents
    let mut offset = 25.0;
    let segments = parts
        .iter()
        .map(|slice| {
            let dash = format!("{} {}", slice.share, 100.0 - slice.share);
            let segment = html! {
                <circle cx="21" cy="21" r="15.91549430918954" fill="transparent"
                    stroke={slice.color} stroke-width="6"
                    stroke-dasharray={dash} stroke-dashoffset={offset.to_string()} />
            };
            offset -= slice.share;
            segment
        })
        .collect::<Html>();

    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex items-center gap-6">
            <svg width="160" height="160" viewBox="0 0 42 42">
                { segments }
            </svg>
            <ul class="space-y-2">
                { for parts.iter().map(|slice| html! {
                    <li class="flex items-center gap-2 text-sm text-foreground">
                        <span class="w-3 h-3 rounded-full" style={format!("background:{}", slice.color)}></span>
                        { format!("{} ({:.1}%)", slice.label, slice.share) }
                    </li>
                }) }
            </ul>
        </div>
    }
}
