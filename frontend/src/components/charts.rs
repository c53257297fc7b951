use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::animation::hooks::use_sequence;
use crate::animation::sequence::SequenceMode;
use crate::config;

/// Bar heights in percent, roughly exponential.
pub const GROWTH_BARS: &[u8] = &[5, 7, 10, 12, 15, 20, 28, 38, 55, 75, 100];

const GROWTH_AXIS: &[&str] = &["Deployment", "Optimization", "Scale", "Exit Velocity"];

/// Height a bar is drawn at once `revealed` bars have been shown.
pub fn bar_height(index: usize, revealed: usize) -> u8 {
    if index < revealed {
        GROWTH_BARS[index]
    } else {
        0
    }
}

/// Whether an element whose top edge sits `top` pixels below the top of the
/// viewport has scrolled into view. Anything already scrolled past counts.
pub fn is_in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height
}

#[function_component(AssetGrowthChart)]
pub fn asset_growth_chart() -> Html {
    let chart_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let seen = use_state(|| false);

    // Latches once; the reveal never restarts on scroll-out
    {
        let chart_ref = chart_ref.clone();
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                if !*seen {
                    let viewport_height = web_sys::window()
                        .and_then(|window| window.inner_height().ok())
                        .and_then(|height| height.as_f64());
                    if let (Some(chart), Some(viewport_height)) = (chart_ref.cast::<Element>(), viewport_height) {
                        if is_in_view(chart.get_bounding_client_rect().top(), viewport_height) {
                            seen.set(true);
                        }
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    let bars = use_sequence(GROWTH_BARS, config::GROWTH_BAR_INTERVAL_MS, SequenceMode::OneShot, *seen);
    let last = GROWTH_BARS.len() - 1;

    html! {
        <div class="growth-chart" ref={chart_ref}>
            <style>
                {r#"
                    .growth-chart {
                        background: #020617;
                        border: 1px solid #1e293b;
                        border-radius: 1rem;
                        padding: 2rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .growth-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 2rem;
                    }
                    .growth-header h3 {
                        color: #fff;
                        margin: 0;
                    }
                    .growth-ticker {
                        font-size: 0.75rem;
                        color: #94a3b8;
                        font-family: ui-monospace, monospace;
                    }
                    .growth-delta {
                        font-size: 1.5rem;
                        font-weight: 900;
                        color: #10b981;
                        text-align: right;
                    }
                    .growth-trend {
                        font-size: 10px;
                        color: #10b981;
                        background: rgba(16, 185, 129, 0.1);
                        padding: 0.1rem 0.5rem;
                        border-radius: 999px;
                    }
                    .growth-area {
                        height: 12rem;
                        display: flex;
                        align-items: flex-end;
                        gap: 4px;
                        border-left: 1px solid #1e293b;
                        border-bottom: 1px solid #1e293b;
                        padding: 0 0 0.5rem 0.5rem;
                    }
                    .growth-bar {
                        flex: 1;
                        background: rgba(16, 185, 129, 0.2);
                        border-top: 4px solid #10b981;
                        border-radius: 2px 2px 0 0;
                        position: relative;
                        transition: height 0.8s cubic-bezier(0.34, 1.4, 0.64, 1);
                    }
                    .growth-bar:hover {
                        background: #10b981;
                    }
                    .growth-callout {
                        position: absolute;
                        top: -2.5rem;
                        right: 0;
                        background: #fff;
                        color: #0b1120;
                        font-size: 10px;
                        font-weight: bold;
                        padding: 0.25rem 0.75rem;
                        border-radius: 4px;
                        white-space: nowrap;
                    }
                    .growth-axis {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 1rem;
                        font-size: 10px;
                        color: #64748b;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-family: ui-monospace, monospace;
                    }
                "#}
            </style>
            <div class="growth-header">
                <div>
                    <h3>{"Market Valuation"}</h3>
                    <p class="growth-ticker">{"TICKER: $SELF (SOVEREIGN ASSET)"}</p>
                </div>
                <div>
                    <div class="growth-delta">{"+ 12,400%"}</div>
                    <div class="growth-trend">{"BULLISH TREND"}</div>
                </div>
            </div>
            <div class="growth-area">
                { for (0..GROWTH_BARS.len()).map(|index| html! {
                    <div key={index} class="growth-bar" style={format!("height: {}%;", bar_height(index, bars.cursor))}>
                        if index == last && bars.is_complete() {
                            <div class="growth-callout">{"$10k Valuation"}</div>
                        }
                    </div>
                }) }
            </div>
            <div class="growth-axis">
                { for GROWTH_AXIS.iter().map(|label| html! { <span>{*label}</span> }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CostRowProps {
    label: &'static str,
    price: &'static str,
    width_percent: u8,
    delay_secs: f32,
    highlight: bool,
}

#[function_component(CostRow)]
fn cost_row(props: &CostRowProps) -> Html {
    let fill_style = format!(
        "--fill-width: {}%; animation-delay: {}s;",
        props.width_percent, props.delay_secs
    );
    html! {
        <div class={classes!("cost-row", props.highlight.then(|| "highlight"))}>
            <div class="cost-row-header">
                <span class="cost-label">{props.label}</span>
                <span class="cost-price">{props.price}</span>
            </div>
            <div class="cost-track">
                <div class="cost-fill" style={fill_style}></div>
            </div>
        </div>
    }
}

#[function_component(CostComparisonChart)]
pub fn cost_comparison_chart() -> Html {
    html! {
        <div class="cost-chart">
            <style>
                {r#"
                    .cost-chart {
                        background: #0f172a;
                        border: 1px solid #1e293b;
                        border-radius: 1.5rem;
                        padding: 2rem;
                    }
                    .cost-chart h3 {
                        color: #fff;
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                    .cost-subtitle {
                        color: #64748b;
                        font-size: 0.875rem;
                        margin-bottom: 2.5rem;
                    }
                    .cost-row {
                        margin-bottom: 2rem;
                    }
                    .cost-row-header {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        margin-bottom: 0.75rem;
                    }
                    .cost-label {
                        font-weight: bold;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #94a3b8;
                    }
                    .cost-price {
                        font-family: ui-monospace, monospace;
                        font-weight: bold;
                        color: #f87171;
                    }
                    .cost-row.highlight .cost-label { color: #fff; }
                    .cost-row.highlight .cost-price { color: #10b981; }
                    .cost-track {
                        width: 100%;
                        height: 1.5rem;
                        background: #1e293b;
                        border-radius: 999px;
                        overflow: hidden;
                    }
                    .cost-fill {
                        height: 100%;
                        width: 0;
                        background: linear-gradient(to right, #7f1d1d, #ef4444);
                        animation: costFill 1.5s ease-out forwards;
                    }
                    .cost-row.highlight .cost-fill {
                        background: #10b981;
                        box-shadow: 0 0 20px #10b981;
                    }
                    .cost-efficiency {
                        margin-top: 1rem;
                        display: inline-block;
                        font-size: 10px;
                        color: #10b981;
                        background: rgba(16, 185, 129, 0.05);
                        padding: 0.25rem 0.75rem;
                        border-radius: 4px;
                        text-transform: uppercase;
                        font-family: ui-monospace, monospace;
                    }
                    @keyframes costFill {
                        from { width: 0; }
                        to { width: var(--fill-width); }
                    }
                "#}
            </style>
            <h3>{"Operational Overhead"}</h3>
            <p class="cost-subtitle">{"Monthly cost for 100,000 subscribers."}</p>
            <CostRow
                label="Mailchimp / ActiveCampaign"
                price="$600.00 / mo"
                width_percent={100}
                delay_secs={0.2}
                highlight={false}
            />
            <CostRow
                label="Nokib Protocol"
                price="$10.00 / mo"
                width_percent={5}
                delay_secs={0.8}
                highlight={true}
            />
            <div class="cost-efficiency">{"Efficiency Increase: 6,000%"}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_grow_only_once_revealed() {
        assert_eq!(bar_height(0, 0), 0);
        assert_eq!(bar_height(0, 1), 5);
        assert_eq!(bar_height(10, 10), 0);
        assert_eq!(bar_height(10, 11), 100);
    }

    #[test]
    fn chart_counts_as_seen_once_its_top_enters_the_viewport() {
        assert!(!is_in_view(1200.0, 900.0));
        assert!(!is_in_view(900.0, 900.0));
        assert!(is_in_view(899.0, 900.0));
        assert!(is_in_view(0.0, 900.0));
        assert!(is_in_view(-400.0, 900.0));
    }

    #[test]
    fn bars_never_shrink_left_to_right() {
        assert!(GROWTH_BARS.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(GROWTH_BARS.last(), Some(&100));
    }
}
