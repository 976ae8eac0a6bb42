//! Pure Yew view components for the Track Pacer UI.
//!
//! Everything here renders from props or plain core data; no component
//! owns application state.

use track_pacer::{format_time, PaceResult, SplitRow};
use yew::prelude::*;

/// A labeled metric value, styled like a scoreboard readout.
#[derive(Properties, PartialEq)]
pub struct MetricProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(Metric)]
pub fn metric(props: &MetricProps) -> Html {
    html! {
        <div class="metric">
            <div class="metric-label">{ props.label.clone() }</div>
            <div class="metric-value">{ props.value.clone() }</div>
        </div>
    }
}

/// Renders the pace metrics and split table for a calculation result.
pub fn render_pace_results(result: &PaceResult) -> Html {
    html! {
        <div class="results">
            <div class="pace-metrics">
                { if let Some(half) = result.half_lap_pace {
                    html! { <Metric label="Half Lap Pace" value={format_time(half)} /> }
                } else { html! {} } }
                <Metric label="Full Lap Pace" value={format_time(result.pace_per_lap)} />
            </div>
            <h3>{ "Split Table" }</h3>
            { render_split_table(&result.splits) }
        </div>
    }
}

fn render_split_table(splits: &[SplitRow]) -> Html {
    html! {
        <div class="split-table-container">
            <table class="split-table">
                <thead>
                    <tr>
                        <th>{ "Lap" }</th>
                        <th>{ "Distance (m)" }</th>
                        <th>{ "Cumulative Split" }</th>
                    </tr>
                </thead>
                <tbody>
                    { splits.iter().map(|row| html! {
                        <tr>
                            <td>{ &row.label }</td>
                            <td>{ row.distance_m }</td>
                            <td>{ format_time(row.cumulative) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

/// Renders the stopwatch's recorded splits, most recent first with
/// descending numbers so "#1" is always the oldest split.
pub fn render_recorded_splits(splits: &[f64]) -> Html {
    if splits.is_empty() {
        return html! {};
    }
    let count = splits.len();
    html! {
        <div class="recorded-splits">
            <h4>{ "Splits" }</h4>
            <table class="split-table">
                <thead>
                    <tr>
                        <th>{ "Split" }</th>
                        <th>{ "Time" }</th>
                    </tr>
                </thead>
                <tbody>
                    { splits.iter().enumerate().map(|(i, &time)| html! {
                        <tr>
                            <td>{ format!("#{}", count - i) }</td>
                            <td>{ format_time(time) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

/// The four stopwatch buttons, each disabled while its transition is
/// invalid in the engine's current state.
#[derive(Properties, PartialEq)]
pub struct StopwatchControlsProps {
    pub running: bool,
    pub can_reset: bool,
    pub on_start: Callback<MouseEvent>,
    pub on_split: Callback<MouseEvent>,
    pub on_stop: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(StopwatchControls)]
pub fn stopwatch_controls(props: &StopwatchControlsProps) -> Html {
    html! {
        <div class="stopwatch-controls">
            <button onclick={props.on_start.clone()} disabled={props.running}>
                { "Start" }
            </button>
            <button onclick={props.on_split.clone()} disabled={!props.running}>
                { "Split" }
            </button>
            <button onclick={props.on_stop.clone()} disabled={!props.running}>
                { "Stop" }
            </button>
            <button onclick={props.on_reset.clone()} disabled={!props.can_reset}>
                { "Reset" }
            </button>
        </div>
    }
}
