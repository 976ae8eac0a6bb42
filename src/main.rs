//! Main module for the Indoor Track Pacer application using Yew.
//! Wires UI components, state hooks, and the stopwatch tick loop.

use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use track_pacer::stopwatch::StopwatchEngine;
use track_pacer::{compute_pace, defaults, format_time, PaceResult};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{render_pace_results, render_recorded_splits, StopwatchControls};
use config::{load_event_options, EventOption, DEFAULT_EVENT_INDEX, MAX_PR_SECONDS, TICK_INTERVAL_MS};
use hooks::use_validated_input;
use utils::{now_seconds, validate_lap_length, validate_pr_minutes, validate_pr_seconds};

/// Force a re-render by bumping the shared render counter into state.
///
/// The counter lives in a `Rc<RefCell<_>>` so the interval closure always
/// sees the current value instead of a stale state snapshot.
fn bump_render(counter: &Rc<RefCell<u32>>, tick: &UseStateHandle<u32>) {
    let mut current = counter.borrow_mut();
    *current = current.wrapping_add(1);
    tick.set(*current);
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    // ── Pace calculator state ────────────────────────────────────────────
    let events = use_state(Vec::<EventOption>::new);
    let selected_event = use_state(|| DEFAULT_EVENT_INDEX);
    let show_half_laps = use_state(|| false);
    let pace_result = use_state(|| None::<PaceResult>);
    let error_message = use_state(|| None::<String>);

    let pr_minutes = use_validated_input(
        defaults::PR_MINUTES,
        Rc::new(|s: &str| validate_pr_minutes(s)),
    );
    let pr_seconds = use_validated_input(
        defaults::PR_SECONDS,
        Rc::new(|s: &str| validate_pr_seconds(s)),
    );
    let lap_length = use_validated_input(
        defaults::LAP_LENGTH_M,
        Rc::new(|s: &str| validate_lap_length(s)),
    );

    // Load the event catalog on mount
    {
        let events = events.clone();
        use_effect_with((), move |_| {
            match load_event_options() {
                Ok(loaded) => events.set(loaded),
                Err(e) => log::warn!("event catalog failed to parse: {}", e),
            }
        });
    }

    // ── Stopwatch state ──────────────────────────────────────────────────
    // The engine is the session's single owned state container; callbacks
    // mutate it through this handle and the tick state drives re-renders.
    let engine = use_mut_ref(StopwatchEngine::new);
    let tick = use_state(|| 0u32);
    let tick_counter = use_mut_ref(|| 0u32);
    let ticker = use_state(|| None::<Interval>);

    // ── Callbacks ────────────────────────────────────────────────────────
    let on_event_change = {
        let selected_event = selected_event.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(idx) = select.value().parse::<usize>() {
                selected_event.set(idx);
            }
        })
    };

    let on_half_laps_change = {
        let show_half_laps = show_half_laps.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            show_half_laps.set(input.checked());
        })
    };

    let on_compute = {
        let events = events.clone();
        let selected_event = selected_event.clone();
        let pr_minutes_val = pr_minutes.value;
        let pr_seconds_val = pr_seconds.value;
        let lap_length_val = lap_length.value;
        let show_half = *show_half_laps;
        let pace_result = pace_result.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(event) = events.get(*selected_event) else {
                return;
            };
            match compute_pace(
                event.meters,
                f64::from(lap_length_val),
                pr_minutes_val,
                pr_seconds_val,
                show_half,
            ) {
                Ok(result) => {
                    pace_result.set(Some(result));
                    error_message.set(None);
                }
                Err(e) => {
                    // No partial results on error
                    pace_result.set(None);
                    error_message.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_start = {
        let engine = engine.clone();
        let tick = tick.clone();
        let tick_counter = tick_counter.clone();
        let ticker = ticker.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().start(now_seconds());

            let tick = tick.clone();
            let tick_counter_loop = tick_counter.clone();
            let handle = Interval::new(TICK_INTERVAL_MS, move || {
                bump_render(&tick_counter_loop, &tick);
            });
            ticker.set(Some(handle));
        })
    };

    let on_split = {
        let engine = engine.clone();
        let tick = tick.clone();
        let tick_counter = tick_counter.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().split(now_seconds());
            bump_render(&tick_counter, &tick);
        })
    };

    let on_stop = {
        let engine = engine.clone();
        let tick = tick.clone();
        let tick_counter = tick_counter.clone();
        let ticker = ticker.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().stop(now_seconds());
            // Dropping the interval cancels the tick loop
            ticker.set(None);
            bump_render(&tick_counter, &tick);
        })
    };

    let on_reset = {
        let engine = engine.clone();
        let tick = tick.clone();
        let tick_counter = tick_counter.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().reset();
            bump_render(&tick_counter, &tick);
        })
    };

    // Commit on Enter for the numeric fields
    let pr_minutes_onkeydown = {
        let commit = pr_minutes.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let pr_seconds_onkeydown = {
        let commit = pr_seconds.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let lap_length_onkeydown = {
        let commit = lap_length.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    // Ensure re-render on every tick while the stopwatch runs
    let _ = *tick;
    let (running, can_reset, elapsed, splits) = {
        let sw = engine.borrow();
        (
            sw.is_running(),
            sw.can_reset(),
            sw.elapsed(now_seconds()),
            sw.splits().to_vec(),
        )
    };

    html! {
        <div class="container">
            <h1>{ "Indoor Track Pacer" }</h1>

            <div class="form-group">
                <label for="event_select">{ "Event Selector" }</label>
                <select id="event_select" onchange={on_event_change}>
                    { events.iter().enumerate().map(|(idx, event)| html! {
                        <option value={idx.to_string()} selected={idx == *selected_event}>
                            { &event.label }
                        </option>
                    }).collect::<Html>() }
                </select>
            </div>

            <div class="form-group">
                <label>{ "Personal Record (PR)" }</label>
                <div class="form-row">
                    <div class="form-group">
                        <label for="pr_minutes_input">{ "Minutes" }</label>
                        <input
                            type="number"
                            id="pr_minutes_input"
                            min="0"
                            step="1"
                            value={pr_minutes.text.clone()}
                            class={if pr_minutes.error.is_some() { "invalid" } else { "" }}
                            oninput={pr_minutes.on_text_input.clone()}
                            onchange={pr_minutes.on_commit.reform(|_| ())}
                            onkeydown={pr_minutes_onkeydown}
                        />
                        if let Some(ref err) = pr_minutes.error {
                            <div class="input-error">{ err }</div>
                        }
                    </div>
                    <div class="form-group">
                        <label for="pr_seconds_input">{ "Seconds" }</label>
                        <input
                            type="number"
                            id="pr_seconds_input"
                            min="0"
                            max={MAX_PR_SECONDS.to_string()}
                            step="0.1"
                            value={pr_seconds.text.clone()}
                            class={if pr_seconds.error.is_some() { "invalid" } else { "" }}
                            oninput={pr_seconds.on_text_input.clone()}
                            onchange={pr_seconds.on_commit.reform(|_| ())}
                            onkeydown={pr_seconds_onkeydown}
                        />
                        if let Some(ref err) = pr_seconds.error {
                            <div class="input-error">{ err }</div>
                        }
                    </div>
                </div>
            </div>

            <div class="form-group">
                <label for="lap_length_input">{ "Distance per Lap (m)" }</label>
                <input
                    type="number"
                    id="lap_length_input"
                    min="1"
                    step="1"
                    value={lap_length.text.clone()}
                    class={if lap_length.error.is_some() { "invalid" } else { "" }}
                    oninput={lap_length.on_text_input.clone()}
                    onchange={lap_length.on_commit.reform(|_| ())}
                    onkeydown={lap_length_onkeydown}
                />
                if let Some(ref err) = lap_length.error {
                    <div class="input-error">{ err }</div>
                }
            </div>

            <div class="form-group checkbox-group">
                <label>
                    <input type="checkbox"
                        checked={*show_half_laps}
                        onchange={on_half_laps_change}
                    />
                    { "Display half laps" }
                </label>
            </div>

            <button class="btn-primary" onclick={on_compute}>{ "Pace it" }</button>

            if let Some(ref err) = *error_message {
                <div class="current-error">{ err }</div>
            }

            if let Some(ref result) = *pace_result {
                { render_pace_results(result) }
            }

            <hr />

            <div class="stopwatch-section">
                <h2>{ "Track Stopwatch" }</h2>
                <div class="stopwatch-display">{ format_time(elapsed) }</div>
                <StopwatchControls
                    {running}
                    {can_reset}
                    {on_start}
                    {on_split}
                    {on_stop}
                    {on_reset}
                />
                { render_recorded_splits(&splits) }
            </div>
        </div>
    }
}

/// App wrapper, kept separate so the root component stays trivial.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: initializes the panic hook and the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
