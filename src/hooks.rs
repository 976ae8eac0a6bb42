use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State and callbacks for a validated numeric input field.
#[derive(Clone)]
pub struct ValidatedInput<T: Clone + PartialEq + 'static> {
    /// Current text content of the input field.
    pub text: String,
    /// Last successfully parsed value.
    pub value: T,
    /// Validation error from the last commit, if any.
    pub error: Option<String>,
    /// `oninput` handler keeping the text state in sync with the widget.
    pub on_text_input: Callback<InputEvent>,
    /// Parse and validate the current text. Wired to `onchange` and to
    /// Enter key presses.
    pub on_commit: Callback<()>,
}

/// Hook managing the text/value/error trio for one input field.
///
/// Commits replace the text with the canonical rendering of the parsed
/// value; failed commits leave the value untouched and surface the error.
#[hook]
pub fn use_validated_input<T: Clone + PartialEq + std::fmt::Display + 'static>(
    initial_value: T,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
) -> ValidatedInput<T> {
    let value_handle: UseStateHandle<T> = use_state(|| initial_value.clone());
    let text_handle: UseStateHandle<String> = use_state(|| initial_value.to_string());
    let error_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let text_handle = text_handle.clone();
        let value_setter = value_handle.clone();
        let error_setter = error_handle.clone();
        let parse_fn = parse_and_validate.clone();

        Callback::from(move |_| match parse_fn(&text_handle) {
            Ok(parsed) => {
                text_handle.set(parsed.to_string());
                value_setter.set(parsed);
                error_setter.set(None);
            }
            Err(msg) => {
                error_setter.set(Some(msg));
            }
        })
    };

    // Keep the text in sync when the value changes programmatically
    {
        let value_snapshot = (*value_handle).clone();
        let text_handle = text_handle.clone();
        use_effect_with(value_snapshot, move |current_value| {
            let formatted = current_value.to_string();
            if *text_handle != formatted {
                text_handle.set(formatted);
            }
            || ()
        });
    }

    ValidatedInput {
        text: (*text_handle).clone(),
        value: (*value_handle).clone(),
        error: (*error_handle).clone(),
        on_text_input,
        on_commit,
    }
}
