use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::error::AuthError;
use crate::hooks::SubmissionState;
use crate::viewmodels::BrowserAuthViewModel;

/// Callback that writes an input's text into one field of a form state.
pub fn bind<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<String>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |value: String| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

/// View model over browser storage; storage failures become `fallback`.
pub fn view_model(fallback: &str) -> Result<BrowserAuthViewModel, AuthError> {
    BrowserAuthViewModel::browser().map_err(|e| {
        log::error!("❌ {}", e);
        AuthError::server(fallback)
    })
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.on_change.reform(input_value);

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

/// Password input with a show/hide toggle.
#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let visible = use_state(|| false);
    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };
    let oninput = props.on_change.reform(input_value);
    let input_type = if *visible { "text" } else { "password" };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="password-input">
                <input
                    id={props.id.clone()}
                    name={props.id.clone()}
                    type={input_type}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    required={props.required}
                    {oninput}
                />
                <button type="button" class="btn-toggle" onclick={toggle}>
                    { if *visible { "Hide" } else { "Show" } }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormStatusProps {
    pub state: SubmissionState,
}

/// Error or success banner for a submission.
#[function_component(FormStatus)]
pub fn form_status(props: &FormStatusProps) -> Html {
    html! {
        <>
            if let Some(error) = &props.state.error {
                <div class="alert alert-error" role="alert">{ error.clone() }</div>
            }
            if let Some(success) = props.state.success {
                <div class="alert alert-success" role="status">{ success }</div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub loading: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="btn-submit" disabled={props.loading}>
            if props.loading {
                <span class="spinner" aria-label="Loading"></span>
            } else {
                <span class="btn-text">{ props.label.clone() }</span>
            }
        </button>
    }
}
