use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form::{bind, view_model, FormStatus, PasswordField, SubmitButton, TextField};
use super::link::Link;
use super::PageProps;
use crate::hooks::use_submission;
use crate::models::LoginForm;
use crate::routes::Route;
use crate::state::BrowserSessionStore;
use crate::utils::messages;
use crate::viewmodels::{validation, FormKind};

#[function_component(LoginPage)]
pub fn login_page(props: &PageProps) -> Html {
    let form = use_state(|| LoginForm {
        remember: BrowserSessionStore::browser()
            .map(|session| session.has_tab_flag())
            .unwrap_or(false),
        ..LoginForm::default()
    });
    let submission = use_submission(FormKind::Login, props.on_navigate.clone());

    let on_email = bind(&form, |form: &mut LoginForm, value| form.email = value);
    let on_password = bind(&form, |form: &mut LoginForm, value| form.password = value);
    let on_remember = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.remember = e.target_unchecked_into::<HtmlInputElement>().checked();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            let form = form.clone();
            submission.submit(validation::validate_login(&current), async move {
                let vm = view_model(messages::LOGIN_FAILED)?;
                vm.login(&current).await?;
                form.set(LoginForm {
                    remember: current.remember,
                    ..LoginForm::default()
                });
                Ok(())
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Login"}</h1>
                <form class="auth-form" novalidate=true onsubmit={on_submit}>
                    <TextField
                        id="email"
                        label="Email"
                        placeholder="Enter email"
                        value={form.email.clone()}
                        on_change={on_email}
                    />
                    <PasswordField
                        id="password"
                        label="Password"
                        placeholder="Enter password"
                        value={form.password.clone()}
                        on_change={on_password}
                    />
                    <FormStatus state={(*submission.state).clone()} />
                    <label class="checkbox">
                        <input type="checkbox" checked={form.remember} onchange={on_remember} />
                        {"Remember Me"}
                    </label>
                    <SubmitButton label="Sign In" loading={submission.loading()} />
                    <p class="auth-footer">
                        <Link to={Route::ForgotPassword} on_navigate={props.on_navigate.clone()}>
                            {"Forgot Password?"}
                        </Link>
                    </p>
                    <p class="auth-footer">
                        {"Don't have an account? "}
                        <Link to={Route::Register} on_navigate={props.on_navigate.clone()}>
                            {"Sign Up"}
                        </Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
