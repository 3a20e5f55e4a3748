use yew::prelude::*;

use super::form::{bind, view_model, FormStatus, SubmitButton, TextField};
use super::link::Link;
use super::PageProps;
use crate::hooks::use_submission;
use crate::models::ForgotPasswordForm;
use crate::routes::Route;
use crate::utils::messages;
use crate::viewmodels::{validation, FormKind};

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page(props: &PageProps) -> Html {
    let form = use_state(ForgotPasswordForm::default);
    let submission = use_submission(FormKind::ForgotPassword, props.on_navigate.clone());

    let on_email = bind(&form, |form: &mut ForgotPasswordForm, value| form.email = value);

    let on_submit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            let form = form.clone();
            submission.submit(validation::validate_forgot_password(&current), async move {
                let vm = view_model(messages::FORGOT_PASSWORD_FAILED)?;
                vm.forgot_password(&current).await?;
                form.set(ForgotPasswordForm::default());
                Ok(())
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Forgot Password"}</h1>
                <form class="auth-form" novalidate=true onsubmit={on_submit}>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        value={form.email.clone()}
                        on_change={on_email}
                    />
                    <FormStatus state={(*submission.state).clone()} />
                    <SubmitButton label="Reset Password" loading={submission.loading()} />
                    <p class="auth-footer">
                        <Link to={Route::Login} on_navigate={props.on_navigate.clone()}>
                            {"Back to Sign In"}
                        </Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
