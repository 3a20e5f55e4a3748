use yew::prelude::*;

use super::form::{bind, view_model, FormStatus, PasswordField, SubmitButton, TextField};
use super::link::Link;
use super::PageProps;
use crate::hooks::use_submission;
use crate::models::RegisterForm;
use crate::routes::Route;
use crate::utils::messages;
use crate::viewmodels::{validation, FormKind};

#[function_component(RegisterPage)]
pub fn register_page(props: &PageProps) -> Html {
    let form = use_state(RegisterForm::default);
    let submission = use_submission(FormKind::Register, props.on_navigate.clone());

    let on_first_name = bind(&form, |form: &mut RegisterForm, value| form.first_name = value);
    let on_last_name = bind(&form, |form: &mut RegisterForm, value| form.last_name = value);
    let on_email = bind(&form, |form: &mut RegisterForm, value| form.email = value);
    let on_password = bind(&form, |form: &mut RegisterForm, value| form.password = value);
    let on_confirm = bind(&form, |form: &mut RegisterForm, value| form.confirm_password = value);

    let on_submit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            let form = form.clone();
            submission.submit(validation::validate_register(&current), async move {
                let vm = view_model(messages::REGISTER_FAILED)?;
                vm.register(&current).await?;
                form.set(RegisterForm::default());
                Ok(())
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Sign Up"}</h1>
                <FormStatus state={(*submission.state).clone()} />
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <TextField
                            id="firstName"
                            label="First Name"
                            value={form.first_name.clone()}
                            on_change={on_first_name}
                            required=true
                        />
                        <TextField
                            id="lastName"
                            label="Last Name"
                            value={form.last_name.clone()}
                            on_change={on_last_name}
                            required=true
                        />
                    </div>
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        value={form.email.clone()}
                        on_change={on_email}
                        required=true
                    />
                    <PasswordField
                        id="password"
                        label="Password"
                        value={form.password.clone()}
                        on_change={on_password}
                        required=true
                    />
                    <PasswordField
                        id="confirmPassword"
                        label="Confirm Password"
                        value={form.confirm_password.clone()}
                        on_change={on_confirm}
                        required=true
                    />
                    <SubmitButton label="Sign Up" loading={submission.loading()} />
                    <p class="auth-footer">
                        {"Already have an account? "}
                        <Link to={Route::Login} on_navigate={props.on_navigate.clone()}>
                            {"Sign In"}
                        </Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
