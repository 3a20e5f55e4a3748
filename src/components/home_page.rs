use yew::prelude::*;

use super::form::{bind, view_model, FormStatus, PasswordField, SubmitButton};
use super::link::Link;
use super::PageProps;
use crate::hooks::use_submission;
use crate::models::ChangePasswordForm;
use crate::routes::Route;
use crate::state::BrowserSessionStore;
use crate::utils::messages;
use crate::viewmodels::{validation, FormKind};

/// Protected landing page: change password, reports, sign out.
#[function_component(HomePage)]
pub fn home_page(props: &PageProps) -> Html {
    let form = use_state(ChangePasswordForm::default);
    let submission = use_submission(FormKind::ChangePassword, props.on_navigate.clone());

    let on_current = bind(&form, |form: &mut ChangePasswordForm, value| form.current_password = value);
    let on_new = bind(&form, |form: &mut ChangePasswordForm, value| form.new_password = value);
    let on_confirm = bind(&form, |form: &mut ChangePasswordForm, value| {
        form.confirm_new_password = value
    });

    let on_submit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            let form = form.clone();
            submission.submit(validation::validate_change_password(&current), async move {
                let vm = view_model(messages::CHANGE_PASSWORD_FAILED)?;
                vm.change_password(&current).await?;
                form.set(ChangePasswordForm::default());
                Ok(())
            });
        })
    };

    let on_sign_out = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            match BrowserSessionStore::browser() {
                Ok(session) => session.clear(),
                Err(e) => log::error!("❌ {}", e),
            }
            log::info!("👋 Signed out");
            on_navigate.emit(Route::Login);
        })
    };

    html! {
        <div class="home-screen">
            <nav class="home-nav">
                <Link to={Route::Report} on_navigate={props.on_navigate.clone()}>
                    {"Reports"}
                </Link>
                <button type="button" class="btn-link" onclick={on_sign_out}>{"Sign Out"}</button>
            </nav>
            <div class="card">
                <h2>{"Change Password"}</h2>
                <form class="auth-form" novalidate=true onsubmit={on_submit}>
                    <PasswordField
                        id="currentPassword"
                        label="Current Password"
                        value={form.current_password.clone()}
                        on_change={on_current}
                    />
                    <PasswordField
                        id="newPassword"
                        label="New Password"
                        value={form.new_password.clone()}
                        on_change={on_new}
                    />
                    <PasswordField
                        id="confirmNewPassword"
                        label="Confirm Password"
                        value={form.confirm_new_password.clone()}
                        on_change={on_confirm}
                    />
                    <FormStatus state={(*submission.state).clone()} />
                    <SubmitButton label="Confirm" loading={submission.loading()} />
                </form>
            </div>
        </div>
    }
}
