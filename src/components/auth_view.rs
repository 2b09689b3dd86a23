//! Auth View Component
//!
//! Login, account creation and the confirmation-code flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::Notify;
use crate::context::{use_app_context, use_notifier};
use crate::models::{EmailForm, LoginForm, NewPasswordForm, RegistrationForm, TokenForm};
use crate::queries::run_mutation;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthMode {
    Login,
    Register,
    Confirm,
    Forgot,
}

#[component]
pub fn AuthView() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::Login);

    view! {
        <div class="auth-view">
            <h1>"UpTask"</h1>
            {move || match mode.get() {
                AuthMode::Login => view! { <LoginPanel /> }.into_any(),
                AuthMode::Register => view! { <RegisterPanel on_done=move |_| set_mode.set(AuthMode::Confirm) /> }.into_any(),
                AuthMode::Confirm => view! { <ConfirmAccountPanel on_done=move |_| set_mode.set(AuthMode::Login) /> }.into_any(),
                AuthMode::Forgot => view! { <ForgotPasswordPanel on_done=move |_| set_mode.set(AuthMode::Login) /> }.into_any(),
            }}
            <nav class="auth-links">
                <button on:click=move |_| set_mode.set(AuthMode::Login)>"Log in"</button>
                <button on:click=move |_| set_mode.set(AuthMode::Register)>"Create account"</button>
                <button on:click=move |_| set_mode.set(AuthMode::Confirm)>"Confirm account"</button>
                <button on:click=move |_| set_mode.set(AuthMode::Forgot)>"Forgot password"</button>
            </nav>
        </div>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm { email: email.get(), password: password.get() };
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.client.login(&form).await {
                Ok(_) => {
                    ctx.reset_caches();
                    store.authenticated().set(true);
                }
                Err(err) => notifier.error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input type="email" placeholder="Email" prop:value=email on:input=move |ev| set_email.set(event_target_value(&ev)) />
            <input type="password" placeholder="Password" prop:value=password on:input=move |ev| set_password.set(event_target_value(&ev)) />
            <button type="submit">"Log in"</button>
        </form>
    }
}

#[component]
fn RegisterPanel(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let form = RwSignal::new(RegistrationForm::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get();
        if data.password != data.password_confirmation {
            notifier.error("Passwords do not match");
            return;
        }
        let client = ctx.client.clone();
        run_mutation(notifier, async move { client.create_account(&data).await }, move |_| {
            form.set(RegistrationForm::default());
            on_done.run(());
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input type="text" placeholder="Name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev)) />
            <input type="email" placeholder="Email"
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev)) />
            <input type="password" placeholder="Password"
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev)) />
            <input type="password" placeholder="Repeat password"
                prop:value=move || form.with(|f| f.password_confirmation.clone())
                on:input=move |ev| form.update(|f| f.password_confirmation = event_target_value(&ev)) />
            <button type="submit">"Create account"</button>
        </form>
    }
}

/// Enter the emailed six-digit code, or ask for a new one
#[component]
fn ConfirmAccountPanel(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (token, set_token) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let confirm = {
        let client = ctx.client.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let form = TokenForm { token: token.get() };
            let client = client.clone();
            run_mutation(notifier, async move { client.confirm_account(&form).await }, move |_| on_done.run(()));
        }
    };

    let request_code = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = EmailForm { email: email.get() };
        let client = ctx.client.clone();
        run_mutation(notifier, async move { client.request_confirmation_code(&form).await }, |_| {});
    };

    view! {
        <form class="auth-form" on:submit=confirm>
            <input type="text" inputmode="numeric" maxlength="6" placeholder="Confirmation code"
                prop:value=token on:input=move |ev| set_token.set(event_target_value(&ev)) />
            <button type="submit">"Confirm"</button>
        </form>
        <form class="auth-form" on:submit=request_code>
            <input type="email" placeholder="Email for a new code"
                prop:value=email on:input=move |ev| set_email.set(event_target_value(&ev)) />
            <button type="submit">"Send new code"</button>
        </form>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ResetStep {
    RequestEmail,
    EnterToken,
    NewPassword(String),
}

/// Email, then the emailed token, then the new password
#[component]
fn ForgotPasswordPanel(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let step = RwSignal::new(ResetStep::RequestEmail);
    let (email, set_email) = signal(String::new());
    let (token, set_token) = signal(String::new());
    let passwords = RwSignal::new(NewPasswordForm::default());

    let request = {
        let client = ctx.client.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let form = EmailForm { email: email.get() };
            let client = client.clone();
            run_mutation(notifier, async move { client.forgot_password(&form).await }, move |_| {
                step.try_set(ResetStep::EnterToken);
            });
        }
    };

    let validate = {
        let client = ctx.client.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let value = token.get();
            let form = TokenForm { token: value.clone() };
            let client = client.clone();
            run_mutation(notifier, async move { client.validate_token(&form).await }, move |_| {
                step.try_set(ResetStep::NewPassword(value));
            });
        }
    };

    let reset = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ResetStep::NewPassword(token) = step.get() else { return };
        let form = passwords.get();
        if form.password != form.password_confirmation {
            notifier.error("Passwords do not match");
            return;
        }
        let client = ctx.client.clone();
        run_mutation(notifier, async move { client.update_password_with_token(&token, &form).await }, move |_| {
            on_done.run(());
        });
    };

    view! {
        {move || match step.get() {
            ResetStep::RequestEmail => {
                let request = request.clone();
                view! {
                    <form class="auth-form" on:submit=request>
                        <input type="email" placeholder="Email"
                            prop:value=email on:input=move |ev| set_email.set(event_target_value(&ev)) />
                        <button type="submit">"Send instructions"</button>
                    </form>
                }
                .into_any()
            }
            ResetStep::EnterToken => {
                let validate = validate.clone();
                view! {
                    <form class="auth-form" on:submit=validate>
                        <input type="text" inputmode="numeric" maxlength="6" placeholder="Reset code"
                            prop:value=token on:input=move |ev| set_token.set(event_target_value(&ev)) />
                        <button type="submit">"Validate code"</button>
                    </form>
                }
                .into_any()
            }
            ResetStep::NewPassword(_) => {
                let reset = reset.clone();
                view! {
                    <form class="auth-form" on:submit=reset>
                        <input type="password" placeholder="New password"
                            prop:value=move || passwords.with(|p| p.password.clone())
                            on:input=move |ev| passwords.update(|p| p.password = event_target_value(&ev)) />
                        <input type="password" placeholder="Repeat password"
                            prop:value=move || passwords.with(|p| p.password_confirmation.clone())
                            on:input=move |ev| passwords.update(|p| p.password_confirmation = event_target_value(&ev)) />
                        <button type="submit">"Set password"</button>
                    </form>
                }
                .into_any()
            }
        }}
    }
}
