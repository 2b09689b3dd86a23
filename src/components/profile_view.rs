//! Profile View Component
//!
//! Name/email update and password change.

use leptos::prelude::*;

use crate::board::Notify;
use crate::context::{use_app_context, use_notifier};
use crate::models::{ChangePasswordForm, ProfileForm};
use crate::queries::{current_user, run_mutation};

#[component]
pub fn ProfileView() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let user = current_user(&ctx);

    let profile = RwSignal::new(ProfileForm::default());
    Effect::new(move |_| {
        if let Some(u) = user.get() {
            profile.set(ProfileForm { name: u.name, email: u.email });
        }
    });

    let save_profile = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let form = profile.get();
            let ctx = ctx.clone();
            let client = ctx.client.clone();
            run_mutation(notifier, async move { client.update_profile(&form).await }, move |_| {
                ctx.invalidate_user();
            });
        }
    };

    let passwords = RwSignal::new(ChangePasswordForm::default());
    let change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = passwords.get();
        if form.password != form.password_confirmation {
            notifier.error("Passwords do not match");
            return;
        }
        let client = ctx.client.clone();
        run_mutation(notifier, async move { client.change_password(&form).await }, move |_| {
            passwords.try_set(ChangePasswordForm::default());
        });
    };

    view! {
        <section class="profile-view">
            <h2>"My profile"</h2>
            <form on:submit=save_profile>
                <input type="text" placeholder="Name"
                    prop:value=move || profile.with(|p| p.name.clone())
                    on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev)) />
                <input type="email" placeholder="Email"
                    prop:value=move || profile.with(|p| p.email.clone())
                    on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev)) />
                <button type="submit">"Save profile"</button>
            </form>

            <h3>"Change password"</h3>
            <form on:submit=change_password>
                <input type="password" placeholder="Current password"
                    prop:value=move || passwords.with(|p| p.current_password.clone())
                    on:input=move |ev| passwords.update(|p| p.current_password = event_target_value(&ev)) />
                <input type="password" placeholder="New password"
                    prop:value=move || passwords.with(|p| p.password.clone())
                    on:input=move |ev| passwords.update(|p| p.password = event_target_value(&ev)) />
                <input type="password" placeholder="Repeat new password"
                    prop:value=move || passwords.with(|p| p.password_confirmation.clone())
                    on:input=move |ev| passwords.update(|p| p.password_confirmation = event_target_value(&ev)) />
                <button type="submit">"Change password"</button>
            </form>
        </section>
    }
}
