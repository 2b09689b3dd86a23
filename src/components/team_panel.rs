//! Team Panel Component
//!
//! Project collaborators: lookup by email, add, remove.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::Notify;
use crate::context::{use_app_context, use_notifier};
use crate::models::{EmailForm, TeamMember};
use crate::queries::{run_mutation, use_team};

#[component]
pub fn TeamPanel(project_id: String, #[prop(into)] can_edit: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let id_signal = Signal::derive({
        let id = project_id.clone();
        move || id.clone()
    });
    let team = use_team(&ctx, id_signal);

    let (email, set_email) = signal(String::new());
    let found = RwSignal::new(None::<TeamMember>);

    let find_member = {
        let ctx = ctx.clone();
        let project_id = project_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let form = EmailForm { email: email.get() };
            let client = ctx.client.clone();
            let project_id = project_id.clone();
            found.set(None);
            spawn_local(async move {
                match client.find_member_by_email(&project_id, &form).await {
                    Ok(member) => {
                        found.try_set(Some(member));
                    }
                    Err(err) => notifier.error(&err.to_string()),
                }
            });
        }
    };

    let add_found = {
        let ctx = ctx.clone();
        let project_id = project_id.clone();
        move |_: web_sys::MouseEvent| {
            let Some(member) = found.get_untracked() else { return };
            let ctx = ctx.clone();
            let client = ctx.client.clone();
            let id = project_id.clone();
            let request_id = id.clone();
            run_mutation(notifier, async move { client.add_member(&request_id, &member.id).await }, move |_| {
                found.try_set(None);
                set_email.try_set(String::new());
                ctx.invalidate_project(Some(&id));
            });
        }
    };

    let remove = move |member_id: String| {
        let ctx = ctx.clone();
        let client = ctx.client.clone();
        let id = project_id.clone();
        let request_id = id.clone();
        run_mutation(notifier, async move { client.remove_member(&request_id, &member_id).await }, move |_| {
            ctx.invalidate_project(Some(&id));
        });
    };

    view! {
        <section class="team-panel">
            <h3>"Team"</h3>
            <Show when=move || can_edit.get()>
                <form class="team-find" on:submit=find_member.clone()>
                    <input type="email" placeholder="Member email"
                        prop:value=email on:input=move |ev| set_email.set(event_target_value(&ev)) />
                    <button type="submit">"Find"</button>
                </form>
                {
                    let add_found = add_found.clone();
                    move || found.get().map(|member| {
                        let add_found = add_found.clone();
                        view! {
                            <div class="team-found">
                                <span>{member.name}</span>
                                <button on:click=add_found>"Add to project"</button>
                            </div>
                        }
                    })
                }
            </Show>
            {move || {
                let members = team.data.get().unwrap_or_default();
                if team.is_loading() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                if members.is_empty() {
                    return view! { <p class="empty">"No team members yet"</p> }.into_any();
                }
                let remove = remove.clone();
                view! {
                    <ul class="team-list">
                        {members
                            .into_iter()
                            .map(|member| {
                                let remove = remove.clone();
                                let member_id = member.id.clone();
                                view! {
                                    <li class="team-member">
                                        <span class="member-name">{member.name}</span>
                                        <span class="member-email">{member.email}</span>
                                        <Show when=move || can_edit.get()>
                                            {
                                                let remove = remove.clone();
                                                let member_id = member_id.clone();
                                                view! {
                                                    <button class="delete-btn" on:click=move |_| remove(member_id.clone())>
                                                        "Remove"
                                                    </button>
                                                }
                                            }
                                        </Show>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
