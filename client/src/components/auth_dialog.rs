//! Sign-in / registration modal with a security-question reset flow.
//!
//! ARCHITECTURE
//! ============
//! Three panels behind tab state: login, register, and the two-step
//! forgot-password flow (look up the account's security question, then
//! submit answer + new password). Local validation runs before any network
//! call; backend messages are shown verbatim when present.

use leptos::prelude::*;

use models::validate;

use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthTab {
    #[default]
    Login,
    Register,
    Reset,
}

#[component]
pub fn AuthDialog(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let tab = RwSignal::new(AuthTab::Login);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Login fields.
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    // Register fields.
    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_confirm = RwSignal::new(String::new());
    let reg_question_id = RwSignal::new(String::new());
    let reg_answer = RwSignal::new(String::new());

    // Security-question catalog for registration (built-in fallback when
    // the endpoint is unavailable).
    let questions = RwSignal::new(Vec::<models::SecurityQuestion>::new());
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            questions.set(crate::net::api::fetch_security_questions().await);
        });
    }

    // Reset fields.
    let reset_email = RwSignal::new(String::new());
    let reset_question = RwSignal::new(None::<models::SecurityQuestion>);
    let reset_answer = RwSignal::new(String::new());
    let reset_password = RwSignal::new(String::new());
    let reset_confirm = RwSignal::new(String::new());

    let switch_tab = move |next: AuthTab| {
        tab.set(next);
        error.set(String::new());
        notice.set(String::new());
    };

    let finish_sign_in = move |user: models::User| {
        crate::util::session::save(&user);
        auth.update(|a| {
            a.user = Some(user);
            a.loading = false;
        });
        on_close.run(());
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = finish_sign_in;

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let email = login_email.get().trim().to_owned();
        let password = login_password.get();
        if email.is_empty() || password.is_empty() {
            error.set("Enter your email and password".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email, &password).await {
                Ok(user) => finish_sign_in(user),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let name = reg_name.get();
        let email = reg_email.get().trim().to_owned();
        let password = reg_password.get();
        if let Err(e) = validate::registration(&name, &email, &password, &reg_confirm.get()) {
            error.set(e.to_string());
            return;
        }
        let question_id = reg_question_id.get().parse::<i64>().ok();
        let answer = reg_answer.get().trim().to_owned();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let security = match (question_id, answer.is_empty()) {
                (Some(id), false) => Some((id, answer.as_str())),
                _ => None,
            };
            match crate::net::api::register(name.trim(), &email, &password, security).await {
                Ok(user) => finish_sign_in(user),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (question_id, answer);
        }
    };

    // Step one of the reset flow: look up the account's question.
    let on_reset_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let email = reset_email.get().trim().to_owned();
        if email.is_empty() {
            error.set("Enter your account email first".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_security_question(&email).await {
                Ok(question) => reset_question.set(Some(question)),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
    };

    // Step two: answer + new password.
    let on_reset_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let Some(question) = reset_question.get() else {
            return;
        };
        let answer = reset_answer.get().trim().to_owned();
        if answer.is_empty() {
            error.set("Enter your answer".to_owned());
            return;
        }
        let password = reset_password.get();
        if let Err(e) = validate::password_strength(&password) {
            error.set(e.to_string());
            return;
        }
        if password != reset_confirm.get() {
            error.set(validate::ValidationError::PasswordMismatch.to_string());
            return;
        }
        let email = reset_email.get().trim().to_owned();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&email, question.id, &answer, &password).await {
                Ok(()) => {
                    reset_question.set(None);
                    reset_answer.set(String::new());
                    reset_password.set(String::new());
                    reset_confirm.set(String::new());
                    tab.set(AuthTab::Login);
                    notice.set("Password updated. Sign in with your new password.".to_owned());
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, question);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--auth" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Welcome"</h2>
                <p class="dialog__subtitle">"Sign in or register to share your recipes"</p>

                <div class="dialog__tabs">
                    <button
                        class="dialog__tab"
                        class:dialog__tab--active=move || tab.get() == AuthTab::Login
                        on:click=move |_| switch_tab(AuthTab::Login)
                    >
                        "Sign in"
                    </button>
                    <button
                        class="dialog__tab"
                        class:dialog__tab--active=move || tab.get() == AuthTab::Register
                        on:click=move |_| switch_tab(AuthTab::Register)
                    >
                        "Register"
                    </button>
                </div>

                <Show when=move || !notice.get().is_empty()>
                    <p class="dialog__notice">{move || notice.get()}</p>
                </Show>

                <Show when=move || tab.get() == AuthTab::Login>
                    <form class="dialog__form" on:submit=on_login>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || login_email.get()
                                on:input=move |ev| login_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Password"
                            <input
                                class="dialog__input"
                                type="password"
                                placeholder="••••••"
                                prop:value=move || login_password.get()
                                on:input=move |ev| login_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Sign in"
                        </button>
                        <button
                            class="dialog__link"
                            type="button"
                            on:click=move |_| switch_tab(AuthTab::Reset)
                        >
                            "Forgot your password?"
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == AuthTab::Register>
                    <form class="dialog__form" on:submit=on_register>
                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Your name"
                                prop:value=move || reg_name.get()
                                on:input=move |ev| reg_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || reg_email.get()
                                on:input=move |ev| reg_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Password"
                            <input
                                class="dialog__input"
                                type="password"
                                placeholder="At least 6 characters"
                                prop:value=move || reg_password.get()
                                on:input=move |ev| reg_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Confirm password"
                            <input
                                class="dialog__input"
                                type="password"
                                placeholder="Repeat the password"
                                prop:value=move || reg_confirm.get()
                                on:input=move |ev| reg_confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Security question (for password recovery)"
                            <select
                                class="dialog__input"
                                prop:value=move || reg_question_id.get()
                                on:change=move |ev| reg_question_id.set(event_target_value(&ev))
                            >
                                <option value="">"Pick a question..."</option>
                                {move || {
                                    questions
                                        .get()
                                        .into_iter()
                                        .map(|q| {
                                            view! {
                                                <option value=q.id.to_string()>{q.question}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Your answer"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || reg_answer.get()
                                on:input=move |ev| reg_answer.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == AuthTab::Reset>
                    <Show
                        when=move || reset_question.get().is_some()
                        fallback=move || {
                            view! {
                                <form class="dialog__form" on:submit=on_reset_lookup>
                                    <label class="dialog__label">
                                        "Account email"
                                        <input
                                            class="dialog__input"
                                            type="email"
                                            placeholder="you@example.com"
                                            prop:value=move || reset_email.get()
                                            on:input=move |ev| {
                                                reset_email.set(event_target_value(&ev));
                                            }
                                        />
                                    </label>
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || busy.get()
                                    >
                                        "Find my security question"
                                    </button>
                                </form>
                            }
                        }
                    >
                        <form class="dialog__form" on:submit=on_reset_submit>
                            <p class="dialog__question">
                                {move || {
                                    reset_question.get().map(|q| q.question).unwrap_or_default()
                                }}
                            </p>
                            <label class="dialog__label">
                                "Your answer"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || reset_answer.get()
                                    on:input=move |ev| reset_answer.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "New password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    placeholder="At least 6 characters"
                                    prop:value=move || reset_password.get()
                                    on:input=move |ev| reset_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Confirm new password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    prop:value=move || reset_confirm.get()
                                    on:input=move |ev| reset_confirm.set(event_target_value(&ev))
                                />
                            </label>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || busy.get()
                            >
                                "Reset password"
                            </button>
                        </form>
                    </Show>
                </Show>

                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
