/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::supabase::{submit_signup, SignupForm, SupabaseClient};
use leptos::html::Input;
use leptos::*;

const SUBMIT_FAILED_MESSAGE: &str =
    "We couldn't submit your sign-up. Please check your connection and try again.";

/// Where the sign-up modal currently is. One value per page; provided by
/// [`SignupModalProvider`] and shared by every trigger button.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Form,
    Success { first_name: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Next state once a submission attempt resolves. A failure keeps the
    /// form on screen so the user can retry; a success that lands after the
    /// user already dismissed the modal must not reopen it.
    pub fn resolve_submission(&self, outcome: &Result<String, ()>) -> ModalState {
        match (self, outcome) {
            (ModalState::Form, Ok(first_name)) => ModalState::Success {
                first_name: first_name.clone(),
            },
            (state, _) => state.clone(),
        }
    }
}

#[island]
pub fn SignupModalProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(ModalState::Closed));
    children()
}

/// A button that opens the sign-up modal. Styling is up to the call site.
#[island]
pub fn SignupModalButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let state = expect_context::<RwSignal<ModalState>>();

    view! {
        <button class=class on:click=move |_| state.set(ModalState::Form)>
            {label}
        </button>
    }
}

fn field_value(input: NodeRef<Input>) -> String {
    input.get().map(|i| i.value()).unwrap_or_default()
}

/// Folds a resolved submission into the modal's signals. Any write to the
/// state signal rebuilds the modal body, so the state is only written when
/// the submission actually moves it; a failure surfaces the notification
/// and leaves the mounted form, with everything typed into it, alone.
fn apply_submission_outcome(
    state: RwSignal<ModalState>,
    set_error: WriteSignal<Option<&'static str>>,
    outcome: &Result<String, ()>,
) {
    match outcome {
        Ok(_) => set_error.set(None),
        Err(()) => set_error.set(Some(SUBMIT_FAILED_MESSAGE)),
    }
    let next = state.with_untracked(|s| s.resolve_submission(outcome));
    if state.with_untracked(|s| *s != next) {
        state.set(next);
    }
}

#[island]
pub fn SignupModal() -> impl IntoView {
    let state = expect_context::<RwSignal<ModalState>>();
    let (error, set_error) = create_signal(None::<&'static str>);

    let first_name_ref = create_node_ref::<Input>();
    let last_name_ref = create_node_ref::<Input>();
    let email_ref = create_node_ref::<Input>();
    let phone_ref = create_node_ref::<Input>();
    let university_ref = create_node_ref::<Input>();

    let submit = create_action(move |form: &SignupForm| {
        let form = form.clone();
        async move {
            let client = match SupabaseClient::from_env() {
                Ok(client) => client,
                Err(err) => {
                    logging::error!("sign-up submission failed: {err}");
                    return Err(());
                }
            };
            match submit_signup(&client, &form).await {
                Ok(record) => Ok(record.first_name),
                Err(err) => {
                    logging::error!("sign-up submission failed: {err}");
                    Err(())
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(outcome) = submit.value().get() {
            apply_submission_outcome(state, set_error, &outcome);
        }
    });

    // Escape dismisses from any state. Registered in an effect so it only
    // runs in the browser.
    create_effect(move |_| {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                state.set(ModalState::Closed);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // one submission in flight per modal
        if submit.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        submit.dispatch(SignupForm {
            first_name: field_value(first_name_ref),
            last_name: field_value(last_name_ref),
            email: field_value(email_ref),
            phone: field_value(phone_ref),
            university: field_value(university_ref),
        });
    };

    view! {
        <Show when=move || state.with(ModalState::is_open)>
            <div class="glass-backdrop" on:click=move |_| state.set(ModalState::Closed)>
                <div class="card-apple signup-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="flex justify-between items-center mb-6">
                        <h3 class="text-xl font-semibold text-foreground m-0">
                            {move || {
                                state
                                    .with(|s| {
                                        match s {
                                            ModalState::Success { .. } => "You're on the list",
                                            _ => "Get started with Tally",
                                        }
                                    })
                            }}

                        </h3>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| state.set(ModalState::Closed)
                        >
                            "×"
                        </button>
                    </div>
                    {move || match state.get() {
                        ModalState::Success { first_name } => {
                            view! {
                                <div class="text-center py-4">
                                    <div class="w-14 h-14 mx-auto mb-4 rounded-full bg-primary/10 text-primary flex items-center justify-center">
                                        <svg
                                            class="w-7 h-7"
                                            fill="none"
                                            viewBox="0 0 24 24"
                                            stroke="currentColor"
                                            stroke-width="2"
                                        >
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                d="M5 13l4 4L19 7"
                                            />
                                        </svg>
                                    </div>
                                    <p class="text-body text-foreground mb-2">
                                        {format!("Thanks, {first_name}!")}
                                    </p>
                                    <p class="text-sm text-foreground-secondary mb-6">
                                        "We'll reach out soon with everything you need to get your club set up."
                                    </p>
                                    <button
                                        type="button"
                                        class="btn-primary w-full justify-center"
                                        on:click=move |_| state.set(ModalState::Closed)
                                    >
                                        "Done"
                                    </button>
                                </div>
                            }
                                .into_view()
                        }
                        _ => {
                            view! {
                                <form on:submit=on_submit>
                                    <Show when=move || error.get().is_some()>
                                        <div class="signup-error" role="alert">
                                            {move || error.get()}
                                        </div>
                                    </Show>
                                    <div class="flex flex-col gap-4">
                                        <div class="grid grid-cols-2 gap-4">
                                            <div>
                                                <label for="signup-first-name" class="signup-label">
                                                    "First name"
                                                </label>
                                                <input
                                                    id="signup-first-name"
                                                    class="input-apple"
                                                    type="text"
                                                    node_ref=first_name_ref
                                                    autofocus=true
                                                    required
                                                />
                                            </div>
                                            <div>
                                                <label for="signup-last-name" class="signup-label">
                                                    "Last name"
                                                </label>
                                                <input
                                                    id="signup-last-name"
                                                    class="input-apple"
                                                    type="text"
                                                    node_ref=last_name_ref
                                                />
                                            </div>
                                        </div>
                                        <div>
                                            <label for="signup-email" class="signup-label">
                                                "Email"
                                            </label>
                                            <input
                                                id="signup-email"
                                                class="input-apple"
                                                type="email"
                                                node_ref=email_ref
                                                required
                                            />
                                        </div>
                                        <div>
                                            <label for="signup-phone" class="signup-label">
                                                "Phone (optional)"
                                            </label>
                                            <input
                                                id="signup-phone"
                                                class="input-apple"
                                                type="tel"
                                                node_ref=phone_ref
                                            />
                                        </div>
                                        <div>
                                            <label for="signup-university" class="signup-label">
                                                "University or organization (optional)"
                                            </label>
                                            <input
                                                id="signup-university"
                                                class="input-apple"
                                                type="text"
                                                node_ref=university_ref
                                            />
                                        </div>
                                    </div>
                                    <button
                                        type="submit"
                                        class="btn-primary w-full justify-center mt-6"
                                        disabled=move || submit.pending().get()
                                    >
                                        {move || {
                                            if submit.pending().get() { "Submitting..." } else { "Sign up" }
                                        }}

                                    </button>
                                </form>
                            }
                                .into_view()
                        }
                    }}

                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn success_shows_the_submitted_name() {
        let next = ModalState::Form.resolve_submission(&Ok("Alex".to_string()));
        assert_eq!(
            next,
            ModalState::Success {
                first_name: "Alex".to_string()
            }
        );
        assert!(next.is_open());
    }

    #[test]
    fn failure_keeps_the_form_on_screen() {
        let next = ModalState::Form.resolve_submission(&Err(()));
        assert_eq!(next, ModalState::Form);
    }

    #[test]
    fn dismissed_modal_stays_closed_when_the_call_lands() {
        // closing mid-flight does not cancel the insert, but its completion
        // must not reopen the modal either
        let next = ModalState::Closed.resolve_submission(&Ok("Alex".to_string()));
        assert_eq!(next, ModalState::Closed);
        assert!(!next.is_open());
    }

    #[test]
    fn failure_never_notifies_the_state_signal() {
        // The form body tracks the state signal, so any notification
        // rebuilds the <form> and discards what the user typed. A failed
        // attempt may only touch the error signal.
        let runtime = create_runtime();
        let state = create_rw_signal(ModalState::Form);
        let (error, set_error) = create_signal(None::<&'static str>);

        let rebuilds = Rc::new(Cell::new(0));
        let seen = rebuilds.clone();
        create_isomorphic_effect(move |_| {
            state.with(|_| ());
            seen.set(seen.get() + 1);
        });
        assert_eq!(rebuilds.get(), 1);

        apply_submission_outcome(state, set_error, &Err(()));
        assert_eq!(rebuilds.get(), 1);
        assert_eq!(state.get_untracked(), ModalState::Form);
        assert_eq!(error.get_untracked(), Some(SUBMIT_FAILED_MESSAGE));

        // a later success still transitions and clears the notification
        apply_submission_outcome(state, set_error, &Ok("Alex".to_string()));
        assert_eq!(rebuilds.get(), 2);
        assert_eq!(
            state.get_untracked(),
            ModalState::Success {
                first_name: "Alex".to_string()
            }
        );
        assert_eq!(error.get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn late_success_after_dismissal_does_not_touch_the_state_signal() {
        let runtime = create_runtime();
        let state = create_rw_signal(ModalState::Closed);
        let (_, set_error) = create_signal(None::<&'static str>);

        let rebuilds = Rc::new(Cell::new(0));
        let seen = rebuilds.clone();
        create_isomorphic_effect(move |_| {
            state.with(|_| ());
            seen.set(seen.get() + 1);
        });

        apply_submission_outcome(state, set_error, &Ok("Alex".to_string()));
        assert_eq!(rebuilds.get(), 1);
        assert_eq!(state.get_untracked(), ModalState::Closed);

        runtime.dispose();
    }

    #[test]
    fn closed_is_the_only_non_open_state() {
        assert!(!ModalState::Closed.is_open());
        assert!(ModalState::Form.is_open());
        assert!(ModalState::Success {
            first_name: "Alex".to_string()
        }
        .is_open());
    }
}
