use yew::prelude::*;

use crate::config::SUBMIT_DELAY_MS;
use crate::dom;
use crate::interaction::submission::{use_submission, ContactDetails, FormState};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let submission = use_submission("Modal", SUBMIT_DELAY_MS);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let company_ref = use_node_ref();

    {
        let visibility_changed = submission.visibility_changed.clone();
        use_effect_with_deps(
            move |is_open| {
                visibility_changed.emit(*is_open);
                || ()
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let submit = submission.submit.clone();
        let (name_ref, email_ref, company_ref) = (name_ref.clone(), email_ref.clone(), company_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(ContactDetails::new(
                dom::input_value(&name_ref),
                dom::input_value(&email_ref),
                dom::input_value(&company_ref),
            ));
        })
    };

    let submitting = submission.state == FormState::Submitting;

    html! {
        <>
            <style>
                {r#"
                    @keyframes backdropIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes dialogIn {
                        from { opacity: 0; transform: scale(0.95) translateY(20px); }
                        to { opacity: 1; transform: scale(1) translateY(0); }
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                        animation: backdropIn 0.3s ease-out;
                    }
                    .modal-container {
                        position: fixed;
                        inset: 0;
                        z-index: 101;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.75rem;
                        pointer-events: none;
                    }
                    .modal-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: rgba(24, 24, 27, 0.8);
                        backdrop-filter: blur(40px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        pointer-events: auto;
                        animation: dialogIn 0.4s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 10;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        color: #71717a;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .modal-close:hover {
                        color: #fff;
                    }
                    .modal-body {
                        padding: 2.5rem;
                    }
                    .modal-body h3 {
                        font-size: 2rem;
                        font-weight: 500;
                        margin: 0 0 0.75rem;
                    }
                    .modal-body .lead {
                        color: #a1a1aa;
                        font-weight: 300;
                        margin: 0 0 2.5rem;
                    }
                    .modal-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .modal-form input {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(9, 9, 11, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        padding: 0.875rem 1.25rem;
                        color: #fff;
                        font-size: 1rem;
                        outline: none;
                        transition: all 0.2s;
                    }
                    .modal-form input:focus {
                        border-color: rgba(255, 255, 255, 0.3);
                        background: rgba(9, 9, 11, 0.8);
                    }
                    .modal-submit {
                        margin-top: 0.5rem;
                        width: 100%;
                        padding: 1rem;
                        background: #fff;
                        color: #000;
                        font-weight: 500;
                        font-size: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                    }
                    .modal-submit:disabled {
                        opacity: 0.7;
                        cursor: progress;
                    }
                    .modal-success {
                        height: 16rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 0.75rem;
                        animation: dialogIn 0.4s ease-out;
                    }
                    .modal-success .check {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(34, 197, 94, 0.2);
                        color: #4ade80;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                    }
                    .modal-success button {
                        margin-top: 1.5rem;
                        background: none;
                        border: none;
                        color: #a1a1aa;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-container">
                <div class="modal-dialog" role="dialog" aria-modal="true">
                    <button class="modal-close" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                    <div class="modal-body">
                        <h3>{"Let's Talk Growth."}</h3>
                        <p class="lead">{"Direct access to our strategy team."}</p>
                        if submission.state == FormState::Success {
                            <div class="modal-success">
                                <div class="check">{"✓"}</div>
                                <p>{"Request Received"}</p>
                                <p style="color: #71717a; font-size: 0.875rem;">{"We'll be in touch shortly."}</p>
                                <button onclick={close}>{"Close"}</button>
                            </div>
                        } else {
                            <form class="modal-form" {onsubmit}>
                                <input ref={name_ref} type="text" required={true} placeholder="Full Name" />
                                <input ref={email_ref} type="email" required={true} placeholder="Work Email" />
                                <input ref={company_ref} type="text" placeholder="Company URL" />
                                <button
                                    type="submit"
                                    class="modal-submit"
                                    disabled={submitting}
                                    data-hover-trigger="true"
                                >
                                    { if submitting { "Processing..." } else { "Start Conversation →" } }
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </>
    }
}
