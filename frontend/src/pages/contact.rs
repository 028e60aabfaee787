use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::{REVEAL_INSET_PX, SUBMIT_DELAY_MS};
use crate::content::POSITIONING;
use crate::dom;
use crate::hooks::use_in_view;
use crate::interaction::submission::{use_submission, ContactDetails, FormState};
use crate::motion::reveal::RevealBand;

#[derive(Properties, PartialEq)]
struct FloatingFieldProps {
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    node: NodeRef,
}

#[function_component(FloatingField)]
fn floating_field(props: &FloatingFieldProps) -> Html {
    html! {
        <div class="field">
            <input
                ref={props.node.clone()}
                id={props.id}
                type={props.input_type}
                required={props.required}
                placeholder={props.label}
            />
            <label for={props.id}>{props.label}</label>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let submission = use_submission("Contact", SUBMIT_DELAY_MS);
    let statement_ref = use_node_ref();
    let revealed = use_in_view(statement_ref.clone(), RevealBand::inset(REVEAL_INSET_PX), true);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let company_ref = use_node_ref();

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
    let year = Local::now().year();

    html! {
        <div id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        background: #09090b;
                        position: relative;
                        z-index: 20;
                        padding-bottom: 3rem;
                    }
                    .positioning {
                        padding: 3rem 1rem;
                        display: flex;
                        justify-content: center;
                        border-bottom: 1px solid #18181b;
                        margin-bottom: 3rem;
                    }
                    .positioning-inner {
                        max-width: 64rem;
                        text-align: center;
                    }
                    .positioning p {
                        font-size: 1.25rem;
                        color: #71717a;
                        line-height: 1.6;
                        margin: 0 0 0.5rem;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s, transform 0.6s;
                    }
                    .positioning p.lead {
                        font-size: 1.5rem;
                        color: #fff;
                        font-weight: 500;
                        line-height: 1.25;
                    }
                    .positioning-inner.revealed p {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .contact-form-wrap {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .contact-form-wrap h2 {
                        font-size: 1.5rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                        line-height: 1.25;
                        margin: 0 0 2rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .field {
                        position: relative;
                    }
                    .field input {
                        width: 100%;
                        box-sizing: border-box;
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid #27272a;
                        padding: 0.75rem 0;
                        font-size: 1rem;
                        color: #fff;
                        outline: none;
                        transition: border-color 0.5s;
                    }
                    .field input::placeholder {
                        color: transparent;
                    }
                    .field input:focus {
                        border-color: #fff;
                    }
                    .field label {
                        position: absolute;
                        left: 0;
                        top: 0.75rem;
                        color: #71717a;
                        font-size: 1rem;
                        pointer-events: none;
                        transition: all 0.3s;
                    }
                    .field input:focus + label,
                    .field input:not(:placeholder-shown) + label {
                        top: -1.25rem;
                        font-size: 0.75rem;
                        color: #a1a1aa;
                    }
                    .contact-submit {
                        margin-top: 1.5rem;
                        position: relative;
                        width: 100%;
                        padding: 1rem 2rem;
                        background: #fff;
                        color: #000;
                        font-weight: 500;
                        font-size: 1rem;
                        border: none;
                        cursor: pointer;
                        overflow: hidden;
                    }
                    .contact-submit:disabled {
                        opacity: 0.7;
                        cursor: progress;
                    }
                    .contact-success {
                        height: 16rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        border: 1px solid #27272a;
                        background: rgba(24, 24, 27, 0.2);
                    }
                    .contact-success .check {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #fff;
                        color: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                    }
                    .contact-footer {
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid #18181b;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        color: #52525b;
                        font-size: 0.75rem;
                    }
                    .contact-footer nav {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .contact-footer a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .contact-footer a:hover {
                        color: #fff;
                    }
                    @media (min-width: 768px) {
                        .positioning {
                            padding: 6rem 2rem;
                            margin-bottom: 6rem;
                        }
                        .positioning p {
                            font-size: 1.875rem;
                        }
                        .positioning p.lead {
                            font-size: 3rem;
                        }
                        .contact-form-wrap h2 {
                            font-size: 3rem;
                            margin-bottom: 4rem;
                        }
                        .contact-form {
                            gap: 3rem;
                        }
                        .field input, .field label {
                            font-size: 1.25rem;
                        }
                        .contact-submit {
                            width: auto;
                            padding: 1.5rem 3rem;
                            font-size: 1.25rem;
                        }
                        .contact-footer {
                            flex-direction: row;
                            justify-content: space-between;
                            align-items: center;
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
            <section class="positioning">
                <div ref={statement_ref} class={classes!("positioning-inner", revealed.then(|| "revealed"))}>
                    { for POSITIONING.iter().enumerate().map(|(index, line)| {
                        let lead = index + 1 == POSITIONING.len();
                        html! {
                            <p
                                class={classes!(lead.then(|| "lead"))}
                                style={format!("transition-delay: {:.1}s;", index as f64 * 0.3)}
                            >
                                {*line}
                            </p>
                        }
                    }) }
                </div>
            </section>

            <section class="contact-form-wrap">
                <h2>{"Let's Discuss Your"}<br />{"Growth Objective."}</h2>
                if submission.state == FormState::Success {
                    <div class="contact-success">
                        <div class="check">{"✓"}</div>
                        <p style="font-size: 1.25rem; font-weight: 500; margin: 0;">{"Request Received."}</p>
                        <p style="color: #71717a; margin: 0.5rem 0 0;">{"We will be in touch shortly."}</p>
                    </div>
                } else {
                    <form class="contact-form" {onsubmit}>
                        <FloatingField id="name" label="Full Name" input_type="text" required={true} node={name_ref} />
                        <FloatingField id="email" label="Work Email" input_type="email" required={true} node={email_ref} />
                        <FloatingField id="company" label="Company URL" input_type="text" required={false} node={company_ref} />
                        <div>
                            <button
                                type="submit"
                                class="contact-submit"
                                disabled={submitting}
                                data-hover-trigger="true"
                            >
                                { if submitting { "Processing..." } else { "Request Access →" } }
                            </button>
                        </div>
                    </form>
                }

                <footer class="contact-footer">
                    <p>{format!("© {} Haptaq. All rights reserved.", year)}</p>
                    <nav>
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <a href="#">{"LinkedIn"}</a>
                    </nav>
                </footer>
            </section>
        </div>
    }
}
