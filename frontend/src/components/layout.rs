use yew::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::cursor::CustomCursor;
use crate::interaction::modal::{use_modal, use_modal_controller, ModalHandle};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let modal = use_modal();
    let open_modal = Callback::from(move |_: MouseEvent| modal.open_modal());

    html! {
        <nav class="top-nav">
            <div class="nav-logo">
                <img src="/logo.png" alt="HAPTAQ" />
            </div>
            <button class="nav-contact" onclick={open_modal} data-hover-trigger="true">
                {"Contact"}
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page shell: owns the modal state and shares it with everything inside.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let modal = use_modal_controller();
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.close_modal())
    };

    html! {
        <ContextProvider<ModalHandle> context={modal.clone()}>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #09090b;
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                    }
                    .page {
                        background: #09090b;
                        min-height: 100vh;
                        color: #fff;
                    }
                    .page ::selection {
                        background: #fff;
                        color: #000;
                    }
                    @keyframes navIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        box-sizing: border-box;
                        z-index: 50;
                        padding: 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        mix-blend-mode: difference;
                        opacity: 0;
                        animation: navIn 0.8s ease-out 0.2s forwards;
                    }
                    .nav-logo img {
                        height: 1rem;
                        width: auto;
                    }
                    .nav-contact {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                        text-underline-offset: 4px;
                    }
                    .nav-contact:hover {
                        text-decoration: underline;
                    }
                    @keyframes introOut {
                        from { opacity: 1; }
                        to { opacity: 0; }
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    .intro-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: #09090b;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                        animation: introOut 1s ease-in-out 0.5s forwards;
                    }
                    .intro-overlay span {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @media (min-width: 768px) {
                        .top-nav {
                            padding: 1.5rem 3rem;
                        }
                        .nav-logo img {
                            height: 1.5rem;
                        }
                    }
                "#}
            </style>
            <main class="page">
                <CustomCursor />
                <Navbar />
                <div class="intro-overlay">
                    <span>{"HAPTAQ"}</span>
                </div>
                { for props.children.iter() }
                <ContactModal is_open={modal.is_open} on_close={on_close} />
            </main>
        </ContextProvider<ModalHandle>>
    }
}
