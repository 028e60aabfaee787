use yew::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod hooks;
mod motion {
    pub mod reveal;
    pub mod scroll;
    pub mod spring;
}
mod interaction {
    pub mod modal;
    pub mod pointer;
    pub mod submission;
}
mod components {
    pub mod contact_modal;
    pub mod cursor;
    pub mod layout;
}
mod pages {
    pub mod contact;
    pub mod hero;
    pub mod problem_services;
    pub mod social_and_work;
}

use components::layout::Layout;
use pages::{
    contact::Contact,
    hero::Hero,
    problem_services::ProblemServices,
    social_and_work::SocialAndWork,
};

#[function_component(App)]
pub fn app() -> Html {
    info!("Rendering landing page");
    html! {
        <Layout>
            <Hero />
            <ProblemServices />
            <SocialAndWork />
            <Contact />
        </Layout>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
