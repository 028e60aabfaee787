use log::debug;
use yew::prelude::*;

use crate::config::{PROCESS_REGION_VIEWPORTS, PROCESS_STEP_COUNT, REVEAL_INSET_PX};
use crate::content::{self, Pillar};
use crate::hooks::{use_in_view, use_scroll_progress};
use crate::motion::reveal::RevealBand;
use crate::motion::scroll::StepBreakpoints;

const ACTIVE_OPACITY: f64 = 1.0;
const INACTIVE_OPACITY: f64 = 0.3;

/// Label under the progress bar, e.g. `STEP 02 / 05`.
pub fn step_label(step: usize, count: usize) -> String {
    format!("STEP {:02} / {:02}", step + 1, count)
}

/// Step table for the process narrative, built once per mount.
fn process_breakpoints(count: usize) -> StepBreakpoints {
    debug!("Building {} process step bands", count);
    StepBreakpoints::even(count)
}

#[derive(Properties, PartialEq)]
struct ProblemStatementProps {
    text: &'static str,
    delay: f64,
}

#[function_component(ProblemStatement)]
fn problem_statement(props: &ProblemStatementProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealBand::CENTRE, false);

    // Delay only applies on the way in.
    let style = if in_view {
        format!("opacity: 1; filter: blur(0px); transition-delay: {}s;", props.delay)
    } else {
        "opacity: 0.2; filter: blur(2px); transition-delay: 0s;".to_string()
    };

    html! {
        <p ref={node} class="problem-statement" {style}>{props.text}</p>
    }
}

#[derive(Properties, PartialEq)]
struct PillarCardProps {
    pillar: Pillar,
    index: usize,
}

#[function_component(PillarCard)]
fn pillar_card(props: &PillarCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), RevealBand::inset(REVEAL_INSET_PX), true);
    let Pillar {
        title,
        description,
        icon,
    } = props.pillar;

    html! {
        <div
            ref={node}
            class={classes!("pillar-card", revealed.then(|| "revealed"))}
            style={format!("transition-delay: {:.2}s;", props.index as f64 * 0.12)}
            data-hover-trigger="true"
        >
            <div class="pillar-rule"></div>
            <div class="pillar-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProcessStepViewProps {
    step: content::ProcessStep,
    is_active: bool,
}

#[function_component(ProcessStepView)]
fn process_step_view(props: &ProcessStepViewProps) -> Html {
    let opacity = if props.is_active { ACTIVE_OPACITY } else { INACTIVE_OPACITY };

    html! {
        <div class="process-step" style={format!("opacity: {};", opacity)}>
            <div class="process-step-head">
                <span class="process-step-number">{format!("0{}", props.step.number)}</span>
                <h3>{props.step.title}</h3>
            </div>
            <p class={classes!("process-step-description", props.is_active.then(|| "expanded"))}>
                {props.step.description}
            </p>
        </div>
    }
}

#[function_component(ProblemServices)]
pub fn problem_services() -> Html {
    let process_ref = use_node_ref();
    let observation = use_scroll_progress(process_ref.clone());
    let breakpoints = use_memo(|count: &usize| process_breakpoints(*count), PROCESS_STEP_COUNT);
    let current_step = breakpoints.step_for(observation.progress_ratio);

    use_effect_with_deps(
        |step| {
            debug!("Process narrative on step {}", step);
            || ()
        },
        current_step,
    );

    html! {
        <div class="problem-services">
            <style>
                {r#"
                    .problem-services {
                        background: #09090b;
                        position: relative;
                        z-index: 20;
                    }
                    .problem-screen {
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        padding: 0 1.5rem;
                    }
                    .problem-statements {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .problem-statement {
                        font-size: 2.25rem;
                        font-weight: 500;
                        letter-spacing: -0.025em;
                        text-align: center;
                        margin: 0 0 1rem;
                        transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1), filter 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .pillars {
                        flex: 1;
                        border-top: 1px solid #18181b;
                        display: grid;
                        grid-template-columns: 1fr;
                        max-width: 80rem;
                        width: 100%;
                        margin: 0 auto;
                    }
                    .pillar-card {
                        position: relative;
                        padding: 1.5rem;
                        border-left: 1px solid #18181b;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s, transform 0.8s, background-color 0.5s;
                    }
                    .pillar-card.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .pillar-card:hover {
                        background: rgba(24, 24, 27, 0.3);
                    }
                    .pillar-rule {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 1px;
                        height: 0;
                        background: #fff;
                        transition: height 0.7s ease-out;
                    }
                    .pillar-card:hover .pillar-rule {
                        height: 100%;
                    }
                    .pillar-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                        color: #71717a;
                        transition: color 0.5s;
                    }
                    .pillar-card:hover .pillar-icon {
                        color: #fff;
                    }
                    .pillar-card h3 {
                        font-size: 1.25rem;
                        font-weight: 500;
                        margin: 0 0 0.75rem;
                    }
                    .pillar-card p {
                        color: #71717a;
                        line-height: 1.6;
                        font-weight: 300;
                        margin: 0;
                    }
                    .process {
                        position: relative;
                    }
                    .process-pinned {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                    }
                    .process-intro {
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 2rem 1.5rem;
                        box-sizing: border-box;
                        background: #09090b;
                        z-index: 10;
                    }
                    .process-intro h2 {
                        font-size: 2.25rem;
                        font-weight: 500;
                        margin: 0 0 2rem;
                    }
                    .process-bar {
                        position: relative;
                        height: 4px;
                        width: 100%;
                        max-width: 20rem;
                        background: #18181b;
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .process-bar-fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        background: #fff;
                    }
                    .process-label {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #71717a;
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    }
                    .process-steps {
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 0 1.5rem;
                        box-sizing: border-box;
                    }
                    .process-step {
                        padding: 3rem 0;
                        border-bottom: 1px solid #18181b;
                        transition: opacity 0.5s;
                    }
                    .process-step:last-child {
                        border-bottom: none;
                    }
                    .process-step-head {
                        display: flex;
                        align-items: baseline;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .process-step-number {
                        font-size: 0.75rem;
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        color: #71717a;
                    }
                    .process-step-head h3 {
                        font-size: 1.5rem;
                        font-weight: 500;
                        margin: 0;
                    }
                    .process-step-description {
                        color: #a1a1aa;
                        font-weight: 300;
                        max-width: 28rem;
                        margin: 0;
                        overflow: hidden;
                        max-height: 0;
                        opacity: 0;
                        transition: max-height 0.5s, opacity 0.5s;
                    }
                    .process-step-description.expanded {
                        max-height: 10rem;
                        opacity: 1;
                    }
                    @media (min-width: 768px) {
                        .problem-screen {
                            padding: 0 3rem;
                        }
                        .problem-statement {
                            font-size: 3.75rem;
                            margin-bottom: 1.5rem;
                        }
                        .pillars {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .pillar-card {
                            padding: 2rem;
                        }
                        .process-pinned {
                            flex-direction: row;
                        }
                        .process-intro, .process-steps {
                            width: 50%;
                            height: 100%;
                            padding: 0 3rem;
                        }
                        .process-intro {
                            border-right: 1px solid rgba(24, 24, 27, 0.5);
                        }
                        .process-step-head h3 {
                            font-size: 1.875rem;
                        }
                    }
                "#}
            </style>
            <section class="problem-screen">
                <div class="problem-statements">
                    { for content::PROBLEM_STATEMENTS.iter().enumerate().map(|(index, text)| html! {
                        <ProblemStatement text={*text} delay={index as f64 * 0.1} />
                    }) }
                </div>
                <div class="pillars">
                    { for content::PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                        <PillarCard pillar={*pillar} {index} />
                    }) }
                </div>
            </section>

            <section
                ref={process_ref}
                class="process"
                style={format!("height: {}vh;", PROCESS_REGION_VIEWPORTS * 100.0)}
            >
                <div class="process-pinned">
                    <div class="process-intro">
                        <h2>{"The Protocol"}</h2>
                        <div class="process-bar">
                            <div
                                class="process-bar-fill"
                                style={format!("width: {:.2}%;", observation.progress_ratio * 100.0)}
                            ></div>
                        </div>
                        <p class="process-label">{step_label(current_step, PROCESS_STEP_COUNT)}</p>
                    </div>
                    <div class="process-steps">
                        { for content::PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <ProcessStepView step={*step} is_active={index == current_step} />
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based_and_padded() {
        assert_eq!(step_label(0, 5), "STEP 01 / 05");
        assert_eq!(step_label(4, 5), "STEP 05 / 05");
    }

    #[test]
    fn process_bands_cover_every_step() {
        let bands = process_breakpoints(PROCESS_STEP_COUNT);
        assert_eq!(bands.step_count(), content::PROCESS_STEPS.len());
        assert_eq!(bands.step_for(0.0), 0);
        assert_eq!(bands.step_for(0.3), 1);
        assert_eq!(bands.step_for(1.0), PROCESS_STEP_COUNT - 1);
        assert_eq!(step_label(bands.step_for(0.95), PROCESS_STEP_COUNT), "STEP 05 / 05");
    }
}
