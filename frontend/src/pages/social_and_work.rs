use yew::prelude::*;

use crate::config::CASE_REVEAL_INSET_PX;
use crate::content::{CaseStudy, CASE_STUDIES, INDUSTRIES, TRUSTED_BY};
use crate::hooks::use_in_view;
use crate::motion::reveal::RevealBand;

/// Clamps a hovered index into the industry list.
fn select_industry(index: usize) -> usize {
    index.min(INDUSTRIES.len().saturating_sub(1))
}

#[function_component(IndustriesSection)]
fn industries_section() -> Html {
    let active = use_state(|| 0usize);

    html! {
        <section class="industries">
            <div class="industries-backdrop">
                { for INDUSTRIES.iter().enumerate().map(|(index, industry)| {
                    let shown = index == *active;
                    html! {
                        <div
                            class={classes!("industry-image", shown.then(|| "shown"))}
                            style={format!("background-image: url({});", industry.image)}
                        ></div>
                    }
                }) }
                <div class="industries-shade"></div>
            </div>
            <div class="industries-list">
                <p class="eyebrow">{"Industries"}</p>
                <ul>
                    { for INDUSTRIES.iter().enumerate().map(|(index, industry)| {
                        let is_active = index == *active;
                        let onmouseenter = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(select_industry(index)))
                        };
                        html! {
                            <li key={industry.name} {onmouseenter} data-hover-trigger="true">
                                <span class={classes!("industry-name", is_active.then(|| "active"))}>
                                    {industry.name}
                                </span>
                                <span
                                    class="industry-rule"
                                    style={format!("width: {}px;", if is_active { 60 } else { 0 })}
                                ></span>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CaseStudyCardProps {
    study: CaseStudy,
    delay: f64,
}

#[function_component(CaseStudyCard)]
fn case_study_card(props: &CaseStudyCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), RevealBand::inset(CASE_REVEAL_INSET_PX), true);
    let study = props.study;

    html! {
        <div
            ref={node}
            class={classes!("case-card", revealed.then(|| "revealed"))}
            style={format!("transition-delay: {:.1}s;", props.delay)}
        >
            <a href={study.link} target="_blank" rel="noopener noreferrer" data-hover-trigger="true">
                <div class="case-image">
                    <img src={study.image} alt={study.client} loading="lazy" />
                    <div class="case-image-shade"></div>
                    <div class="case-image-icon">{"↗"}</div>
                </div>
                <h4>{study.client}</h4>
                <p class="case-campaign">{study.campaign}</p>
                <div class="case-facts">
                    <div>
                        <span class="fact-label">{"Audience"}</span>
                        <span class="fact-value">{study.audience}</span>
                    </div>
                    <div>
                        <span class="fact-label">{"Outcome"}</span>
                        <span class="fact-value strong">{study.outcome}</span>
                    </div>
                </div>
            </a>
        </div>
    }
}

#[function_component(TrustSection)]
fn trust_section() -> Html {
    html! {
        <section class="trust">
            <p class="eyebrow centred">{"Trusted By"}</p>
            <div class="trust-track">
                <div class="trust-marquee">
                    { for (0..2).map(|copy| html! {
                        <div class="trust-row" key={copy.to_string()}>
                            { for TRUSTED_BY.iter().map(|logo| html! { <span>{*logo}</span> }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SocialAndWork)]
pub fn social_and_work() -> Html {
    html! {
        <div class="social-and-work">
            <style>
                {r#"
                    .social-and-work {
                        background: #09090b;
                        position: relative;
                        z-index: 20;
                    }
                    .eyebrow {
                        color: #71717a;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.875rem;
                        margin: 0 0 2rem;
                    }
                    .eyebrow.centred {
                        text-align: center;
                        color: #52525b;
                        margin-bottom: 3rem;
                    }
                    .industries {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                    }
                    .industries-backdrop {
                        position: absolute;
                        inset: 0;
                    }
                    .industry-image {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        filter: grayscale(1);
                        opacity: 0;
                        transform: scale(1.05);
                        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                    }
                    .industry-image.shown {
                        opacity: 0.4;
                        transform: scale(1);
                    }
                    .industries-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, #09090b, rgba(9, 9, 11, 0.8), transparent);
                    }
                    .industries-list {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 42rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 0 1.5rem;
                    }
                    .industries-list ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .industries-list li {
                        padding: 1.5rem 0;
                        border-bottom: 1px solid #27272a;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .industry-name {
                        font-size: 1.875rem;
                        font-weight: 500;
                        color: #3f3f46;
                        transition: color 0.5s;
                    }
                    .industry-name.active {
                        color: #fff;
                    }
                    .industry-rule {
                        display: block;
                        height: 1px;
                        background: #fff;
                        transition: width 0.3s;
                    }
                    .cases {
                        padding: 8rem 1.5rem;
                    }
                    .cases-head {
                        max-width: 80rem;
                        margin: 0 auto 4rem;
                    }
                    .cases-head h2 {
                        font-size: 2.25rem;
                        font-weight: 500;
                        margin: 0 0 1rem;
                    }
                    .cases-head p {
                        color: #71717a;
                        max-width: 28rem;
                        font-weight: 300;
                        margin: 0;
                    }
                    .cases-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    .case-card {
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.8s, transform 0.8s;
                    }
                    .case-card.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .case-card a {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                    }
                    .case-image {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        background: #18181b;
                        overflow: hidden;
                        margin-bottom: 1.5rem;
                        border-radius: 2px;
                    }
                    .case-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: transform 1s, filter 1s;
                    }
                    .case-card:hover .case-image img {
                        transform: scale(1.05);
                        filter: grayscale(0);
                    }
                    .case-image-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.2);
                        transition: background 0.5s;
                    }
                    .case-card:hover .case-image-shade {
                        background: transparent;
                    }
                    .case-image-icon {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.5rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .case-card:hover .case-image-icon {
                        opacity: 1;
                    }
                    .case-card h4 {
                        font-size: 1.5rem;
                        font-weight: 500;
                        margin: 0 0 0.5rem;
                    }
                    .case-campaign {
                        color: #71717a;
                        font-size: 0.875rem;
                        margin: 0 0 1rem;
                    }
                    .case-facts {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 0.5rem 1rem;
                        font-size: 0.875rem;
                        border-top: 1px solid #18181b;
                        padding-top: 1rem;
                    }
                    .fact-label {
                        display: block;
                        color: #52525b;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        margin-bottom: 0.25rem;
                    }
                    .fact-value {
                        color: #d4d4d8;
                    }
                    .fact-value.strong {
                        color: #fff;
                        font-weight: 500;
                    }
                    .trust {
                        padding: 6rem 0;
                        border-top: 1px solid #18181b;
                        overflow: hidden;
                    }
                    .trust-track {
                        position: relative;
                        width: 100%;
                        display: flex;
                        overflow-x: hidden;
                    }
                    @keyframes marquee {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }
                    .trust-marquee {
                        display: flex;
                        white-space: nowrap;
                        animation: marquee 40s linear infinite;
                    }
                    .trust-marquee:hover {
                        animation-play-state: paused;
                    }
                    .trust-row {
                        display: flex;
                        gap: 6rem;
                        padding: 0 3rem;
                        opacity: 0.5;
                        filter: grayscale(1);
                        transition: all 0.5s;
                    }
                    .trust-row:hover {
                        filter: grayscale(0);
                    }
                    .trust-row span {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        color: #a1a1aa;
                        cursor: default;
                    }
                    @media (min-width: 768px) {
                        .industries-list {
                            padding: 0 6rem;
                        }
                        .industry-name {
                            font-size: 3rem;
                        }
                        .cases {
                            padding: 8rem 3rem;
                        }
                        .cases-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 5rem 4rem;
                        }
                        .case-facts {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
            <IndustriesSection />
            <section class="cases">
                <div class="cases-head">
                    <h2>{"Selected Cases"}</h2>
                    <p>
                        {"Real results from our strategic meeting generation campaigns. Click to view full case studies."}
                    </p>
                </div>
                <div class="cases-grid">
                    { for CASE_STUDIES.iter().enumerate().map(|(index, study)| html! {
                        <CaseStudyCard study={*study} delay={index as f64 * 0.1} />
                    }) }
                </div>
            </section>
            <TrustSection />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_index_stays_in_bounds() {
        assert_eq!(select_industry(0), 0);
        assert_eq!(select_industry(3), 3);
        assert_eq!(select_industry(42), INDUSTRIES.len() - 1);
    }
}
