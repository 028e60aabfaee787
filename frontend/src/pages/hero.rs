use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::HERO_FADE_DISTANCE;
use crate::content::HERO_VIDEO;
use crate::interaction::modal::use_modal;
use crate::motion::scroll::interpolate;

/// Opacity, scale and vertical shift of the hero for a window scroll offset.
pub fn hero_transform(scroll_y: f64) -> (f64, f64, f64) {
    let range = (0.0, HERO_FADE_DISTANCE);
    (
        interpolate(scroll_y, range, (1.0, 0.0)),
        interpolate(scroll_y, range, (1.0, 0.95)),
        interpolate(scroll_y, range, (0.0, 50.0)),
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let modal = use_modal();
    let open_modal = Callback::from(move |_: MouseEvent| modal.open_modal());

    let (opacity, scale, shift) = hero_transform(scroll_y);
    let section_style = format!(
        "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4});",
        opacity, shift, scale
    );

    html! {
        <>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        display: flex;
                        align-items: center;
                        padding: 0 1rem;
                        box-sizing: border-box;
                        overflow: hidden;
                        will-change: transform, opacity;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                    }
                    .hero-video video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-video .shade-left {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to left, transparent, rgba(9, 9, 11, 0.4), #09090b);
                    }
                    .hero-video .shade-bottom {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #09090b, transparent, transparent);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding-top: 4rem;
                    }
                    @keyframes riseIn {
                        from { transform: translateY(100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes fadeUp {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes growWidth {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .hero-line {
                        overflow: hidden;
                        padding-bottom: 0.35em;
                    }
                    .hero-line h1 {
                        font-size: clamp(2.5rem, 8vw, 8rem);
                        font-weight: 500;
                        letter-spacing: -0.025em;
                        line-height: 1.4;
                        margin: 0;
                        opacity: 0;
                        animation: riseIn 0.8s cubic-bezier(0.16, 1, 0.3, 1) forwards;
                    }
                    .hero-line.second h1 {
                        color: #a1a1aa;
                        animation-delay: 0.45s;
                    }
                    .hero-line.first h1 {
                        animation-delay: 0.3s;
                    }
                    .hero-rule {
                        height: 1px;
                        max-width: 28rem;
                        background: #27272a;
                        margin-bottom: 2rem;
                        transform-origin: left;
                        transform: scaleX(0);
                        animation: growWidth 1.5s ease-in-out 1s forwards;
                    }
                    .hero-tagline {
                        font-size: clamp(1rem, 2.5vw, 1.25rem);
                        color: #a1a1aa;
                        max-width: 42rem;
                        font-weight: 300;
                        line-height: 1.6;
                        margin: 0 0 2.5rem;
                        opacity: 0;
                        animation: fadeUp 0.8s ease-out 0.75s forwards;
                    }
                    .hero-cta-wrap {
                        opacity: 0;
                        animation: fadeIn 1s ease-out 1.5s forwards;
                    }
                    .hero-cta {
                        position: relative;
                        padding: 1rem 2rem;
                        background: transparent;
                        border: none;
                        color: #fff;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                        overflow: hidden;
                    }
                    .hero-cta .arrow {
                        display: inline-block;
                        margin-left: 0.5rem;
                        transition: transform 0.3s;
                    }
                    .hero-cta:hover .arrow {
                        transform: translateX(4px);
                    }
                    .hero-cta .frame {
                        position: absolute;
                        inset: 0;
                        border: 1px solid #27272a;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.5s;
                    }
                    .hero-cta:hover .frame {
                        transform: scaleX(1);
                    }
                    .hero-cta .underline {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        height: 1px;
                        background: #fff;
                        transform: scaleX(0);
                        transform-origin: left;
                        animation: growWidth 0.8s ease-out 1.8s forwards;
                    }
                    @media (min-width: 768px) {
                        .hero {
                            padding: 0 3rem;
                        }
                        .hero-cta {
                            padding: 1.25rem 2.5rem;
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
            <section class="hero" style={section_style}>
                <div class="hero-video">
                    <video autoplay={true} loop={true} muted={true} playsinline={true}>
                        <source src={HERO_VIDEO} type="video/mp4" />
                    </video>
                    <div class="shade-left"></div>
                    <div class="shade-bottom"></div>
                </div>
                <div class="hero-content">
                    <div class="hero-line first">
                        <h1>{"Access the Right"}</h1>
                    </div>
                    <div class="hero-line second">
                        <h1>{"Decision-Makers."}</h1>
                    </div>
                    <div class="hero-rule"></div>
                    <p class="hero-tagline">
                        {"Strategic meeting generation for high-ticket B2B businesses."}
                    </p>
                    <div class="hero-cta-wrap">
                        <button class="hero-cta" onclick={open_modal} data-hover-trigger="true">
                            {"Start Conversation"}
                            <span class="arrow">{"→"}</span>
                            <div class="frame"></div>
                            <div class="underline"></div>
                        </button>
                    </div>
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_is_untouched_at_top() {
        assert_eq!(hero_transform(0.0), (1.0, 1.0, 0.0));
    }

    #[test]
    fn hero_fades_out_at_fade_distance() {
        let (opacity, scale, shift) = hero_transform(HERO_FADE_DISTANCE);
        assert_eq!(opacity, 0.0);
        assert!((scale - 0.95).abs() < 1e-9);
        assert_eq!(shift, 50.0);
        assert_eq!(hero_transform(HERO_FADE_DISTANCE * 4.0), hero_transform(HERO_FADE_DISTANCE));
    }

    #[test]
    fn hero_halfway() {
        let (opacity, _, shift) = hero_transform(HERO_FADE_DISTANCE / 2.0);
        assert!((opacity - 0.5).abs() < 1e-9);
        assert!((shift - 25.0).abs() < 1e-9);
    }
}
