use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bilingual::Bilingual;
use crate::components::reveal::Reveal;
use crate::content::{Course, COURSES, PARTNERS, REVIEWS};
use crate::scroll::use_scroll_progress;
use crate::stage::{STAGE_FUTURE, STAGE_PHILOSOPHY, STAGE_VISION};
use crate::ui_state::CourseDetail;
use crate::Route;

fn icon_glyph(token: &str) -> &'static str {
    match token {
        "terminal" => "⌨",
        "wrench" => "🔧",
        "cpu" => "⚙",
        "book" => "📖",
        "video" => "🎬",
        "music" => "🎵",
        _ => "✦",
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    /// Scroll progress through the whole page, 0..=1.
    progress: f64,
}

/// The three-stage hero. A tall scroll track pins a viewport-height stage
/// area; each stage layer is styled from its breakpoint tracks so exactly
/// one stage reads as dominant at any scroll position.
#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let philosophy = STAGE_PHILOSOPHY.at(props.progress);
    let vision = STAGE_VISION.at(props.progress);
    let future = STAGE_FUTURE.at(props.progress);

    html! {
        <section class="hero-track">
            <div class="hero-stage">
                <div class="hero-layer" style={philosophy.css()}>
                    <h1>{"Human-Centric"}<br />{"Philosophy"}</h1>
                    <p>{"AI is not a replacement, but an extension of human intuition and creative soul."}</p>
                </div>

                <div class="hero-layer stage-vision" style={vision.css()}>
                    <h1>{"Spatial"}<br />{"Vision"}</h1>
                    <p>{"Bridging the gap between digital logic and physical emotion through spatial harmony."}</p>
                </div>

                <div class="hero-layer" style={future.css()}>
                    <h1>{"The Future"}<br /><span class="gradient-text">{"Of Intelligence"}</span></h1>
                    <p>{"Empowering the next generation of creative pioneers in the era of co-creation."}</p>
                </div>

                <div class="hero-backdrop">
                    <div class="blob blob-blue"></div>
                    <div class="blob blob-purple"></div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CourseModalProps {
    course: &'static Course,
    on_dismiss: Callback<MouseEvent>,
}

#[function_component(CourseModal)]
fn course_modal(props: &CourseModalProps) -> Html {
    let course = props.course;

    html! {
        <div class="modal-overlay">
            <div class="modal-backdrop" onclick={props.on_dismiss.clone()}></div>
            <div class={classes!("modal-card", course.color)}>
                <button class="modal-close" onclick={props.on_dismiss.clone()} aria-label="Close">
                    {"✕"}
                </button>
                <div class="modal-icon">{ icon_glyph(course.icon) }</div>
                <h3><Bilingual en={course.title} ko={course.title_ko} /></h3>
                <p class="modal-details">
                    <Bilingual en={course.details} ko={course.details_ko} />
                </p>
                <ul class="modal-perks">
                    <li>
                        <span class="dot dot-green"></span>
                        <Bilingual en="12+ Hours of Content" ko="12시간 이상의 고품질 콘텐츠" />
                    </li>
                    <li>
                        <span class="dot dot-purple"></span>
                        <Bilingual en="Lifetime Community Access" ko="평생 소장 및 커뮤니티 접근 권한" />
                    </li>
                    <li>
                        <span class="dot dot-blue"></span>
                        <Bilingual en="1-on-1 Mentorship Session" ko="1:1 멘토링 세션 포함" />
                    </li>
                </ul>
                <button class="enroll-button">
                    <Bilingual en="Enroll Now" ko="수강 신청하기" />{" ›"}
                </button>
            </div>
        </div>
    }
}

/// Contact inputs and submit affordance. Delivery to the spreadsheet-backed
/// inbox happens outside this app; submitting only suppresses the default
/// form navigation.
#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        info!("contact form submitted; delivery is handled externally");
    });

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="contact-row">
                <input
                    type="text"
                    placeholder="이름"
                    value={(*name).clone()}
                    oninput={let name = name.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
                <input
                    type="email"
                    placeholder="이메일"
                    value={(*email).clone()}
                    oninput={let email = email.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </div>
            <textarea
                placeholder="문의 내용"
                rows="4"
                value={(*message).clone()}
                oninput={let message = message.clone(); move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            />
            <button type="submit" class="contact-submit">
                {"메시지 보내기 ✉"}
            </button>
        </form>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let container = use_node_ref();
    let progress = use_scroll_progress(container.clone());
    let detail = use_state_eq(CourseDetail::default);

    let dismiss = {
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| {
            detail.set(detail.dismiss());
        })
    };

    html! {
        <div class="landing-page" ref={container}>
            <Hero progress={progress} />

            // Vision
            <Reveal id="vision" class="vision-section">
                <div class="vision-grid">
                    <div class="vision-copy">
                        <h2>{"생각과 생각"}<br />{"사이의"}<br />{"공간."}</h2>
                        <p>
                            {"우리는 단순히 도구만을 가르치지 않습니다. 상호작용의 철학을 가르칩니다. \
                              Aura는 AI가 인간의 대체제가 아닌, 영혼의 확장이라고 믿는 이들을 위한 안식처입니다."}
                        </p>
                        <div class="vision-tags">
                            { for ["미니멀", "공간감", "몰입형"].iter().map(|tag| html! {
                                <span key={*tag} class="vision-tag">{ *tag }</span>
                            }) }
                        </div>
                    </div>
                    <div class="vision-panel">
                        <div class="vision-panel-tilt"></div>
                        <img
                            src="https://picsum.photos/seed/aura1/800/800"
                            alt="Vision"
                            referrerpolicy="no-referrer"
                        />
                    </div>
                </div>
            </Reveal>

            // Course catalog
            <section id="lectures" class="lectures-section">
                <div class="lectures-inner">
                    <Reveal class="lectures-heading">
                        <h2><Bilingual en="Curated Mastery." ko="엄선된 마스터 클래스." /></h2>
                        <p class="lectures-count">
                            <Bilingual en="06 Specialized Domains" ko="06개의 전문 영역" />
                        </p>
                    </Reveal>

                    <Reveal class="course-grid">
                        { for COURSES.iter().map(|course| {
                            let onclick = {
                                let detail = detail.clone();
                                let id = course.id;
                                Callback::from(move |_: MouseEvent| {
                                    info!("course detail opened: {id}");
                                    detail.set(detail.select(id));
                                })
                            };
                            html! {
                                <div key={course.id} class={classes!("course-card", course.color)} {onclick}>
                                    <div class="card-icon">{ icon_glyph(course.icon) }</div>
                                    <h3><Bilingual en={course.title} ko={course.title_ko} /></h3>
                                    <p class="card-summary">
                                        <Bilingual en={course.summary} ko={course.summary_ko} />
                                    </p>
                                    <div class="card-explore">
                                        <Bilingual en="Explore" ko="상세보기" />{" →"}
                                    </div>
                                    <div class="card-glow"></div>
                                </div>
                            }
                        }) }
                    </Reveal>
                </div>
            </section>

            // Philosophy
            <Reveal id="philosophy" class="philosophy-section">
                <div class="philosophy-inner">
                    <h2>{"\"미래를 예측하는 가장 좋은 방법은 미래를 직접 디자인하는 것이다.\""}</h2>
                    <p>
                        {"우리의 커리큘럼은 기술적 숙련도가 정서적 공명과 만나는 '바이브 코딩'의 원칙 위에 세워졌습니다. \
                          우리는 단순히 앱을 만들지 않습니다. 숨을 쉬는 경험을 만듭니다."}
                    </p>
                </div>
                <div class="pulse-ring"></div>
            </Reveal>

            // Reviews and partners
            <section id="reviews" class="reviews-section">
                <div class="reviews-inner">
                    <div class="reviews-grid">
                        { for REVIEWS.iter().enumerate().map(|(idx, review)| html! {
                            <Reveal key={idx} class="review-card">
                                <p class="review-quote">{ format!("\"{}\"", review.content_ko) }</p>
                                <div>
                                    <p class="review-name">{ review.name_ko }</p>
                                    <p class="review-role">{ review.role_ko }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>

                    <div class="partner-strip">
                        { for PARTNERS.iter().map(|partner| html! {
                            <span key={*partner}>{ *partner }</span>
                        }) }
                    </div>
                </div>
            </section>

            // Contact
            <Reveal id="contact" class="contact-section">
                <div class="contact-inner">
                    <h2>{"함께 미래를 만듭니다."}</h2>
                    <p class="contact-lead">{"궁금한 점이 있으신가요? 저희 팀이 당신의 AI 여정을 안내해 드립니다."}</p>
                    <ContactForm />
                    <p class="contact-note">
                        {"* 모든 문의는 실시간 응대를 위해 구글 시트 데이터베이스와 동기화됩니다."}
                    </p>
                </div>
            </Reveal>

            // Footer
            <footer class="home-footer">
                <div class="footer-inner">
                    <div class="footer-brand">{"AURA."}</div>
                    <div class="footer-links">
                        <Link<Route> to={Route::Privacy} classes="footer-link">{"개인정보처리방침"}</Link<Route>>
                        <Link<Route> to={Route::Terms} classes="footer-link">{"이용약관"}</Link<Route>>
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" class="footer-link">
                            {"인스타그램"}
                        </a>
                    </div>
                    <p class="footer-copy">{"© 2026 Aura AI Academy. 공간 시대를 위한 디자인."}</p>
                </div>
            </footer>

            {
                if let Some(course) = detail.course() {
                    html! { <CourseModal course={course} on_dismiss={dismiss.clone()} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        color: #0F172A;
                    }

                    /* Hero */

                    .hero-track {
                        height: 400vh;
                        position: relative;
                    }

                    .hero-stage {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .hero-layer {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1.5rem;
                    }

                    .hero-layer h1 {
                        font-size: 10vw;
                        line-height: 0.9;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: -0.02em;
                        margin: 0 0 2rem;
                    }

                    .hero-layer p {
                        max-width: 36rem;
                        margin: 0 auto;
                        font-size: 1.125rem;
                        font-weight: 300;
                        color: rgba(15, 23, 42, 0.6);
                    }

                    .stage-vision h1 {
                        color: #A78BFA;
                    }

                    .gradient-text {
                        background: linear-gradient(90deg, #7DD3FC, #C4B5FD, #86EFAC);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                    }

                    .blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(120px);
                    }

                    .blob-blue {
                        top: 25%;
                        left: -25%;
                        width: 80vw;
                        height: 80vw;
                        background: rgba(224, 242, 254, 0.8);
                        animation: drift-a 20s linear infinite;
                    }

                    .blob-purple {
                        bottom: 25%;
                        right: -25%;
                        width: 70vw;
                        height: 70vw;
                        background: rgba(243, 232, 255, 0.8);
                        animation: drift-b 25s linear infinite;
                    }

                    @keyframes drift-a {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(90deg); }
                        100% { transform: scale(1) rotate(0deg); }
                    }

                    @keyframes drift-b {
                        0% { transform: scale(1.2) rotate(0deg); }
                        50% { transform: scale(1) rotate(-90deg); }
                        100% { transform: scale(1.2) rotate(0deg); }
                    }

                    /* Section reveal */

                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
                                    transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                    }

                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }

                    /* Vision */

                    .vision-section {
                        padding: 8rem 1.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .vision-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 5rem;
                        align-items: center;
                    }

                    .vision-copy h2 {
                        font-size: 3rem;
                        line-height: 1.15;
                        font-weight: 700;
                        margin: 0 0 2rem;
                    }

                    .vision-copy p {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        color: rgba(15, 23, 42, 0.7);
                        margin: 0 0 3rem;
                    }

                    .vision-tags {
                        display: flex;
                        gap: 1rem;
                    }

                    .vision-tag {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(15, 23, 42, 0.1);
                        font-size: 0.875rem;
                        font-family: 'SFMono-Regular', Consolas, monospace;
                    }

                    .vision-panel {
                        position: relative;
                        aspect-ratio: 1 / 1;
                    }

                    .vision-panel-tilt {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, #E0F2FE, #F3E8FF);
                        border-radius: 1.5rem;
                        transform: rotate(3deg);
                        opacity: 0.2;
                    }

                    .vision-panel img {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        filter: grayscale(1);
                        transition: filter 0.7s;
                    }

                    .vision-panel img:hover {
                        filter: grayscale(0);
                    }

                    /* Courses */

                    .lectures-section {
                        padding: 8rem 0;
                        background: #ffffff;
                    }

                    .lectures-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .lectures-heading {
                        margin-bottom: 5rem;
                    }

                    .lectures-heading h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }

                    .lectures-count {
                        color: rgba(15, 23, 42, 0.5);
                        font-family: 'SFMono-Regular', Consolas, monospace;
                        margin: 0;
                    }

                    .course-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    .course-card {
                        position: relative;
                        padding: 2.5rem;
                        border-radius: 2.5rem;
                        cursor: pointer;
                        overflow: hidden;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .course-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 24px 48px rgba(15, 23, 42, 0.08);
                    }

                    .card-blue { background: #E0F2FE; }
                    .card-purple { background: #F3E8FF; }
                    .card-green { background: #DCFCE7; }

                    .card-icon {
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.45);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        margin-bottom: 2rem;
                        transition: transform 0.3s ease;
                    }

                    .course-card:hover .card-icon {
                        transform: scale(1.1);
                    }

                    .course-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .card-summary {
                        color: rgba(15, 23, 42, 0.6);
                        margin: 0 0 2rem;
                    }

                    .card-explore {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .card-glow {
                        position: absolute;
                        bottom: -2.5rem;
                        right: -2.5rem;
                        width: 10rem;
                        height: 10rem;
                        background: rgba(255, 255, 255, 0.2);
                        border-radius: 50%;
                        filter: blur(48px);
                        transition: transform 0.7s ease;
                    }

                    .course-card:hover .card-glow {
                        transform: scale(1.5);
                    }

                    /* Philosophy */

                    .philosophy-section {
                        position: relative;
                        padding: 10rem 1.5rem;
                        background: #0F172A;
                        color: #ffffff;
                        overflow: hidden;
                    }

                    .philosophy-inner {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .philosophy-inner h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        font-style: italic;
                        margin: 0 0 3rem;
                    }

                    .philosophy-inner p {
                        font-size: 1.25rem;
                        font-weight: 300;
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.6);
                        margin: 0;
                    }

                    .pulse-ring {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 150%;
                        height: 150%;
                        transform: translate(-50%, -50%);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 50%;
                        opacity: 0.1;
                        animation: ring-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                        pointer-events: none;
                    }

                    @keyframes ring-pulse {
                        0%, 100% { opacity: 0.1; }
                        50% { opacity: 0.05; }
                    }

                    /* Reviews */

                    .reviews-section {
                        padding: 8rem 1.5rem;
                    }

                    .reviews-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .reviews-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }

                    .review-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.45);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        box-shadow: 0 8px 32px rgba(15, 23, 42, 0.04);
                    }

                    .review-quote {
                        font-size: 1.125rem;
                        font-style: italic;
                        margin: 0 0 2rem;
                    }

                    .review-name {
                        font-weight: 700;
                        margin: 0;
                    }

                    .review-role {
                        font-size: 0.875rem;
                        color: rgba(15, 23, 42, 0.5);
                        margin: 0;
                    }

                    .partner-strip {
                        margin-top: 8rem;
                        padding-top: 5rem;
                        border-top: 1px solid rgba(15, 23, 42, 0.05);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 3rem;
                        opacity: 0.3;
                        filter: grayscale(1);
                    }

                    .partner-strip span {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.04em;
                    }

                    /* Contact */

                    .contact-section {
                        padding: 8rem 1.5rem;
                        background: rgba(224, 242, 254, 0.2);
                    }

                    .contact-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .contact-inner h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin: 0 0 2rem;
                    }

                    .contact-lead {
                        color: rgba(15, 23, 42, 0.6);
                        margin: 0 0 3rem;
                    }

                    .contact-form {
                        text-align: left;
                    }

                    .contact-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        background: rgba(255, 255, 255, 0.45);
                        backdrop-filter: blur(12px);
                        font-size: 1rem;
                        font-family: inherit;
                        transition: box-shadow 0.2s ease;
                    }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #A78BFA;
                    }

                    .contact-form textarea {
                        resize: vertical;
                        margin-bottom: 1rem;
                    }

                    .contact-submit {
                        width: 100%;
                        padding: 1.5rem;
                        border: none;
                        border-radius: 1rem;
                        background: #0F172A;
                        color: #ffffff;
                        font-size: 1.125rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: transform 0.15s ease;
                    }

                    .contact-submit:hover {
                        transform: scale(0.98);
                    }

                    .contact-submit:active {
                        transform: scale(0.95);
                    }

                    .contact-note {
                        margin-top: 2rem;
                        font-size: 0.75rem;
                        font-family: 'SFMono-Regular', Consolas, monospace;
                        color: rgba(15, 23, 42, 0.4);
                    }

                    /* Footer */

                    .home-footer {
                        padding: 3rem 1.5rem;
                        border-top: 1px solid rgba(15, 23, 42, 0.05);
                    }

                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }

                    .footer-brand {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: -0.04em;
                    }

                    .footer-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-link {
                        font-size: 0.875rem;
                        font-family: 'SFMono-Regular', Consolas, monospace;
                        color: rgba(15, 23, 42, 0.5);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-link:hover {
                        color: #0F172A;
                    }

                    .footer-copy {
                        font-size: 0.75rem;
                        color: rgba(15, 23, 42, 0.3);
                        margin: 0;
                    }

                    /* Course detail modal */

                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                    }

                    .modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.4);
                        backdrop-filter: blur(4px);
                    }

                    .modal-card {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        padding: 3rem;
                        border-radius: 3rem;
                        overflow: hidden;
                        box-shadow: 0 32px 64px rgba(15, 23, 42, 0.2);
                        animation: modal-pop 0.25s ease-out;
                    }

                    @keyframes modal-pop {
                        from { transform: scale(0.9) translateY(20px); opacity: 0; }
                        to { transform: scale(1) translateY(0); opacity: 1; }
                    }

                    .modal-close {
                        position: absolute;
                        top: 2rem;
                        right: 2rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 50%;
                        background: transparent;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .modal-close:hover {
                        background: rgba(15, 23, 42, 0.05);
                    }

                    .modal-icon {
                        width: 4rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.6);
                        margin-bottom: 2rem;
                    }

                    .modal-card h3 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }

                    .modal-details {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        color: rgba(15, 23, 42, 0.7);
                        margin: 0 0 2rem;
                    }

                    .modal-perks {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 3rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .modal-perks li {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }

                    .dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        flex-shrink: 0;
                    }

                    .dot-green { background: #86EFAC; }
                    .dot-purple { background: #C4B5FD; }
                    .dot-blue { background: #7DD3FC; }

                    .enroll-button {
                        width: 100%;
                        padding: 1.5rem;
                        border: none;
                        border-radius: 1rem;
                        background: #0F172A;
                        color: #ffffff;
                        font-size: 1.25rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: transform 0.15s ease;
                    }

                    .enroll-button:hover {
                        transform: scale(0.98);
                    }

                    @media (min-width: 768px) {
                        .hero-layer h1 { font-size: 6vw; }
                        .vision-grid { grid-template-columns: 1fr 1fr; }
                        .vision-copy h2 { font-size: 4.5rem; }
                        .course-grid { grid-template-columns: repeat(2, 1fr); }
                        .reviews-grid { grid-template-columns: repeat(3, 1fr); }
                        .contact-row { grid-template-columns: 1fr 1fr; }
                        .philosophy-inner h2 { font-size: 5rem; }
                        .footer-inner { flex-direction: row; justify-content: space-between; }
                        .partner-strip { gap: 6rem; }
                    }

                    @media (min-width: 1024px) {
                        .course-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
        </div>
    }
}
