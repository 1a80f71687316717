use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <h1>{"Aura AI Academy Privacy Policy"}</h1>
            <p class="company-name">{"Aura AI Academy · 공간 시대를 위한 디자인"}</p>

            <section>
                <h2>{"1. Information We Collect"}</h2>
                <p>{"Browsing this site requires no account and stores nothing about you. The only personal information we ever receive is what you choose to send through the contact form:"}</p>
                <ul>
                    <li>{"Your name"}</li>
                    <li>{"Your email address"}</li>
                    <li>{"The content of your inquiry"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How Contact Inquiries Are Handled"}</h2>
                <p>{"Contact submissions are synced to a spreadsheet-backed inbox our team answers from. They are used solely to respond to your inquiry and are never sold or shared with third parties."}</p>
            </section>

            <section>
                <h2>{"3. Cookies and Tracking"}</h2>
                <p>{"This site sets no cookies and runs no analytics or advertising trackers. Course selection and menu state live only in your browser tab and disappear when you leave."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <ul>
                    <li>{"Ask what information of yours we hold"}</li>
                    <li>{"Request correction or deletion of a past inquiry"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>{"For privacy-related questions, reach us through the contact form on the home page."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>

            <style>{ LEGAL_STYLE }</style>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content">
            <h1>{"Aura AI Academy Terms of Service"}</h1>
            <p class="company-name">{"Aura AI Academy · 공간 시대를 위한 디자인"}</p>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms govern your use of the Aura AI Academy website. By browsing the site or submitting an inquiry you agree to be bound by them."}</p>
            </section>

            <section>
                <h2>{"2. Course Information"}</h2>
                <p>{"Course descriptions, schedules, and included benefits shown on this site are informational and may change before enrollment. Enrollment itself, including payment and refund terms, is agreed separately at sign-up."}</p>
            </section>

            <section>
                <h2>{"3. Acceptable Use"}</h2>
                <p>{"You agree not to use the contact form to send unlawful, abusive, or automated bulk content, and not to interfere with the operation of the site."}</p>
            </section>

            <section>
                <h2>{"4. Intellectual Property"}</h2>
                <p>{"All course materials, copy, and visual design on this site belong to Aura AI Academy. Bilingual course descriptions may not be reproduced without permission."}</p>
            </section>

            <section>
                <h2>{"5. Changes"}</h2>
                <p>{"We may update these Terms from time to time; the version published here is the one in force."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>

            <style>{ LEGAL_STYLE }</style>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
    .legal-content {
        max-width: 48rem;
        margin: 0 auto;
        padding: 8rem 1.5rem 4rem;
        color: #0F172A;
    }

    .legal-content h1 {
        font-size: 2.25rem;
        font-weight: 700;
        margin: 0 0 0.5rem;
    }

    .company-name {
        color: rgba(15, 23, 42, 0.5);
        margin: 0 0 3rem;
    }

    .legal-content section {
        margin-bottom: 2.5rem;
    }

    .legal-content h2 {
        font-size: 1.25rem;
        font-weight: 700;
        margin: 0 0 1rem;
    }

    .legal-content p,
    .legal-content li {
        line-height: 1.7;
        color: rgba(15, 23, 42, 0.7);
    }

    .legal-links {
        margin-top: 4rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(15, 23, 42, 0.05);
        font-size: 0.875rem;
    }

    .legal-links a {
        color: rgba(15, 23, 42, 0.6);
    }
"#;
