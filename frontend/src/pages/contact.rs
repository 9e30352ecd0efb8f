use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::SocialLink;
use crate::error::SiteError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty() {
            return Err(SiteError::Validation("Please enter your name"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SiteError::Validation("Please enter a valid email address"));
        }
        if self.message.trim().is_empty() {
            return Err(SiteError::Validation("Please write a message"));
        }
        Ok(())
    }

    /// `mailto:` link that opens the visitor's mail client with the form
    /// filled in.
    pub fn mailto_url(&self, to: &str) -> Result<String, SiteError> {
        self.validate()?;
        let subject = format!("Portfolio inquiry from {}", self.name.trim());
        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        );
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub socials: Vec<SocialLink>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| None::<Result<(), String>>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm {
                message: input.value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.mailto_url(config::CONTACT_EMAIL) {
                Ok(url) => {
                    info!("Opening mail client for contact form");
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(&url) {
                            warn!("Could not open mail client: {:?}", e);
                        }
                    }
                    status.set(Some(Ok(())));
                }
                Err(e) => status.set(Some(Err(e.to_string()))),
            }
        })
    };

    let mail_href = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner">
                <h2 class="section-title">
                    {"Let's Create Something "}<span class="accent">{"Innovative Together"}</span>
                </h2>
                <p class="section-subtitle">{"Have a project in mind? I'd love to hear from you."}</p>
                <div class="contact-grid">
                    <form class="contact-form" {onsubmit}>
                        <label for="contact-name">{"Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            value={form.name.clone()}
                            oninput={on_name}
                            required=true
                        />
                        <label for="contact-email">{"Email"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            value={form.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            rows="6"
                            value={form.message.clone()}
                            oninput={on_message}
                            required=true
                        />
                        {
                            match &*status {
                                Some(Ok(())) => html! {
                                    <p class="form-status success">{"Your mail app should open with the message ready to send."}</p>
                                },
                                Some(Err(message)) => html! {
                                    <p class="form-status error">{message}</p>
                                },
                                None => html! {},
                            }
                        }
                        <button type="submit" class="contact-submit">{"Send Message"}</button>
                    </form>
                    <div class="contact-aside">
                        <h3>{"Get in touch"}</h3>
                        <p>{"Whether it is a website, a brand, or a network to set up, reach out and let's talk."}</p>
                        <ul class="social-links">
                            <li><a href={mail_href}>{"Email"}</a></li>
                            { for props.socials.iter().map(|social| html! {
                                <li>
                                    <a href={social.href.clone()} target="_blank" rel="noopener noreferrer">
                                        {&social.label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-section { padding: 6rem 0; background: var(--surface); }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 3rem;
                }
                .contact-form { display: flex; flex-direction: column; gap: 0.5rem; }
                .contact-form label { font-size: 0.875rem; font-weight: 500; color: var(--muted); margin-top: 1rem; }
                .contact-form input, .contact-form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--text);
                    font: inherit;
                    resize: none;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px var(--accent);
                }
                .form-status { font-size: 0.875rem; margin: 0.5rem 0 0; }
                .form-status.success { color: #16a34a; }
                .form-status.error { color: #dc2626; }
                .contact-submit {
                    margin-top: 1.5rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #facc15;
                    color: #111;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .contact-submit:hover { transform: scale(1.05); }
                .contact-aside h3 { color: var(--text); margin-bottom: 1rem; }
                .contact-aside p { color: var(--muted); }
                .social-links { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
                .social-links a {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    background: var(--card);
                    color: var(--text);
                    text-decoration: none;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .social-links a:hover { background: var(--accent); color: #111; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana Cruz".into(),
            email: "ana@example.com".into(),
            message: "Need a logo & site?\nThanks".into(),
        }
    }

    #[test]
    fn mailto_percent_encodes_subject_and_body() {
        let url = filled().mailto_url("contact@mvpvisuals.com").unwrap();
        assert_eq!(
            url,
            "mailto:contact@mvpvisuals.com?subject=Portfolio%20inquiry%20from%20Ana%20Cruz\
             &body=Name%3A%20Ana%20Cruz%0AEmail%3A%20ana%40example.com%0A%0ANeed%20a%20logo%20%26%20site%3F%0AThanks"
        );
    }

    #[test]
    fn missing_fields_are_rejected() {
        let form = ContactForm {
            name: "  ".into(),
            ..filled()
        };
        assert!(matches!(form.validate(), Err(SiteError::Validation("Please enter your name"))));

        let form = ContactForm {
            message: String::new(),
            ..filled()
        };
        assert!(form.mailto_url("x@y.z").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a@b..co"));
    }
}
