use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::content::PROFILE;
use crate::motion::transition::Motion;

fn copyright_line(year: i32) -> String {
    format!("© {} {}. Made with ❤️ by {}", year, PROFILE.name, PROFILE.credit_name)
}

fn display_url(url: &str) -> String {
    let host = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    if host.starts_with("www.") {
        host.to_string()
    } else {
        format!("www.{}", host)
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    background: #ffffff;
                    border-top: 1px solid #f3f4f6;
                    padding: 2rem 1rem;
                    text-align: center;
                }
                .footer-text {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: #4b5563;
                }
                .footer-credit {
                    display: inline-flex;
                    gap: 0.25rem;
                    color: inherit;
                    text-decoration: none;
                }
                .footer-credit:hover {
                    color: #0369a1;
                    text-decoration: underline;
                }
                .footer-credit .icon {
                    width: 1rem;
                    transform: rotate(-45deg);
                }
                "#}
            </style>
            <Reveal motion={Motion::FadeUp(20.0)}>
                <div class="footer-text">
                    { copyright_line(year) }
                    <a href={PROFILE.credit_url} class="footer-credit">
                        { display_url(PROFILE.credit_url) }
                        <Icon kind={IconKind::ArrowRight} />
                    </a>
                </div>
            </Reveal>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_name() {
        let line = copyright_line(2026);
        assert!(line.starts_with("© 2026 Sunil Bogati."));
        assert!(line.ends_with(PROFILE.credit_name));
    }

    #[test]
    fn credit_url_is_shown_without_scheme() {
        assert_eq!(display_url("https://sudipbogati.com.np"), "www.sudipbogati.com.np");
        assert_eq!(display_url("https://www.example.com/"), "www.example.com");
    }
}
