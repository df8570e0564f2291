use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::store::RootState;

/// Wraps a view's markup into a complete, self-contained HTML document.
pub fn build_page(state: &RootState, title: &str, content: Markup) -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (title) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body class="pv" {
                header class="pv-topbar" {
                    div class="pv-container pv-topbar-inner" {
                        a class="pv-brand" href="/" { "Posts" }
                        span class="pv-session" {
                            @if let Some(user) = state.signin.user() {
                                "Signed in as " (user.name)
                            } @else {
                                a href="/signin" { "Sign in" }
                            }
                        }
                    }
                }
                main class="pv-container pv-main" {
                    (content)
                }
            }
        }
    };
    markup.into_string()
}
