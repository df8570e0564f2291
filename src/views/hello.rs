use maud::{Markup, html};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::store::{RootState, Store};
use crate::thunk;

#[derive(Debug, Default)]
pub struct HelloView;

impl HelloView {
    pub async fn mount(&self, store: &Store, api: &ApiClient) -> Result<(), ApiError> {
        thunk::get_hello(store, api).await?;
        Ok(())
    }

    pub fn render(&self, state: &RootState) -> Markup {
        let hello = state.hello.hello.as_ref();
        html! {
            section class="pv-hello" {
                @if state.hello.fetch.is_failed() {
                    p class="pv-notice" { "Backend unreachable" }
                }
                p class="pv-hello-message" lang=[hello.map(|h| h.lang.as_str()).filter(|l| !l.is_empty())] {
                    (hello.map(|h| h.message.as_str()).unwrap_or(""))
                }
            }
        }
    }
}
