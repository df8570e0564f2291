use maud::{Markup, html};

use crate::models::PostId;
use crate::store::Tracked;

pub(super) fn render(post_id: PostId, delete: &Tracked) -> Markup {
    let dialog_id = format!("delete-post-{post_id}");
    html! {
        div class="pv-dialog-backdrop" {
            div id=(dialog_id) class="pv-dialog" role="alertdialog" aria-modal="true" {
                h2 { "Delete post?" }
                p { "This post and its comments will be removed. This cannot be undone." }
                @if let Some(error) = delete.error.as_deref().filter(|_| delete.is_failed()) {
                    p class="pv-notice" { "Delete failed: " (error) }
                }
                div class="pv-actions" {
                    button type="button" class="pv-btn pv-btn-ghost" { "Cancel" }
                    button type="button" class="pv-btn pv-btn-danger" disabled[delete.is_pending()] {
                        "Delete"
                    }
                }
            }
        }
    }
}
