use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::{SectionId, Viewport};

/// [`Viewport`] backed by the live document.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to(&self, section: SectionId) -> bool {
        let Some(el) = document().get_element_by_id(section.as_str()) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    fn open_document(&self, path: &str) {
        if let Err(e) = window().open_with_url_and_target(path, "_blank") {
            log::warn!("couldn't open {path}: {e:?}");
        }
    }
}
