use crate::core::VisualizationMode;
use web_sys as web;

fn overlay_element(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id("start-overlay")
}

/// Show or hide the start overlay. The CSS `hidden` class does the work; the
/// inline style is a fallback for pages loaded without the stylesheet.
pub fn set_hidden(document: &web::Document, hidden: bool) {
    let Some(el) = overlay_element(document) else {
        return;
    };
    let classes = el.class_list();
    if hidden {
        _ = classes.add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = classes.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

pub fn hide(document: &web::Document) {
    set_hidden(document, true);
}

pub fn is_hidden(document: &web::Document) -> bool {
    overlay_element(document)
        .map(|el| {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .is_some_and(|s| s.contains("display:none"))
        })
        .unwrap_or(false)
}

pub fn toggle(document: &web::Document) {
    let hidden = is_hidden(document);
    set_hidden(document, !hidden);
}

/// Refresh the hint line with the current mode, sensitivity and input source.
/// The element is styled from the page stylesheet; only the text changes here.
pub fn update_hint(
    document: &web::Document,
    mode: Option<VisualizationMode>,
    sensitivity: f32,
    source_label: &str,
) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let mode_name = mode.map(VisualizationMode::name).unwrap_or("none");
        el.set_text_content(Some(&format!(
            "mode: {mode_name} | sensitivity: {sensitivity:.1} | input: {source_label}"
        )));
    }
}

pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        el.set_attribute("style", "").ok();
    }
}
