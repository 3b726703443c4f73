//! Small inline icon set (Material Design Icons paths) used by the navigation.

use dioxus::prelude::*;

const RECORD_CIRCLE_OUTLINE: &str = "M12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M12,7A5,5 0 0,0 7,12A5,5 0 0,0 12,17A5,5 0 0,0 17,12A5,5 0 0,0 12,7Z";
const CIRCLE_OUTLINE: &str = "M12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2Z";
const CLOSE: &str = "M19,6.41L17.59,5L12,10.59L6.41,5L5,6.41L10.59,12L5,17.59L6.41,19L12,13.41L17.59,19L19,17.59L13.41,12L19,6.41Z";

fn icon_svg(name: &'static str, shape: &'static str, style: Option<String>) -> Element {
    rsx! {
        svg {
            class: "icon icon--{name}",
            view_box: "0 0 24 24",
            width: "1em",
            height: "1em",
            fill: "currentColor",
            style: style.unwrap_or_default(),
            "aria-hidden": "true",
            path { d: shape }
        }
    }
}

#[component]
pub fn RecordCircleOutlineIcon(style: Option<String>) -> Element {
    icon_svg("record-circle-outline", RECORD_CIRCLE_OUTLINE, style)
}

#[component]
pub fn CircleOutlineIcon(style: Option<String>) -> Element {
    icon_svg("circle-outline", CIRCLE_OUTLINE, style)
}

#[component]
pub fn CloseIcon(style: Option<String>) -> Element {
    icon_svg("close", CLOSE, style)
}
