//! Inline SVG icons.

use dioxus::prelude::*;

/// Play triangle.
#[component]
pub fn PlayIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            polygon { points: "6,4 20,12 6,20" }
        }
    }
}

/// Pause bars.
#[component]
pub fn PauseIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "currentColor",
            rect { x: "6", y: "4", width: "4", height: "16" }
            rect { x: "14", y: "4", width: "4", height: "16" }
        }
    }
}

/// Speaker, crossed out when `muted`.
#[component]
pub fn VolumeIcon(muted: bool) -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            polygon { points: "11,5 6,9 2,9 2,15 6,15 11,19", fill: "currentColor" }
            if muted {
                line { x1: "22", y1: "9", x2: "16", y2: "15" }
                line { x1: "16", y1: "9", x2: "22", y2: "15" }
            } else {
                path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
                path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
            }
        }
    }
}

/// Hamburger, or a cross when the menu is open.
#[component]
pub fn MenuIcon(open: bool) -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            if open {
                line { x1: "18", y1: "6", x2: "6", y2: "18" }
                line { x1: "6", y1: "6", x2: "18", y2: "18" }
            } else {
                line { x1: "3", y1: "6", x2: "21", y2: "6" }
                line { x1: "3", y1: "12", x2: "21", y2: "12" }
                line { x1: "3", y1: "18", x2: "21", y2: "18" }
            }
        }
    }
}

/// Accordion chevron, pointing up when `open`.
#[component]
pub fn ChevronIcon(open: bool) -> Element {
    let points = if open { "6,15 12,9 18,15" } else { "6,9 12,15 18,9" };
    rsx! {
        svg {
            class: "icon-muted",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            polyline { points: "{points}" }
        }
    }
}

#[component]
pub fn ArrowLeftIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            line { x1: "19", y1: "12", x2: "5", y2: "12" }
            polyline { points: "12,19 5,12 12,5" }
        }
    }
}

#[component]
pub fn LinkIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
            path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
        }
    }
}

#[component]
pub fn MailIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            polyline { points: "22,6 12,13 2,6" }
        }
    }
}
