//! Header, mobile menu, and footer around every page.

use dioxus::prelude::*;
use helloa_core::{NavLink, ShellState};
use tracing::info;

use super::icons::MenuIcon;
use crate::routes::Route;
use crate::state::AppState;

/// Layout wrapping every route.
///
/// Owns the mobile menu state for this shell instance only.
#[component]
pub fn SiteShell() -> Element {
    let app_state = use_context::<AppState>();
    let mut shell = use_signal(ShellState::new);
    let menu_open = shell.read().is_menu_open();

    let path = use_route::<Route>().to_string();
    use_effect(use_reactive((&path,), |(path,)| info!("Showing {path}")));

    let site = &app_state.content.site;
    let short_name = site.short_name.clone();
    let full_name = site.name.clone();
    let mailto = site.mailto();
    let copyright_year = site.copyright_year;

    rsx! {
        div { class: "shell",
            header { class: "shell__header",
                div { class: "container shell__bar",
                    Link {
                        to: Route::Home {},
                        class: "shell__brand",
                        onclick: move |_| {
                            let next = shell.read().navigate();
                            shell.set(next);
                        },
                        div { class: "shell__logo" }
                        span { class: "shell__wordmark", "{short_name}" }
                    }

                    // Desktop navigation
                    nav { class: "shell__nav",
                        for link in NavLink::PRIMARY.iter().copied() {
                            NavItem {
                                key: "{link.path}",
                                link,
                                class: "shell__nav-link",
                                shell,
                            }
                        }
                    }

                    // Mobile navigation button
                    button {
                        class: "shell__menu-btn",
                        aria_label: "Toggle menu",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| {
                            let next = shell.read().toggle_menu();
                            shell.set(next);
                        },
                        MenuIcon { open: menu_open }
                    }
                }

                // Mobile navigation menu
                if menu_open {
                    div { class: "shell__mobile",
                        nav { class: "container shell__mobile-nav",
                            for link in NavLink::PRIMARY.iter().copied() {
                                NavItem {
                                    key: "{link.path}",
                                    link,
                                    class: "shell__mobile-link",
                                    shell,
                                }
                            }
                        }
                    }
                }
            }

            main { class: "shell__main",
                Outlet::<Route> {}
            }

            footer { class: "shell__footer",
                div { class: "container",
                    div { class: "shell__footer-row",
                        div { class: "shell__footer-brand",
                            div { class: "shell__logo shell__logo--small" }
                            span { "{full_name}" }
                        }
                        div { class: "shell__footer-links",
                            for link in NavLink::FOOTER.iter().copied() {
                                NavItem {
                                    key: "{link.path}",
                                    link,
                                    class: "shell__footer-link",
                                    shell,
                                }
                            }
                            a { class: "shell__footer-link", href: "{mailto}", "Contact" }
                        }
                    }
                    div { class: "shell__copyright",
                        p { "© {copyright_year} {full_name}. All rights reserved." }
                    }
                }
            }
        }
    }
}

/// One navigation link. Activating it closes the mobile menu.
#[component]
fn NavItem(link: NavLink, class: &'static str, shell: Signal<ShellState>) -> Element {
    let mut shell = shell;
    let route = Route::from_path(link.path);

    rsx! {
        Link {
            to: route,
            class: "{class}",
            onclick: move |_| {
                let next = shell.read().navigate();
                shell.set(next);
            },
            "{link.label}"
        }
    }
}
