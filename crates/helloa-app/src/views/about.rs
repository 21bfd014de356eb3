//! About page: mission, topics, and hosts.

use dioxus::prelude::*;

use crate::components::PageHead;
use crate::state::AppState;

#[component]
pub fn About() -> Element {
    let app_state = use_context::<AppState>();
    let site = &app_state.content.site;
    let meta = site.page_meta("About", "/about");
    let short_name = site.short_name.clone();
    let tagline = site.tagline.clone();
    let topics = site.topics.clone();
    let hosts = site.hosts.clone();

    rsx! {
        PageHead { meta }
        div { class: "page",
            section { class: "container narrow hero--centered",
                span { class: "badge", "About {short_name}" }
                h1 { class: "hero__title", "{tagline}" }
                p { class: "hero__lead muted",
                    "{short_name} is a podcast dedicated to modern web development, where we explore "
                    "cutting-edge technologies, share best practices, and discuss the evolving "
                    "landscape of web applications."
                }
            }

            section { class: "container narrow",
                div { class: "card",
                    div { class: "card__header",
                        h2 { class: "card__title", "Our Mission" }
                    }
                    div { class: "card__content prose",
                        p {
                            "We believe that great web development is about more than just writing code. "
                            "It's about creating meaningful experiences that work for everyone. Our mission "
                            "is to empower developers with the knowledge, tools, and inspiration they need "
                            "to build better web applications."
                        }
                        p {
                            "Through in-depth discussions, practical examples, and expert insights, we "
                            "explore the latest trends and technologies in web development, from React and "
                            "Next.js to performance optimization, accessibility, and beyond."
                        }
                    }
                }
            }

            if !topics.is_empty() {
                section { class: "container narrow",
                    div { class: "section-heading",
                        h2 { "What We Cover" }
                        p { class: "muted", "From foundational concepts to advanced techniques" }
                    }
                    div { class: "two-col",
                        for topic in topics {
                            div { key: "{topic.title}", class: "card",
                                div { class: "card__header",
                                    h3 { class: "card__title", "{topic.title}" }
                                }
                                div { class: "card__content",
                                    p { class: "muted", "{topic.summary}" }
                                }
                            }
                        }
                    }
                }
            }

            if !hosts.is_empty() {
                section { class: "container narrow",
                    div { class: "section-heading",
                        h2 { "Meet Your Hosts" }
                        p { class: "muted", "The voices behind {short_name}" }
                    }
                    div { class: "two-col",
                        for host in hosts {
                            div { key: "{host.name}", class: "card host",
                                div { class: "host__avatar",
                                    img { src: "{host.avatar}", alt: "{host.name}" }
                                }
                                div { class: "card__header",
                                    h3 { class: "card__title", "{host.name}" }
                                    p { class: "host__role", "{host.role}" }
                                }
                                div { class: "card__content",
                                    p { class: "muted", "{host.bio}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
