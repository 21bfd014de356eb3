//! FAQ page: grouped accordion and contact prompt.

use dioxus::prelude::*;
use helloa_core::FaqToggles;

use crate::components::{ChevronIcon, MailIcon, PageHead};
use crate::state::AppState;

#[component]
pub fn Faq() -> Element {
    let app_state = use_context::<AppState>();
    let content = app_state.content.clone();
    let meta = content.site.page_meta("FAQ", "/faq");
    let mailto = content.site.mailto();
    let site_name = content.site.name.clone();

    let mut toggles = use_signal(FaqToggles::new);
    let open = toggles.read().clone();

    rsx! {
        PageHead { meta }
        div { class: "page",
            section { class: "container narrow hero--centered",
                span { class: "badge", "Frequently Asked Questions" }
                h1 { class: "hero__title", "Got Questions? We've Got Answers." }
                p { class: "hero__lead muted",
                    "Find answers to common questions about {site_name}, "
                    "our content, and how to get the most out of our episodes."
                }
            }

            section { class: "container narrow faq",
                for category in content.faq.categories() {
                    div { key: "{category.label}", class: "faq__group",
                        h2 { class: "faq__category", "{category.label}" }
                        for (index, item) in content.faq.category_items(category) {
                            div { key: "{index}", class: "card faq__item",
                                button {
                                    class: "faq__question",
                                    aria_expanded: open.is_open(index).to_string(),
                                    aria_controls: FaqToggles::answer_id(index),
                                    onclick: move |_| {
                                        toggles.write().toggle(index);
                                    },
                                    h3 { class: "card__title", "{item.question}" }
                                    ChevronIcon { open: open.is_open(index) }
                                }
                                if open.is_open(index) {
                                    div {
                                        id: FaqToggles::answer_id(index),
                                        class: "card__content faq__answer",
                                        p { "{item.answer}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "container narrow hero--centered",
                h2 { "Still have questions?" }
                p { class: "muted",
                    "Can't find the answer you're looking for? We'd love to hear from you."
                }
                a { class: "btn btn--lg", href: "{mailto}",
                    MailIcon {}
                    "Get in Touch"
                }
            }
        }
    }
}
