//! Document title and social tags.

use dioxus::prelude::*;
use helloa_core::{PageMeta, OG_LOCALE, TWITTER_CARD};

/// Writes a page's metadata into the document head.
#[component]
pub fn PageHead(meta: PageMeta) -> Element {
    let keywords = meta.keywords_content();
    let PageMeta {
        title,
        description,
        image,
        canonical_url,
        site_name,
        og_type,
        twitter_creator,
        ..
    } = meta;

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: description.clone() }
        if let Some(keywords) = keywords {
            document::Meta { name: "keywords", content: keywords }
        }

        // OpenGraph
        document::Meta { property: "og:type", content: og_type }
        document::Meta { property: "og:locale", content: OG_LOCALE }
        document::Meta { property: "og:site_name", content: site_name }
        document::Meta { property: "og:title", content: title.clone() }
        document::Meta { property: "og:description", content: description.clone() }
        if let Some(image) = image.clone() {
            document::Meta { property: "og:image", content: image }
        }
        if let Some(url) = canonical_url {
            document::Meta { property: "og:url", content: url.clone() }
            document::Link { rel: "canonical", href: url }
        }

        // Twitter card
        document::Meta { name: "twitter:card", content: TWITTER_CARD }
        document::Meta { name: "twitter:title", content: title }
        document::Meta { name: "twitter:description", content: description }
        if let Some(image) = image {
            document::Meta { name: "twitter:image", content: image }
        }
        if let Some(creator) = twitter_creator {
            document::Meta { name: "twitter:creator", content: creator }
        }
    }
}
