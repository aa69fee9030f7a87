//! Pure HTML rendering of content blocks.
//!
//! Rendering is total: every missing field substitutes a documented default
//! and an unrecognized block type renders a diagnostic placeholder, so no
//! component record can make a page fail to render.

#[cfg(test)]
mod tests;

use crate::blocks::{
    BlockContent, ContactContent, CtaContent, FeaturesContent, GalleryContent, HeroContent,
    ImageContent, TestimonialContent, TextContent,
};
use crate::model::Component;
use url::Url;

const IMAGE_FALLBACK: &str =
    "https://via.placeholder.com/800x400/1e293b/64748b?text=Image+Not+Found";
const HERO_BACKGROUND_FALLBACK: &str =
    "https://via.placeholder.com/1200x600/1e293b/64748b?text=Hero+Background";
const AVATAR_FALLBACK: &str = "https://via.placeholder.com/64x64/1e293b/64748b?text=Avatar";
const GALLERY_FALLBACK: &str =
    "https://via.placeholder.com/400x300/1e293b/64748b?text=Gallery+Image";

/// Render a page's components in list order
pub fn page(components: &[Component]) -> String {
    let blocks: Vec<String> = components.iter().map(block).collect();
    format!("<main>\n{}\n</main>", blocks.join("\n"))
}

/// Render a single component to an HTML fragment
pub fn block(component: &Component) -> String {
    content(&component.content)
}

/// Render block content to an HTML fragment
pub fn content(content: &BlockContent) -> String {
    match content {
        BlockContent::Hero(c) => hero(c),
        BlockContent::Text(c) => text(c),
        BlockContent::Image(c) => image(c),
        BlockContent::Features(c) => features(c),
        BlockContent::Cta(c) => cta(c),
        BlockContent::Contact(c) => contact(c),
        BlockContent::Testimonial(c) => testimonial(c),
        BlockContent::Gallery(c) => gallery(c),
        BlockContent::Unknown(tag) => unknown(tag),
    }
}

fn hero(c: &HeroContent) -> String {
    let mut out = String::from("<section class=\"block block-hero\">");
    if !c.background_image.is_empty() {
        out.push_str(&format!(
            "<div class=\"hero-background\"><img src=\"{}\" alt=\"Hero background\"></div>",
            escape(&resolve_src(&c.background_image, HERO_BACKGROUND_FALLBACK))
        ));
    }
    out.push_str(&format!("<h1>{}</h1>", escape(or_default(&c.title, "Default Title"))));
    if !c.subtitle.is_empty() {
        out.push_str(&format!("<h2>{}</h2>", escape(&c.subtitle)));
    }
    if !c.description.is_empty() {
        out.push_str(&format!("<p class=\"description\">{}</p>", escape(&c.description)));
    }
    if !c.button_text.is_empty() {
        out.push_str(&format!("<button>{}</button>", escape(&c.button_text)));
    }
    out.push_str("</section>");
    out
}

fn text(c: &TextContent) -> String {
    format!(
        "<section class=\"block block-text\"><p>{}</p></section>",
        escape(or_default(&c.content, "Default content"))
    )
}

fn image(c: &ImageContent) -> String {
    let mut out = String::from("<figure class=\"block block-image\">");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape(&resolve_src(&c.src, IMAGE_FALLBACK)),
        escape(or_default(&c.alt, "Image"))
    ));
    if !c.caption.is_empty() {
        out.push_str(&format!("<figcaption>{}</figcaption>", escape(&c.caption)));
    }
    out.push_str("</figure>");
    out
}

fn features(c: &FeaturesContent) -> String {
    let mut out = String::from("<section class=\"block block-features\">");
    if !c.title.is_empty() {
        out.push_str(&format!("<h3>{}</h3>", escape(&c.title)));
    }
    if c.features.is_empty() {
        out.push_str("<p class=\"empty\">No features available</p>");
    } else {
        out.push_str("<ul class=\"features\">");
        for feature in &c.features {
            out.push_str(&format!(
                "<li><span class=\"feature-icon\" data-icon=\"{}\"></span><h4>{}</h4><p>{}</p></li>",
                escape(&feature.icon),
                escape(&feature.title),
                escape(&feature.description)
            ));
        }
        out.push_str("</ul>");
    }
    out.push_str("</section>");
    out
}

fn cta(c: &CtaContent) -> String {
    let mut out = String::from("<section class=\"block block-cta\">");
    out.push_str(&format!("<h3>{}</h3>", escape(or_default(&c.title, "Call to Action"))));
    if !c.description.is_empty() {
        out.push_str(&format!("<p>{}</p>", escape(&c.description)));
    }
    out.push_str(&format!(
        "<button>{}</button>",
        escape(or_default(&c.button_text, "Get Started"))
    ));
    out.push_str("</section>");
    out
}

fn contact(c: &ContactContent) -> String {
    let mut out = String::from("<section class=\"block block-contact\">");
    if !c.title.is_empty() {
        out.push_str(&format!("<h3>{}</h3>", escape(&c.title)));
    }
    if !c.description.is_empty() {
        out.push_str(&format!("<p>{}</p>", escape(&c.description)));
    }
    out.push_str("<ul class=\"contact-details\">");
    if !c.email.is_empty() {
        out.push_str(&format!("<li class=\"email\">{}</li>", escape(&c.email)));
    }
    if !c.phone.is_empty() {
        out.push_str(&format!("<li class=\"phone\">{}</li>", escape(&c.phone)));
    }
    if !c.address.is_empty() {
        out.push_str(&format!("<li class=\"address\">{}</li>", escape(&c.address)));
    }
    out.push_str("</ul>");
    // Static inquiry form, identical for every contact block
    out.push_str(
        "<form>\
         <input type=\"text\" placeholder=\"Your Name\">\
         <input type=\"email\" placeholder=\"Your Email\">\
         <textarea placeholder=\"Your Message\"></textarea>\
         <button>Send Message</button>\
         </form>",
    );
    out.push_str("</section>");
    out
}

fn testimonial(c: &TestimonialContent) -> String {
    let mut out = String::from("<section class=\"block block-testimonial\">");
    out.push_str(&format!(
        "<img class=\"avatar\" src=\"{}\" alt=\"{}\">",
        escape(&resolve_src(&c.avatar, AVATAR_FALLBACK)),
        escape(or_default(&c.author, "Avatar"))
    ));
    out.push_str(&format!(
        "<blockquote>&quot;{}&quot;</blockquote>",
        escape(or_default(&c.quote, "Customer testimonial"))
    ));
    out.push_str(&format!(
        "<p class=\"author\">{}</p>",
        escape(or_default(&c.author, "Anonymous"))
    ));
    out.push_str(&format!(
        "<p class=\"position\">{}</p>",
        escape(or_default(&c.position, "Customer"))
    ));
    out.push_str("</section>");
    out
}

fn gallery(c: &GalleryContent) -> String {
    let mut out = String::from("<section class=\"block block-gallery\">");
    if !c.title.is_empty() {
        out.push_str(&format!("<h3>{}</h3>", escape(&c.title)));
    }
    if c.images.is_empty() {
        out.push_str("<p class=\"empty\">No images available</p>");
    } else {
        for (index, item) in c.images.iter().enumerate() {
            let alt = if item.alt.is_empty() {
                format!("Gallery image {}", index + 1)
            } else {
                item.alt.clone()
            };
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape(&resolve_src(&item.src, GALLERY_FALLBACK)),
                escape(&alt)
            ));
        }
    }
    out.push_str("</section>");
    out
}

fn unknown(tag: &str) -> String {
    format!(
        "<section class=\"block block-unknown\"><p>Unknown component type: {}</p></section>",
        escape(tag)
    )
}

/// Substitute `fallback` when the field is empty
fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Decide whether an image source is usable. Absolute URLs and site-relative
/// paths pass through; anything else falls back to the placeholder.
fn resolve_src(src: &str, fallback: &str) -> String {
    if src.starts_with('/') {
        return src.to_string();
    }
    match Url::parse(src) {
        Ok(_) => src.to_string(),
        Err(_) => fallback.to_string(),
    }
}

/// Escape text for use in HTML text nodes and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
