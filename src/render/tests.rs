use crate::blocks::{BlockContent, BlockType};
use crate::model::{AiTriggerRules, Component};
use crate::render;
use scraper::{Html, Selector};

fn component(content: BlockContent) -> Component {
    Component {
        id: 1,
        page_id: 1,
        content,
        position: 1,
        ai_enabled: false,
        ai_trigger_rules: AiTriggerRules::default(),
    }
}

/// Deserialize block content from a raw record with an empty content object
fn empty_content(kind: &str) -> BlockContent {
    let json = format!(r#"{{"type":"{}","content":{{}}}}"#, kind);
    serde_json::from_str(&json).expect("empty content must deserialize")
}

fn select_one<'a>(doc: &'a Html, selector: &str) -> scraper::ElementRef<'a> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).next().unwrap_or_else(|| panic!("missing {}", selector))
}

fn text_of(doc: &Html, selector: &str) -> String {
    select_one(doc, selector).text().collect::<Vec<_>>().join("")
}

#[test]
fn every_block_type_renders_with_empty_content() {
    for kind in BlockType::ALL {
        let html = render::block(&component(empty_content(kind.as_str())));
        assert!(!html.is_empty(), "{} rendered nothing", kind.as_str());
        assert!(
            html.contains(&format!("block-{}", kind.as_str())),
            "{} missing block class",
            kind.as_str()
        );
    }
}

#[test]
fn hero_substitutes_title_default_and_omits_empty_optionals() {
    let html = render::block(&component(empty_content("hero")));
    let doc = Html::parse_fragment(&html);

    assert_eq!(text_of(&doc, "h1"), "Default Title");
    assert!(doc.select(&Selector::parse("h2").unwrap()).next().is_none());
    assert!(doc.select(&Selector::parse("button").unwrap()).next().is_none());
    assert!(doc.select(&Selector::parse(".hero-background").unwrap()).next().is_none());
}

#[test]
fn text_substitutes_content_default() {
    let html = render::block(&component(empty_content("text")));
    let doc = Html::parse_fragment(&html);
    assert_eq!(text_of(&doc, "p"), "Default content");
}

#[test]
fn image_falls_back_to_placeholder_src_and_alt() {
    let html = render::block(&component(empty_content("image")));
    let doc = Html::parse_fragment(&html);

    let img = select_one(&doc, "img");
    assert_eq!(
        img.value().attr("src").unwrap(),
        "https://via.placeholder.com/800x400/1e293b/64748b?text=Image+Not+Found"
    );
    assert_eq!(img.value().attr("alt").unwrap(), "Image");
}

#[test]
fn image_keeps_relative_and_absolute_sources() {
    let relative = render::content(&serde_json::from_str(
        r#"{"type":"image","content":{"src":"/api/placeholder/600/400"}}"#,
    )
    .unwrap());
    assert!(relative.contains("src=\"/api/placeholder/600/400\""));

    let absolute = render::content(&serde_json::from_str(
        r#"{"type":"image","content":{"src":"https://example.org/x.png"}}"#,
    )
    .unwrap());
    assert!(absolute.contains("src=\"https://example.org/x.png\""));

    // Not a URL and not site-relative, so the placeholder wins
    let garbage = render::content(&serde_json::from_str(
        r#"{"type":"image","content":{"src":"not a url"}}"#,
    )
    .unwrap());
    assert!(garbage.contains("via.placeholder.com"));
}

#[test]
fn features_with_no_entries_shows_empty_notice() {
    let html = render::block(&component(empty_content("features")));
    let doc = Html::parse_fragment(&html);
    assert_eq!(text_of(&doc, ".empty"), "No features available");
}

#[test]
fn features_render_each_entry() {
    let html = render::block(&component(BlockContent::default_for(BlockType::Features)));
    let doc = Html::parse_fragment(&html);

    let items: Vec<_> = doc.select(&Selector::parse("li").unwrap()).collect();
    assert_eq!(items.len(), 3);
    assert_eq!(text_of(&doc, "h3"), "Key Features");
    assert_eq!(
        select_one(&doc, ".feature-icon").value().attr("data-icon").unwrap(),
        "Star"
    );
}

#[test]
fn cta_substitutes_title_and_button_defaults() {
    let html = render::block(&component(empty_content("cta")));
    let doc = Html::parse_fragment(&html);
    assert_eq!(text_of(&doc, "h3"), "Call to Action");
    assert_eq!(text_of(&doc, "button"), "Get Started");
}

#[test]
fn contact_always_includes_the_inquiry_form() {
    let html = render::block(&component(empty_content("contact")));
    let doc = Html::parse_fragment(&html);

    assert!(doc.select(&Selector::parse("form").unwrap()).next().is_some());
    assert!(doc.select(&Selector::parse("textarea").unwrap()).next().is_some());
    // No details were provided, so no detail items render
    assert!(doc.select(&Selector::parse(".contact-details li").unwrap()).next().is_none());
}

#[test]
fn testimonial_substitutes_quote_author_and_position() {
    let html = render::block(&component(empty_content("testimonial")));
    let doc = Html::parse_fragment(&html);

    assert!(text_of(&doc, "blockquote").contains("Customer testimonial"));
    assert_eq!(text_of(&doc, ".author"), "Anonymous");
    assert_eq!(text_of(&doc, ".position"), "Customer");
    assert!(select_one(&doc, "img").value().attr("src").unwrap().contains("Avatar"));
}

#[test]
fn gallery_with_no_images_shows_empty_notice() {
    let html = render::block(&component(empty_content("gallery")));
    let doc = Html::parse_fragment(&html);
    assert_eq!(text_of(&doc, ".empty"), "No images available");
}

#[test]
fn gallery_numbers_unnamed_images() {
    let html = render::content(&serde_json::from_str(
        r#"{"type":"gallery","content":{"images":[{"src":""},{"src":""}]}}"#,
    )
    .unwrap());
    let doc = Html::parse_fragment(&html);

    let alts: Vec<_> = doc
        .select(&Selector::parse("img").unwrap())
        .filter_map(|img| img.value().attr("alt"))
        .collect();
    assert_eq!(alts, vec!["Gallery image 1", "Gallery image 2"]);
}

#[test]
fn unrecognized_type_renders_diagnostic_placeholder() {
    let content: BlockContent =
        serde_json::from_str(r#"{"type":"carousel","content":{"x":1}}"#).unwrap();
    assert_eq!(content, BlockContent::Unknown("carousel".to_string()));

    let html = render::content(&content);
    assert!(html.contains("Unknown component type: carousel"));
}

#[test]
fn unrecognized_type_tag_is_escaped_in_the_placeholder() {
    let html = render::content(&BlockContent::Unknown("<b>x</b>".to_string()));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
}

#[test]
fn rendered_text_is_escaped() {
    let html = render::content(&serde_json::from_str(
        r#"{"type":"text","content":{"content":"<script>alert(1)</script>"}}"#,
    )
    .unwrap());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn page_renders_blocks_in_list_order() {
    let blocks = vec![
        component(BlockContent::default_for(BlockType::Hero)),
        component(BlockContent::default_for(BlockType::Cta)),
    ];
    let html = render::page(&blocks);
    let hero_at = html.find("block-hero").unwrap();
    let cta_at = html.find("block-cta").unwrap();
    assert!(html.starts_with("<main>"));
    assert!(hero_at < cta_at);
}
