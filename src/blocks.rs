use serde::{Deserialize, Serialize};

/// Closed set of content-block types available in the builder palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Large banner with title, subtitle, and call-to-action
    Hero,
    /// Rich text content
    Text,
    /// Single image with caption and alt text
    Image,
    /// Grid of features with icons and descriptions
    Features,
    /// Prominent call-to-action button
    Cta,
    /// Contact details plus a static inquiry form
    Contact,
    /// Customer quote and attribution
    Testimonial,
    /// Collection of images in a grid layout
    Gallery,
}

impl BlockType {
    /// Every block type, in palette order
    pub const ALL: [Self; 8] = [
        Self::Hero,
        Self::Text,
        Self::Image,
        Self::Features,
        Self::Cta,
        Self::Contact,
        Self::Testimonial,
        Self::Gallery,
    ];

    /// The lowercase tag used in serialized component records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Text => "text",
            Self::Image => "image",
            Self::Features => "features",
            Self::Cta => "cta",
            Self::Contact => "contact",
            Self::Testimonial => "testimonial",
            Self::Gallery => "gallery",
        }
    }

    /// Human-readable palette label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Hero Section",
            Self::Text => "Text Block",
            Self::Image => "Image",
            Self::Features => "Features Grid",
            Self::Cta => "Call to Action",
            Self::Contact => "Contact Form",
            Self::Testimonial => "Testimonial",
            Self::Gallery => "Image Gallery",
        }
    }
}

/// Content fields for a hero block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub background_image: String,
}

/// Content fields for a text block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
}

/// Content fields for an image block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
}

/// One entry in a features grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Content fields for a features block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Content fields for a call-to-action block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button_text: String,
}

/// Content fields for a contact block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Content fields for a testimonial block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialContent {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub avatar: String,
}

/// One entry in a gallery grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Content fields for a gallery block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

/// Tagged union of block content, one variant per palette type.
///
/// Serialized as sibling `type` and `content` keys so component records keep
/// the shape `{ "type": "hero", "content": { ... } }`. Records carrying a tag
/// outside the closed set deserialize to `Unknown` with the tag retained
/// instead of failing, so one unrecognized block never rejects a whole seed.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Hero(HeroContent),
    Text(TextContent),
    Image(ImageContent),
    Features(FeaturesContent),
    Cta(CtaContent),
    Contact(ContactContent),
    Testimonial(TestimonialContent),
    Gallery(GalleryContent),
    Unknown(String),
}

impl Serialize for BlockContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.kind())?;
        match self {
            Self::Hero(c) => map.serialize_entry("content", c)?,
            Self::Text(c) => map.serialize_entry("content", c)?,
            Self::Image(c) => map.serialize_entry("content", c)?,
            Self::Features(c) => map.serialize_entry("content", c)?,
            Self::Cta(c) => map.serialize_entry("content", c)?,
            Self::Contact(c) => map.serialize_entry("content", c)?,
            Self::Testimonial(c) => map.serialize_entry("content", c)?,
            Self::Gallery(c) => map.serialize_entry("content", c)?,
            // The unrecognized payload was discarded on load, so an unknown
            // block serializes with an empty content object.
            Self::Unknown(_) => map.serialize_entry("content", &serde_json::Map::new())?,
        }
        map.end()
    }
}

// Hand-written so an unrecognized tag degrades to `Unknown` even when the
// record carries a `content` object, which a `#[serde(other)]` unit variant
// cannot accept.
impl<'de> Deserialize<'de> for BlockContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(rename = "type")]
            tag: String,
            #[serde(default)]
            content: serde_json::Value,
        }

        fn parse<T, E>(content: serde_json::Value) -> Result<T, E>
        where
            T: serde::de::DeserializeOwned,
            E: serde::de::Error,
        {
            serde_json::from_value(content).map_err(E::custom)
        }

        let Tagged { tag, content } = Tagged::deserialize(deserializer)?;
        // A missing content key reads as every field defaulted
        let content = match content {
            serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
            other => other,
        };
        Ok(match tag.as_str() {
            "hero" => Self::Hero(parse(content)?),
            "text" => Self::Text(parse(content)?),
            "image" => Self::Image(parse(content)?),
            "features" => Self::Features(parse(content)?),
            "cta" => Self::Cta(parse(content)?),
            "contact" => Self::Contact(parse(content)?),
            "testimonial" => Self::Testimonial(parse(content)?),
            "gallery" => Self::Gallery(parse(content)?),
            _ => Self::Unknown(tag),
        })
    }
}

impl BlockContent {
    /// The block type of this content, or None for an unrecognized tag
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            Self::Hero(_) => Some(BlockType::Hero),
            Self::Text(_) => Some(BlockType::Text),
            Self::Image(_) => Some(BlockType::Image),
            Self::Features(_) => Some(BlockType::Features),
            Self::Cta(_) => Some(BlockType::Cta),
            Self::Contact(_) => Some(BlockType::Contact),
            Self::Testimonial(_) => Some(BlockType::Testimonial),
            Self::Gallery(_) => Some(BlockType::Gallery),
            Self::Unknown(_) => None,
        }
    }

    /// The serialized tag for this content
    pub fn kind(&self) -> &str {
        match self {
            Self::Unknown(tag) => tag.as_str(),
            _ => self.block_type().map_or("unknown", |t| t.as_str()),
        }
    }

    /// Starter content used when a block of the given type is dropped onto the
    /// canvas. Distinct from the render-time fallbacks: these are editable
    /// placeholder values, not substitutions for missing fields.
    pub fn default_for(kind: BlockType) -> Self {
        match kind {
            BlockType::Hero => Self::Hero(HeroContent {
                title: "Your Amazing Title".to_string(),
                subtitle: "Compelling Subtitle".to_string(),
                description: "Brief description that engages your visitors.".to_string(),
                button_text: "Get Started".to_string(),
                background_image: String::new(),
            }),
            BlockType::Text => Self::Text(TextContent {
                content: "Your text content goes here. Edit this to add your message."
                    .to_string(),
            }),
            BlockType::Image => Self::Image(ImageContent {
                src: "/api/placeholder/600/400".to_string(),
                alt: "Placeholder image".to_string(),
                caption: "Image caption".to_string(),
            }),
            BlockType::Features => Self::Features(FeaturesContent {
                title: "Key Features".to_string(),
                features: vec![
                    Feature {
                        icon: "Star".to_string(),
                        title: "Feature 1".to_string(),
                        description: "Description of feature 1".to_string(),
                    },
                    Feature {
                        icon: "Zap".to_string(),
                        title: "Feature 2".to_string(),
                        description: "Description of feature 2".to_string(),
                    },
                    Feature {
                        icon: "Shield".to_string(),
                        title: "Feature 3".to_string(),
                        description: "Description of feature 3".to_string(),
                    },
                ],
            }),
            BlockType::Gallery => Self::Gallery(GalleryContent {
                title: "Gallery".to_string(),
                images: (1..=3)
                    .map(|n| GalleryImage {
                        src: "/api/placeholder/300/200".to_string(),
                        alt: format!("Gallery image {}", n),
                    })
                    .collect(),
            }),
            // These start blank; the renderer falls back to its documented
            // defaults until the fields are edited.
            BlockType::Cta => Self::Cta(CtaContent::default()),
            BlockType::Contact => Self::Contact(ContactContent::default()),
            BlockType::Testimonial => Self::Testimonial(TestimonialContent::default()),
        }
    }
}
