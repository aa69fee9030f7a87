//! Field-level editing of block content.
//!
//! The editor presents one control per content field, applies each edit to a
//! local copy, and emits a [`ComponentUpdate`] patch for the component store.
//! The local copy makes the change visible immediately while the store call
//! is in flight.

use crate::blocks::{BlockContent, BlockType};
use crate::error::StoreError;
use crate::model::{AiTriggerRules, Component, ComponentUpdate};

/// Kind of editing control a field needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Multiline,
    /// List of structured entries (features, gallery images)
    List,
}

/// One editable content field of a block type
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

const HERO_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("subtitle", "Subtitle", FieldKind::Text),
    field("description", "Description", FieldKind::Multiline),
    field("buttonText", "Button Text", FieldKind::Text),
    field("backgroundImage", "Background Image URL", FieldKind::Text),
];

const TEXT_FIELDS: &[FieldSpec] = &[field("content", "Content", FieldKind::Multiline)];

const IMAGE_FIELDS: &[FieldSpec] = &[
    field("src", "Image URL", FieldKind::Text),
    field("alt", "Alt Text", FieldKind::Text),
    field("caption", "Caption", FieldKind::Text),
];

const FEATURES_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("features", "Features", FieldKind::List),
];

const CTA_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("description", "Description", FieldKind::Multiline),
    field("buttonText", "Button Text", FieldKind::Text),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("description", "Description", FieldKind::Multiline),
    field("email", "Email", FieldKind::Text),
    field("phone", "Phone", FieldKind::Text),
    field("address", "Address", FieldKind::Text),
];

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    field("quote", "Quote", FieldKind::Multiline),
    field("author", "Author", FieldKind::Text),
    field("position", "Position", FieldKind::Text),
    field("avatar", "Avatar URL", FieldKind::Text),
];

const GALLERY_FIELDS: &[FieldSpec] = &[
    field("title", "Title", FieldKind::Text),
    field("images", "Images", FieldKind::List),
];

/// The editable fields for each block type, in display order
pub fn fields_for(kind: BlockType) -> &'static [FieldSpec] {
    match kind {
        BlockType::Hero => HERO_FIELDS,
        BlockType::Text => TEXT_FIELDS,
        BlockType::Image => IMAGE_FIELDS,
        BlockType::Features => FEATURES_FIELDS,
        BlockType::Cta => CTA_FIELDS,
        BlockType::Contact => CONTACT_FIELDS,
        BlockType::Testimonial => TESTIMONIAL_FIELDS,
        BlockType::Gallery => GALLERY_FIELDS,
    }
}

/// Return a copy of `content` with one named field replaced
pub fn apply_field(
    content: &BlockContent,
    field: &str,
    value: &str,
) -> Result<BlockContent, StoreError> {
    let mut next = content.clone();
    let value = value.to_string();
    match &mut next {
        BlockContent::Hero(c) => match field {
            "title" => c.title = value,
            "subtitle" => c.subtitle = value,
            "description" => c.description = value,
            "buttonText" => c.button_text = value,
            "backgroundImage" => c.background_image = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Text(c) => match field {
            "content" => c.content = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Image(c) => match field {
            "src" => c.src = value,
            "alt" => c.alt = value,
            "caption" => c.caption = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Features(c) => match field {
            "title" => c.title = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Cta(c) => match field {
            "title" => c.title = value,
            "description" => c.description = value,
            "buttonText" => c.button_text = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Contact(c) => match field {
            "title" => c.title = value,
            "description" => c.description = value,
            "email" => c.email = value,
            "phone" => c.phone = value,
            "address" => c.address = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Testimonial(c) => match field {
            "quote" => c.quote = value,
            "author" => c.author = value,
            "position" => c.position = value,
            "avatar" => c.avatar = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Gallery(c) => match field {
            "title" => c.title = value,
            _ => return Err(unknown_field(field)),
        },
        BlockContent::Unknown(_) => return Err(unknown_field(field)),
    }
    Ok(next)
}

/// Return a copy of `content` with one field of the indexed feature replaced
pub fn apply_feature_field(
    content: &BlockContent,
    index: usize,
    field: &str,
    value: &str,
) -> Result<BlockContent, StoreError> {
    let mut next = content.clone();
    let BlockContent::Features(c) = &mut next else {
        return Err(StoreError::validation(
            "features",
            "block has no feature list",
        ));
    };
    let entry = c.features.get_mut(index).ok_or_else(|| {
        StoreError::validation("features", format!("no feature at index {}", index))
    })?;
    match field {
        "icon" => entry.icon = value.to_string(),
        "title" => entry.title = value.to_string(),
        "description" => entry.description = value.to_string(),
        _ => return Err(unknown_field(field)),
    }
    Ok(next)
}

/// Return a copy of `content` with one field of the indexed gallery image
/// replaced
pub fn apply_gallery_field(
    content: &BlockContent,
    index: usize,
    field: &str,
    value: &str,
) -> Result<BlockContent, StoreError> {
    let mut next = content.clone();
    let BlockContent::Gallery(c) = &mut next else {
        return Err(StoreError::validation("images", "block has no image list"));
    };
    let entry = c
        .images
        .get_mut(index)
        .ok_or_else(|| StoreError::validation("images", format!("no image at index {}", index)))?;
    match field {
        "src" => entry.src = value.to_string(),
        "alt" => entry.alt = value.to_string(),
        _ => return Err(unknown_field(field)),
    }
    Ok(next)
}

/// Split a comma-separated keyword string, trimming entries and dropping
/// empties
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| k.to_string())
        .collect()
}

fn unknown_field(field: &str) -> StoreError {
    StoreError::validation(field.to_string(), "unknown content field")
}

/// Editing session for one component.
///
/// Holds an optimistic local copy of the component's content and AI settings;
/// every edit mutates the copy and returns the patch to send to the store.
#[derive(Debug)]
pub struct Editor {
    component_id: u64,
    content: BlockContent,
    ai_enabled: bool,
    ai_rules: AiTriggerRules,
}

impl Editor {
    /// Open an editor over a component's current state
    pub fn new(component: &Component) -> Self {
        Self {
            component_id: component.id,
            content: component.content.clone(),
            ai_enabled: component.ai_enabled,
            ai_rules: component.ai_trigger_rules.clone(),
        }
    }

    pub fn component_id(&self) -> u64 {
        self.component_id
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn ai_rules(&self) -> &AiTriggerRules {
        &self.ai_rules
    }

    /// The field controls to present for this block
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.content.block_type().map_or(&[], fields_for)
    }

    /// Edit one content field
    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<ComponentUpdate, StoreError> {
        self.content = apply_field(&self.content, field, value)?;
        Ok(self.content_patch())
    }

    /// Edit one field of the indexed feature entry
    pub fn edit_feature(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<ComponentUpdate, StoreError> {
        self.content = apply_feature_field(&self.content, index, field, value)?;
        Ok(self.content_patch())
    }

    /// Edit one field of the indexed gallery image
    pub fn edit_gallery_image(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<ComponentUpdate, StoreError> {
        self.content = apply_gallery_field(&self.content, index, field, value)?;
        Ok(self.content_patch())
    }

    /// Toggle AI triggering for this block
    pub fn set_ai_enabled(&mut self, enabled: bool) -> ComponentUpdate {
        self.ai_enabled = enabled;
        ComponentUpdate {
            ai_enabled: Some(enabled),
            ..ComponentUpdate::default()
        }
    }

    /// Edit the free-text show-when rule
    pub fn edit_show_when(&mut self, text: &str) -> ComponentUpdate {
        self.ai_rules.show_when = text.to_string();
        self.rules_patch()
    }

    /// Edit the keyword list from a comma-separated string
    pub fn edit_keywords(&mut self, raw: &str) -> ComponentUpdate {
        self.ai_rules.keywords = parse_keywords(raw);
        self.rules_patch()
    }

    /// Edit the trigger priority. The expected range is 1-10 but the value is
    /// stored as given.
    pub fn edit_priority(&mut self, priority: u8) -> ComponentUpdate {
        self.ai_rules.priority = priority;
        self.rules_patch()
    }

    fn content_patch(&self) -> ComponentUpdate {
        ComponentUpdate {
            content: Some(self.content.clone()),
            ..ComponentUpdate::default()
        }
    }

    fn rules_patch(&self) -> ComponentUpdate {
        ComponentUpdate {
            ai_trigger_rules: Some(self.ai_rules.clone()),
            ..ComponentUpdate::default()
        }
    }
}
