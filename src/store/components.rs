use super::{Latency, next_id, next_ordinal};
use crate::error::StoreError;
use crate::model::{AiTriggerRules, Component, ComponentUpdate, NewComponent};

/// In-memory store for content-block records, ordered by `position` within a
/// page.
#[derive(Debug)]
pub struct ComponentStore {
    components: Vec<Component>,
    latency: Latency,
}

impl ComponentStore {
    /// Create a store over the given seed records
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            latency: Latency::default(),
        }
    }

    /// Replace the latency applied to store calls
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// All components of one page, sorted ascending by `position`
    pub async fn get_by_page_id(&self, page_id: u64) -> Vec<Component> {
        self.latency.simulate(300).await;
        let mut components: Vec<Component> = self
            .components
            .iter()
            .filter(|c| c.page_id == page_id)
            .cloned()
            .collect();
        components.sort_by_key(|c| c.position);
        components
    }

    /// Look up one component by id
    pub async fn get_by_id(&self, id: u64) -> Result<Component, StoreError> {
        self.latency.simulate(300).await;
        self.components
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Component", id))
    }

    /// Create a component. `position` is appended after the page's existing
    /// components; AI triggering starts disabled with default rules.
    pub async fn create(&mut self, new: NewComponent) -> Component {
        self.latency.simulate(400).await;
        let siblings = self.components.iter().filter(|c| c.page_id == new.page_id);
        let position = next_ordinal(siblings.map(|c| c.position));

        let component = Component {
            id: next_id(self.components.iter().map(|c| c.id)),
            page_id: new.page_id,
            content: new.content,
            position,
            ai_enabled: false,
            ai_trigger_rules: AiTriggerRules::default(),
        };
        self.components.push(component.clone());
        ::log::info!(
            "Created {} component {} on page {}",
            component.kind(),
            component.id,
            component.page_id
        );
        component
    }

    /// Apply a partial update; fields left unset keep their stored value
    pub async fn update(
        &mut self,
        id: u64,
        updates: ComponentUpdate,
    ) -> Result<Component, StoreError> {
        self.latency.simulate(350).await;
        let component = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Component", id))?;

        if let Some(content) = updates.content {
            component.content = content;
        }
        if let Some(position) = updates.position {
            component.position = position;
        }
        if let Some(ai_enabled) = updates.ai_enabled {
            component.ai_enabled = ai_enabled;
        }
        if let Some(rules) = updates.ai_trigger_rules {
            component.ai_trigger_rules = rules;
        }

        Ok(component.clone())
    }

    /// Remove a component and return the removed record
    pub async fn delete(&mut self, id: u64) -> Result<Component, StoreError> {
        self.latency.simulate(250).await;
        let index = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Component", id))?;

        Ok(self.components.remove(index))
    }

    /// Assign new `position` values to the given components. Unknown ids are
    /// skipped silently; returns the page's refreshed component list.
    pub async fn reorder(&mut self, page_id: u64, positions: &[(u64, u32)]) -> Vec<Component> {
        self.latency.simulate(400).await;
        for &(id, position) in positions {
            if let Some(component) = self.components.iter_mut().find(|c| c.id == id) {
                component.position = position;
            }
        }

        self.get_by_page_id(page_id).await
    }

    /// Replace a component's AI trigger rules, enabling AI for it
    pub async fn update_ai_rules(
        &mut self,
        id: u64,
        rules: AiTriggerRules,
    ) -> Result<Component, StoreError> {
        self.latency.simulate(300).await;
        self.update(
            id,
            ComponentUpdate {
                ai_enabled: Some(true),
                ai_trigger_rules: Some(rules),
                ..ComponentUpdate::default()
            },
        )
        .await
    }

    /// Flip a component's AI-enabled flag
    pub async fn toggle_ai_enabled(&mut self, id: u64) -> Result<Component, StoreError> {
        self.latency.simulate(250).await;
        let enabled = self
            .components
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.ai_enabled)
            .ok_or_else(|| StoreError::not_found("Component", id))?;

        self.update(
            id,
            ComponentUpdate {
                ai_enabled: Some(!enabled),
                ..ComponentUpdate::default()
            },
        )
        .await
    }
}
