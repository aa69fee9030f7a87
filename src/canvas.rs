//! Composition surface for the active page.
//!
//! The canvas holds the ordered block list plus the current selection, and
//! mirrors every store mutation into its local list so the surface re-renders
//! without a reload.

use crate::blocks::{BlockContent, BlockType};
use crate::error::StoreError;
use crate::model::{Component, ComponentUpdate, NewComponent};
use crate::render;
use crate::store::ComponentStore;

/// Data state of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    /// No blocks on the page
    Empty,
    /// At least one block on the page
    Populated,
}

/// The active page's block list and selection
#[derive(Debug)]
pub struct Canvas {
    page_id: u64,
    blocks: Vec<Component>,
    selected: Option<u64>,
}

impl Canvas {
    /// Load the canvas for a page from the component store
    pub async fn load(store: &ComponentStore, page_id: u64) -> Self {
        let blocks = store.get_by_page_id(page_id).await;
        Self {
            page_id,
            blocks,
            selected: None,
        }
    }

    pub fn page_id(&self) -> u64 {
        self.page_id
    }

    pub fn state(&self) -> CanvasState {
        if self.blocks.is_empty() {
            CanvasState::Empty
        } else {
            CanvasState::Populated
        }
    }

    /// The blocks in display order
    pub fn blocks(&self) -> &[Component] {
        &self.blocks
    }

    /// The currently selected block, if any
    pub fn selected(&self) -> Option<&Component> {
        let id = self.selected?;
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Drop a new block of the given type at the end of the page. The block
    /// is created with its type's starter content.
    pub async fn insert(&mut self, store: &mut ComponentStore, kind: BlockType) -> Component {
        let created = store
            .create(NewComponent {
                page_id: self.page_id,
                content: BlockContent::default_for(kind),
            })
            .await;
        self.blocks.push(created.clone());
        created
    }

    /// Select a block for editing. Returns false when the id is not on this
    /// page.
    pub fn select(&mut self, id: u64) -> bool {
        if self.blocks.iter().any(|b| b.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Delete a block. Clears the selection when it pointed at the removed
    /// block.
    pub async fn delete(
        &mut self,
        store: &mut ComponentStore,
        id: u64,
    ) -> Result<Component, StoreError> {
        let removed = store.delete(id).await?;
        self.blocks.retain(|b| b.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(removed)
    }

    /// Apply a partial update to a block and mirror the result locally
    pub async fn apply_update(
        &mut self,
        store: &mut ComponentStore,
        id: u64,
        update: ComponentUpdate,
    ) -> Result<Component, StoreError> {
        let updated = store.update(id, update).await?;
        if let Some(slot) = self.blocks.iter_mut().find(|b| b.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Re-read the block list from the store, keeping the selection when the
    /// selected block still exists
    pub async fn refresh(&mut self, store: &ComponentStore) {
        self.blocks = store.get_by_page_id(self.page_id).await;
        if let Some(id) = self.selected {
            if !self.blocks.iter().any(|b| b.id == id) {
                self.selected = None;
            }
        }
    }

    /// Render the page through the block renderer
    pub fn render(&self) -> String {
        render::page(&self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ComponentStore, Latency};

    fn empty_store() -> ComponentStore {
        ComponentStore::new(Vec::new()).with_latency(Latency::off())
    }

    #[tokio::test]
    async fn canvas_moves_between_empty_and_populated() {
        let mut store = empty_store();
        let mut canvas = Canvas::load(&store, 1).await;
        assert_eq!(canvas.state(), CanvasState::Empty);

        let block = canvas.insert(&mut store, BlockType::Hero).await;
        assert_eq!(canvas.state(), CanvasState::Populated);
        assert_eq!(block.position, 1);

        canvas.delete(&mut store, block.id).await.unwrap();
        assert_eq!(canvas.state(), CanvasState::Empty);
    }

    #[tokio::test]
    async fn deleting_selected_block_clears_selection() {
        let mut store = empty_store();
        let mut canvas = Canvas::load(&store, 1).await;
        let first = canvas.insert(&mut store, BlockType::Text).await;
        let second = canvas.insert(&mut store, BlockType::Cta).await;

        assert!(canvas.select(first.id));
        canvas.delete(&mut store, first.id).await.unwrap();
        assert!(canvas.selected().is_none());

        // Deleting an unselected block leaves the selection alone
        assert!(canvas.select(second.id));
        let third = canvas.insert(&mut store, BlockType::Image).await;
        canvas.delete(&mut store, third.id).await.unwrap();
        assert_eq!(canvas.selected().map(|b| b.id), Some(second.id));
    }

    #[tokio::test]
    async fn select_rejects_foreign_ids() {
        let mut store = empty_store();
        let mut canvas = Canvas::load(&store, 1).await;
        canvas.insert(&mut store, BlockType::Text).await;
        assert!(!canvas.select(999));
        assert!(canvas.selected().is_none());
    }

    #[tokio::test]
    async fn apply_update_mirrors_the_store_result_locally() {
        let mut store = empty_store();
        let mut canvas = Canvas::load(&store, 1).await;
        let block = canvas.insert(&mut store, BlockType::Text).await;

        canvas
            .apply_update(
                &mut store,
                block.id,
                ComponentUpdate {
                    content: Some(BlockContent::default_for(BlockType::Cta)),
                    ..ComponentUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(canvas.blocks()[0].kind(), "cta");

        // A refresh from the store agrees with the local mirror
        canvas.refresh(&store).await;
        assert_eq!(canvas.blocks()[0].kind(), "cta");
    }

    #[tokio::test]
    async fn inserted_blocks_append_in_position_order() {
        let mut store = empty_store();
        let mut canvas = Canvas::load(&store, 1).await;
        let a = canvas.insert(&mut store, BlockType::Hero).await;
        let b = canvas.insert(&mut store, BlockType::Text).await;
        let c = canvas.insert(&mut store, BlockType::Gallery).await;

        assert_eq!(
            canvas.blocks().iter().map(|x| x.id).collect::<Vec<_>>(),
            vec![a.id, b.id, c.id]
        );
        assert_eq!(
            canvas.blocks().iter().map(|x| x.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
