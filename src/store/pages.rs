use super::{Latency, next_id, next_ordinal};
use crate::error::StoreError;
use crate::model::{NewPage, Page, PageUpdate};

/// In-memory store for page records, ordered by `order` within a site.
#[derive(Debug)]
pub struct PageStore {
    pages: Vec<Page>,
    latency: Latency,
}

impl PageStore {
    /// Create a store over the given seed records
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            latency: Latency::default(),
        }
    }

    /// Replace the latency applied to store calls
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// All pages of one site, sorted ascending by `order`
    pub async fn get_by_site_id(&self, site_id: u64) -> Vec<Page> {
        self.latency.simulate(300).await;
        let mut pages: Vec<Page> = self
            .pages
            .iter()
            .filter(|p| p.site_id == site_id)
            .cloned()
            .collect();
        pages.sort_by_key(|p| p.order);
        pages
    }

    /// Look up one page by id
    pub async fn get_by_id(&self, id: u64) -> Result<Page, StoreError> {
        self.latency.simulate(300).await;
        self.pages
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Page", id))
    }

    /// Create a page. `order` is appended after the site's existing pages and
    /// the first page created for a site becomes its default.
    pub async fn create(&mut self, new: NewPage) -> Page {
        self.latency.simulate(400).await;
        let siblings = self.pages.iter().filter(|p| p.site_id == new.site_id);
        let is_default = siblings.clone().count() == 0;
        let order = next_ordinal(siblings.map(|p| p.order));

        let page = Page {
            id: next_id(self.pages.iter().map(|p| p.id)),
            site_id: new.site_id,
            title: new.title,
            slug: new.slug,
            order,
            is_default,
        };
        self.pages.push(page.clone());
        ::log::info!("Created page {} ({}) for site {}", page.id, page.title, page.site_id);
        page
    }

    /// Apply a partial update; fields left unset keep their stored value
    pub async fn update(&mut self, id: u64, updates: PageUpdate) -> Result<Page, StoreError> {
        self.latency.simulate(350).await;
        let page = self
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Page", id))?;

        if let Some(title) = updates.title {
            page.title = title;
        }
        if let Some(slug) = updates.slug {
            page.slug = slug;
        }
        if let Some(order) = updates.order {
            page.order = order;
        }
        if let Some(is_default) = updates.is_default {
            page.is_default = is_default;
        }

        Ok(page.clone())
    }

    /// Remove a page and return the removed record
    pub async fn delete(&mut self, id: u64) -> Result<Page, StoreError> {
        self.latency.simulate(250).await;
        let index = self
            .pages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Page", id))?;

        Ok(self.pages.remove(index))
    }

    /// Assign new `order` values to the given pages. Unknown ids are skipped
    /// silently; returns the site's refreshed page list.
    pub async fn reorder(&mut self, site_id: u64, orders: &[(u64, u32)]) -> Vec<Page> {
        self.latency.simulate(400).await;
        for &(id, order) in orders {
            if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
                page.order = order;
            }
        }

        self.get_by_site_id(site_id).await
    }
}
