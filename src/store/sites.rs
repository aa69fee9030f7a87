use super::{Latency, next_id};
use crate::error::StoreError;
use crate::model::{NewSite, Site, SiteUpdate};
use chrono::Utc;

/// In-memory store for site records.
///
/// Every returned record is an independent clone; callers never hold a
/// reference into the backing collection.
#[derive(Debug)]
pub struct SiteStore {
    sites: Vec<Site>,
    latency: Latency,
}

impl SiteStore {
    /// Create a store over the given seed records
    pub fn new(sites: Vec<Site>) -> Self {
        Self {
            sites,
            latency: Latency::default(),
        }
    }

    /// Replace the latency applied to store calls
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// All sites, in insertion order
    pub async fn get_all(&self) -> Vec<Site> {
        self.latency.simulate(300).await;
        self.sites.clone()
    }

    /// Look up one site by id
    pub async fn get_by_id(&self, id: u64) -> Result<Site, StoreError> {
        self.latency.simulate(300).await;
        self.sites
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Site", id))
    }

    /// Create a site. The record starts unpublished with both timestamps set
    /// to the current time.
    pub async fn create(&mut self, new: NewSite) -> Site {
        self.latency.simulate(400).await;
        let now = Utc::now();
        let site = Site {
            id: next_id(self.sites.iter().map(|s| s.id)),
            name: new.name,
            domain: new.domain,
            ai_prompt: new.ai_prompt,
            ai_context: new.ai_context,
            theme: new.theme,
            published: false,
            created_at: now,
            updated_at: now,
        };
        self.sites.push(site.clone());
        ::log::info!("Created site {} ({})", site.id, site.name);
        site
    }

    /// Apply a partial update. Fields left unset keep their stored value;
    /// `updated_at` is always refreshed.
    pub async fn update(&mut self, id: u64, updates: SiteUpdate) -> Result<Site, StoreError> {
        self.latency.simulate(350).await;
        let site = self
            .sites
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Site", id))?;

        if let Some(name) = updates.name {
            site.name = name;
        }
        if let Some(domain) = updates.domain {
            site.domain = domain;
        }
        if let Some(ai_prompt) = updates.ai_prompt {
            site.ai_prompt = ai_prompt;
        }
        if let Some(ai_context) = updates.ai_context {
            site.ai_context = ai_context;
        }
        if let Some(theme) = updates.theme {
            site.theme = theme;
        }
        if let Some(published) = updates.published {
            site.published = published;
        }
        site.updated_at = Utc::now();

        Ok(site.clone())
    }

    /// Remove a site and return the removed record
    pub async fn delete(&mut self, id: u64) -> Result<Site, StoreError> {
        self.latency.simulate(250).await;
        let index = self
            .sites
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Site", id))?;

        Ok(self.sites.remove(index))
    }

    /// Mark a site as published
    pub async fn publish(&mut self, id: u64) -> Result<Site, StoreError> {
        self.latency.simulate(500).await;
        self.update(
            id,
            SiteUpdate {
                published: Some(true),
                ..SiteUpdate::default()
            },
        )
        .await
    }

    /// Mark a site as unpublished
    pub async fn unpublish(&mut self, id: u64) -> Result<Site, StoreError> {
        self.latency.simulate(300).await;
        self.update(
            id,
            SiteUpdate {
                published: Some(false),
                ..SiteUpdate::default()
            },
        )
        .await
    }
}
