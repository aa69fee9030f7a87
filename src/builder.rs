//! Orchestration facade over the three entity stores.
//!
//! This is the contract the routing surface consumes: load everything a
//! builder screen needs for one site, mutate through the stores, and emit
//! human-readable outcome events on a channel instead of touching any UI.

use crate::blocks::{BlockContent, BlockType};
use crate::error::StoreError;
use crate::model::{
    Component, ComponentUpdate, NewComponent, NewPage, NewSite, Page, Site,
};
use crate::seed::SeedData;
use crate::store::{ComponentStore, Latency, PageStore, SiteStore};
use crate::validate::ensure_valid_new_site;
use tokio::sync::mpsc;

/// Domain suffix appended to every created site's chosen subdomain
const DOMAIN_SUFFIX: &str = ".convosite.com";

/// Outcome severity of a notification event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Human-readable outcome event. The core emits these; a presentation layer
/// decides how to show them.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Everything a builder screen needs for one site
#[derive(Debug, Clone)]
pub struct BuilderData {
    pub site: Site,
    pub pages: Vec<Page>,
    /// The default page, falling back to the first page in tab order
    pub current_page: Option<Page>,
    /// Components of `current_page`, in position order
    pub components: Vec<Component>,
}

/// The builder core: three stores plus an optional notification channel
#[derive(Debug)]
pub struct Builder {
    pub sites: SiteStore,
    pub pages: PageStore,
    pub components: ComponentStore,
    notifications: Option<mpsc::UnboundedSender<Notification>>,
}

impl Builder {
    /// Create the stores from seed collections
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            sites: SiteStore::new(seed.sites),
            pages: PageStore::new(seed.pages),
            components: ComponentStore::new(seed.components),
            notifications: None,
        }
    }

    /// Apply one latency setting to all three stores
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.sites = self.sites.with_latency(latency);
        self.pages = self.pages.with_latency(latency);
        self.components = self.components.with_latency(latency);
        self
    }

    /// Attach the notification channel
    pub fn with_notifications(mut self, sender: mpsc::UnboundedSender<Notification>) -> Self {
        self.notifications = Some(sender);
        self
    }

    /// Load a site, its pages, and the current page's components.
    ///
    /// The current page is the one marked default; when two pages are marked
    /// default the first in tab order wins, and when none is, the first page
    /// is used.
    pub async fn load_for_site(&self, site_id: u64) -> Result<BuilderData, StoreError> {
        let site = self.sites.get_by_id(site_id).await?;
        let pages = self.pages.get_by_site_id(site_id).await;

        let current_page = pages
            .iter()
            .find(|p| p.is_default)
            .or_else(|| pages.first())
            .cloned();

        let components = match &current_page {
            Some(page) => self.components.get_by_page_id(page.id).await,
            None => Vec::new(),
        };

        Ok(BuilderData {
            site,
            pages,
            current_page,
            components,
        })
    }

    /// Switch the active page, returning it with its components
    pub async fn switch_page(&self, page_id: u64) -> Result<(Page, Vec<Component>), StoreError> {
        let page = self.pages.get_by_id(page_id).await?;
        let components = self.components.get_by_page_id(page.id).await;
        Ok((page, components))
    }

    /// Validate and create a site together with its default "Home" page. The
    /// chosen subdomain gets the platform domain suffix.
    pub async fn create_site(&mut self, mut new: NewSite) -> Result<(Site, Page), StoreError> {
        ensure_valid_new_site(&new)?;
        new.domain = format!("{}{}", new.domain, DOMAIN_SUFFIX);

        let site = self.sites.create(new).await;
        let page = self
            .pages
            .create(NewPage {
                site_id: site.id,
                title: "Home".to_string(),
                slug: "home".to_string(),
            })
            .await;

        self.notify_success("Site created successfully!");
        Ok((site, page))
    }

    /// Add a block of the given type to a page, with starter content
    pub async fn add_component(&mut self, page_id: u64, kind: BlockType) -> Component {
        let component = self
            .components
            .create(NewComponent {
                page_id,
                content: BlockContent::default_for(kind),
            })
            .await;
        self.notify_success("Component added successfully");
        component
    }

    /// Apply a partial update to a component
    pub async fn update_component(
        &mut self,
        id: u64,
        update: ComponentUpdate,
    ) -> Result<Component, StoreError> {
        match self.components.update(id, update).await {
            Ok(component) => {
                self.notify_success("Component updated successfully");
                Ok(component)
            }
            Err(err) => {
                self.notify_error(format!("Failed to update component: {}", err));
                Err(err)
            }
        }
    }

    /// Delete a component
    pub async fn delete_component(&mut self, id: u64) -> Result<Component, StoreError> {
        match self.components.delete(id).await {
            Ok(component) => {
                self.notify_success("Component deleted successfully");
                Ok(component)
            }
            Err(err) => {
                self.notify_error(format!("Failed to delete component: {}", err));
                Err(err)
            }
        }
    }

    /// Publish a site
    pub async fn publish(&mut self, site_id: u64) -> Result<Site, StoreError> {
        match self.sites.publish(site_id).await {
            Ok(site) => {
                self.notify_success("Site published successfully!");
                Ok(site)
            }
            Err(err) => {
                self.notify_error("Failed to publish site");
                Err(err)
            }
        }
    }

    /// Unpublish a site
    pub async fn unpublish(&mut self, site_id: u64) -> Result<Site, StoreError> {
        match self.sites.unpublish(site_id).await {
            Ok(site) => {
                self.notify_success("Site unpublished");
                Ok(site)
            }
            Err(err) => {
                self.notify_error("Failed to unpublish site");
                Err(err)
            }
        }
    }

    fn notify_success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message.into());
    }

    fn notify_error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message.into());
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        if let Some(sender) = &self.notifications {
            // Fire-and-forget: a closed receiver just means nobody is
            // listening anymore
            let _ = sender.send(Notification { kind, message });
        }
    }
}
