//! In-memory Site Record Store
//!
//! Ordered, append-only. Lives as long as the dashboard that owns it.

use super::aggregate::{NewSiteDto, Site, SiteError, SiteId, SiteStatus};
use chrono::NaiveDate;

// Checked at compile time: a bad seed date fails the build.
const fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const NORTH_FIELD_AUDIT: NaiveDate = seed_date(2025, 11, 10);
const SOUTH_LIVESTOCK_AUDIT: NaiveDate = seed_date(2025, 11, 5);
const MAINTENANCE_SHOP_AUDIT: NaiveDate = seed_date(2025, 11, 1);

fn seed_site(id: u32, name: &str, location: &str, last_audit: NaiveDate, incidents: u32) -> Site {
    Site {
        id: SiteId::new(id),
        name: name.to_string(),
        location: location.to_string(),
        status: SiteStatus::Active,
        last_audit,
        incidents,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteStore {
    sites: Vec<Site>,
}

impl SiteStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo sites shown on first load
    pub fn seeded() -> Self {
        let sites = vec![
            seed_site(1, "North Field Operations", "Story County, IA", NORTH_FIELD_AUDIT, 0),
            seed_site(2, "South Livestock Facility", "Polk County, IA", SOUTH_LIVESTOCK_AUDIT, 2),
            seed_site(3, "Equipment Maintenance Shop", "Dallas County, IA", MAINTENANCE_SHOP_AUDIT, 1),
        ];
        Self { sites }
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn total_incidents(&self) -> u32 {
        self.sites.iter().map(|s| s.incidents).sum()
    }

    /// Register a new site from form input.
    ///
    /// The id is the next sequential position. Blank name or location is
    /// rejected and leaves the store untouched.
    pub fn add_site(
        &mut self,
        name: &str,
        location: &str,
        today: NaiveDate,
    ) -> Result<&Site, SiteError> {
        let dto = NewSiteDto::new(name, location);
        let id = SiteId::new(self.sites.len() as u32 + 1);
        let site = Site::new_for_insert(id, &dto, today)?;
        self.sites.push(site);
        Ok(&self.sites[self.sites.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_seeded_store() {
        let store = SiteStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.total_incidents(), 3);
        assert_eq!(store.sites()[0].name, "North Field Operations");
        assert_eq!(store.sites()[2].id.as_string(), "3");
    }

    #[test]
    fn test_seeded_store_keeps_every_seed_site() {
        let store = SiteStore::seeded();
        let audits: Vec<_> = store.sites().iter().map(|s| s.last_audit_str()).collect();
        assert_eq!(audits, ["2025-11-10", "2025-11-05", "2025-11-01"]);
        assert!(store.sites().iter().all(|s| s.status == SiteStatus::Active));
        let incidents: Vec<_> = store.sites().iter().map(|s| s.incidents).collect();
        assert_eq!(incidents, [0, 2, 1]);
    }

    #[test]
    fn test_add_site_appends_with_defaults() {
        let mut store = SiteStore::seeded();
        let site = store.add_site("Farm A", "Iowa", today()).unwrap().clone();

        assert_eq!(store.len(), 4);
        assert_eq!(site.id.as_string(), "4");
        assert_eq!(site.status, SiteStatus::Active);
        assert_eq!(site.incidents, 0);
        assert_eq!(site.last_audit_str(), "2026-10-19");
        assert_eq!(store.sites().last(), Some(&site));
    }

    #[test]
    fn test_add_site_blank_is_noop() {
        let mut store = SiteStore::seeded();
        let before = store.clone();

        assert_eq!(store.add_site("", "Iowa", today()), Err(SiteError::EmptyName));
        assert_eq!(
            store.add_site("Farm A", "  ", today()),
            Err(SiteError::EmptyLocation)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut store = SiteStore::empty();
        store.add_site("Farm A", "Iowa", today()).unwrap();
        store.add_site("Farm A", "Iowa", today()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.sites()[1].id.as_string(), "2");
    }
}
