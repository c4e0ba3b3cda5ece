use crate::domain::common::{AggregateId, AggregateRoot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sequential site id, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SiteId(pub u32);

impl SiteId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for SiteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(SiteId::new)
            .map_err(|e| format!("Invalid site id: {}", e))
    }
}

impl From<SiteId> for String {
    fn from(id: SiteId) -> Self {
        id.as_string()
    }
}

impl TryFrom<String> for SiteId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SiteId::from_string(&s)
    }
}

/// Operational status of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl SiteStatus {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "active" => Ok(SiteStatus::Active),
            "inactive" => Ok(SiteStatus::Inactive),
            "pending" => Ok(SiteStatus::Pending),
            _ => Err(format!("Unknown site status: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Active => "active",
            SiteStatus::Inactive => "inactive",
            SiteStatus::Pending => "pending",
        }
    }

    /// Capitalised label for badges
    pub fn label(&self) -> &'static str {
        match self {
            SiteStatus::Active => "Active",
            SiteStatus::Inactive => "Inactive",
            SiteStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a site could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("site name must not be empty")]
    EmptyName,

    #[error("site location must not be empty")]
    EmptyLocation,
}

/// Agricultural site under safety management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub location: String,
    pub status: SiteStatus,
    pub last_audit: NaiveDate,
    pub incidents: u32,
}

impl Site {
    /// Build a freshly registered site: active, no incidents, audited today
    pub fn new_for_insert(id: SiteId, dto: &NewSiteDto, today: NaiveDate) -> Result<Self, SiteError> {
        dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            location: dto.location.trim().to_string(),
            status: SiteStatus::Active,
            last_audit: today,
            incidents: 0,
        })
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Last audit rendered as `YYYY-MM-DD`
    pub fn last_audit_str(&self) -> String {
        self.last_audit.format("%Y-%m-%d").to_string()
    }
}

impl AggregateRoot for Site {
    type Id = SiteId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn element_name() -> &'static str {
        "Site"
    }

    fn list_name() -> &'static str {
        "Your Sites"
    }
}

/// Form input of the "Add Site" dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSiteDto {
    pub name: String,
    pub location: String,
}

impl NewSiteDto {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty() {
            return Err(SiteError::EmptyName);
        }
        if self.location.trim().is_empty() {
            return Err(SiteError::EmptyLocation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert_eq!(NewSiteDto::new("", "Iowa").validate(), Err(SiteError::EmptyName));
        assert_eq!(NewSiteDto::new("   ", "Iowa").validate(), Err(SiteError::EmptyName));
        assert_eq!(
            NewSiteDto::new("Farm A", " ").validate(),
            Err(SiteError::EmptyLocation)
        );
        assert!(NewSiteDto::new("Farm A", "Iowa").validate().is_ok());
    }

    #[test]
    fn test_new_site_defaults() {
        let site = Site::new_for_insert(
            SiteId::new(4),
            &NewSiteDto::new(" Farm A ", "Iowa"),
            date("2026-10-19"),
        )
        .unwrap();
        assert_eq!(site.to_string_id(), "4");
        assert_eq!(site.name, "Farm A");
        assert_eq!(site.status, SiteStatus::Active);
        assert_eq!(site.incidents, 0);
        assert_eq!(site.last_audit_str(), "2026-10-19");
    }

    #[test]
    fn test_serialized_shape() {
        let site = Site {
            id: SiteId::new(1),
            name: "A".into(),
            location: "Story County, IA".into(),
            status: SiteStatus::Active,
            last_audit: date("2025-01-01"),
            incidents: 2,
        };
        let json = serde_json::to_value(&site).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["status"], "active");
        assert_eq!(json["lastAudit"], "2025-01-01");
        assert_eq!(json["incidents"], 2);

        let back: Site = serde_json::from_value(json).unwrap();
        assert_eq!(back, site);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(SiteStatus::from_str("pending"), Ok(SiteStatus::Pending));
        assert!(SiteStatus::from_str("closed").is_err());
        assert_eq!(SiteStatus::Active.label(), "Active");
    }
}
