//! Persistence and health-check contract.
//!
//! The template service that stores templates and computes their health
//! lives outside this crate. This module defines only the data it
//! exchanges (camelCase JSON) and the [`TemplateStore`] seam an
//! application implements to reach it.
//!
//! # Optimistic concurrency
//! [`EditTemplate::last_updated`] carries the `updated` timestamp last seen
//! by the editor. The service is expected to reject an update whose token
//! is stale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Template;

/// A stored template with identity, audit fields and health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Storage identifier.
    pub id: String,
    /// Unique display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Last modification time; doubles as the concurrency token.
    pub updated: DateTime<Utc>,
    /// Divisions and template-wide shared addresses.
    #[serde(flatten)]
    pub template: Template,
    /// Externally computed health, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_health: Option<TemplateHealth>,
}

/// Editable projection of a [`TemplateRecord`] sent on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTemplate {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Edited schedule.
    #[serde(flatten)]
    pub template: Template,
    /// `updated` timestamp of the record this edit started from.
    pub last_updated: DateTime<Utc>,
}

impl EditTemplate {
    /// Projects `record` for editing, taking its `updated` as the token.
    pub fn from_record(record: &TemplateRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            template: record.template.clone(),
            last_updated: record.updated,
        }
    }

    /// Replaces the edited schedule.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }
}

/// Result of one named health check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Externally computed template diagnostics, consumed for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateHealth {
    /// Checks keyed by name.
    #[serde(default)]
    pub checks: BTreeMap<String, HealthCheck>,
    /// Aggregate errors.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl TemplateHealth {
    /// Whether every check passed and no aggregate error was reported.
    pub fn is_healthy(&self) -> bool {
        self.errors.is_empty() && self.checks.values().all(|c| c.success)
    }

    /// Names of failed checks, ascending.
    pub fn failing_checks(&self) -> impl Iterator<Item = &str> {
        self.checks
            .iter()
            .filter(|(_, check)| !check.success)
            .map(|(name, _)| name.as_str())
    }

    /// Total warnings across all checks.
    pub fn warning_count(&self) -> usize {
        self.checks.values().map(|c| c.warnings.len()).sum()
    }
}

/// Access to the external template service.
pub trait TemplateStore {
    /// Failure reported by the service (not found, stale token, ...).
    type Error: std::error::Error;

    /// Every stored template.
    fn get_all_templates(&self) -> Result<Vec<TemplateRecord>, Self::Error>;

    /// One template by id or name.
    fn get_template(&self, id_or_name: &str) -> Result<TemplateRecord, Self::Error>;

    /// Saves an edit; rejected when `edit.last_updated` is stale.
    fn update(&mut self, id: &str, edit: EditTemplate) -> Result<TemplateRecord, Self::Error>;

    /// Deletes a template, returning its last state.
    fn delete(&mut self, id: &str) -> Result<TemplateRecord, Self::Error>;

    /// Computes health for an unsaved template.
    fn health(&self, template: &Template) -> Result<TemplateHealth, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::round_robin;
    use crate::validation::check_template;
    use chrono::{Duration, TimeZone};

    #[derive(Debug, thiserror::Error)]
    enum MemoryError {
        #[error("template not found: {0}")]
        NotFound(String),
        #[error("stale update for {0}")]
        Conflict(String),
    }

    #[derive(Default)]
    struct MemoryStore {
        records: Vec<TemplateRecord>,
        clock: i64,
    }

    impl MemoryStore {
        fn now(&mut self) -> DateTime<Utc> {
            self.clock += 1;
            Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(self.clock)
        }

        fn insert(&mut self, id: &str, name: &str, template: Template) -> TemplateRecord {
            let at = self.now();
            let record = TemplateRecord {
                id: id.into(),
                name: name.into(),
                description: String::new(),
                created: at,
                updated: at,
                template,
                template_health: None,
            };
            self.records.push(record.clone());
            record
        }
    }

    impl TemplateStore for MemoryStore {
        type Error = MemoryError;

        fn get_all_templates(&self) -> Result<Vec<TemplateRecord>, MemoryError> {
            Ok(self.records.clone())
        }

        fn get_template(&self, id_or_name: &str) -> Result<TemplateRecord, MemoryError> {
            self.records
                .iter()
                .find(|r| r.id == id_or_name || r.name == id_or_name)
                .cloned()
                .ok_or_else(|| MemoryError::NotFound(id_or_name.into()))
        }

        fn update(&mut self, id: &str, edit: EditTemplate) -> Result<TemplateRecord, MemoryError> {
            let at = self.now();
            let record = self
                .records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| MemoryError::NotFound(id.into()))?;
            if record.updated != edit.last_updated {
                return Err(MemoryError::Conflict(id.into()));
            }
            record.name = edit.name;
            record.description = edit.description;
            record.template = edit.template;
            record.updated = at;
            Ok(record.clone())
        }

        fn delete(&mut self, id: &str) -> Result<TemplateRecord, MemoryError> {
            let index = self
                .records
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| MemoryError::NotFound(id.into()))?;
            Ok(self.records.remove(index))
        }

        fn health(&self, template: &Template) -> Result<TemplateHealth, MemoryError> {
            let (warnings, errors): (Vec<_>, Vec<_>) = check_template(template)
                .into_iter()
                .partition(|e| e.is_warning());
            let structure = HealthCheck {
                success: errors.is_empty(),
                errors: errors.into_iter().map(|e| e.message).collect(),
                warnings: warnings.into_iter().map(|e| e.message).collect(),
            };
            Ok(TemplateHealth {
                checks: BTreeMap::from([("structure".to_string(), structure)]),
                errors: Vec::new(),
            })
        }
    }

    fn sample_template() -> Template {
        Template::new().with_division(round_robin(4).unwrap())
    }

    #[test]
    fn test_edit_projection_carries_token() {
        let mut store = MemoryStore::default();
        let record = store.insert("t1", "Winter", sample_template());
        let edit = EditTemplate::from_record(&record);
        assert_eq!(edit.last_updated, record.updated);
        assert_eq!(edit.template, record.template);
    }

    #[test]
    fn test_stale_update_is_rejected() {
        let mut store = MemoryStore::default();
        let record = store.insert("t1", "Winter", sample_template());

        let first = EditTemplate::from_record(&record).with_template(Template::new());
        let saved = store.update("t1", first).unwrap();
        assert!(saved.updated > record.updated);

        let stale = EditTemplate::from_record(&record);
        assert!(matches!(
            store.update("t1", stale),
            Err(MemoryError::Conflict(_))
        ));

        let fresh = EditTemplate::from_record(&saved).with_template(sample_template());
        assert!(store.update("t1", fresh).is_ok());
    }

    #[test]
    fn test_lookup_and_delete() {
        let mut store = MemoryStore::default();
        store.insert("t1", "Winter", sample_template());
        store.insert("t2", "Summer", Template::new());

        assert_eq!(store.get_template("Summer").unwrap().id, "t2");
        assert_eq!(store.get_all_templates().unwrap().len(), 2);
        assert_eq!(store.delete("t1").unwrap().name, "Winter");
        assert!(store.get_template("t1").is_err());
    }

    #[test]
    fn test_health_reports_uneven_weeks_as_warning() {
        let store = MemoryStore::default();
        let template = sample_template().with_division(round_robin(6).unwrap());
        let health = store.health(&template).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.warning_count(), 1);
    }

    #[test]
    fn test_health_summary() {
        let store = MemoryStore::default();
        let healthy = store.health(&sample_template()).unwrap();
        assert!(healthy.is_healthy());

        let health = TemplateHealth {
            checks: BTreeMap::from([
                (
                    "divisions".to_string(),
                    HealthCheck {
                        success: true,
                        errors: vec![],
                        warnings: vec!["uneven".into()],
                    },
                ),
                ("venues".to_string(), HealthCheck::default()),
            ]),
            errors: vec![],
        };
        assert!(!health.is_healthy());
        assert_eq!(health.failing_checks().collect::<Vec<_>>(), vec!["venues"]);
        assert_eq!(health.warning_count(), 1);
    }

    #[test]
    fn test_record_json_contract() {
        let json = r#"{
            "id": "42",
            "name": "Premier",
            "created": "2024-08-01T10:00:00Z",
            "updated": "2024-08-02T10:00:00Z",
            "sharedAddresses": [["1", "5"]],
            "divisions": [
                {"sharedAddresses": [], "dates": [{"fixtures": [{"home": "1", "away": "2"}, {"home": "3"}]}]}
            ],
            "templateHealth": {
                "checks": {"weeks": {"success": false, "errors": ["short"], "warnings": []}},
                "errors": ["short"]
            }
        }"#;
        let record: TemplateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.template.shared_addresses.len(), 1);
        assert_eq!(record.template.divisions[0].dates[0].len(), 2);
        assert!(record.description.is_empty());
        assert!(!record.template_health.as_ref().unwrap().is_healthy());

        let edit = serde_json::to_value(EditTemplate::from_record(&record)).unwrap();
        assert_eq!(edit["lastUpdated"], "2024-08-02T10:00:00Z");
        assert!(edit.get("id").is_none());
        assert!(edit.get("divisions").is_some());
    }

    #[test]
    fn test_record_rejects_malformed_week() {
        let json = r#"{
            "id": "1", "name": "x",
            "created": "2024-08-01T10:00:00Z", "updated": "2024-08-01T10:00:00Z",
            "divisions": [{"dates": [{"fixtures": [{"home": "1", "away": "1"}]}]}]
        }"#;
        assert!(serde_json::from_str::<TemplateRecord>(json).is_err());
    }
}
