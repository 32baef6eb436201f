//! Calendar event model.

use serde::{Deserialize, Serialize};

/// Kind of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "reunião")]
    Meeting,
    #[serde(rename = "treinamento")]
    Training,
    #[serde(rename = "visita")]
    Visit,
    #[serde(rename = "manutenção")]
    Maintenance,
    #[serde(rename = "outro")]
    Other,
}

/// A scheduled event within a sector.
///
/// Events are append-only. The employee reference is not enforced as a
/// foreign key; a dangling id is tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub description: String,
}

/// Request body for creating a new event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    pub employee_id: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    #[serde(default)]
    pub description: String,
}
