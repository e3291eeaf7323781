//! Domain types for the agenda data document.
//!
//! Field names follow the camelCase keys of the JSON document. Every text
//! field is optional: a `null` or missing value renders as an empty string.
//! The sections a render cannot proceed without (`clientInfo`,
//! `assetsSection.columns`, `discussionTopics`, `team`) are required so a
//! document missing them fails to parse.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a column container in the skeleton (`<div id="...">`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ColumnId(pub String);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for ColumnId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The whole agenda data document, as read from `data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDocument {
    pub client_info: ClientInfo,
    pub assets_section: AssetsSection,
    pub discussion_topics: Vec<Topic>,
    pub team: Vec<TeamEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

/// Header/branding block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub meeting_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub internal_use_only: bool,
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// The multi-column data/asset summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsSection {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub sub_heading: Option<String>,
    #[serde(default)]
    pub disclaimer: Option<String>,
    pub columns: Vec<Column>,
}

/// One vertical grouping of labelled items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ColumnId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub css_class: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

/// A single labelled value, optionally drawn as a horizontal bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    /// Filled width of the bar in percent (0..=100). `None` means no bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_class: Option<String>,
}

/// A numbered discussion topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub points: Vec<TopicPoint>,
}

/// A bullet under a topic, with an optional "learn more" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPoint {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One tile of the team grid, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TeamEntry {
    #[serde(rename = "member")]
    Member(TeamMember),
    #[serde(rename = "qrCode")]
    QrCode(QrCode),
    /// Missing, null or unknown `type`. Rendered as an empty tile.
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl<'de> Deserialize<'de> for TeamEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let entry = match value.get("type").and_then(serde_json::Value::as_str) {
            Some("member") => {
                TeamEntry::Member(TeamMember::deserialize(value).map_err(de::Error::custom)?)
            }
            Some("qrCode") => {
                TeamEntry::QrCode(QrCode::deserialize(value).map_err(de::Error::custom)?)
            }
            _ => TeamEntry::Unrecognized,
        };
        Ok(entry)
    }
}

/// A person on the client's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// The scheduling tile: a QR image plus a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

/// Two plain footer lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Text of an optional field, or `""` when it is null/absent.
pub fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// The field's value when it is present and non-empty.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl AgendaDocument {
    /// Number of items across all asset columns.
    pub fn item_count(&self) -> usize {
        self.assets_section.columns.iter().map(|c| c.items.len()).sum()
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
