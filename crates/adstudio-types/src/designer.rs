//! Ad designer conversation and blueprint types.
//!
//! These types model the chat-style wizard that assembles an ad blueprint:
//! the message log entries exchanged between the user and the (mocked) agent,
//! the blueprint record itself, and the uploaded asset references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Title a blueprint carries until a product name is known.
pub const UNTITLED_AD: &str = "Untitled Ad";

/// Identifier of a designer message.
///
/// Derived from the creation time in milliseconds and strictly increasing
/// within a conversation, so ordering by id matches insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a designer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Agent,
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSender::User => write!(f, "user"),
            MessageSender::Agent => write!(f, "agent"),
        }
    }
}

impl FromStr for MessageSender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageSender::User),
            "agent" => Ok(MessageSender::Agent),
            other => Err(format!("invalid message sender: '{other}'")),
        }
    }
}

/// Payload kind of a designer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Asset,
}

/// Opaque display handle for an uploaded asset (a local preview URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry in the designer conversation.
///
/// For `MessageKind::Asset` the `content` is the uploaded file name and
/// `asset_reference` carries the preview handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignerMessage {
    pub id: MessageId,
    pub sender: MessageSender,
    pub content: String,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_reference: Option<AssetHandle>,
    pub created_at: DateTime<Utc>,
}

/// A paired visual description and voice-over line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub visual: String,
    pub voice_over: String,
}

impl Scene {
    pub fn new(visual: impl Into<String>, voice_over: impl Into<String>) -> Self {
        Self {
            visual: visual.into(),
            voice_over: voice_over.into(),
        }
    }
}

/// The accumulated structured description of the ad being designed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub title: String,
    pub product: String,
    pub target_audience: String,
    pub ad_tone: String,
    /// Asset file names in upload order.
    pub assets: Vec<String>,
    pub scenes: Vec<Scene>,
}

impl Default for Blueprint {
    fn default() -> Self {
        Self {
            title: UNTITLED_AD.to_string(),
            product: String::new(),
            target_audience: String::new(),
            ad_tone: String::new(),
            assets: Vec::new(),
            scenes: Vec::new(),
        }
    }
}

/// Display state of a designer session.
///
/// `Generating` is terminal: a separate view takes over from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignerPhase {
    #[default]
    Composing,
    Generating,
}

impl fmt::Display for DesignerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignerPhase::Composing => write!(f, "composing"),
            DesignerPhase::Generating => write!(f, "generating"),
        }
    }
}

/// A file picked by the user, ready to be registered as an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUpload {
    /// File name shown in the chat and stored in the blueprint.
    pub name: String,
    /// Where the bytes live (a local path or URL); never uploaded anywhere.
    pub location: String,
}

impl AssetUpload {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}
