//! Messages delivered by the upstream instrument and quote feeds.
//!
//! Example instrument message:
//!
//! ```json
//! {"type":"ADD","data":{"isin":"SJ3124P43460","description":"commune fuisset ac tristique"}}
//! ```
//!
//! Example quote message:
//!
//! ```json
//! {"data":{"isin":"IA5E35112712","price":1073.3978}}
//! ```

use serde::{Deserialize, Serialize};

use crate::{Isin, Result};

/// Lifecycle operation carried by an [`InstrumentEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    /// The instrument became available; its topic is (re)created.
    Add,
    /// The instrument was withdrawn; its topic is removed.
    Delete,
}

/// Instrument metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Instrument identifier.
    pub isin: Isin,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Instrument lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentEvent {
    /// Whether the instrument is added or deleted.
    #[serde(rename = "type")]
    pub kind: EventType,
    /// The affected instrument.
    pub data: Instrument,
}

impl InstrumentEvent {
    /// Creates an `ADD` event.
    #[must_use]
    pub fn add(isin: impl Into<Isin>, description: impl Into<String>) -> Self {
        Self {
            kind: EventType::Add,
            data: Instrument {
                isin: isin.into(),
                description: description.into(),
            },
        }
    }

    /// Creates a `DELETE` event.
    #[must_use]
    pub fn delete(isin: impl Into<Isin>) -> Self {
        Self {
            kind: EventType::Delete,
            data: Instrument {
                isin: isin.into(),
                description: String::new(),
            },
        }
    }
}

/// Price quote for an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument identifier.
    pub isin: Isin,
    /// Quoted price.
    pub price: f64,
}

/// Quote event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteEvent {
    /// The quote.
    pub data: Quote,
}

impl QuoteEvent {
    /// Creates a quote event.
    #[must_use]
    pub fn new(isin: impl Into<Isin>, price: f64) -> Self {
        Self {
            data: Quote {
                isin: isin.into(),
                price,
            },
        }
    }
}

/// Any message from the upstream feed.
///
/// Instrument events are recognised by their `type` field; everything else
/// with a `data.isin` and `data.price` is a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedEvent {
    /// Instrument lifecycle event.
    Instrument(InstrumentEvent),
    /// Price quote.
    Quote(QuoteEvent),
}

impl FeedEvent {
    /// Decodes a single JSON feed message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message is not valid JSON or matches neither
    /// message shape.
    pub fn from_json(message: &str) -> Result<Self> {
        Ok(serde_json::from_str(message)?)
    }

    /// Returns the instrument the event refers to.
    #[must_use]
    pub const fn isin(&self) -> &Isin {
        match self {
            Self::Instrument(event) => &event.data.isin,
            Self::Quote(event) => &event.data.isin,
        }
    }
}

impl From<InstrumentEvent> for FeedEvent {
    fn from(event: InstrumentEvent) -> Self {
        Self::Instrument(event)
    }
}

impl From<QuoteEvent> for FeedEvent {
    fn from(event: QuoteEvent) -> Self {
        Self::Quote(event)
    }
}
