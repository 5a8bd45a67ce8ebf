pub mod color;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{domain::weather::LocationScore, error::WeatherError};
use color::{relative_position, score_color};

pub const HEADER: &str = "Results of the best weather competition today are:";

/// Slack incoming-webhook payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumb_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub short: bool,
}

impl Field {
    fn short(title: Option<&str>, value: String) -> Self {
        Self {
            title: title.map(str::to_string),
            value,
            short: true,
        }
    }

    fn long(value: String) -> Self {
        Self {
            title: None,
            value,
            short: false,
        }
    }
}

impl Message {
    #[must_use]
    pub fn new(attachments: Vec<Attachment>) -> Self {
        Self {
            text: HEADER.to_string(),
            channel: None,
            attachments,
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Option<String>) -> Self {
        self.channel = channel.filter(|c| !c.is_empty());
        self
    }
}

/// Builds the report for scores already ranked best first.
///
/// Colors run from green for the first entry to red for the last. An empty
/// ranking yields the header alone.
#[must_use]
pub fn format_report(ranked: &[LocationScore]) -> Message {
    let (Some(best), Some(worst)) = (ranked.first(), ranked.last()) else {
        return Message::new(Vec::new());
    };

    let attachments = ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let t = relative_position(entry.score, worst.score, best.score);
            attachment(entry, idx == 0, score_color(t))
        })
        .collect();

    Message::new(attachments)
}

fn attachment(entry: &LocationScore, with_titles: bool, color: String) -> Attachment {
    let (location_title, score_title) = if with_titles {
        (Some("Location"), Some("Score"))
    } else {
        (None, None)
    };

    Attachment {
        color,
        text: String::new(),
        fields: vec![
            Field::short(location_title, entry.location.clone()),
            Field::short(score_title, entry.score.to_string()),
            Field::long(entry.summary.clone()),
        ],
        thumb_url: entry.emoji(),
    }
}

/// Serializes a message as JSON indented by one space per level.
pub fn render_json(message: &Message) -> Result<String, WeatherError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    message
        .serialize(&mut serializer)
        .map_err(WeatherError::Render)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
