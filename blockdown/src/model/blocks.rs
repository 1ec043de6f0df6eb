//! The Editor.js block document model.
//!
//! The JSON shape produced and consumed here is the interchange format at
//! the process boundary, so field names and types must match what the
//! Editor.js runtime saves: `{ time, blocks: [{ id, type, data }], version }`.
//!
//! `type` is an open tag in the wire format. Internally we close it into
//! [`BlockData`], one variant per known tag plus [`BlockData::Unrecognized`]
//! carrying the raw payload of anything else. Unknown tags survive a
//! parse/serialize round trip unchanged; the converters are the layer that
//! drops them (with a diagnostic).
//!
//! Payload decoding is forgiving: missing fields take their documented
//! defaults, and a known tag whose payload does not decode at all falls back
//! to `Unrecognized` so one bad block can never fail a whole document.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Version string stamped into synthesized block documents.
pub const EDITOR_VERSION: &str = "2.28.0";

/// A complete Editor.js document: save timestamp, ordered blocks, editor version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDocument {
    /// Unix timestamp in milliseconds.
    pub time: i64,
    pub blocks: Vec<Block>,
    pub version: String,
}

/// One entry in the flat block list.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: String,
    pub data: BlockData,
}

/// Wire shape of a block; serde bridge between JSON and [`BlockData`].
#[derive(Serialize, Deserialize)]
struct RawBlock {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    data: Value,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawBlock {
            id: self.id.clone(),
            kind: self.data.tag().to_string(),
            data: self.data.data_value().map_err(S::Error::custom)?,
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlock::deserialize(deserializer)?;
        Ok(Block {
            id: raw.id,
            data: BlockData::from_parts(raw.kind, raw.data),
        })
    }
}

/// Typed payload of a block, keyed by the wire `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Paragraph(ParagraphData),
    Header(HeaderData),
    List(ListData),
    Code(CodeData),
    Image(ImageData),
    Quote(QuoteData),
    Delimiter,
    /// Payload of a tag with no typed representation, kept verbatim so it
    /// re-serializes losslessly. Known tags with undecodable payloads land
    /// here too.
    Unrecognized { tag: String, data: Value },
}

impl BlockData {
    /// The wire `type` tag for this payload.
    pub fn tag(&self) -> &str {
        match self {
            BlockData::Paragraph(_) => "paragraph",
            BlockData::Header(_) => "header",
            BlockData::List(_) => "list",
            BlockData::Code(_) => "code",
            BlockData::Image(_) => "image",
            BlockData::Quote(_) => "quote",
            BlockData::Delimiter => "delimiter",
            BlockData::Unrecognized { tag, .. } => tag,
        }
    }

    /// Decode a `(type, data)` pair from the wire. Never fails: payloads
    /// that do not decode are preserved as [`BlockData::Unrecognized`].
    pub fn from_parts(tag: String, data: Value) -> BlockData {
        let decoded = match tag.as_str() {
            "paragraph" => serde_json::from_value(data.clone()).map(BlockData::Paragraph),
            "header" => serde_json::from_value(data.clone()).map(BlockData::Header),
            "list" => serde_json::from_value(data.clone()).map(BlockData::List),
            "code" => serde_json::from_value(data.clone()).map(BlockData::Code),
            "image" => serde_json::from_value(data.clone()).map(BlockData::Image),
            "quote" => serde_json::from_value(data.clone()).map(BlockData::Quote),
            "delimiter" => Ok(BlockData::Delimiter),
            _ => return BlockData::Unrecognized { tag, data },
        };
        decoded.unwrap_or(BlockData::Unrecognized { tag, data })
    }

    /// The wire `data` object for this payload.
    pub fn data_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            BlockData::Paragraph(data) => serde_json::to_value(data),
            BlockData::Header(data) => serde_json::to_value(data),
            BlockData::List(data) => serde_json::to_value(data),
            BlockData::Code(data) => serde_json::to_value(data),
            BlockData::Image(data) => serde_json::to_value(data),
            BlockData::Quote(data) => serde_json::to_value(data),
            BlockData::Delimiter => Ok(Value::Object(serde_json::Map::new())),
            BlockData::Unrecognized { data, .. } => Ok(data.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParagraphData {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_level() -> u8 {
    1
}

impl Default for HeaderData {
    fn default() -> Self {
        HeaderData {
            text: String::new(),
            level: default_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    pub style: ListStyle,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

/// Marker style of a whole list. The block model stores this once, at the
/// top level; nested items carry no style of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Unordered,
}

impl ListStyle {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListStyle::Ordered)
    }

    pub fn from_ordered(ordered: bool) -> Self {
        if ordered {
            ListStyle::Ordered
        } else {
            ListStyle::Unordered
        }
    }
}

/// One list entry: either bare text, or text plus an optional nested list.
///
/// The two shapes are distinguished structurally on the wire (string vs
/// object), hence the untagged representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Text(String),
    Nested(NestedItem),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestedItem {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ListItem>,
}

impl ListItem {
    /// The item's own text.
    pub fn content(&self) -> &str {
        match self {
            ListItem::Text(text) => text,
            ListItem::Nested(item) => &item.content,
        }
    }

    /// The nested items, if any. An empty `items` array is normalized to
    /// "no nested list" here.
    pub fn nested(&self) -> Option<&[ListItem]> {
        match self {
            ListItem::Text(_) => None,
            ListItem::Nested(item) if item.items.is_empty() => None,
            ListItem::Nested(item) => Some(&item.items),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeData {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// Upload-style payloads nest the location under `file.url`; it wins
    /// over the flat `url` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFile>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub with_border: bool,
    #[serde(default)]
    pub with_background: bool,
    #[serde(default)]
    pub stretched: bool,
}

impl ImageData {
    /// Resolved image location: `file.url` when present, else `url`.
    pub fn source_url(&self) -> &str {
        match &self.file {
            Some(file) => &file.url,
            None => &self.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageFile {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default = "default_alignment")]
    pub alignment: String,
}

fn default_alignment() -> String {
    "left".to_string()
}

impl Default for QuoteData {
    fn default() -> Self {
        QuoteData {
            text: String::new(),
            caption: String::new(),
            alignment: default_alignment(),
        }
    }
}
