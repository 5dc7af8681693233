//! Media records as returned by the Giphy API

use serde::{Deserialize, Deserializer};

/// One rendition of a GIF (original, downsampled, ...)
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Rendition {
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub width: u32,
    #[serde(default, deserialize_with = "number_or_string")]
    pub height: u32,
}

impl Rendition {
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Images {
    #[serde(default)]
    pub original: Rendition,
    #[serde(default)]
    pub fixed_width_downsampled: Rendition,
}

/// A single GIF. The app never edits these, it only stores whole records.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Media {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub images: Images,
}

impl Media {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }

    /// Link used for sharing: the original rendition, falling back to the page URL.
    pub fn share_url(&self) -> &str {
        if self.images.original.url.is_empty() {
            &self.url
        } else {
            &self.images.original.url
        }
    }
}

/// Top-level list response. `data` is optional so that a missing payload
/// can be told apart from an empty page.
#[derive(Debug, Deserialize)]
pub(crate) struct ListMediaResponse {
    pub data: Option<Vec<Media>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

// Giphy sends dimensions as decimal strings ("480"); accept numbers too.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_dimensions() {
        let json = r#"{
            "id": "abc",
            "title": "Dancing cat",
            "url": "https://giphy.com/gifs/abc",
            "images": {
                "original": {"url": "https://media.giphy.com/abc/giphy.gif", "width": "480", "height": "270"},
                "fixed_width_downsampled": {"url": "https://media.giphy.com/abc/200w_d.gif", "width": 200, "height": "113"}
            }
        }"#;

        let media: Media = serde_json::from_str(json).unwrap();
        assert_eq!(media.images.original.width, 480);
        assert_eq!(media.images.original.height, 270);
        assert_eq!(media.images.fixed_width_downsampled.width, 200);
        assert_eq!(media.share_url(), "https://media.giphy.com/abc/giphy.gif");
    }

    #[test]
    fn missing_title_and_images_fall_back() {
        let media: Media = serde_json::from_str(r#"{"id": "xyz", "title": " ", "url": "https://giphy.com/gifs/xyz"}"#).unwrap();

        assert_eq!(media.display_title(), "xyz");
        assert_eq!(media.share_url(), "https://giphy.com/gifs/xyz");
        assert_eq!(media.images.original.aspect_ratio(), None);
    }

    #[test]
    fn list_response_distinguishes_null_from_empty() {
        let empty: ListMediaResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(empty.data.map(|d| d.len()), Some(0));

        let missing: ListMediaResponse = serde_json::from_str(r#"{"meta": {"status": 200}}"#).unwrap();
        assert!(missing.data.is_none());
    }
}
