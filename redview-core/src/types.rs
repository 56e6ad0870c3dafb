use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One raw post as decoded from the upstream listing. Extra upstream fields
/// are ignored; counters that vanish on deleted/removed posts default to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub title: String,
    pub score: i64,
    #[serde(default)]
    pub thumbnail: Thumbnail,
    #[serde(default)]
    pub preview: Option<PreviewData>,
    #[serde(default)]
    pub num_comments: u64,
    pub subreddit: String,
    pub author: String,
    #[serde(default)]
    pub gilded: u64,
}

/// Thumbnail field of a post. Reddit reports "no image" through a handful of
/// sentinel strings rather than a null, so the variants are enumerated here
/// instead of being sniffed out of the string at each call site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Thumbnail {
    Url(String),
    SelfPost,
    DefaultIcon,
    Nsfw,
    Spoiler,
    #[default]
    Missing,
}

impl Thumbnail {
    fn from_raw(raw: Option<String>) -> Self {
        match raw.as_deref() {
            None | Some("") => Thumbnail::Missing,
            Some("self") => Thumbnail::SelfPost,
            Some("default") => Thumbnail::DefaultIcon,
            Some("nsfw") => Thumbnail::Nsfw,
            Some("spoiler") => Thumbnail::Spoiler,
            Some(url) => Thumbnail::Url(url.to_string()),
        }
    }

    fn as_raw(&self) -> &str {
        match self {
            Thumbnail::Url(url) => url,
            Thumbnail::SelfPost => "self",
            Thumbnail::DefaultIcon => "default",
            Thumbnail::Nsfw => "nsfw",
            Thumbnail::Spoiler => "spoiler",
            Thumbnail::Missing => "",
        }
    }

    /// Strict check used by the post filter: an actual URL, anchored at
    /// `http`.
    pub fn is_valid_url(&self) -> bool {
        matches!(self, Thumbnail::Url(url) if url.starts_with("http"))
    }

    /// Looser substring check used by image selection.
    pub fn mentions_http(&self) -> bool {
        matches!(self, Thumbnail::Url(url) if url.contains("http"))
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Thumbnail::Url(url) => Some(url),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Thumbnail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Thumbnail::from_raw(raw))
    }
}

impl Serialize for Thumbnail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_raw())
    }
}

/// Preview block of a post. Only the first variant set is ever consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewData {
    #[serde(default)]
    pub images: Vec<ImageVariantSet>,
}

/// The differently-sized renditions of one post image, plus the original.
/// `resolutions` is ordered ascending by size and is not guaranteed to
/// contain an entry matching `source`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageVariantSet {
    #[serde(default)]
    pub source: Option<ImageVariant>,
    #[serde(default)]
    pub resolutions: Vec<ImageVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageVariant {
    pub fn same_dimensions(&self, other: &ImageVariant) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// One text-replacement rule applied to post titles. `to_replace` is a
/// regular expression, applied as a global substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRule {
    pub to_replace: String,
    pub replacement: String,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn default_case_sensitive() -> bool {
    true
}

/// Preview image quality preference, ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Low,
    Mid,
    #[serde(rename = "mid-high")]
    MidHigh,
    High,
}

impl ImageQuality {
    /// Position on the quality scale, 0..=3.
    pub fn rank(&self) -> usize {
        match self {
            ImageQuality::Low => 0,
            ImageQuality::Mid => 1,
            ImageQuality::MidHigh => 2,
            ImageQuality::High => 3,
        }
    }
}

/// How the widget renders the feed. Image mode additionally requires posts
/// to carry usable preview data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Image,
    List,
}

/// One subreddit, or several combined into a single feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubredditSpec {
    One(String),
    Many(Vec<String>),
}

impl SubredditSpec {
    /// Path segment for the feed request, multireddit style: "rust+cats".
    pub fn joined(&self) -> String {
        match self {
            SubredditSpec::One(name) => name.clone(),
            SubredditSpec::Many(names) => names.join("+"),
        }
    }
}

/// Widget configuration, supplied once per fetch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub subreddit: SubredditSpec,
    #[serde(default = "default_feed")]
    pub feed: String,
    #[serde(default = "default_count")]
    pub count: u32,
    pub display_type: DisplayType,
    pub image_quality: ImageQuality,
    #[serde(default)]
    pub title_replacements: Vec<TitleRule>,
    /// None means no limit.
    #[serde(default)]
    pub character_limit: Option<usize>,
}

fn default_feed() -> String {
    "hot".to_string()
}

fn default_count() -> u32 {
    20
}

/// Normalized post record handed to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPost {
    pub title: String,
    pub score: i64,
    pub thumbnail: String,
    pub src: Option<String>,
    pub gilded: u64,
    pub num_comments: u64,
    pub subreddit: String,
    pub author: String,
}
