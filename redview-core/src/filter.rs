use crate::images::select_image;
use crate::types::{DisplayType, ImageQuality, RawPost};

/// Decides whether a fetched post may appear in the output feed.
///
/// Every post needs a real thumbnail URL. In image mode a post must also
/// resolve to a preview image, otherwise the widget would render an empty
/// tile.
pub fn is_eligible(post: &RawPost, display_type: DisplayType, quality: ImageQuality) -> bool {
    has_valid_thumbnail(post) && is_image_valid(post, display_type, quality)
}

fn has_valid_thumbnail(post: &RawPost) -> bool {
    post.thumbnail.is_valid_url()
}

fn is_image_valid(post: &RawPost, display_type: DisplayType, quality: ImageQuality) -> bool {
    if display_type != DisplayType::Image {
        return true;
    }
    select_image(post.preview.as_ref(), &post.thumbnail, quality).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageVariant, ImageVariantSet, PreviewData, Thumbnail};

    fn post(thumbnail: Thumbnail, preview: Option<PreviewData>) -> RawPost {
        RawPost {
            title: "A post".to_string(),
            score: 10,
            thumbnail,
            preview,
            num_comments: 2,
            subreddit: "rust".to_string(),
            author: "someone".to_string(),
            gilded: 0,
        }
    }

    fn full_preview() -> PreviewData {
        PreviewData {
            images: vec![ImageVariantSet {
                source: Some(ImageVariant {
                    url: "https://full.jpg".to_string(),
                    width: 800,
                    height: 600,
                }),
                resolutions: vec![ImageVariant {
                    url: "https://small.jpg".to_string(),
                    width: 108,
                    height: 81,
                }],
            }],
        }
    }

    #[test]
    fn test_self_thumbnail_is_rejected() {
        let post = post(Thumbnail::SelfPost, Some(full_preview()));
        assert!(!is_eligible(&post, DisplayType::List, ImageQuality::Mid));
    }

    #[test]
    fn test_default_thumbnail_is_rejected() {
        let post = post(Thumbnail::DefaultIcon, None);
        assert!(!is_eligible(&post, DisplayType::List, ImageQuality::Mid));
    }

    #[test]
    fn test_http_thumbnail_passes_in_list_mode() {
        let post = post(Thumbnail::Url("https://thumb.jpg".to_string()), None);
        assert!(is_eligible(&post, DisplayType::List, ImageQuality::Mid));
    }

    #[test]
    fn test_image_mode_requires_preview() {
        let post = post(Thumbnail::Url("https://thumb.jpg".to_string()), None);
        assert!(!is_eligible(&post, DisplayType::Image, ImageQuality::Mid));
    }

    #[test]
    fn test_image_mode_accepts_full_preview() {
        let post = post(
            Thumbnail::Url("https://thumb.jpg".to_string()),
            Some(full_preview()),
        );
        assert!(is_eligible(&post, DisplayType::Image, ImageQuality::Mid));
    }

    #[test]
    fn test_image_mode_rejects_preview_without_source() {
        let preview = PreviewData {
            images: vec![ImageVariantSet {
                source: None,
                resolutions: vec![],
            }],
        };
        let post = post(Thumbnail::Url("https://thumb.jpg".to_string()), Some(preview));
        assert!(!is_eligible(&post, DisplayType::Image, ImageQuality::Mid));
    }
}
