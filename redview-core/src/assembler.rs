use crate::error::CoreError;
use crate::filter::is_eligible;
use crate::images::select_image;
use crate::title::format_title;
use crate::types::{Config, OutputPost, RawPost};
use tracing::debug;

/// Turns one fetched feed page into the normalized records handed to the
/// display layer. Ineligible posts are dropped; survivors keep their
/// relative order. A bad replacement rule aborts the whole cycle, since it
/// is a configuration fault rather than a property of any one post.
pub fn assemble(posts: Vec<RawPost>, config: &Config) -> Result<Vec<OutputPost>, CoreError> {
    let total = posts.len();
    let output: Vec<OutputPost> = posts
        .into_iter()
        .filter(|post| is_eligible(post, config.display_type, config.image_quality))
        .map(|post| build_output(post, config))
        .collect::<Result<_, _>>()?;

    debug!("Assembled {} of {} fetched posts", output.len(), total);
    Ok(output)
}

fn build_output(post: RawPost, config: &Config) -> Result<OutputPost, CoreError> {
    let title = format_title(
        &post.title,
        &config.title_replacements,
        config.character_limit,
    )?;
    let src = select_image(post.preview.as_ref(), &post.thumbnail, config.image_quality);
    let thumbnail = post.thumbnail.url().unwrap_or_default().to_string();

    Ok(OutputPost {
        title,
        score: post.score,
        thumbnail,
        src,
        gilded: post.gilded,
        num_comments: post.num_comments,
        subreddit: post.subreddit,
        author: post.author,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        DisplayType, ImageQuality, ImageVariant, ImageVariantSet, PreviewData, SubredditSpec,
        Thumbnail, TitleRule,
    };

    fn config(display_type: DisplayType) -> Config {
        Config {
            subreddit: SubredditSpec::One("rust".to_string()),
            feed: "hot".to_string(),
            count: 20,
            display_type,
            image_quality: ImageQuality::High,
            title_replacements: vec![],
            character_limit: None,
        }
    }

    fn image_post(title: &str) -> RawPost {
        RawPost {
            title: title.to_string(),
            score: 42,
            thumbnail: Thumbnail::Url("https://thumb.jpg".to_string()),
            preview: Some(PreviewData {
                images: vec![ImageVariantSet {
                    source: Some(ImageVariant {
                        url: "https://full.jpg".to_string(),
                        width: 800,
                        height: 600,
                    }),
                    resolutions: vec![
                        ImageVariant {
                            url: "https://small.jpg".to_string(),
                            width: 108,
                            height: 81,
                        },
                        ImageVariant {
                            url: "https://medium.jpg".to_string(),
                            width: 216,
                            height: 162,
                        },
                    ],
                }],
            }),
            num_comments: 7,
            subreddit: "rust".to_string(),
            author: "ferris".to_string(),
            gilded: 1,
        }
    }

    fn sentinel_post() -> RawPost {
        RawPost {
            title: "No image here".to_string(),
            score: 3,
            thumbnail: Thumbnail::DefaultIcon,
            preview: None,
            num_comments: 0,
            subreddit: "rust".to_string(),
            author: "nobody".to_string(),
            gilded: 0,
        }
    }

    #[test]
    fn test_end_to_end_list_mode() {
        let posts = vec![image_post("A picture"), sentinel_post()];
        let output = assemble(posts, &config(DisplayType::List)).unwrap();

        assert_eq!(output.len(), 1);
        let post = &output[0];
        assert_eq!(post.title, "A picture");
        assert_eq!(post.score, 42);
        assert_eq!(post.thumbnail, "https://thumb.jpg");
        // Three candidates, high quality floors to index 2, the source.
        assert_eq!(post.src, Some("https://full.jpg".to_string()));
        assert_eq!(post.gilded, 1);
        assert_eq!(post.num_comments, 7);
        assert_eq!(post.subreddit, "rust");
        assert_eq!(post.author, "ferris");
    }

    #[test]
    fn test_order_is_preserved() {
        let posts = vec![
            image_post("first"),
            sentinel_post(),
            image_post("second"),
            image_post("third"),
        ];
        let output = assemble(posts, &config(DisplayType::List)).unwrap();
        let titles: Vec<&str> = output.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_title_rules_and_limit_applied() {
        let mut config = config(DisplayType::List);
        config.title_replacements = vec![TitleRule {
            to_replace: "picture".to_string(),
            replacement: "photograph of the harbor".to_string(),
            case_sensitive: true,
        }];
        config.character_limit = Some(8);

        let output = assemble(vec![image_post("A picture")], &config).unwrap();
        assert_eq!(output[0].title, "A photog...");
    }

    #[test]
    fn test_image_mode_drops_posts_without_preview() {
        let mut plain = image_post("no preview");
        plain.preview = None;

        let output = assemble(
            vec![plain, image_post("with preview")],
            &config(DisplayType::Image),
        )
        .unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].title, "with preview");
    }

    #[test]
    fn test_bad_rule_fails_the_cycle() {
        let mut config = config(DisplayType::List);
        config.title_replacements = vec![TitleRule {
            to_replace: "(".to_string(),
            replacement: "".to_string(),
            case_sensitive: true,
        }];

        let result = assemble(vec![image_post("anything")], &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let output = assemble(vec![], &config(DisplayType::List)).unwrap();
        assert!(output.is_empty());
    }
}
