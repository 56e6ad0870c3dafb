use crate::types::{ImageQuality, ImageVariant, PreviewData, Thumbnail};

/// Number of steps on the nominal quality scale. The percentage is taken in
/// quarter steps regardless of how many candidate variants a post carries.
const QUALITY_SCALE: f64 = 4.0;

/// Candidate-list length above which proportional rounding is used instead
/// of flooring.
const ROUNDING_THRESHOLD: usize = 5;

/// Picks the preview image URL for a post, or None when the post does not
/// qualify as an image post.
///
/// A post qualifies only when it has preview data with at least one variant
/// set, that set carries a source variant, and the thumbnail looks like a
/// URL. The returned URL is chosen from the post's size-ordered variants in
/// proportion to the requested quality.
pub fn select_image(
    preview: Option<&PreviewData>,
    thumbnail: &Thumbnail,
    quality: ImageQuality,
) -> Option<String> {
    let preview = preview?;
    if !thumbnail.mentions_http() {
        return None;
    }
    let variant_set = preview.images.first()?;
    let source = variant_set.source.as_ref()?;

    let candidates = candidate_list(&variant_set.resolutions, source);
    let index = select_index(quality, candidates.len());
    candidates.get(index).map(|variant| variant.url.clone())
}

/// Builds the candidate list for selection: the size-ordered resolutions,
/// with the full-resolution source appended when the last entry does not
/// already match its dimensions. The caller's preview data is never touched.
fn candidate_list<'a>(
    resolutions: &'a [ImageVariant],
    source: &'a ImageVariant,
) -> Vec<&'a ImageVariant> {
    let mut candidates: Vec<&ImageVariant> = resolutions.iter().collect();
    match candidates.last() {
        Some(last) if last.same_dimensions(source) => {}
        _ => candidates.push(source),
    }
    candidates
}

/// Maps a quality preference to an index into a candidate list of length
/// `n`. The quality rank is taken as a fraction of the nominal 0..4 scale;
/// short lists floor the product so a high preference cannot overshoot,
/// longer lists round for better proportionality. The result is clamped to
/// the last entry.
fn select_index(quality: ImageQuality, n: usize) -> usize {
    let quality_percent = quality.rank() as f64 / QUALITY_SCALE;
    let position = quality_percent * n as f64;

    let index = if n > ROUNDING_THRESHOLD {
        position.round() as usize
    } else {
        position.floor() as usize
    };
    index.min(n.saturating_sub(1))
}
