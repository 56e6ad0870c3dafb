use crate::error::{ConfigError, CoreError};
use crate::types::TitleRule;
use regex::RegexBuilder;

/// Applies the configured replacement rules to a title, in order, then
/// truncates to the character limit.
///
/// Each rule is a global regex substitution over the output of the previous
/// rule. A rule with a pattern that does not compile is a configuration
/// fault and is reported as such rather than skipped.
pub fn format_title(
    title: &str,
    rules: &[TitleRule],
    limit: Option<usize>,
) -> Result<String, CoreError> {
    let replaced = rules.iter().try_fold(title.to_string(), |current, rule| {
        let pattern = RegexBuilder::new(&rule.to_replace)
            .case_insensitive(!rule.case_sensitive)
            .build()
            .map_err(|source| ConfigError::InvalidRule {
                pattern: rule.to_replace.clone(),
                source,
            })?;
        Ok::<_, ConfigError>(pattern.replace_all(&current, rule.replacement.as_str()).into_owned())
    })?;

    Ok(match limit {
        Some(limit) => truncate(&replaced, limit),
        None => replaced,
    })
}

/// Cuts `title` down to at most `limit` characters and marks it with "..."
/// when anything was lost. A title already within the limit comes back
/// untouched, so an exactly-limit-length title carries no marker.
fn truncate(title: &str, limit: usize) -> String {
    let original_len = title.chars().count();
    let mut truncated: String = title.chars().take(limit).collect();
    truncated = truncated.trim().to_string();

    if truncated.chars().count() != original_len {
        truncated.push_str("...");
    }
    truncated
}
