use regex::Regex;

/// Reference sentence whose length defines the excerpt display length, so
/// every card trims to the same visual height.
const EXCERPT_EXAMPLE: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy eirmod tempor invidunt ut labore et dolore";

const TRUNCATION_MARKER: &str = " [...]";

/// Normalize a raw description into a display excerpt.
///
/// Strips script/style elements (including their content) and all remaining
/// markup, collapses whitespace runs, trims, and truncates to the reference
/// length with a ` [...]` marker appended. Pure; empty input stays empty.
pub fn format_excerpt(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let block_pattern = Regex::new(r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>")
        .unwrap();
    let without_blocks = block_pattern.replace_all(raw, "");

    let tag_pattern = Regex::new(r"<[^>]*>").unwrap();
    let without_tags = tag_pattern.replace_all(&without_blocks, "");

    let whitespace_pattern = Regex::new(r"\s+").unwrap();
    let normalized = whitespace_pattern.replace_all(&without_tags, " ");
    let content = normalized.trim();

    let max_length = EXCERPT_EXAMPLE.chars().count();
    if content.chars().count() > max_length {
        let truncated: String = content.chars().take(max_length).collect();
        format!("{truncated}{TRUNCATION_MARKER}")
    } else {
        content.to_string()
    }
}
