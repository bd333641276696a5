use crate::domain::category::Category;
use crate::domain::solution::SolutionItem;

/// Placeholder shown when a grid has zero items.
pub const EMPTY_GRID_TEXT: &str = "No solutions found.";

/// Escape text for HTML element and attribute contexts.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Admit http(s), absolute-path and fragment URLs; everything else (notably
/// `javascript:`) renders as an empty attribute.
fn sanitize_url(url: &str) -> &str {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || trimmed.starts_with('/')
        || trimmed.starts_with('#')
    {
        trimmed
    } else {
        ""
    }
}

/// Render one solution card.
///
/// This is the single card template for the whole system: the full-page
/// composer and the asynchronous filter response both call it, so the two
/// paths stay byte-for-byte identical and the client can swap fragments
/// into the same container. The whole card is clickable via `data-link`.
pub fn render_card(item: &SolutionItem) -> String {
    let link = item.detail_url.as_deref().map(sanitize_url).unwrap_or("");
    let image = match item.image_url.as_deref().map(sanitize_url) {
        Some(url) if !url.is_empty() => format!(
            "<div class=\"solution-image\"><img src=\"{}\" alt=\"{}\"></div>",
            escape_html(url),
            escape_html(&item.title)
        ),
        _ => String::new(),
    };

    format!(
        "<div class=\"col-md-4\">\
<div class=\"solution-card\" data-link=\"{link}\">\
<span class=\"solution-category\">{category}</span>\
<h3 class=\"solution-title\">{title}</h3>\
<div class=\"solution-excerpt\">{excerpt}</div>\
{image}\
<span class=\"solution-link\">Find out more</span>\
</div>\
</div>",
        link = escape_html(link),
        category = escape_html(&item.category),
        title = escape_html(&item.title),
        excerpt = escape_html(&item.excerpt),
    )
}

/// Render the grid body: a row of cards, or a single empty-state placeholder.
pub fn render_grid_items(items: &[SolutionItem]) -> String {
    if items.is_empty() {
        return format!("<p class=\"solutions-empty\">{EMPTY_GRID_TEXT}</p>");
    }

    let cards: String = items.iter().map(render_card).collect();
    format!("<div class=\"row\">{cards}</div>")
}

/// Render the category dropdown with the default pre-selected.
pub fn render_category_select(categories: &[Category], selected_id: i64) -> String {
    let mut options = String::new();
    for category in categories {
        let selected = if category.id == selected_id {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            category.id,
            selected,
            escape_html(&category.name)
        ));
    }

    format!("<select class=\"solutions-category-select\">{options}</select>")
}

/// Inline failure paragraph; every user-visible error renders through this
/// rather than failing the surrounding page.
pub fn render_error(message: &str) -> String {
    format!("<p class=\"solutions-error\">{}</p>", escape_html(message))
}
