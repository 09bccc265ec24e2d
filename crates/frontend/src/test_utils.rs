//! Helpers for inspecting server-rendered markup in tests.

/// Titles of the rendered project cards, in document order.
pub fn card_titles(html: &str) -> Vec<&str> {
    html.split("<h2 class=\"card-title\">")
        .skip(1)
        .filter_map(|rest| rest.split("</h2>").next())
        .map(str::trim)
        .collect()
}

/// Number of `<h1>`..`<h6>` elements.
pub fn heading_count(html: &str) -> usize {
    (1..=6)
        .map(|level| {
            let open = format!("<h{level}");
            html.match_indices(&open)
                .filter(|(at, _)| matches!(html[at + open.len()..].chars().next(), Some('>' | ' ')))
                .count()
        })
        .sum()
}

/// Every `href` attribute value, in document order.
pub fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        "<header><a href=\"/\">Showcases</a></header>",
        "<div class=\"card\"><h2 class=\"card-title\">One</h2><p>x</p></div>",
        "<hr><div class=\"card\"><h2 class=\"card-title\"> Two </h2></div>",
    );

    #[test]
    fn test_card_titles() {
        assert_eq!(card_titles(SAMPLE), ["One", "Two"]);
        assert!(card_titles("<h2>Other</h2>").is_empty());
    }

    #[test]
    fn test_heading_count_ignores_other_tags() {
        assert_eq!(heading_count(SAMPLE), 2);
        assert_eq!(heading_count("<header></header><hr><h1>A</h1>"), 1);
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(hrefs(SAMPLE), ["/"]);
    }
}
