//! Template substitution and segment formatting

/// Placeholder replaced by the bar segment
pub const BAR: &str = "{bar}";
/// Placeholder replaced by the percent segment
pub const PERCENT: &str = "{percent}";
/// Placeholder replaced by the counter segment
pub const COUNT: &str = "{count}";

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "{bar} {percent} {count}";

/// The three pieces a template can refer to
#[derive(Debug, Clone, Copy)]
pub struct Segments<'a> {
    /// Text for `{bar}`
    pub bar: &'a str,
    /// Text for `{percent}`
    pub percent: &'a str,
    /// Text for `{count}`
    pub count: &'a str,
}

/// Replace every placeholder of `template` with its segment.
///
/// The template is scanned once from left to right, so text coming from a
/// segment is never scanned for placeholders again. Any other `{...}`
/// sequence is copied through unchanged.
pub fn substitute(template: &str, segments: &Segments<'_>) -> String {
    let mut out = String::with_capacity(template.len() + segments.bar.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let (token, text) = [
            (BAR, segments.bar),
            (PERCENT, segments.percent),
            (COUNT, segments.count),
        ]
        .into_iter()
        .find(|(token, _)| rest.starts_with(token))
        .unwrap_or(("{", "{"));

        out.push_str(text);
        rest = &rest[token.len()..];
    }
    out.push_str(rest);

    out
}

/// The bar segment: caps around `width` cells, the first `filled` of which
/// carry the fill symbol.
pub fn format_bar(fill: char, (start, end): (char, char), width: usize, filled: i64) -> String {
    let filled = usize::try_from(filled.max(0)).unwrap_or(usize::MAX);

    let mut bar = String::with_capacity(width + 2);
    bar.push(start);
    bar.extend((0..width).map(|i| if i < filled { fill } else { ' ' }));
    bar.push(end);
    bar
}

/// The percent segment, e.g. `42%`
pub fn format_percent(percent: i64) -> String {
    format!("{}%", percent)
}

/// The counter segment, e.g. `5/10`
pub fn format_count(current: i64, total: i64) -> String {
    format!("{}/{}", current, total)
}

#[cfg(test)]
mod tests {
    use super::{format_bar, substitute, Segments, DEFAULT_TEMPLATE};

    const SEGMENTS: Segments<'static> = Segments {
        bar: "[##  ]",
        percent: "50%",
        count: "2/4",
    };

    #[test]
    fn default_template() {
        assert_eq!(substitute(DEFAULT_TEMPLATE, &SEGMENTS), "[##  ] 50% 2/4");
    }

    #[test]
    fn empty_segments_keep_spacing() {
        let segments = Segments {
            percent: "",
            count: "",
            ..SEGMENTS
        };
        assert_eq!(substitute(DEFAULT_TEMPLATE, &segments), "[##  ]  ");
    }

    #[test]
    fn repeated_and_reordered() {
        assert_eq!(
            substitute("{count} {bar}{bar} ({percent})", &SEGMENTS),
            "2/4 [##  ][##  ] (50%)"
        );
    }

    #[test]
    fn unknown_braces_pass_through() {
        assert_eq!(
            substitute("{eta} {bar {percent}} {", &SEGMENTS),
            "{eta} {bar 50%} {"
        );
        assert_eq!(substitute("{{bar}}", &SEGMENTS), "{[##  ]}");
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute("", &SEGMENTS), "");
        assert_eq!(substitute("loading…", &SEGMENTS), "loading…");
    }

    #[test]
    fn segments_are_not_rescanned() {
        let segments = Segments {
            bar: "{count}",
            ..SEGMENTS
        };
        assert_eq!(substitute("{bar} {count}", &segments), "{count} 2/4");
    }

    #[test]
    fn bar_cells() {
        assert_eq!(format_bar('#', ('[', ']'), 4, 2), "[##  ]");
        assert_eq!(format_bar('#', ('<', '>'), 4, 0), "<    >");
        assert_eq!(format_bar('=', ('|', '|'), 3, 7), "|===|");
        assert_eq!(format_bar('#', ('[', ']'), 3, -2), "[   ]");
        assert_eq!(format_bar('#', ('[', ']'), 0, 5), "[]");
    }
}
