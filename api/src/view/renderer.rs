//! Journal page renderer
//!
//! Renders the entry form and the week-grouped journal to HTML.

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::WeekBucket;

/// Render the full journal page
pub fn render_page(weeks: &[WeekBucket]) -> String {
    let mut buf = String::new();

    buf.push_str("<!doctype html>\n");
    buf.push_str("<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str("<title>Work Journal</title>\n");
    buf.push_str(STYLE);
    buf.push_str("</head>\n<body>\n");

    buf.push_str("<h1>Work Journal</h1>\n");
    buf.push_str("<p class=\"tagline\">Learnings and doings. Updated weekly</p>\n");

    buf.push_str(&render_form());

    if weeks.is_empty() {
        buf.push_str("<p class=\"empty\">No entries yet.</p>\n");
    } else {
        for week in weeks {
            buf.push_str(&render_week(week));
        }
    }

    buf.push_str("</body>\n</html>\n");
    buf
}

fn render_form() -> String {
    let mut buf = String::new();

    buf.push_str("<section class=\"entry-form\">\n");
    buf.push_str("<form method=\"post\" action=\"/entries\">\n");
    buf.push_str("<p class=\"form-title\">Create an entry</p>\n");
    buf.push_str("<input type=\"date\" name=\"date\" required>\n");
    buf.push_str("<div class=\"categories\">\n");
    buf.push_str(
        "<label><input type=\"radio\" name=\"category\" value=\"work\" checked> Work</label>\n",
    );
    buf.push_str(
        "<label><input type=\"radio\" name=\"category\" value=\"learning\"> Learning</label>\n",
    );
    buf.push_str(
        "<label><input type=\"radio\" name=\"category\" value=\"interesting-thing\"> Interesting thing</label>\n",
    );
    buf.push_str("</div>\n");
    buf.push_str(
        "<textarea name=\"text\" placeholder=\"Write your entry...\" required></textarea>\n",
    );
    buf.push_str("<button type=\"submit\">Save</button>\n");
    buf.push_str("</form>\n</section>\n");

    buf
}

fn render_week(week: &WeekBucket) -> String {
    let mut buf = String::new();

    buf.push_str("<section class=\"week\">\n");
    buf.push_str(&format!(
        "<p class=\"week-heading\">{}</p>\n",
        week_heading(week.week_start)
    ));

    // Absent categories render nothing at all
    for (category, entries) in &week.entries_by_category {
        buf.push_str("<div class=\"category\">\n");
        buf.push_str(&format!("<p>{}</p>\n<ul>\n", category.label()));
        for entry in entries {
            buf.push_str(&format!("<li>{}</li>\n", escape_html(&entry.text)));
        }
        buf.push_str("</ul>\n</div>\n");
    }

    buf.push_str("</section>\n");
    buf
}

/// Heading like "Week of May 5th"
fn week_heading(week_start: NaiveDate) -> String {
    let day = week_start.day();
    format!(
        "Week of {} {}{}",
        week_start.format("%B"),
        day,
        ordinal_suffix(day)
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

const STYLE: &str = "<style>\n\
    body { max-width: 40rem; margin: 2.5rem auto; padding: 0 1rem; font-family: system-ui, sans-serif; }\n\
    .tagline { color: #888; }\n\
    .entry-form { border: 1px solid #ccc; padding: 1rem; margin: 2rem 0; }\n\
    .form-title { font-style: italic; margin-top: 0; }\n\
    .categories { margin: 0.5rem 0; }\n\
    .categories label { margin-right: 1.5rem; }\n\
    textarea { display: block; width: 100%; margin: 0.5rem 0; }\n\
    .week-heading { font-weight: bold; }\n\
    .category ul { margin: 0.25rem 0 1rem; }\n\
    </style>\n";

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::entities::{Category, Entry, EntryId};

    fn bucket_with(texts: &[(&str, Category)]) -> WeekBucket {
        let week_start = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let mut bucket = WeekBucket::new(week_start);
        for (text, category) in texts {
            bucket
                .entries_by_category
                .entry(*category)
                .or_default()
                .push(Entry {
                    id: EntryId::new(),
                    date: week_start,
                    category: *category,
                    text: text.to_string(),
                    created_at: Utc::now(),
                });
        }
        bucket
    }

    #[test]
    fn page_contains_form_and_entries() {
        let page = render_page(&[bucket_with(&[("Shipped the release", Category::Work)])]);

        assert!(page.contains("Work Journal"));
        assert!(page.contains("action=\"/entries\""));
        assert!(page.contains("Week of May 5th"));
        assert!(page.contains("<li>Shipped the release</li>"));
    }

    #[test]
    fn empty_journal_renders_placeholder() {
        let page = render_page(&[]);
        assert!(page.contains("No entries yet."));
    }

    #[test]
    fn absent_categories_render_no_heading() {
        let page = render_page(&[bucket_with(&[("only work", Category::Work)])]);

        assert!(page.contains("<p>Work</p>"));
        assert!(!page.contains("<p>Learnings</p>"));
        assert!(!page.contains("<p>Interesting things</p>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let page = render_page(&[bucket_with(&[("<script>alert(1)</script>", Category::Work)])]);

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn week_headings_use_ordinal_suffixes() {
        let heading = |y, m, d| week_heading(NaiveDate::from_ymd_opt(y, m, d).unwrap());

        assert_eq!(heading(2024, 5, 1), "Week of May 1st");
        assert_eq!(heading(2024, 9, 22), "Week of September 22nd");
        assert_eq!(heading(2024, 3, 3), "Week of March 3rd");
        assert_eq!(heading(2024, 12, 11), "Week of December 11th");
    }
}
