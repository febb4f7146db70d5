use std::fmt::Display;

use pubshelf_core::ViewState;
use pubshelf_model::Publication;

/// Render the current page as plain text: one block per publication, then
/// the `Page X of Y` status line.
pub fn render_page(state: &ViewState) -> String {
    let mut out = String::new();

    let visible = state.visible();
    if visible.is_empty() {
        out.push_str("No publications to display.\n");
    }
    for publication in visible {
        push_entry(&mut out, publication);
    }

    out.push_str(&format!(
        "Page {} of {}\n",
        state.page(),
        state.total_pages()
    ));
    out
}

fn push_entry(out: &mut String, publication: &Publication) {
    out.push_str(&format!(
        "Title: {} <{}>\n",
        publication.title, publication.link
    ));
    out.push_str(&format!("  Year: {}\n", or_unknown(publication.year)));
    out.push_str(&format!(
        "  Citations: {}\n",
        or_unknown(publication.citations)
    ));
}

fn or_unknown<T: Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "Unknown".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubshelf_model::SortCriteria;

    fn publication(title: &str, year: Option<i32>, citations: Option<u64>) -> Publication {
        Publication {
            title: title.to_owned(),
            year,
            citations,
            link: "#".to_owned(),
        }
    }

    #[test]
    fn renders_entries_and_page_line() {
        let state = ViewState::new(
            vec![
                publication("First", Some(2020), Some(12)),
                publication("Second", None, None),
            ],
            SortCriteria::Popular,
            5,
        );

        let rendered = render_page(&state);

        assert!(rendered.contains("Title: First <#>"));
        assert!(rendered.contains("  Year: 2020"));
        assert!(rendered.contains("  Citations: 12"));
        assert!(rendered.contains("  Year: Unknown"));
        assert!(rendered.contains("  Citations: Unknown"));
        assert!(rendered.ends_with("Page 1 of 1\n"));
    }

    #[test]
    fn empty_state_renders_placeholder() {
        let state = ViewState::new(Vec::new(), SortCriteria::Popular, 5);

        let rendered = render_page(&state);

        assert!(rendered.starts_with("No publications to display.\n"));
        assert!(rendered.ends_with("Page 1 of 1\n"));
    }

    #[test]
    fn only_the_current_page_is_rendered() {
        let publications = (0..7)
            .map(|i| publication(&format!("p{i}"), Some(2000 + i), Some(i as u64)))
            .collect();
        let mut state = ViewState::new(publications, SortCriteria::Latest, 5);
        state.shift_page(1);

        let rendered = render_page(&state);

        assert_eq!(rendered.matches("Title: ").count(), 2);
        assert!(rendered.ends_with("Page 2 of 2\n"));
    }
}
