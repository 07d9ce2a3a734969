use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

const HEADING_TAG: &str = "h2";

static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse(HEADING_TAG).unwrap());

/// A date heading and everything after it, up to the next heading.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    heading: ElementRef<'a>,
}

impl<'a> Section<'a> {
    /// Heading text with whitespace collapsed, so "Mar <b>3</b>, 2025" reads "Mar 3, 2025".
    pub fn heading_text(&self) -> String {
        let raw: String = self.heading.text().collect();
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Elements owned by this section in document order. Each call starts a fresh pass.
    pub fn elements(&self) -> SectionElements<'a> {
        SectionElements {
            next: next_outside(self.heading),
        }
    }
}

/// Split a parsed page into sections, one per level-2 heading.
pub fn walk_sections(doc: &Html) -> impl Iterator<Item = Section<'_>> {
    doc.select(&HEADING).map(|heading| Section { heading })
}

/// Pre-order walk starting after a heading's subtree, stopping at the next heading.
#[derive(Debug, Clone)]
pub struct SectionElements<'a> {
    next: Option<ElementRef<'a>>,
}

impl<'a> Iterator for SectionElements<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.next.take()?;
        if is_heading(el) {
            return None;
        }
        self.next = next_in_order(el);
        Some(el)
    }
}

fn is_heading(el: ElementRef<'_>) -> bool {
    el.value().name() == HEADING_TAG
}

fn next_in_order(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.children()
        .find_map(ElementRef::wrap)
        .or_else(|| next_outside(el))
}

/// First element after `el` that is not one of its descendants.
fn next_outside(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut cur = el;
    loop {
        if let Some(sibling) = cur.next_siblings().find_map(ElementRef::wrap) {
            return Some(sibling);
        }
        cur = cur.parent().and_then(ElementRef::wrap)?;
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(section: &Section<'_>) -> Vec<String> {
        section
            .elements()
            .filter(|e| e.value().name() == "a")
            .filter_map(|e| e.value().attr("href").map(str::to_string))
            .collect()
    }

    #[test]
    fn flat_siblings_split_at_each_heading() {
        let doc = Html::parse_document(
            r#"<body>
                <h2>Mar 3, 2025</h2><p><a href="/a">A</a></p><a href="/b">B</a>
                <h2>Mar 4, 2025</h2><ul><li><a href="/c">C</a></li></ul>
            </body>"#,
        );
        let sections: Vec<_> = walk_sections(&doc).collect();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading_text(), "Mar 3, 2025");
        assert_eq!(hrefs(&sections[0]), vec!["/a", "/b"]);
        assert_eq!(hrefs(&sections[1]), vec!["/c"]);
    }

    #[test]
    fn headings_nested_in_containers_do_not_leak() {
        let doc = Html::parse_document(
            r#"<div class="day"><h2>Jan 1, 2026</h2><div><div><a href="/deep">Deep</a></div></div></div>
               <div class="day"><h2>Jan 2, 2026</h2><a href="/next">Next</a></div>
               <footer><a href="/footer">Footer</a></footer>"#,
        );
        let sections: Vec<_> = walk_sections(&doc).collect();
        assert_eq!(hrefs(&sections[0]), vec!["/deep"]);
        // last section runs to end of document
        assert_eq!(hrefs(&sections[1]), vec!["/next", "/footer"]);
    }

    #[test]
    fn heading_own_links_and_preamble_are_excluded() {
        let doc = Html::parse_document(
            r#"<a href="/nav">Nav</a>
               <h2><a href="/self">Feb 2, 2025</a></h2><a href="/item">Item</a>"#,
        );
        let sections: Vec<_> = walk_sections(&doc).collect();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading_text(), "Feb 2, 2025");
        assert_eq!(hrefs(&sections[0]), vec!["/item"]);
    }

    #[test]
    fn heading_text_collapses_markup_whitespace() {
        let doc = Html::parse_document("<h2>\n  Mar <span>3</span>,\n 2025 </h2>");
        let section = walk_sections(&doc).next().unwrap();
        assert_eq!(section.heading_text(), "Mar 3, 2025");
    }

    #[test]
    fn elements_restart_on_each_call() {
        let doc = Html::parse_document(r#"<h2>TBA</h2><a href="/x">X</a><a href="/y">Y</a>"#);
        let section = walk_sections(&doc).next().unwrap();
        assert_eq!(hrefs(&section), hrefs(&section));
        assert_eq!(section.elements().count(), 2);
    }

    #[test]
    fn page_without_headings_has_no_sections() {
        let doc = Html::parse_document("<p>nothing <a href='/z'>here</a></p>");
        assert_eq!(walk_sections(&doc).count(), 0);
    }

    #[test]
    fn empty_trailing_section() {
        let doc = Html::parse_document("<p>x</p><h2>Apr 9, 2025</h2>");
        let section = walk_sections(&doc).next().unwrap();
        assert_eq!(section.elements().count(), 0);
    }
}
