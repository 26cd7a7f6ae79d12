//! Extraction of the two catalog pages: the search result list and the item detail page.
//!
//! Everything that depends on the catalog's HTML template lives here.

use std::sync::LazyLock;

use log::trace;
use scraper::{node::Node, ElementRef, Html, Selector};

use crate::{Error, ErrorKind};

/// Each result summary on the search page.
static RESULT: LazyLock<Selector> = LazyLock::new(|| selector(".item_summarywrapper"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
/// The element holding the detail page content.
static ITEM_CONTENT: LazyLock<Selector> = LazyLock::new(|| selector("#itemcontent"));

/// Position of the content-fields container among the child nodes (text nodes included) of
/// `#itemcontent`.
pub const CONTENT_FIELDS_CHILD_INDEX: usize = 7;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css)
        .unwrap_or_else(|e| panic!("Selector '{css}' should always be valid: {e:?}"))
}

/// Returns the `href` of the first link inside the first search result.
///
/// # Errors
///
/// An `Err` of [`ErrorKind::EmptyResult`] is returned when the page lists no results.
/// An `Err` of [`ErrorKind::MissingLink`] is returned when the first result has no link.
pub fn search_result_link(html: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);
    let first = document
        .select(&RESULT)
        .next()
        .ok_or_else(|| Error::new(ErrorKind::EmptyResult, "No books found!"))?;

    first
        .select(&ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_owned)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::MissingLink,
                "First search result has no link to a detail page",
            )
        })
}

/// Returns the raw text fragments of the detail page's content-fields container.
///
/// Each child of the container yields one fragment with its newline characters removed. Children
/// that are a bare newline are skipped. Other whitespace is kept as is, since some labels depend
/// on it.
///
/// # Errors
///
/// An `Err` of [`ErrorKind::MalformedPage`] is returned when the container cannot be located.
pub fn content_fields(html: &str) -> Result<Vec<String>, Error> {
    let document = Html::parse_document(html);
    let container = field_rows(content_fields_container(&document)?);

    let fragments = container
        .children()
        .filter_map(|child| {
            let text = match child.value() {
                Node::Text(text) => {
                    if &**text == "\n" {
                        return None;
                    }
                    String::from(&**text)
                }
                Node::Element(_) => ElementRef::wrap(child)?.text().collect::<String>(),
                _ => return None,
            };
            let fragment = text.replace('\n', "");
            (!fragment.is_empty()).then_some(fragment)
        })
        .collect::<Vec<_>>();

    trace!("Found {} fragments in the content fields", fragments.len());
    Ok(fragments)
}

fn content_fields_container(document: &Html) -> Result<ElementRef<'_>, Error> {
    let item_content = document
        .select(&ITEM_CONTENT)
        .next()
        .ok_or_else(|| {
            Error::new(
                ErrorKind::MalformedPage,
                "Detail page has no '#itemcontent' element",
            )
        })?;

    item_content
        .children()
        .nth(CONTENT_FIELDS_CHILD_INDEX)
        .and_then(ElementRef::wrap)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::MalformedPage,
                format!("Child {CONTENT_FIELDS_CHILD_INDEX} of '#itemcontent' is not an element"),
            )
        })
}

// html5ever wraps table rows in an implied <tbody>, so the rows are one level further down.
fn field_rows(container: ElementRef<'_>) -> ElementRef<'_> {
    if container.value().name() != "table" {
        return container;
    }
    container
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "tbody")
        .unwrap_or(container)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{content_fields, search_result_link, ANCHOR, ITEM_CONTENT, RESULT};
    use crate::ErrorKind;

    pub(crate) const SEARCH_HIT: &str = include_str!("../tests/data/search_hit.html");
    pub(crate) const SEARCH_EMPTY: &str = include_str!("../tests/data/search_empty.html");
    pub(crate) const DETAIL: &str = include_str!("../tests/data/detail.html");

    /// Wraps `fields` in a `<div>` used as the content-fields container of a minimal detail page.
    pub(crate) fn detail_page(fields: &str) -> String {
        detail_page_with_container(&format!("<div>{fields}</div>"))
    }

    /// Places `container` at the content-fields position of a minimal detail page.
    pub(crate) fn detail_page_with_container(container: &str) -> String {
        format!(
            "<html><body><div id=\"itemcontent\">\n<h1>t</h1>\n<p>a</p>\n<p>b</p>\n{container}\n</div></body></html>"
        )
    }

    #[test]
    fn selectors_are_valid() {
        for selector in [&RESULT, &ANCHOR, &ITEM_CONTENT] {
            std::sync::LazyLock::force(selector);
        }
    }

    #[test]
    fn first_result_link_is_returned() {
        let link = search_result_link(SEARCH_HIT).unwrap();
        assert_eq!("https://iss.ndl.go.jp/books/R100000002-I000000001-00", link);
    }

    #[test]
    fn no_results_is_empty_result() {
        let err = search_result_link(SEARCH_EMPTY).unwrap_err();
        assert_eq!(ErrorKind::EmptyResult, err.kind());
    }

    #[test]
    fn result_without_anchor_is_missing_link() {
        let html = r#"<div class="item_summarywrapper"><span>no link</span></div>"#;
        let err = search_result_link(html).unwrap_err();
        assert_eq!(ErrorKind::MissingLink, err.kind());
    }

    #[test]
    fn result_anchor_without_href_is_missing_link() {
        let html = r#"<div class="item_summarywrapper"><a name="x">title</a></div>"#;
        let err = search_result_link(html).unwrap_err();
        assert_eq!(ErrorKind::MissingLink, err.kind());
    }

    #[test]
    fn bare_newline_children_are_skipped() {
        let html = detail_page(
            "<p>タイトル:テスト書籍</p><p>著者:山田太郎</p>\n<p>出版社:テスト出版</p>",
        );
        let fragments = content_fields(&html).unwrap();

        assert_eq!(
            vec!["タイトル:テスト書籍", "著者:山田太郎", "出版社:テスト出版"],
            fragments
        );
    }

    #[test]
    fn newlines_inside_a_field_are_removed_and_spaces_kept() {
        let html = detail_page("<p>    注記        \n索引あり</p>");
        let fragments = content_fields(&html).unwrap();

        assert_eq!(vec!["    注記        索引あり"], fragments);
    }

    #[test]
    fn nested_markup_is_flattened_to_text() {
        let html = detail_page("<dl><dt>ISBN</dt><dd>978-4-00-000000-0</dd></dl>");
        let fragments = content_fields(&html).unwrap();

        assert_eq!(vec!["ISBN978-4-00-000000-0"], fragments);
    }

    #[test]
    fn table_rows_are_fragments() {
        let html = detail_page_with_container(
            "<table>\n<tr><th>タイトル</th><td>テスト書籍</td></tr>\n<tr><th>ISBN</th><td>9784000000000</td></tr>\n</table>",
        );
        let fragments = content_fields(&html).unwrap();

        assert_eq!(vec!["タイトルテスト書籍", "ISBN9784000000000"], fragments);
    }

    #[test]
    fn table_nested_in_container_is_one_fragment() {
        let html = detail_page("<table><tr><td>タイトル</td><td>ISBN</td></tr></table>");
        let fragments = content_fields(&html).unwrap();

        assert_eq!(vec!["タイトルISBN"], fragments);
    }

    #[test]
    fn padded_row_of_table_container_keeps_its_spaces() {
        let html = detail_page_with_container(
            "<table>\n<tr><th>    注記        </th><td>文献あり</td></tr>\n</table>",
        );
        let fragments = content_fields(&html).unwrap();

        assert_eq!(vec!["    注記        文献あり"], fragments);
    }

    #[test]
    fn fixture_detail_page_yields_all_fields() {
        let fragments = content_fields(DETAIL).unwrap();

        assert!(fragments.iter().any(|f| f.starts_with("タイトル")));
        assert!(fragments.iter().any(|f| f.starts_with("著者標目")));
        assert!(fragments.iter().all(|f| !f.contains('\n')));
    }

    #[test]
    fn missing_item_content_is_malformed() {
        let err = content_fields("<html><body><p>nothing</p></body></html>").unwrap_err();
        assert_eq!(ErrorKind::MalformedPage, err.kind());
    }

    #[test]
    fn short_item_content_is_malformed() {
        let html = "<div id=\"itemcontent\">\n<h1>t</h1>\n</div>";
        let err = content_fields(html).unwrap_err();
        assert_eq!(ErrorKind::MalformedPage, err.kind());
    }
}
