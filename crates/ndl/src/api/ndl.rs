use log::{info, trace};
use reqwest::Url;

use crate::{
    book::BookInfo,
    config::Config,
    page,
    throttle::Throttle,
    Error, ErrorKind,
};

use super::Client;

pub(crate) fn get_book_info<C: Client>(
    client: &C,
    isbn: &str,
    config: &Config,
    throttle: &mut Throttle,
) -> Result<BookInfo, Error> {
    let detail_url = search_first_result(client, isbn, config)?;
    let fragments = fetch_detail_fragments(client, &detail_url, throttle)?;

    let info = config
        .labels
        .parse_fragments(&fragments)
        .collect::<BookInfo>();

    trace!("{} fragments matched {} labels", fragments.len(), info.len());
    Ok(info)
}

pub(crate) fn search_first_result<C: Client>(
    client: &C,
    isbn: &str,
    config: &Config,
) -> Result<String, Error> {
    info!("Searching for ISBN '{isbn}' using the NDL search");
    let url = config.search_url_for(isbn);

    let html = client.get_text(&url)?;
    trace!("Search request was successful");

    let href = page::search_result_link(&html)?;

    // Links on the result page may be relative to the search page.
    Ok(Url::parse(&url)
        .and_then(|base| base.join(&href))
        .map_or(href, String::from))
}

pub(crate) fn fetch_detail_fragments<C: Client>(
    client: &C,
    url: &str,
    throttle: &mut Throttle,
) -> Result<Vec<String>, Error> {
    throttle.wait();
    info!("Fetching detail page '{url}'");

    let html = client.get_text(url).map_err(|e| match e.kind() {
        ErrorKind::EmptyResult => Error::new(ErrorKind::MalformedPage, "Detail page is empty"),
        _ => e,
    })?;
    page::content_fields(&html)
}
