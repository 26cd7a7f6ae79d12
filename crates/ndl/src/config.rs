use std::time::Duration;

use crate::label::LabelSet;

/// Search URL of the NDL catalog; the ISBN is appended as is.
pub const NDL_SEARCH_URL: &str = "http://iss.ndl.go.jp/books?search_mode=advanced&rft.isbn=";

/// Default minimum interval between two detail page requests.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Settings of a [`Catalog`](crate::Catalog).
#[derive(Clone, Debug)]
pub struct Config {
    /// Prefix of the search URL, the ISBN is appended to it.
    pub search_url: String,
    /// Labels used to parse the detail page.
    pub labels: LabelSet,
    /// Minimum interval between two detail page requests.
    pub interval: Duration,
    /// Timeout of each request, `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: NDL_SEARCH_URL.to_owned(),
            labels: LabelSet::default(),
            interval: DEFAULT_INTERVAL,
            timeout: None,
        }
    }
}

impl Config {
    /// Returns the search URL for `isbn`.
    #[must_use]
    pub fn search_url_for(&self, isbn: &str) -> String {
        let mut url = self.search_url.clone();
        url.push_str(isbn);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_INTERVAL, NDL_SEARCH_URL};

    #[test]
    fn isbn_is_appended_without_escaping() {
        let config = Config::default();
        assert_eq!(
            "http://iss.ndl.go.jp/books?search_mode=advanced&rft.isbn=978-4-00 000",
            config.search_url_for("978-4-00 000")
        );
    }

    #[test]
    fn defaults_target_ndl_once_per_second_without_timeout() {
        let config = Config::default();

        assert_eq!(NDL_SEARCH_URL, config.search_url);
        assert_eq!(DEFAULT_INTERVAL, config.interval);
        assert_eq!(None, config.timeout);
        assert_eq!(19, config.labels.labels().len());
    }
}
