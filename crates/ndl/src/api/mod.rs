pub(crate) mod ndl;

use crate::{Error, ErrorKind};

pub(crate) trait Client {
    fn get_text(&self, url: &str) -> Result<String, Error>;
}

impl Client for reqwest::blocking::Client {
    fn get_text(&self, url: &str) -> Result<String, Error> {
        let resp = self
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::Network, e))?;
        let text = resp
            .text()
            .map_err(|e| Error::wrap(ErrorKind::Network, e))?;

        if text.is_empty() {
            Err(Error::new(ErrorKind::EmptyResult, "Response text is empty"))
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_urls, impl_text_producer, requested_urls, MockClient, NetworkErrorProducer, Producer,
};
