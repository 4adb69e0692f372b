use crate::error::StorefrontClientError;

use url::Url;

/// The URL of the page a form was rendered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    #[track_caller]
    pub fn parse(href: &str) -> Result<Self, StorefrontClientError> {
        let url = Url::parse(href)?;
        Ok(Self { url })
    }

    /// First value of the query parameter `name`, decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Resolve a site path such as `/login` against this page.
    #[track_caller]
    pub fn resolve(&self, path: &str) -> Result<Url, StorefrontClientError> {
        Ok(self.url.join(path)?)
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl From<Url> for PageLocation {
    fn from(url: Url) -> Self {
        Self { url }
    }
}
