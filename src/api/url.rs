//! Request URL construction

use super::error::ConfigError;
use super::params::Params;

/// Joins routes onto a validated base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    /// Validate the base URL once
    ///
    /// A single trailing `/` is dropped so routes never produce `//`.
    pub fn new(base: Option<&str>) -> Result<Self, ConfigError> {
        let base = base
            .filter(|b| !b.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;
        let base = base.strip_suffix('/').unwrap_or(base);
        Ok(Self {
            base: base.to_string(),
        })
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/{route}` plus `?query` when params are present
    #[must_use]
    pub fn build(&self, route: &str, params: &Params) -> String {
        let route = route.strip_prefix('/').unwrap_or(route);
        let mut url = format!("{}/{route}", self.base);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
        url
    }
}

/// One-shot form of [`UrlBuilder`]
pub fn build_url(base: Option<&str>, route: &str, params: &Params) -> Result<String, ConfigError> {
    Ok(UrlBuilder::new(base)?.build(route, params))
}
