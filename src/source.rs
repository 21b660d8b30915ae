//! Option-pool collaborator
//!
//! The autocomplete candidates come from a single zero-argument
//! asynchronous call made once at mount. No pagination, no auth, no
//! retry.

use crate::error::Result;

/// Supplier of the full set of candidate email addresses
#[allow(async_fn_in_trait)]
pub trait OptionSource {
    /// Fetch every known address, in the order the pool should keep
    async fn fetch_options(&self) -> Result<Vec<String>>;
}

/// In-memory source with a fixed candidate list
///
/// Useful for hosts that already hold their address book, and for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedOptions {
    options: Vec<String>,
}

impl FixedOptions {
    #[must_use]
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl OptionSource for FixedOptions {
    async fn fetch_options(&self) -> Result<Vec<String>> {
        Ok(self.options.clone())
    }
}
