// src/services/provider/mod.rs

pub mod http_provider;
pub mod static_provider;

pub use http_provider::HttpPageProvider;
pub use static_provider::StaticPageProvider;

use crate::errors::AcquisitionError;
use crate::models::qa::{AcquisitionOptions, Snapshot};
use async_trait::async_trait;

/// Produces the single snapshot a run works from.
#[async_trait]
pub trait PageProvider: Send + Sync {
    async fn acquire(
        &self,
        url: &str,
        options: &AcquisitionOptions,
    ) -> Result<Snapshot, AcquisitionError>;
}
