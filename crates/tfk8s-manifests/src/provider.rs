use tfk8s_framework::{FrameworkError, Provider};

use crate::datasource::ManifestDataSource;
use crate::fluid::ThinRuntimeSpec;

/// Type name the provider is registered under by default.
pub const DEFAULT_PROVIDER_NAME: &str = "k8s";

/// Provider serving every manifest data source of this crate.
pub fn provider(type_name: &str) -> Result<Provider, FrameworkError> {
    let mut provider = Provider::new(type_name)?;
    provider.register(ManifestDataSource::<ThinRuntimeSpec>::new())?;
    Ok(provider)
}
