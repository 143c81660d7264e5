//! Typed accessors over the generic settings store.
//!
//! Each admin settings domain (homepage, calculation, product-cost) pins a
//! fixed key and tab and gives the opaque JSON payload a concrete shape.
//! No business validation happens here; shape correctness is the form's
//! responsibility and the store accepts whatever serializes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use verdant_core::{CurrencyCode, ProductId};

use crate::db::{RepositoryError, SettingsRepository};

/// Error type for typed settings access.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse settings category discriminator, stored in the `tab` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    Homepage,
    Calculation,
    ProductCost,
}

impl SettingsTab {
    /// Stable wire string, as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Calculation => "calculation",
            Self::ProductCost => "product_cost",
        }
    }
}

impl std::fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A settings domain: a fixed key/tab pair with a typed payload.
///
/// The `Send + Sync + 'static` bounds let domain types flow through axum
/// handlers generically.
pub trait SettingsDomain: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Settings document key, unique across all tabs.
    const KEY: &'static str;
    /// Tab this domain's document lives under.
    const TAB: SettingsTab;
}

/// Load a domain's settings document, if one has been saved.
///
/// # Errors
///
/// Returns `SettingsError::Repository` if the query fails, or
/// `SettingsError::Serialization` if a stored payload does not match the
/// domain shape.
pub async fn load<T: SettingsDomain>(
    repo: &SettingsRepository<'_>,
) -> Result<Option<T>, SettingsError> {
    let record = repo.get(T::KEY).await?;
    match record {
        Some(record) => Ok(Some(serde_json::from_value(record.data)?)),
        None => Ok(None),
    }
}

/// Save a domain's settings document, replacing any previous payload
/// wholesale.
///
/// # Errors
///
/// Returns `SettingsError::Repository` if the upsert fails.
pub async fn save<T: SettingsDomain>(
    repo: &SettingsRepository<'_>,
    settings: &T,
) -> Result<(), SettingsError> {
    let data = serde_json::to_value(settings)?;
    repo.upsert(T::KEY, T::TAB.as_str(), &data).await?;
    Ok(())
}

// =============================================================================
// Domain Payloads
// =============================================================================

/// Homepage layout: an ordered list of merchandising sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HomepageSettings {
    pub sections: Vec<HomepageSection>,
}

/// One homepage section: a heading plus the products it features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

impl SettingsDomain for HomepageSettings {
    const KEY: &'static str = "homepage_v1";
    const TAB: SettingsTab = SettingsTab::Homepage;
}

/// Cost-calculation inputs used by the admin margin calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalculationSettings {
    pub cost_categories: Vec<CostCategory>,
}

/// A named cost bucket with a percentage rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCategory {
    pub name: String,
    pub rate_percent: Decimal,
}

impl SettingsDomain for CalculationSettings {
    const KEY: &'static str = "calculation_v1";
    const TAB: SettingsTab = SettingsTab::Calculation;
}

/// Defaults applied when costing a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCostSettings {
    pub currency: CurrencyCode,
    pub default_margin_percent: Decimal,
    pub shipping_flat_fee: Decimal,
}

impl SettingsDomain for ProductCostSettings {
    const KEY: &'static str = "product_cost_v1";
    const TAB: SettingsTab = SettingsTab::ProductCost;
}
