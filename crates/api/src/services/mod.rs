//! Service layer: typed settings domains and storage URL signing.

pub mod settings;
pub mod storage;

pub use settings::{
    CalculationSettings, HomepageSettings, ProductCostSettings, SettingsDomain, SettingsTab,
};
pub use storage::{SignedUrl, UrlSigner};
