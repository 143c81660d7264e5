//! Domain models for the API.

pub mod catalog;
pub mod settings;

pub use catalog::{
    Category, Customer, Discount, NewCategory, NewCustomer, NewDiscount, NewProduct, Product,
};
pub use settings::SettingRecord;
