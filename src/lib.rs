//! Coverage Quote Library
//!
//! Core of the insurance plan picker: the plan catalog, selection and
//! provider-count rules, the quote calculation, icon load tracking, and the
//! terminal form built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod icons;
pub mod logging;
pub mod money;
pub mod provider_count;
pub mod quote;
pub mod selection;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, Focus};
pub use catalog::{Catalog, CatalogProvider, Offering};
pub use config_file::QuoteConfig;
pub use error::QuoteError;
pub use icons::{
    AssetDirResolver, BadgeResolver, IconImage, IconLoadState, IconMessage, IconResolver,
    IconTracker, spawn_icon_loader,
};
pub use money::Money;
pub use provider_count::ProviderCount;
pub use quote::{QuoteBreakdown, QuoteLine, quote};
pub use selection::SelectionSet;
pub use types::ProviderArrangement;
