//! Type-safe form values
//!
//! Enumerated choices shown on the form. Using strum keeps the display
//! strings, parsing, and iteration order in one place.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How the covered providers are organised.
///
/// Captured on the form and echoed in quotes, but it does not change the
/// cost formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ProviderArrangement {
    #[default]
    #[strum(serialize = "Group")]
    Group,
    #[strum(serialize = "Solo")]
    Solo,
}

impl ProviderArrangement {
    /// The other option of the exclusive choice
    pub fn other(self) -> Self {
        match self {
            Self::Group => Self::Solo,
            Self::Solo => Self::Group,
        }
    }
}
