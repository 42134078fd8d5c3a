//! Plan catalog
//!
//! The read-only list of offerings a user can pick from. A catalog is
//! validated once when it is built; after that every read is infallible and
//! returns the same ordered sequence.

use crate::error::{QuoteError, Result};
use crate::money::Money;
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A purchasable plan.
///
/// `name` is the identity key: selections and icon state refer to offerings
/// by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    /// Display name, unique within a catalog
    pub name: String,
    /// Cost per provider
    pub unit_cost: Money,
    /// Opaque icon handle handed to an icon resolver (e.g. `aetna.png`)
    pub icon: String,
}

impl Offering {
    /// Create a new offering
    pub fn new(name: impl Into<String>, unit_cost: u64, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_cost: Money::new(unit_cost),
            icon: icon.into(),
        }
    }
}

/// Anything that can hand out the catalog in use.
pub trait CatalogProvider {
    /// The offerings available for selection
    fn catalog(&self) -> &Catalog;
}

/// An ordered, validated list of offerings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    offerings: Vec<Offering>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate names.
    pub fn new(offerings: Vec<Offering>) -> Result<Self> {
        let mut seen = HashSet::new();
        for offering in &offerings {
            if offering.name.trim().is_empty() {
                return Err(QuoteError::catalog("offering name must not be blank"));
            }
            if !seen.insert(offering.name.as_str()) {
                return Err(QuoteError::catalog(format!(
                    "duplicate offering name: {}",
                    offering.name
                )));
            }
        }
        Ok(Self { offerings })
    }

    /// The plans offered out of the box
    pub fn builtin() -> Self {
        Self {
            offerings: vec![
                Offering::new("Aetna", 50, "aetna.png"),
                Offering::new("Cigna", 100, "cigna.jpg"),
                Offering::new("Medicaid", 500, "medicaid.png"),
                Offering::new("Medicare", 500, "medicare.png"),
            ],
        }
    }

    /// All offerings in display order
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Look up an offering by name
    pub fn get(&self, name: &str) -> Option<&Offering> {
        self.offerings.iter().find(|o| o.name == name)
    }

    /// Offering at a display position
    pub fn at(&self, index: usize) -> Option<&Offering> {
        self.offerings.get(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Offering> {
        self.offerings.iter()
    }

    /// Build a selection from plan names. Repeated names are selected once.
    ///
    /// Fails on the first name the catalog does not know.
    pub fn select_names<S: AsRef<str>>(&self, names: &[S]) -> Result<SelectionSet> {
        let mut selection = SelectionSet::new();
        for name in names {
            let name = name.as_ref();
            if !self.contains(name) {
                return Err(QuoteError::unknown_offering(name));
            }
            if !selection.contains(name) {
                selection.toggle(name);
            }
        }
        Ok(selection)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogProvider for Catalog {
    fn catalog(&self) -> &Catalog {
        self
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Offering;
    type IntoIter = std::slice::Iter<'a, Offering>;

    fn into_iter(self) -> Self::IntoIter {
        self.offerings.iter()
    }
}
