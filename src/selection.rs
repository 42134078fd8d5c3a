//! Selected plans
//!
//! A toggle set of offering names. Iteration follows the order in which
//! plans were picked so summaries read the way the user built them.

use serde::Serialize;

/// The offerings the user currently has chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `name` if selected, add it otherwise.
    ///
    /// Returns whether the offering is selected after the call.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Selected names in pick order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(SelectionSet::new().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        assert!(set.toggle("Aetna"));
        assert!(set.contains("Aetna"));
        assert!(!set.toggle("Aetna"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_keeps_pick_order() {
        let mut set = SelectionSet::new();
        set.toggle("Medicare");
        set.toggle("Aetna");
        set.toggle("Cigna");
        set.toggle("Aetna");
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["Medicare", "Cigna"]);
    }
}
