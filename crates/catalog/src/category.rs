use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity};

/// A named, status-flagged product classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    status: bool,
}

/// Partial update for a [`Category`]. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    /// New name. An empty string counts as "not supplied".
    pub name: Option<String>,
    pub status: Option<bool>,
}

impl CategoryPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: None,
        }
    }

    pub fn status(status: bool) -> Self {
        Self {
            name: None,
            status: Some(status),
        }
    }
}

impl Category {
    pub(crate) fn new(id: CategoryId, name: impl Into<String>, status: bool) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status
    }

    /// Apply a partial update. Never fails.
    pub fn update(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Category ({}), Name {}, Current Status {}",
            self.id,
            self.name,
            if self.status { "Active" } else { "Inactive" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vegetables() -> Category {
        Category::new(CategoryId::new(1), "Vegetables", true)
    }

    #[test]
    fn update_renames_and_keeps_status() {
        let mut category = vegetables();
        category.update(CategoryPatch::rename("Produce"));
        assert_eq!(category.name(), "Produce");
        assert!(category.is_active());
    }

    #[test]
    fn update_applies_explicit_false_status() {
        let mut category = vegetables();
        category.update(CategoryPatch::status(false));
        assert!(!category.status());
        assert_eq!(category.name(), "Vegetables");
    }

    #[test]
    fn empty_name_is_treated_as_not_supplied() {
        let mut category = vegetables();
        category.update(CategoryPatch {
            name: Some(String::new()),
            status: None,
        });
        assert_eq!(category.name(), "Vegetables");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut category = vegetables();
        category.update(CategoryPatch::default());
        assert_eq!(category, vegetables());
    }

    #[test]
    fn display_renders_status_word() {
        let mut category = vegetables();
        assert_eq!(
            category.to_string(),
            "Category (1), Name Vegetables, Current Status Active"
        );
        category.update(CategoryPatch::status(false));
        assert!(category.to_string().ends_with("Current Status Inactive"));
    }
}
