//! Product categories and the listing filter.
//!
//! The catalog tags products with a free-form `category_name`. Two values are
//! known; everything else, including a missing name, is shown as a special
//! formula.

use serde::{Deserialize, Serialize};

/// Catalog category name for kitten food.
pub const KITTEN_CATEGORY: &str = "ลูกแมว";

/// Catalog category name for adult cat food.
pub const ADULT_CATEGORY: &str = "แมวโต";

/// Display bucket a product falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Kitten,
    Adult,
    Special,
}

impl Category {
    /// Classify a catalog category name. Total: never fails for any input.
    #[must_use]
    pub fn classify(category_name: Option<&str>) -> Self {
        match category_name {
            Some(KITTEN_CATEGORY) => Self::Kitten,
            Some(ADULT_CATEGORY) => Self::Adult,
            _ => Self::Special,
        }
    }

    /// Label shown above the product name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kitten => "สำหรับลูกแมว",
            Self::Adult => "สำหรับแมวโต",
            Self::Special => "สูตรพิเศษ",
        }
    }
}

/// Category selected in the listing's button bar.
///
/// Pure UI state: never derived from catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Kitten,
    Adult,
    Special,
}

impl CategoryFilter {
    /// Every filter, in button bar order.
    pub const ALL: [Self; 4] = [Self::All, Self::Kitten, Self::Adult, Self::Special];

    /// The single category this filter restricts to, or `None` for `All`.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Kitten => Some(Category::Kitten),
            Self::Adult => Some(Category::Adult),
            Self::Special => Some(Category::Special),
        }
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        self.category().is_none_or(|selected| selected == category)
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.category() {
            None => "ทั้งหมด",
            Some(category) => category.label(),
        }
    }

    /// Value used in the `category` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kitten => "kitten",
            Self::Adult => "adult",
            Self::Special => "special",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_names() {
        assert_eq!(Category::classify(Some("ลูกแมว")), Category::Kitten);
        assert_eq!(Category::classify(Some("แมวโต")), Category::Adult);
    }

    #[test]
    fn test_classify_falls_back_to_special() {
        assert_eq!(Category::classify(None), Category::Special);
        assert_eq!(Category::classify(Some("")), Category::Special);
        assert_eq!(Category::classify(Some("สูตรพิเศษ")), Category::Special);
        // No trimming or case folding: only exact matches are known
        assert_eq!(Category::classify(Some(" ลูกแมว")), Category::Special);
        assert_eq!(Category::classify(Some("kitten")), Category::Special);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::classify(Some("ลูกแมว")).label(), "สำหรับลูกแมว");
        assert_eq!(Category::classify(Some("แมวโต")).label(), "สำหรับแมวโต");
        assert_eq!(Category::classify(None).label(), "สูตรพิเศษ");
    }

    #[test]
    fn test_all_matches_every_category() {
        for category in [Category::Kitten, Category::Adult, Category::Special] {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_specific_filter_matches_only_its_category() {
        assert!(CategoryFilter::Kitten.matches(Category::Kitten));
        assert!(!CategoryFilter::Kitten.matches(Category::Adult));
        assert!(!CategoryFilter::Adult.matches(Category::Special));
        assert!(CategoryFilter::Special.matches(Category::Special));
    }

    #[test]
    fn test_filter_labels_in_bar_order() {
        let labels: Vec<_> = CategoryFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["ทั้งหมด", "สำหรับลูกแมว", "สำหรับแมวโต", "สูตรพิเศษ"]
        );
    }

    #[test]
    fn test_filter_query_values_round_trip_through_serde() {
        for filter in CategoryFilter::ALL {
            let json = format!("\"{}\"", filter.as_str());
            let parsed: CategoryFilter = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, filter);
        }
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
