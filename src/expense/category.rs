//! Known expense categories.
//!
//! The server only requires a category to be present; any label is stored.
//! The known set carries the display colour used by the dashboard.

/// Colour used for labels outside the known set
pub const FALLBACK_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Entertainment,
    Health,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Other,
    ];

    /// Look up a known category by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#f59e0b",
            Category::Transport => "#3b82f6",
            Category::Housing => "#8b5cf6",
            Category::Entertainment => "#ec4899",
            Category::Health => "#10b981",
            Category::Shopping => "#f97316",
            Category::Other => FALLBACK_COLOR,
        }
    }
}

/// Display colour for any category label
pub fn category_color(label: &str) -> &'static str {
    Category::from_label(label)
        .map(|c| c.color())
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Category::from_label("food"), None);
    }

    #[test]
    fn test_unknown_label_uses_fallback_color() {
        assert_eq!(category_color("Pets"), FALLBACK_COLOR);
        assert_eq!(category_color("Transport"), "#3b82f6");
    }
}
