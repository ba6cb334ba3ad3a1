//! CSS declarations wrapping a clamp expression.

use super::clamp::{ClampExpression, Layout};

/// Property used for the clipboard copy, whichever block it was copied from.
pub const COPY_PROPERTY: &str = "font-size";

/// `property: clamp(...);`, or just `clamp(...);` without a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: Option<String>,
    pub value: ClampExpression,
}

impl Declaration {
    pub fn new(property: Option<&str>, value: ClampExpression) -> Self {
        Self {
            property: property.filter(|p| !p.is_empty()).map(str::to_string),
            value,
        }
    }

    pub fn render(&self, layout: Layout) -> String {
        let clamp = self.value.render(layout);
        match &self.property {
            Some(property) => format!("{property}: {clamp};"),
            None => format!("{clamp};"),
        }
    }

    /// Text written to the clipboard: always single-line `font-size`.
    pub fn clipboard_text(value: ClampExpression) -> String {
        Self::new(Some(COPY_PROPERTY), value).render(Layout::SingleLine)
    }
}
