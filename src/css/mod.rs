//! CSS output: clamp expressions, declarations, and number rendering.

mod clamp;
mod declaration;
mod number;

pub use clamp::{ClampExpression, Layout, LINE_BREAK_BELOW_PX, ROOT_FONT_SIZE_PX};
pub use declaration::{Declaration, COPY_PROPERTY};
pub use number::format_number;
