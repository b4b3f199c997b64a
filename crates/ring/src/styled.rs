use gpui::{Div, Pixels, Refineable as _, StyleRefinement, Styled, div};

/// Extension methods for [`Pixels`].
pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    #[inline(always)]
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Extension methods for [`Styled`] elements.
pub trait StyledExt: Styled + Sized {
    /// Apply a [`StyleRefinement`] on top of the element's current style.
    fn refine_style(mut self, style: &StyleRefinement) -> Self {
        self.style().refine(style);
        self
    }
}

impl<E: Styled> StyledExt for E {}

/// A horizontal flex container.
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}

/// A vertical flex container.
pub fn v_flex() -> Div {
    div().flex().flex_col()
}
