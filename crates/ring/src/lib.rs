//! A circular progress ring for GPUI.
//!
//! The ring renders a stroked arc for a progress value in `[0, 1]`, animates
//! transitions between values, and can overlay a styled title whose
//! placeholder run is substituted with the live progress percentage.
//!
//! ```ignore
//! use gpui_progress_ring::{ProgressRingState, Title};
//!
//! let ring = cx.new(|_| {
//!     ProgressRingState::new()
//!         .title(Title::new().text("Loading\n").placeholder("%.0f").text("%"))
//! });
//! ring.update(cx, |ring, cx| ring.set_progress(0.5, true, cx));
//! ```

mod ring;
mod styled;
mod theme;

pub use ring::{PLACEHOLDER, ProgressRing, ProgressRingState, Title, TitleRun};
pub use styled::{PixelsExt, StyledExt, h_flex, v_flex};
pub use theme::{ActiveTheme, Theme, ThemeColor, ThemeMode};

use gpui::App;

/// Initialize the component, this must be called before using any part of it.
pub fn init(cx: &mut App) {
    theme::init(cx);
}
