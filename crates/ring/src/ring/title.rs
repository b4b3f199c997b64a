use gpui::{HighlightStyle, SharedString};
use smallvec::SmallVec;
use std::ops::Range;

use super::format::format_value;

/// Marker text of a placeholder run.
///
/// Owning code building a [`Title`] can reference this constant to keep the
/// marker stable; the run's literal text is replaced with the formatted
/// progress value at render time.
pub const PLACEHOLDER: &str = "%@";

/// A single styled run of a ring title.
#[derive(Clone, Debug, Default)]
pub struct TitleRun {
    text: SharedString,
    style: HighlightStyle,
    format: Option<SharedString>,
}

impl TitleRun {
    /// A plain text run.
    pub fn text(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            style: HighlightStyle::default(),
            format: None,
        }
    }

    /// A run that renders the live progress value with a printf-style float
    /// format, e.g. `"%.0f"`.
    pub fn placeholder(format: impl Into<SharedString>) -> Self {
        Self {
            text: PLACEHOLDER.into(),
            style: HighlightStyle::default(),
            format: Some(format.into()),
        }
    }

    /// Apply a highlight style to this run.
    pub fn styled(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }
}

/// Styled text displayed inside the ring.
///
/// A title is a sequence of runs; at most one placeholder run is substituted
/// per render (the first one, any further placeholders keep their literal
/// marker text).
#[derive(Clone, Debug, Default)]
pub struct Title {
    runs: SmallVec<[TitleRun; 4]>,
}

impl Title {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text run.
    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.runs.push(TitleRun::text(text));
        self
    }

    /// Append a placeholder run with the given float format.
    pub fn placeholder(mut self, format: impl Into<SharedString>) -> Self {
        self.runs.push(TitleRun::placeholder(format));
        self
    }

    /// Append an arbitrary run.
    pub fn run(mut self, run: TitleRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Substitute the first placeholder with `value` and flatten the runs
    /// into text plus highlight ranges for rendering.
    pub(crate) fn resolve(&self, value: f32) -> (SharedString, Vec<(Range<usize>, HighlightStyle)>) {
        let mut text = String::new();
        let mut highlights = Vec::new();
        let mut substituted = false;

        for run in &self.runs {
            let piece = match &run.format {
                Some(format) if !substituted => {
                    substituted = true;
                    format_value(format, value).into()
                }
                _ => run.text.clone(),
            };

            let start = text.len();
            text.push_str(&piece);
            if run.style != HighlightStyle::default() {
                highlights.push((start..text.len(), run.style));
            }
        }

        (text.into(), highlights)
    }
}

impl<T: Into<SharedString>> From<T> for Title {
    fn from(text: T) -> Self {
        Title::new().text(text)
    }
}
