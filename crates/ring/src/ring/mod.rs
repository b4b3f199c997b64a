mod format;
mod geometry;
mod paint;
mod title;
mod transition;

pub use title::{PLACEHOLDER, Title, TitleRun};

use gpui::prelude::FluentBuilder as _;
use gpui::{
    App, Context, Entity, Hsla, IntoElement, ParentElement, Pixels, Render, RenderOnce,
    StyleRefinement, Styled, StyledText, Window, canvas, div, px,
};
use instant::Instant;
use std::time::Duration;

use crate::{ActiveTheme as _, PixelsExt as _, StyledExt as _};
use geometry::ring_geometry;
use paint::{paint_arc, paint_disc};
use transition::Transition;

/// Default edge length when the owner does not size the element.
const DEFAULT_SIZE: Pixels = px(96.);

/// State of a circular progress ring.
///
/// Hold it in an [`Entity`] and mutate it through the `set_*` methods; every
/// mutation notifies the view, so the ring redraws without the owner asking
/// for it. Rendering is provided by [`ProgressRing`], which the [`Render`]
/// implementation returns.
pub struct ProgressRingState {
    progress: f32,
    displayed: f32,
    transition: Option<Transition>,
    title: Option<Title>,
    progress_tint_color: Option<Hsla>,
    progress_track_color: Option<Hsla>,
    progress_remainder_tint_color: Option<Hsla>,
    track_width: Pixels,
    text_inset: Pixels,
    animation_duration: Duration,
    animate_text: bool,
}

impl Default for ProgressRingState {
    fn default() -> Self {
        Self {
            progress: 0.,
            displayed: 0.,
            transition: None,
            title: None,
            progress_tint_color: None,
            progress_track_color: None,
            progress_remainder_tint_color: None,
            track_width: px(7.5),
            text_inset: px(2.),
            animation_duration: Duration::from_secs(2),
            animate_text: true,
        }
    }
}

impl ProgressRingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color of the arc from 0 up to the current progress.
    pub fn tint_color(mut self, color: impl Into<Hsla>) -> Self {
        self.progress_tint_color = Some(color.into());
        self
    }

    /// Set the color of the arc from the current progress up to 1.
    pub fn track_color(mut self, color: impl Into<Hsla>) -> Self {
        self.progress_track_color = Some(color.into());
        self
    }

    /// Set the color of the background disc behind the ring. Defaults to none.
    pub fn remainder_tint_color(mut self, color: impl Into<Hsla>) -> Self {
        self.progress_remainder_tint_color = Some(color.into());
        self
    }

    /// Set the stroke width of the ring. Defaults to 7.5px.
    pub fn track_width(mut self, width: impl Into<Pixels>) -> Self {
        self.track_width = width.into();
        self
    }

    /// Additional offset of the title from the inner edge of the track.
    /// Defaults to 2px.
    pub fn text_inset(mut self, inset: impl Into<Pixels>) -> Self {
        self.text_inset = inset.into();
        self
    }

    /// The time a full 0→1 sweep takes; smaller changes take proportionally
    /// less. Defaults to 2 seconds.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Whether the title shows the interpolated value during an animation,
    /// or jumps straight to the target. Defaults to true.
    pub fn animate_text(mut self, animate: bool) -> Self {
        self.animate_text = animate;
        self
    }

    /// Set the title displayed within the ring.
    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the initial progress, clamped to `[0, 1]`.
    pub fn progress(mut self, value: f32) -> Self {
        self.progress = value.clamp(0., 1.);
        self.displayed = self.progress;
        self
    }

    /// The target progress value in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.progress
    }

    /// The value currently shown on screen; equal to [`Self::value`] unless a
    /// transition is in flight.
    pub fn displayed_value(&self) -> f32 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Update the progress, clamped to `[0, 1]`.
    ///
    /// When `animated`, interpolates from the value currently on screen to
    /// the new target. A transition started while another is in flight picks
    /// up from the in-flight value, so rapid successive calls stay
    /// continuous.
    pub fn set_progress(&mut self, value: f32, animated: bool, cx: &mut Context<Self>) {
        self.set_progress_with_clock(value, animated, Instant::now());
        cx.notify();
    }

    /// Replace the title. Never animates, but redraws.
    pub fn set_title(&mut self, title: Option<Title>, cx: &mut Context<Self>) {
        self.title = title;
        cx.notify();
    }

    pub fn set_tint_color(&mut self, color: Option<Hsla>, cx: &mut Context<Self>) {
        self.progress_tint_color = color;
        cx.notify();
    }

    pub fn set_track_color(&mut self, color: Option<Hsla>, cx: &mut Context<Self>) {
        self.progress_track_color = color;
        cx.notify();
    }

    pub fn set_remainder_tint_color(&mut self, color: Option<Hsla>, cx: &mut Context<Self>) {
        self.progress_remainder_tint_color = color;
        cx.notify();
    }

    pub fn set_track_width(&mut self, width: impl Into<Pixels>, cx: &mut Context<Self>) {
        self.track_width = width.into();
        cx.notify();
    }

    pub fn set_text_inset(&mut self, inset: impl Into<Pixels>, cx: &mut Context<Self>) {
        self.text_inset = inset.into();
        cx.notify();
    }

    pub fn set_animation_duration(&mut self, duration: Duration, cx: &mut Context<Self>) {
        self.animation_duration = duration;
        cx.notify();
    }

    pub fn set_animate_text(&mut self, animate: bool, cx: &mut Context<Self>) {
        self.animate_text = animate;
        cx.notify();
    }

    fn set_progress_with_clock(&mut self, value: f32, animated: bool, now: Instant) {
        let target = value.clamp(0., 1.);
        self.progress = target;

        if animated {
            // Sample the in-flight value before replacing the transition, so
            // retargeting never jumps.
            let from = self
                .transition
                .take()
                .map(|transition| transition.value_at(now))
                .unwrap_or(self.displayed);
            self.displayed = from;
            self.transition = Transition::begin(from, target, self.animation_duration, now);
            tracing::debug!(from, target, "progress transition started");
        } else {
            self.transition = None;
            self.displayed = target;
        }
    }

    /// Advance the in-flight transition to `now`. Returns true while more
    /// frames are needed.
    fn advance(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        if transition.is_complete(now) {
            self.displayed = transition.target();
            self.transition = None;
            false
        } else {
            self.displayed = transition.value_at(now);
            true
        }
    }
}

impl Render for ProgressRingState {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        ProgressRing::new(&cx.entity())
    }
}

/// The circular progress ring element.
#[derive(IntoElement)]
pub struct ProgressRing {
    state: Entity<ProgressRingState>,
    style: StyleRefinement,
}

impl ProgressRing {
    pub fn new(state: &Entity<ProgressRingState>) -> Self {
        Self {
            state: state.clone(),
            style: StyleRefinement::default(),
        }
    }
}

impl Styled for ProgressRing {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for ProgressRing {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let now = Instant::now();
        let animating = self.state.update(cx, |state, _| state.advance(now));
        if animating {
            window.request_animation_frame();
        }

        let (tint, track, remainder, track_width, displayed, title, inset) = {
            let state = self.state.read(cx);
            let tint = state
                .progress_tint_color
                .unwrap_or(cx.theme().progress_bar);
            let track = state
                .progress_track_color
                .unwrap_or(cx.theme().progress_track);
            let track_width = state.track_width.as_f32();
            // The ring arc always animates; the numeric text only follows it
            // when animate_text is set.
            let shown = if state.animate_text {
                state.displayed
            } else {
                state.progress
            };
            let title = state
                .title
                .as_ref()
                .filter(|title| !title.is_empty())
                .map(|title| title.resolve(shown * 100.));

            (
                tint,
                track,
                state.progress_remainder_tint_color,
                track_width,
                state.displayed,
                title,
                px(geometry::title_inset(
                    track_width,
                    state.text_inset.as_f32(),
                )),
            )
        };

        div()
            .relative()
            .size(DEFAULT_SIZE)
            .text_color(cx.theme().foreground)
            .refine_style(&self.style)
            .child(
                canvas(
                    move |bounds, _, _| ring_geometry(bounds, track_width),
                    move |_, geometry, window, _| {
                        let Some(geometry) = geometry else {
                            return;
                        };

                        if let Some(color) = remainder {
                            paint_disc(&geometry, color, window);
                        }
                        // Remainder arc first, then the progress arc from the
                        // top of the circle, clockwise.
                        paint_arc(&geometry, displayed, 1. - displayed, track, window);
                        paint_arc(&geometry, 0., displayed, tint, window);
                    },
                )
                .absolute()
                .size_full(),
            )
            .when_some(title, |this, (text, highlights)| {
                this.child(
                    div()
                        .absolute()
                        .top(inset)
                        .bottom(inset)
                        .left(inset)
                        .right(inset)
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_center()
                        .child(StyledText::new(text).with_highlights(highlights)),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut state = ProgressRingState::new();
        let now = Instant::now();

        state.set_progress_with_clock(1.5, false, now);
        assert_eq!(state.value(), 1.);
        assert_eq!(state.displayed_value(), 1.);

        state.set_progress_with_clock(-0.5, false, now);
        assert_eq!(state.value(), 0.);
        assert_eq!(state.displayed_value(), 0.);

        let state = ProgressRingState::new().progress(2.);
        assert_eq!(state.value(), 1.);
    }

    #[test]
    fn test_repeated_set_is_idempotent() {
        let mut state = ProgressRingState::new();
        let now = Instant::now();

        state.set_progress_with_clock(0.4, false, now);
        state.set_progress_with_clock(0.4, false, now);
        assert_eq!(state.value(), 0.4);
        assert_eq!(state.displayed_value(), 0.4);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_animated_sweep_is_monotonic_and_completes() {
        let mut state = ProgressRingState::new();
        let start = Instant::now();

        state.set_progress_with_clock(1., true, start);
        assert!(state.is_animating());
        assert_eq!(state.displayed_value(), 0.);

        let mut last = 0.;
        for ms in (0..2000).step_by(100) {
            state.advance(start + Duration::from_millis(ms));
            assert!(state.displayed_value() >= last);
            last = state.displayed_value();
        }

        assert!(state.advance(start + Duration::from_millis(1999)));
        assert!(!state.advance(start + Duration::from_secs(2)));
        assert_eq!(state.displayed_value(), 1.);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_half_delta_takes_half_the_time() {
        let mut state = ProgressRingState::new();
        let start = Instant::now();

        state.set_progress_with_clock(0.5, true, start);
        assert!(state.advance(start + Duration::from_millis(999)));
        assert!(!state.advance(start + Duration::from_secs(1)));
        assert_eq!(state.displayed_value(), 0.5);
    }

    #[test]
    fn test_retarget_continues_from_in_flight_value() {
        let mut state = ProgressRingState::new();
        let start = Instant::now();

        // 0 → 1 over 2s; interrupt at 0.6s when the ring shows ~0.3.
        state.set_progress_with_clock(1., true, start);
        let interrupt = start + Duration::from_millis(600);
        state.advance(interrupt);
        approx_eq(state.displayed_value(), 0.3);

        state.set_progress_with_clock(0., true, interrupt);
        approx_eq(state.displayed_value(), 0.3);
        assert_eq!(state.value(), 0.);

        // Still continuous shortly after the redirect.
        state.advance(interrupt + Duration::from_millis(100));
        assert!(state.displayed_value() < 0.3);
        assert!(state.displayed_value() > 0.2);

        // The redirected delta is 0.3, so it finishes 0.6s after the redirect.
        assert!(!state.advance(interrupt + Duration::from_millis(600)));
        assert_eq!(state.displayed_value(), 0.);
    }

    #[test]
    fn test_zero_duration_completes_on_next_frame() {
        let mut state = ProgressRingState::new().animation_duration(Duration::ZERO);
        let start = Instant::now();

        state.set_progress_with_clock(0.8, true, start);
        assert!(!state.advance(start));
        assert_eq!(state.displayed_value(), 0.8);
    }

    #[test]
    fn test_animated_set_to_same_value_does_not_animate() {
        let mut state = ProgressRingState::new().progress(0.5);
        let now = Instant::now();

        state.set_progress_with_clock(0.5, true, now);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_value(), 0.5);
    }

    #[test]
    fn test_title_does_not_affect_progress() {
        let state = ProgressRingState::new()
            .progress(0.25)
            .title(Title::new().text("Loading\n").placeholder("%.0f").text("%"));

        assert_eq!(state.value(), 0.25);
        assert!(!state.is_animating());
    }
}
