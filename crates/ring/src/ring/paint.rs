use gpui::{Hsla, PathBuilder, Window, point, px};

use super::geometry::{RingGeometry, point_on_ring, turn_to_theta};

/// Segments used to approximate a full turn. Arc sweeps use a proportional
/// share, with a floor so short arcs stay smooth.
const SEGMENTS_PER_TURN: f32 = 128.;

/// Stroke an arc along the ring centerline from `start_turn` over
/// `sweep_turns` (clockwise, turn 0 at the top).
pub(crate) fn paint_arc(
    geometry: &RingGeometry,
    start_turn: f32,
    sweep_turns: f32,
    color: Hsla,
    window: &mut Window,
) {
    if sweep_turns <= 0. || geometry.track_width <= 0. || geometry.radius <= 0. {
        return;
    }

    let sweep_turns = sweep_turns.min(1.);
    let steps = ((sweep_turns * SEGMENTS_PER_TURN).ceil() as usize).max(8);

    let mut builder = PathBuilder::stroke(px(geometry.track_width));
    let (x, y) = point_on_ring(geometry, start_turn);
    builder.move_to(point(px(x), px(y)));

    for i in 1..=steps {
        let turn = start_turn + sweep_turns * (i as f32 / steps as f32);
        let (x, y) = point_on_ring(geometry, turn);
        builder.line_to(point(px(x), px(y)));
    }

    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

/// Fill a disc covering the ring up to the outer edge of the track.
pub(crate) fn paint_disc(geometry: &RingGeometry, color: Hsla, window: &mut Window) {
    let radius = geometry.outer_radius();
    if radius <= 0. {
        return;
    }

    let steps = SEGMENTS_PER_TURN as usize;
    let mut builder = PathBuilder::fill();

    let theta = turn_to_theta(0.);
    builder.move_to(point(
        px(geometry.center_x + radius * theta.cos()),
        px(geometry.center_y + radius * theta.sin()),
    ));

    for i in 1..=steps {
        let theta = turn_to_theta(i as f32 / steps as f32);
        builder.line_to(point(
            px(geometry.center_x + radius * theta.cos()),
            px(geometry.center_y + radius * theta.sin()),
        ));
    }

    builder.close();
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}
