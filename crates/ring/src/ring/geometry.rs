use gpui::{Bounds, Pixels, px};
use std::f32::consts::TAU;

use crate::PixelsExt as _;

/// Geometry of a ring centered in its element bounds.
///
/// `radius` is the centerline radius of the track, reduced so the full stroke
/// stays within the bounds.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RingGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub track_width: f32,
}

impl RingGeometry {
    /// Outer edge of the stroked track.
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.track_width / 2.
    }
}

pub(crate) fn ring_geometry(bounds: Bounds<Pixels>, track_width: f32) -> Option<RingGeometry> {
    if bounds.size.width <= px(0.) || bounds.size.height <= px(0.) {
        return None;
    }

    let width = bounds.size.width.as_f32();
    let height = bounds.size.height.as_f32();
    let center_x = bounds.origin.x.as_f32() + width / 2.;
    let center_y = bounds.origin.y.as_f32() + height / 2.;
    let track_width = track_width.max(0.);
    let radius = (width.min(height) / 2. - track_width / 2.).max(0.);

    Some(RingGeometry {
        center_x,
        center_y,
        radius,
        track_width,
    })
}

/// Convert a turn in `[0, 1]` to radians, with turn 0 at the top of the
/// circle and increasing turns proceeding clockwise.
pub(crate) fn turn_to_theta(turn: f32) -> f32 {
    (turn - 0.25) * TAU
}

pub(crate) fn point_on_ring(geometry: &RingGeometry, turn: f32) -> (f32, f32) {
    let theta = turn_to_theta(turn);
    (
        geometry.center_x + geometry.radius * theta.cos(),
        geometry.center_y + geometry.radius * theta.sin(),
    )
}

/// Distance from the element edge to the title layout area: the stroke plus
/// the configured text inset.
pub(crate) fn title_inset(track_width: f32, text_inset: f32) -> f32 {
    track_width.max(0.) + text_inset.max(0.)
}
