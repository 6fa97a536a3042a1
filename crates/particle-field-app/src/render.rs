//! Drawing surface abstraction and the egui painter implementation.

use eframe::egui::{self, Color32, Painter, Pos2};

use particle_field_core::config::GlowStyle;
use particle_field_core::state::FrameSnapshot;
use particle_field_core::types::{Position, Rgba};

/// Number of translucent rings used to approximate the glow blur.
pub const GLOW_LAYERS: usize = 4;

/// A 2D target discs can be filled on.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Fill one disc. `glow` applies to this disc only.
    fn fill_disc(&mut self, center: Position, radius: f64, color: Rgba, glow: Option<&GlowStyle>);
}

/// Clear the surface and draw every disc of the snapshot in order.
pub fn draw_frame<S: Surface + ?Sized>(snapshot: &FrameSnapshot, surface: &mut S) {
    surface.clear();
    for disc in &snapshot.discs {
        surface.fill_disc(disc.center, disc.radius, disc.color, disc.glow.as_ref());
    }
}

/// Rings drawn behind a glowing disc, outermost first.
///
/// Each ring extends a further fraction of the blur radius past the disc and
/// carries a share of the glow's alpha, so the stacked rings fade outward.
pub fn glow_layers(radius: f64, glow: &GlowStyle) -> Vec<(f64, Rgba)> {
    let n = GLOW_LAYERS as f64;
    (1..=GLOW_LAYERS)
        .rev()
        .map(|i| {
            let reach = i as f64 / n;
            let ring_radius = radius + glow.blur * reach;
            let alpha = (1.0 - reach + 1.0 / n) / n;
            (ring_radius, glow.color.with_alpha_scaled(alpha as f32))
        })
        .collect()
}

pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Surface backed by an egui painter, with field coordinates relative to `origin`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, background: Rgba) -> Self {
        Self {
            painter,
            origin,
            background: to_color32(background),
        }
    }

    fn to_screen(&self, pos: Position) -> Pos2 {
        self.origin + egui::vec2(pos.x as f32, pos.y as f32)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, self.background);
    }

    fn fill_disc(&mut self, center: Position, radius: f64, color: Rgba, glow: Option<&GlowStyle>) {
        let center = self.to_screen(center);
        if let Some(glow) = glow {
            for (ring_radius, ring_color) in glow_layers(radius, glow) {
                self.painter
                    .circle_filled(center, ring_radius as f32, to_color32(ring_color));
            }
        }
        self.painter
            .circle_filled(center, radius as f32, to_color32(color));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use particle_field_core::components::ParticleId;
    use particle_field_core::state::{DiscView, PointerState};
    use particle_field_core::types::{SimTime, Viewport};

    /// Surface that records what was drawn.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub clears: usize,
        pub discs: Vec<(Position, f64, Rgba, Option<GlowStyle>)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.discs.clear();
        }

        fn fill_disc(
            &mut self,
            center: Position,
            radius: f64,
            color: Rgba,
            glow: Option<&GlowStyle>,
        ) {
            self.discs.push((center, radius, color, glow.copied()));
        }
    }

    fn disc(id: u32, glow: Option<GlowStyle>) -> DiscView {
        DiscView {
            id: ParticleId(id),
            center: Position::new(id as f64, 1.0),
            radius: 2.0,
            color: Rgba::LIGHT_BLUE,
            glow,
        }
    }

    #[test]
    fn test_draw_frame_keeps_glow_per_disc() {
        let snapshot = FrameSnapshot {
            time: SimTime::default(),
            viewport: Viewport::new(10.0, 10.0).unwrap(),
            pointer: PointerState::default(),
            discs: vec![disc(0, Some(GlowStyle::default())), disc(1, None), disc(2, None)],
        };
        let mut surface = RecordingSurface::default();
        draw_frame(&snapshot, &mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.discs.len(), 3);
        assert!(surface.discs[0].3.is_some());
        assert!(surface.discs[1].3.is_none());
        assert!(surface.discs[2].3.is_none());
    }

    #[test]
    fn test_glow_layers_fade_outward() {
        let glow = GlowStyle::default();
        let layers = glow_layers(2.0, &glow);
        assert_eq!(layers.len(), GLOW_LAYERS);

        // Outermost ring reaches the full blur radius.
        assert!((layers[0].0 - 17.0).abs() < 1e-12);
        assert!(layers.windows(2).all(|w| w[0].0 > w[1].0));
        assert!(layers.windows(2).all(|w| w[0].1.a <= w[1].1.a));
        assert!(layers.iter().all(|(_, c)| c.r == 218 && c.g == 22 && c.b == 22));
        assert!(layers.iter().all(|(r, _)| *r > 2.0));
    }

    #[test]
    fn test_to_color32_unmultiplied() {
        let c = to_color32(Rgba::opaque(10, 20, 30));
        assert_eq!(c, Color32::from_rgb(10, 20, 30));
    }
}
