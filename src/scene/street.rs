//! Street phase: night skyline, a walking figure and an approaching truck.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point, QuadraticBezier};
use crate::render::{fill_circle, fill_polygon, Drawable};

use super::layout::{Layout, DESIGN_SIZE as DESIGN_WIDTH};
use super::vertical_gradient;

const SKY_TOP: Rgba = Rgba::rgb(20, 25, 40);
const SKY_BOTTOM: Rgba = Rgba::rgb(5, 10, 15);
const FAR_SKYLINE: Rgba = Rgba::rgb(35, 45, 70);
const NEAR_SKYLINE: Rgba = Rgba::rgb(25, 35, 55);
const ROAD: Rgba = Rgba::rgb(40, 40, 45);
const DASH: Rgba = Rgba::new(220, 220, 140, 200);
const SKIN: Rgba = Rgba::rgb(240, 230, 220);
const LIMB: Rgba = Rgba::rgb(235, 235, 235);

const SKY_BASE_Y: i32 = 360;
const ROAD_Y_TOP: i32 = 430;
const ROAD_Y_BOTTOM: i32 = 600;
const GROUND_Y: i32 = ROAD_Y_TOP;

const DASH_WIDTH: i32 = 50;
const DASH_GAP: i32 = 30;
const DASH_Y: i32 = 510;
const DASH_THICK: i32 = 10;

/// Motion-blur copies of the truck, front to back.
pub const TRUCK_GHOSTS: usize = 6;
const GHOST_SPACING: i32 = 14;
const GHOST_ALPHA: f64 = 220.0;
const GHOST_DECAY: f64 = 0.75;

/// Progress after which the foreground shakes.
pub const IMPACT_START: f64 = 0.85;

/// Foreground offset for the impact at progress `u`; zero before
/// [`IMPACT_START`].
#[must_use]
pub fn impact_shake(u: f64) -> (i32, i32) {
    if u <= IMPACT_START {
        return (0, 0);
    }
    let k = (u - IMPACT_START) / (1.0 - IMPACT_START);
    (((60.0 * k).sin() * 8.0) as i32, ((50.0 * k).cos() * 6.0) as i32)
}

/// Alpha of the `i`-th truck ghost.
#[must_use]
pub fn ghost_alpha(i: usize) -> u8 {
    (GHOST_ALPHA * GHOST_DECAY.powi(i as i32)) as u8
}

/// Draw the street phase at progress `u`. Post-processing is applied by the
/// caller.
pub fn draw(fb: &mut Framebuffer, layout: &Layout, u: f64) {
    vertical_gradient(fb, SKY_TOP, SKY_BOTTOM);
    draw_backdrop(fb, layout);

    let (shake_x, shake_y) = impact_shake(u);

    let figure_x = 100 + (180.0 * u) as i32;
    draw_figure(fb, layout, figure_x + shake_x, GROUND_Y + shake_y);

    let truck_start = f64::from(DESIGN_WIDTH + 120);
    let truck_end = f64::from(figure_x + 10);
    let truck_x = (truck_start + (truck_end - truck_start) * u) as i32;
    for i in 0..TRUCK_GHOSTS {
        let offset = i as i32 * GHOST_SPACING;
        draw_truck(
            fb,
            layout,
            truck_x + offset + shake_x,
            GROUND_Y - 10 + shake_y,
            ghost_alpha(i),
        );
    }
}

fn draw_backdrop(fb: &mut Framebuffer, layout: &Layout) {
    let base = SKY_BASE_Y;
    let far = layout.polygon(
        &[0, 80, 120, 200, 240, 320, 380, 460, 520, 600, 600, 0],
        &[
            base,
            300,
            330,
            280,
            340,
            310,
            290,
            320,
            300,
            280,
            ROAD_Y_BOTTOM,
            ROAD_Y_BOTTOM,
        ],
    );
    far.draw(fb, FAR_SKYLINE);

    let near = layout.polygon(
        &[0, 60, 140, 180, 260, 300, 360, 420, 480, 540, 600, 600, 0],
        &[
            base + 30,
            340,
            350,
            330,
            360,
            340,
            355,
            340,
            360,
            335,
            350,
            ROAD_Y_BOTTOM,
            ROAD_Y_BOTTOM,
        ],
    );
    near.draw(fb, NEAR_SKYLINE);

    // Road spans the real buffer edges.
    let road = [
        Point::new(0, layout.y(ROAD_Y_TOP)),
        Point::new(layout.width(), layout.y(ROAD_Y_TOP)),
        Point::new(layout.width(), layout.height()),
        Point::new(0, layout.height()),
    ];
    fill_polygon(fb, &road, ROAD);

    for x in (0..DESIGN_WIDTH).step_by((DASH_WIDTH + DASH_GAP) as usize) {
        layout
            .rect(x, DASH_Y, DASH_WIDTH, DASH_THICK)
            .draw(fb, DASH);
    }
}

/// Stick figure standing on `ground_y`, in design units.
fn draw_figure(fb: &mut Framebuffer, layout: &Layout, x: i32, ground_y: i32) {
    let head_r = 16;
    let head_y = ground_y - 88;
    let hip = layout.point(x, ground_y - 30);
    let stroke = 1;

    let head = layout.point(x, head_y);
    fill_circle(fb, head.x, head.y, layout.len(head_r), SKIN);

    Line::new(layout.point(x, head_y + head_r), hip)
        .thick(stroke)
        .draw(fb, LIMB);
    Line::new(hip, layout.point(x - 22, ground_y))
        .thick(stroke)
        .draw(fb, LIMB);
    Line::new(hip, layout.point(x + 22, ground_y))
        .thick(stroke)
        .draw(fb, LIMB);

    let shoulder = layout.point(x, head_y + head_r + 10);
    for side in [-1, 1] {
        QuadraticBezier::new(
            shoulder,
            layout.point(x + side * 18, ground_y - 70),
            layout.point(x + side * 34, ground_y - 60),
        )
        .draw(fb, LIMB);
    }
}

/// Truck whose body rests on `y`, in design units.
fn draw_truck(fb: &mut Framebuffer, layout: &Layout, x: i32, y: i32, alpha: u8) {
    layout
        .rect(x, y - 60, 180, 60)
        .draw(fb, Rgba::new(70, 130, 180, alpha));
    layout
        .rect(x + 130, y - 100, 50, 40)
        .draw(fb, Rgba::new(100, 170, 210, alpha));
    layout
        .rect(x + 140, y - 95, 35, 25)
        .draw(fb, Rgba::new(200, 230, 250, alpha).fade(0.7));

    let tire = Rgba::new(40, 40, 40, alpha);
    let hub = Rgba::new(120, 120, 120, alpha);
    let wheels = [30, 100, 170].map(|dx| layout.point(x + dx, y));
    for c in wheels {
        fill_circle(fb, c.x, c.y, layout.len(22), tire);
    }
    for c in wheels {
        fill_circle(fb, c.x, c.y, layout.len(9), hub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(u: f64) -> Framebuffer {
        let mut fb = Framebuffer::new(600, 600).unwrap();
        draw(&mut fb, &Layout::new(600, 600), u);
        fb
    }

    #[test]
    fn test_no_shake_before_impact() {
        assert_eq!(impact_shake(0.0), (0, 0));
        assert_eq!(impact_shake(IMPACT_START), (0, 0));
    }

    #[test]
    fn test_shake_bounded() {
        for i in 0..=100 {
            let u = IMPACT_START + (1.0 - IMPACT_START) * f64::from(i) / 100.0;
            let (dx, dy) = impact_shake(u);
            assert!(dx.abs() <= 8);
            assert!(dy.abs() <= 6);
        }
        assert_ne!(impact_shake(0.95), (0, 0));
    }

    #[test]
    fn test_ghost_alpha_decays() {
        let alphas: Vec<u8> = (0..TRUCK_GHOSTS).map(ghost_alpha).collect();
        assert_eq!(alphas, vec![220, 165, 123, 92, 69, 52]);
    }

    #[test]
    fn test_frame_is_opaque() {
        let fb = render(0.3);
        assert!(fb.samples().all(|c| c.a == 255));
    }

    #[test]
    fn test_sky_gradient_top_row() {
        let fb = render(0.0);
        assert_eq!(fb.get_pixel(300, 0), Some(SKY_TOP));
    }

    #[test]
    fn test_road_below_dashes() {
        let fb = render(0.0);
        // Below the centre line only the road remains.
        assert_eq!(fb.get_pixel(60, 590), Some(ROAD));
        assert_ne!(fb.get_pixel(10, 515), Some(ROAD));
    }

    #[test]
    fn test_figure_head_moves_right() {
        let skin_columns = |fb: &Framebuffer| -> Vec<u32> {
            (0..600)
                .filter(|&x| fb.get_pixel(x, 342) == Some(SKIN))
                .collect()
        };
        let start = skin_columns(&render(0.0));
        let later = skin_columns(&render(0.5));
        assert!(start.contains(&100));
        assert!(later.contains(&190));
        assert!(!later.contains(&100));
    }

    #[test]
    fn test_truck_offscreen_at_start() {
        let fb = render(0.0);
        let truck_body = Rgba::rgb(70, 130, 180);
        assert!(fb.samples().all(|c| c != truck_body));
    }

    #[test]
    fn test_scaled_layout_renders() {
        let mut fb = Framebuffer::new(120, 90).unwrap();
        draw(&mut fb, &Layout::new(120, 90), 0.5);
        assert_eq!(fb.get_pixel(60, 0), Some(SKY_TOP));
        assert_eq!(fb.get_pixel(12, 89), Some(ROAD));
    }
}
