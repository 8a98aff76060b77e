//! Scene primitives
//!
//! Converts world state into flat-coloured rectangles clipped to the frame.

use image::{Rgba, RgbaImage};
use physics::{BoundingBox, GameConfig, World};

/// Colours used for each kind of primitive.
#[derive(Clone, Debug)]
pub struct Palette {
    pub background: Rgba<u8>,
    pub pipe: Rgba<u8>,
    pub ground: Rgba<u8>,
    pub ground_stripe: Rgba<u8>,
    /// One shade per wing sprite.
    pub player: [Rgba<u8>; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba([0, 0, 0, 255]),
            pipe: Rgba([83, 190, 45, 255]),
            ground: Rgba([222, 216, 149, 255]),
            ground_stripe: Rgba([120, 190, 60, 255]),
            player: [
                Rgba([230, 60, 50, 255]),
                Rgba([240, 90, 60, 255]),
                Rgba([200, 40, 40, 255]),
            ],
        }
    }
}

/// Width of one ground stripe; stripes alternate with plain ground.
pub const STRIPE_WIDTH: i32 = 12;

/// Fill `rect`, clipped to the image bounds.
pub fn fill_rect(img: &mut RgbaImage, rect: BoundingBox, color: Rgba<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    let (left, right) = (rect.left.clamp(0, w), rect.right.clamp(0, w));
    let (top, bottom) = (rect.top.clamp(0, h), rect.bottom.clamp(0, h));
    for y in top..bottom {
        for x in left..right {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Pipe boxes, upper then lower, for every pair in the world.
pub fn pipe_rects<'a>(world: &'a World, cfg: &'a GameConfig) -> impl Iterator<Item = BoundingBox> + 'a {
    world.pipes.iter().flat_map(move |pipe| {
        [
            pipe.upper_bounds(cfg.pipe_width, cfg.pipe_height),
            pipe.lower_bounds(cfg.pipe_width, cfg.pipe_height),
        ]
    })
}

/// Ground strip with stripes shifted by the world's scroll offset.
pub fn draw_ground(img: &mut RgbaImage, world: &World, cfg: &GameConfig, palette: &Palette) {
    let ground_y = cfg.ground_y();
    let strip = BoundingBox::from_origin(0, ground_y, cfg.screen_width, cfg.screen_height - ground_y);
    fill_rect(img, strip, palette.ground);

    let period = 2 * STRIPE_WIDTH;
    let mut x = world.scroll_offset.rem_euclid(period) - period;
    while x < cfg.screen_width {
        let stripe = BoundingBox::from_origin(x, ground_y, STRIPE_WIDTH, cfg.screen_height - ground_y);
        fill_rect(img, stripe, palette.ground_stripe);
        x += period;
    }
}
