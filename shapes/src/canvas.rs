use image::RgbImage;

use crate::color::Color;

/// Raster target every shape is drawn onto.
pub type Canvas = RgbImage;

/// Allocates a `width` x `height` canvas filled with `background`.
pub fn create_canvas(width: u32, height: u32, background: Color) -> Canvas {
    Canvas::from_pixel(width, height, background.into())
}
