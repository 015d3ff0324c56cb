use crate::Ili9341;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{IntoStorage, Rgb565},
    primitives::{PointsIter, Rectangle},
    Pixel,
};

use display_interface::{DisplayError, WriteOnlyDataCommand};

impl<IFACE> OriginDimensions for Ili9341<IFACE> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<IFACE> DrawTarget for Ili9341<IFACE>
where
    IFACE: WriteOnlyDataCommand,
{
    type Error = DisplayError;

    type Color = Rgb565;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.contains(point.x, point.y) {
                self.fast_draw_point(point.x as u16, point.y as u16, raw(color))?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable_area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = drawable_area.bottom_right() else {
            return Ok(());
        };
        let (x0, y0) = (drawable_area.top_left.x as u16, drawable_area.top_left.y as u16);
        let (x1, y1) = (bottom_right.x as u16, bottom_right.y as u16);

        if drawable_area == *area {
            self.draw_raw_iter(x0, y0, x1, y1, colors.into_iter().map(raw))
        } else {
            let colors = area
                .points()
                .zip(colors)
                .filter(|(point, _)| drawable_area.contains(*point))
                .map(|(_, color)| raw(color));
            self.draw_raw_iter(x0, y0, x1, y1, colors)
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        match drawable_area.bottom_right() {
            Some(bottom_right) => self.fill(
                drawable_area.top_left.x as u16,
                drawable_area.top_left.y as u16,
                bottom_right.x as u16,
                bottom_right.y as u16,
                raw(color),
            ),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Ili9341::clear(self, raw(color))
    }
}

fn raw(color: Rgb565) -> u16 {
    color.into_storage()
}
