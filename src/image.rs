#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl<T> From<(T, T)> for Point
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Point {
            x: value.0.into(),
            y: value.1.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

// Canonical pixel format: 32 bits, 0xAARRGGBB. Everything crossing a module
// boundary is packed like this.

pub const OPAQUE_BLACK: u32 = 0xff000000;
pub const OPAQUE_WHITE: u32 = 0xffffffff;

#[inline]
pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> 24) & 0xff) as u8
}

#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> 16) & 0xff) as u8
}

#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> 8) & 0xff) as u8
}

#[inline]
pub fn blue(pixel: u32) -> u8 {
    (pixel & 0xff) as u8
}

fn check_dims(data_len: usize, width: i32, height: i32) {
    assert!(
        width >= 0 && height >= 0,
        "invalid width {} and height {}",
        width,
        height
    );
    assert!(
        data_len >= (width as usize) * (height as usize),
        "invalid data len {} for width {} and height {}",
        data_len,
        width,
        height
    );
}

pub trait ConstImage {
    fn data(&self) -> &[u32];
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn size(&self) -> Size {
        (self.width(), self.height()).into()
    }
    // zero-sized "no image" sentinel, from a failed decode
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
    fn pixel(&self, x: i32, y: i32) -> u32 {
        debug_assert!(x >= 0 && x < self.width() && y >= 0 && y < self.height());
        self.data()[(y * self.width() + x) as usize]
    }
    fn view(&self) -> ConstImageView {
        ConstImageView {
            width: self.width(),
            height: self.height(),
            data: self.data(),
        }
    }
}

pub trait Image: ConstImage {
    fn mut_data(&mut self) -> &mut [u32];

    fn put_pixel(&mut self, x: i32, y: i32, value: u32) {
        debug_assert!(x >= 0 && x < self.width() && y >= 0 && y < self.height());
        let idx = (y * self.width() + x) as usize;
        self.mut_data()[idx] = value;
    }
    fn fill(&mut self, value: u32) {
        self.mut_data().fill(value);
    }
    fn mut_view(&mut self) -> ImageView {
        ImageView {
            width: self.width(),
            height: self.height(),
            data: self.mut_data(),
        }
    }
}

pub struct ConstImageView<'a> {
    width: i32,
    height: i32,
    data: &'a [u32],
}

impl<'a> ConstImageView<'a> {
    pub fn new(data: &'a [u32], width: i32, height: i32) -> Self {
        check_dims(data.len(), width, height);
        ConstImageView {
            width,
            height,
            data,
        }
    }
}

impl<'a> ConstImage for ConstImageView<'a> {
    fn data(&self) -> &[u32] {
        self.data
    }
    fn width(&self) -> i32 {
        self.width
    }
    fn height(&self) -> i32 {
        self.height
    }
}

pub struct ImageView<'a> {
    width: i32,
    height: i32,
    data: &'a mut [u32],
}

impl<'a> ImageView<'a> {
    pub fn new(data: &'a mut [u32], width: i32, height: i32) -> Self {
        check_dims(data.len(), width, height);
        ImageView {
            width,
            height,
            data,
        }
    }
}

impl<'a> ConstImage for ImageView<'a> {
    fn data(&self) -> &[u32] {
        self.data
    }
    fn width(&self) -> i32 {
        self.width
    }
    fn height(&self) -> i32 {
        self.height
    }
}

impl<'a> Image for ImageView<'a> {
    fn mut_data(&mut self) -> &mut [u32] {
        self.data
    }
}

pub struct ImageBuffer {
    width: i32,
    height: i32,
    data: Vec<u32>,
}

impl ImageBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0);
        let data = vec![0; (width as usize) * (height as usize)];
        ImageBuffer {
            width,
            height,
            data,
        }
    }

    /// Like `new`, but reports allocation failure instead of aborting.
    /// Used by the ditherer, whose output is 4x the source pixel count.
    pub fn try_new(width: i32, height: i32) -> Result<Self, std::collections::TryReserveError> {
        assert!(width >= 0 && height >= 0);
        let len = (width as usize) * (height as usize);
        let mut data: Vec<u32> = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0);
        Ok(ImageBuffer {
            width,
            height,
            data,
        })
    }

    // the "no image" sentinel
    pub fn empty() -> Self {
        ImageBuffer {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }
}

impl ConstImage for ImageBuffer {
    fn data(&self) -> &[u32] {
        self.data.as_slice()
    }
    fn width(&self) -> i32 {
        self.width
    }
    fn height(&self) -> i32 {
        self.height
    }
}

impl Image for ImageBuffer {
    fn mut_data(&mut self) -> &mut [u32] {
        self.data.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let pixel = pack_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(pixel, 0x12345678);
        assert_eq!(alpha(pixel), 0x12);
        assert_eq!(red(pixel), 0x34);
        assert_eq!(green(pixel), 0x56);
        assert_eq!(blue(pixel), 0x78);
    }

    #[test]
    fn test_buffer_addressing() {
        let mut buf = ImageBuffer::new(4, 3);
        assert_eq!(buf.size(), (4, 3).into());
        buf.put_pixel(2, 1, 0xffabcdef);
        assert_eq!(buf.pixel(2, 1), 0xffabcdef);
        assert_eq!(buf.data()[4 + 2], 0xffabcdef);

        let view = buf.view();
        assert_eq!(view.pixel(2, 1), 0xffabcdef);
        assert_eq!(view.pixel(0, 0), 0);
    }

    #[test]
    fn test_view_over_external_buffer() {
        let mut raw = vec![0u32; 8 * 2];
        {
            let mut view = ImageView::new(raw.as_mut_slice(), 8, 2);
            view.fill(OPAQUE_WHITE);
            view.put_pixel(7, 1, OPAQUE_BLACK);
        }
        assert_eq!(raw[15], OPAQUE_BLACK);
        assert_eq!(raw[0], OPAQUE_WHITE);
    }

    #[test]
    fn test_empty_sentinel() {
        let img = ImageBuffer::empty();
        assert!(img.is_empty());
        assert_eq!(img.data().len(), 0);

        let zero_width = ImageBuffer::new(0, 10);
        assert!(zero_width.is_empty());
    }
}
