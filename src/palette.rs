use crate::image::{blue, green, pack_argb, red};

/// Fixed 256-entry palette for the indexed (8-bit) display mode.
///
/// Entry layout is 3-3-2: bits 7..5 of the index are the red channel, bits
/// 4..2 the green, bits 1..0 the blue. The masked bit patterns are kept
/// as-is without rescaling to full range (red tops out at 224, blue at
/// 192); the indexed transform's lookup rule depends on exactly these
/// values.
pub struct Palette {
    entries: [u32; 256],
}

impl Palette {
    pub fn build() -> Palette {
        let mut entries = [0u32; 256];
        for (i, entry) in entries.iter_mut().enumerate() {
            let r = (i & 0xe0) as u8;
            let g = ((i & 0x1c) << 3) as u8;
            let b = ((i & 0x03) << 6) as u8;
            *entry = pack_argb(0xff, r, g, b);
        }
        Palette { entries }
    }

    #[inline]
    pub fn entry(&self, index: u8) -> u32 {
        self.entries[index as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::build()
    }
}

/// Index of a pixel in the 3-3-2 palette: top 3 bits of red, top 3 of
/// green, top 2 of blue.
#[inline]
pub fn pixel_index(pixel: u32) -> u8 {
    let r = red(pixel);
    let g = green(pixel);
    let b = blue(pixel);
    ((r & 0xe0) >> 5) << 5 | ((g & 0xe0) >> 5) << 2 | ((b & 0xc0) >> 6)
}
