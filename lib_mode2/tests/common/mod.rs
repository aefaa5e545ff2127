#![allow(dead_code)]

use lib_mode2::IndexedImage;

pub const TRANSPARENT: u8 = 0;

/// Sixteen entry palette loosely following the MSX1 colors.
pub const MSX_PALETTE: [[u8; 3]; 16] = [
    [0, 0, 0],
    [0, 0, 0],
    [33, 200, 66],
    [94, 220, 120],
    [84, 85, 237],
    [125, 118, 252],
    [212, 82, 77],
    [66, 235, 245],
    [252, 85, 84],
    [255, 121, 120],
    [212, 193, 84],
    [230, 206, 128],
    [33, 176, 59],
    [201, 91, 186],
    [204, 204, 204],
    [255, 255, 255],
];

pub fn rgba_palette(size: usize) -> Vec<[u8; 4]> {
    (0..size)
        .map(|i| {
            let [r, g, b] = MSX_PALETTE[i % 16];
            [r, g, b, if i == 0 { 0 } else { 255 }]
        })
        .collect()
}

/// Builds indexed test images one pixel, row or cell at a time.
pub struct ImageBuilder {
    width: usize,
    height: usize,
    palette_size: usize,
    pixels: Vec<u8>,
}

impl ImageBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            palette_size: 16,
            pixels: vec![TRANSPARENT; width * height],
        }
    }

    pub fn palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    pub fn background(mut self, color: u8) -> Self {
        self.pixels.fill(color);
        self
    }

    pub fn pixel(mut self, x: usize, y: usize, color: u8) -> Self {
        self.pixels[y * self.width + x] = color;
        self
    }

    pub fn row(mut self, x: usize, y: usize, colors: &[u8]) -> Self {
        let start = y * self.width + x;
        self.pixels[start..start + colors.len()].copy_from_slice(colors);
        self
    }

    pub fn fill_cell(mut self, cell_x: usize, cell_y: usize, color: u8) -> Self {
        for y in cell_y * 16..(cell_y + 1) * 16 {
            let start = y * self.width + cell_x * 16;
            self.pixels[start..start + 16].fill(color);
        }
        self
    }

    pub fn build(self) -> IndexedImage {
        IndexedImage::new(
            self.width as u32,
            self.height as u32,
            rgba_palette(self.palette_size),
            self.pixels,
        )
        .unwrap()
    }
}

/// Encodes an indexed PNG in memory, packing `indices` at `depth` bits.
pub fn indexed_png(
    width: u32,
    height: u32,
    depth: png::BitDepth,
    palette: &[[u8; 3]],
    trns: Option<&[u8]>,
    indices: &[u8],
) -> Vec<u8> {
    let bits = depth as usize;
    let line_size = (width as usize * bits).div_ceil(8);
    let mut packed = vec![0u8; line_size * height as usize];
    for (i, &index) in indices.iter().enumerate() {
        let (x, y) = (i % width as usize, i / width as usize);
        let bit = x * bits;
        packed[y * line_size + bit / 8] |= index << (8 - bits - bit % 8);
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(depth);
        encoder.set_palette(palette.concat());
        if let Some(alpha) = trns {
            encoder.set_trns(alpha.to_vec());
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&packed).unwrap();
        writer.finish().unwrap();
    }
    out
}

pub fn rgb_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&vec![128; (width * height * 3) as usize])
            .unwrap();
        writer.finish().unwrap();
    }
    out
}
