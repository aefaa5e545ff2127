use std::path::Path;

use super::format::IndexedImage;
use log::{debug, error, info};
use png::{BitDepth, ColorType, Transformations};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Can't read the image file")]
    Io(#[from] std::io::Error),
    #[error("PNG decoding failed")]
    Png(#[from] png::DecodingError),
    #[error("PNG doesn't have 16 or 256 indexed colors (color type {0:?})")]
    UnsupportedPixelFormat(ColorType),
    #[error("Unsupported indexed bit depth: {0}")]
    UnsupportedBitDepth(u8),
    #[error("Indexed PNG has no palette")]
    MissingPalette,
    #[error("Palette has {0} entries, at most 256 are supported")]
    PaletteTooLarge(usize),
    #[error("Pixel buffer holds {actual} indices, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

pub fn open(path: impl AsRef<Path>) -> Result<IndexedImage, DecodeError> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    let data = std::fs::read(path).map_err(|e| {
        error!("Can't load {}: {}", path.display(), e);
        DecodeError::Io(e)
    })?;
    decode(&data)
}

pub fn decode(encoded_data: &[u8]) -> Result<IndexedImage, DecodeError> {
    let mut decoder = png::Decoder::new(encoded_data);
    // Keep the raw indices; the default transformations would expand them to RGB.
    decoder.set_transformations(Transformations::IDENTITY);

    let mut reader = decoder.read_info().map_err(|e| {
        error!("Invalid PNG header: {}", e);
        DecodeError::Png(e)
    })?;

    let mut buffer = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buffer)?;
    debug!(
        "PNG frame: {}x{} {:?} depth {:?} line size {}",
        frame.width, frame.height, frame.color_type, frame.bit_depth, frame.line_size
    );

    if frame.color_type != ColorType::Indexed {
        error!("PNG is not indexed: {:?}", frame.color_type);
        return Err(DecodeError::UnsupportedPixelFormat(frame.color_type));
    }

    let depth = match frame.bit_depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        BitDepth::Sixteen => {
            error!("Indexed PNG with 16 bit samples");
            return Err(DecodeError::UnsupportedBitDepth(16));
        }
    };

    let info = reader.info();
    let rgb = info.palette.as_deref().ok_or_else(|| {
        error!("Indexed PNG without a PLTE chunk");
        DecodeError::MissingPalette
    })?;
    let alpha = info.trns.as_deref().unwrap_or(&[]);

    let palette: Vec<[u8; 4]> = rgb
        .chunks_exact(3)
        .enumerate()
        .map(|(i, c)| [c[0], c[1], c[2], alpha.get(i).copied().unwrap_or(255)])
        .collect();
    debug!("Palette: {} colors", palette.len());

    let pixels = unpack_rows(
        &buffer,
        frame.width as usize,
        frame.height as usize,
        frame.line_size,
        depth,
    );

    let image = IndexedImage::new(frame.width, frame.height, palette, pixels)?;
    info!(
        "Decoded {}x{} indexed image, {} colors",
        image.width,
        image.height,
        image.palette.len()
    );
    Ok(image)
}

/// Expands packed scanlines into one index per pixel, leftmost pixel in the
/// high bits of each byte.
fn unpack_rows(data: &[u8], width: usize, height: usize, line_size: usize, depth: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height);
    let mask = ((1u16 << depth) - 1) as u8;

    for row in data.chunks(line_size).take(height) {
        if depth == 8 {
            pixels.extend_from_slice(&row[..width]);
            continue;
        }
        for x in 0..width {
            let bit = x * depth;
            let shift = 8 - depth - bit % 8;
            pixels.push((row[bit / 8] >> shift) & mask);
        }
    }

    pixels
}
