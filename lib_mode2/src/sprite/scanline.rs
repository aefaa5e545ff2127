use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanlineError {
    #[error("more than three colors in one line: {found:?} and {extra}")]
    TooManyColors { found: [u8; 3], extra: u8 },
}

/// Distinct opaque colors of one cell row, in order of first appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanlineColors {
    colors: [u8; 3],
    len: usize,
}

impl ScanlineColors {
    pub fn as_slice(&self) -> &[u8] {
        &self.colors[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit-planes needed for this row. Three colors still fit in two planes
    /// since the third one is drawn by overlapping the other two.
    pub fn bpp(&self) -> u8 {
        self.len().min(2) as u8
    }

    fn insert(&mut self, color: u8) -> Result<(), ScanlineError> {
        if self.as_slice().contains(&color) {
            return Ok(());
        }
        if self.len() == self.colors.len() {
            return Err(ScanlineError::TooManyColors {
                found: self.colors,
                extra: color,
            });
        }
        self.colors[self.len] = color;
        self.len += 1;
        Ok(())
    }
}

/// Collects the distinct colors of `row`, skipping `transparent`.
pub fn classify(row: &[u8], transparent: u8) -> Result<ScanlineColors, ScanlineError> {
    let mut colors = ScanlineColors::default();
    for &pixel in row.iter().filter(|&&p| p != transparent) {
        colors.insert(pixel)?;
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_transparent_row() {
        let colors = classify(&[0; 16], 0).unwrap();
        assert!(colors.is_empty());
        assert_eq!(colors.bpp(), 0);
    }

    #[test]
    fn test_classify_first_appearance_order() {
        let row = [0, 5, 5, 0, 3, 5, 7, 0, 0, 3, 7, 7, 0, 0, 0, 5];
        let colors = classify(&row, 0).unwrap();
        assert_eq!(colors.as_slice(), &[5, 3, 7]);
        assert_eq!(colors.bpp(), 2);
    }

    #[test]
    fn test_classify_custom_transparent() {
        let row = [16, 0, 0, 16, 1, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16];
        let colors = classify(&row, 16).unwrap();
        assert_eq!(colors.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_classify_too_many_colors() {
        let row = [1, 2, 3, 1, 2, 3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            classify(&row, 0),
            Err(ScanlineError::TooManyColors {
                found: [1, 2, 3],
                extra: 4
            })
        );
    }

    #[test]
    fn test_single_color_bpp() {
        let colors = classify(&[9; 16], 0).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.bpp(), 1);
    }
}
