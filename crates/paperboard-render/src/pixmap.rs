//! Raster target shared with hosts and the PNG encoder.

/// An RGBA8 raster with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Change the size. Contents are discarded, like resizing a canvas.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Pixel at `(x, y)`, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .and_then(|px| <[u8; 4]>::try_from(px).ok())
    }

    /// Take over a frame rendered by vello_cpu, converting from
    /// premultiplied alpha.
    pub(crate) fn load_premultiplied(&mut self, frame: &vello_cpu::Pixmap) {
        let (width, height) = (u32::from(frame.width()), u32::from(frame.height()));
        if (self.width, self.height) != (width, height) {
            self.resize(width, height);
        }
        for (dst, src) in self
            .data
            .chunks_exact_mut(4)
            .zip(frame.data_as_u8_slice().chunks_exact(4))
        {
            dst.copy_from_slice(&unpremultiply([src[0], src[1], src[2], src[3]]));
        }
    }
}

fn unpremultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    match a {
        0 => [0, 0, 0, 0],
        255 => [r, g, b, a],
        _ => {
            let scale = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
            [scale(r), scale(g), scale(b), a]
        }
    }
}
