use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("frame buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("could not allocate {bytes} bytes for a {width}x{height} frame buffer")]
    AllocationFailure { width: u32, height: u32, bytes: usize },
}

/// Row-major RGBA pixels, starting at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn buffer_size(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        if width == 0 || height == 0 {
            return Err(FrameBufferError::InvalidSize { width, height });
        }

        let bytes =
            buffer_size(width, height).ok_or(FrameBufferError::InvalidSize { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| FrameBufferError::AllocationFailure {
                width,
                height,
                bytes,
            })?;
        data.resize(bytes, 0);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Mutable rows, top to bottom, each `width * 4` bytes long.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let stride = self.row_stride();
        self.data.chunks_exact_mut(stride)
    }

    /// The RGBA bytes at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }
}
