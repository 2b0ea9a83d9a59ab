//! Host image surface.
//!
//! Inspector views that show textures and sprites call into the host
//! runtime for image creation, readback encoding, and sprite regions. This
//! crate fixes the call contract as the [`ImageHost`] trait; the host
//! embedding provides the implementation.
//!
//! Handles are opaque ids issued by the host. Nothing here interprets them.
//!
//! [`MemoryHost`] is a minimal in-process implementation used as a test
//! double.

mod memory;

pub use memory::{MemoryHost, MAX_IMAGE_BYTES};

/// Host-issued image handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImageHandle(u64);

/// Host-issued render target handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RenderTargetHandle(u64);

/// Host-issued sprite region handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RegionHandle(u64);

macro_rules! raw_handle {
    ($($handle:ident),* $(,)?) => {
        $(
            impl $handle {
                /// Wrap a raw id received from the host.
                pub const fn from_raw(raw: u64) -> Self {
                    Self(raw)
                }

                pub const fn raw(self) -> u64 {
                    self.0
                }
            }
        )*
    };
}

raw_handle!(ImageHandle, RenderTargetHandle, RegionHandle);

/// Pixel rectangle with its origin at the image's bottom-left corner.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whole-image rectangle.
    #[expect(
        clippy::cast_precision_loss,
        reason = "image dimensions are far below f32 precision limits"
    )]
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }
}

/// Normalized pivot point; `(0.5, 0.5)` is the centre.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const CENTER: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Nine-slice border in pixels: left, bottom, right, top.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Border {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

/// Everything the host needs to cut a sprite region out of an image.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RegionSpec {
    pub rect: Rect,
    pub pivot: Vec2,
    pub pixels_per_unit: f32,
    /// Mesh extrusion in pixels.
    pub extrude: u32,
    pub border: Border,
}

impl RegionSpec {
    /// Region covering `rect` with a centred pivot, 100 pixels per unit,
    /// no extrusion, and no border.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            pivot: Vec2::CENTER,
            pixels_per_unit: 100.0,
            extrude: 0,
            border: Border::default(),
        }
    }

    #[must_use]
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    #[must_use]
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    #[must_use]
    pub fn with_extrude(mut self, extrude: u32) -> Self {
        self.extrude = extrude;
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }
}

/// Image operations provided by the host runtime.
///
/// Calls take `&self`; implementations synchronize internally so a host
/// can be shared across inspector views.
pub trait ImageHost {
    /// Allocate a blank image.
    fn create_image(&self, width: u32, height: u32) -> ImageHandle;

    /// Blit `image` into `target`.
    fn copy_to_render_target(&self, image: ImageHandle, target: RenderTargetHandle);

    /// Encode `image` for export. `None` when the host cannot encode it.
    fn encode_to_bytes(&self, image: ImageHandle) -> Option<Vec<u8>>;

    /// Cut a sprite region out of `image`. `None` when the host rejects
    /// the region.
    fn create_region(&self, image: ImageHandle, spec: &RegionSpec) -> Option<RegionHandle>;
}
