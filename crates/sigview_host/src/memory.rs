//! In-process image host for tests.
//!
//! Images are zeroed RGBA8 buffers and encoding returns the raw pixels.
//! Sizes whose buffer would overflow or exceed [`MAX_IMAGE_BYTES`] still
//! get a handle, but no storage: encoding and region creation reject them.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::{ImageHandle, ImageHost, Rect, RegionHandle, RegionSpec, RenderTargetHandle};

/// Largest pixel buffer the memory host allocates.
pub const MAX_IMAGE_BYTES: usize = 256 * 1024 * 1024;

const BYTES_PER_PIXEL: usize = 4;

struct Image {
    width: u32,
    height: u32,
    /// Empty when the size was zero or too large to allocate.
    pixels: Vec<u8>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    images: FxHashMap<ImageHandle, Image>,
    targets: FxHashMap<RenderTargetHandle, ImageHandle>,
    regions: FxHashMap<RegionHandle, (ImageHandle, RegionSpec)>,
}

impl State {
    fn issue(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Image host backed by in-memory buffers.
#[derive(Default)]
pub struct MemoryHost {
    state: Mutex<State>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_render_target(&self) -> RenderTargetHandle {
        RenderTargetHandle::from_raw(self.state.lock().issue())
    }

    /// `(width, height)` as requested at creation.
    pub fn image_size(&self, image: ImageHandle) -> Option<(u32, u32)> {
        self.state
            .lock()
            .images
            .get(&image)
            .map(|image| (image.width, image.height))
    }

    /// Image last copied into `target`.
    pub fn target_source(&self, target: RenderTargetHandle) -> Option<ImageHandle> {
        self.state.lock().targets.get(&target).copied()
    }

    pub fn region(&self, region: RegionHandle) -> Option<(ImageHandle, RegionSpec)> {
        self.state.lock().regions.get(&region).copied()
    }
}

/// Buffer length for a `width` x `height` image, if it may be allocated.
fn buffer_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(BYTES_PER_PIXEL)
        .filter(|len| *len <= MAX_IMAGE_BYTES)
}

impl ImageHost for MemoryHost {
    fn create_image(&self, width: u32, height: u32) -> ImageHandle {
        let len = buffer_len(width, height).unwrap_or_else(|| {
            tracing::debug!(width, height, "image too large; created without storage");
            0
        });
        let mut state = self.state.lock();
        let handle = ImageHandle::from_raw(state.issue());
        state.images.insert(
            handle,
            Image {
                width,
                height,
                pixels: vec![0; len],
            },
        );
        handle
    }

    fn copy_to_render_target(&self, image: ImageHandle, target: RenderTargetHandle) {
        let mut state = self.state.lock();
        if !state.images.contains_key(&image) {
            tracing::debug!(image = image.raw(), "copy from unknown image ignored");
            return;
        }
        state.targets.insert(target, image);
    }

    fn encode_to_bytes(&self, image: ImageHandle) -> Option<Vec<u8>> {
        let state = self.state.lock();
        let source = state.images.get(&image)?;
        if source.pixels.is_empty() {
            tracing::debug!(image = image.raw(), "encode of image without storage");
            return None;
        }
        Some(source.pixels.clone())
    }

    fn create_region(&self, image: ImageHandle, spec: &RegionSpec) -> Option<RegionHandle> {
        let mut state = self.state.lock();
        let source = state.images.get(&image)?;
        if source.pixels.is_empty() || !region_fits(spec, source.width, source.height) {
            tracing::debug!(image = image.raw(), ?spec, "region rejected");
            return None;
        }
        let handle = RegionHandle::from_raw(state.issue());
        state.regions.insert(handle, (image, *spec));
        Some(handle)
    }
}

/// Whether `spec` lies inside a `width` x `height` image with a positive
/// scale and a border that fits the rect.
fn region_fits(spec: &RegionSpec, width: u32, height: u32) -> bool {
    let rect = spec.rect;
    let border = spec.border;
    let bounds = Rect::of_size(width, height);

    let positive = rect.width > 0.0 && rect.height > 0.0 && spec.pixels_per_unit > 0.0;
    let inside = rect.x >= 0.0
        && rect.y >= 0.0
        && rect.x_max() <= bounds.x_max()
        && rect.y_max() <= bounds.y_max();
    let border_fits = border.left + border.right <= rect.width
        && border.bottom + border.top <= rect.height;

    positive && inside && border_fits
}
