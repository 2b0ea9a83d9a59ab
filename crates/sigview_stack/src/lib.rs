//! Recursion guards for descriptor traversal.
//!
//! Descriptor graphs nest through generic arguments, element types, and
//! declaring-type chains. Real type systems only allow finite nesting, so
//! plain recursion is enough, but bridged descriptors are not trusted: every
//! recursive step goes through a [`Depth`] budget and runs inside
//! [`ensure_sufficient_stack`].
//!
//! # Usage
//!
//! ```text
//! fn render(&self, ty: &TypeDescriptor, depth: Depth) -> Result<String, Error> {
//!     let depth = depth.descend()?;
//!     ensure_sufficient_stack(|| {
//!         // ... recurse with `depth` ...
//!     })
//! }
//! ```
//!
//! # Configuration
//!
//! - **Red zone**: 64KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Ensure sufficient stack space is available before executing `f`.
///
/// # Platform Behavior
///
/// - **Native**: Uses `stacker::maybe_grow` to dynamically grow the stack
/// - **WASM**: Simply calls `f()` directly (WASM manages its own stack)
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Nesting budget threaded through a recursive traversal.
///
/// `Depth` is `Copy`; each level takes its own copy via [`descend`](Self::descend),
/// so siblings share the same budget and only the path length counts.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Depth {
    current: u32,
    max: u32,
}

/// The nesting budget ran out.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("descriptor nesting exceeds the maximum depth of {max}")]
pub struct DepthExceeded {
    pub max: u32,
}

impl Depth {
    /// Top of a traversal allowed to nest `max` levels.
    pub const fn root(max: u32) -> Self {
        Self { current: 0, max }
    }

    /// One level deeper, or an error if that would pass the limit.
    pub const fn descend(self) -> Result<Self, DepthExceeded> {
        if self.current >= self.max {
            return Err(DepthExceeded { max: self.max });
        }
        Ok(Self {
            current: self.current + 1,
            max: self.max,
        })
    }

    pub const fn current(self) -> u32 {
        self.current
    }

    pub const fn max(self) -> u32 {
        self.max
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::root(DEFAULT_MAX_DEPTH)
    }
}
