//! # pixelscene
//!
//! Pixel-exact software rasterizer and animated scene engine.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library,
//! pixelscene scan-converts 2D primitives straight into an in-memory RGBA
//! buffer and sequences them into a looping three-phase animation.
//!
//! ## Features
//!
//! - **Integer Rasterization**: Bresenham lines, midpoint circles and ellipses, scanline polygons
//! - **Alpha Compositing**: one premultiplied "over" path for every pixel write
//! - **Post-Processing**: radial vignette and seeded, reproducible film grain
//! - **Scene Sequencing**: time-driven phases with eased, low-pass-smoothed motion
//! - **Export**: PNG files and packed ARGB buffers
//!
//! ## Quick Start
//!
//! ```rust
//! use pixelscene::prelude::*;
//! use pixelscene::render::{fill_circle, fill_polygon};
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! fb.clear(Rgba::BLACK);
//!
//! fill_polygon(&mut fb, &Polygon::rect(4, 4, 8, 8).vertices, Rgba::RED);
//! fill_circle(&mut fb, 40, 40, 10, Rgba::BLUE.with_alpha(128));
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), pixelscene::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Porter, T., & Duff, T. (1984). "Compositing Digital Images." SIGGRAPH '84.
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color samples and packed ARGB conversion.
pub mod color;

/// Fixed-size RGBA pixel buffer.
pub mod framebuffer;

/// Geometric primitives (points, lines, circles, ellipses, polygons, curves).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization, compositing and post-processing.
pub mod render;

/// Time-driven scene sequencing.
pub mod scene;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixelscene operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use pixelscene::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Ellipse, Line, Point, Polygon, QuadraticBezier};
    pub use crate::output::PngEncoder;
    pub use crate::render::Drawable;
    pub use crate::scene::{Phase, SceneBuilder, SceneSequencer, Timeline};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
