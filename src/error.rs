//! Error types
//!
//! The demos have no recovery path for broken assets or a missing GPU; these
//! enums exist so failures reach `main` with enough context to log before
//! exiting.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load an image from disk
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to load image '{}': {}", path.display(), source)]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Tile map construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("level data has {actual} tiles, expected {width}x{height} = {expected}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("tileset atlas must have at least one column and one row")]
    EmptyAtlas,
    #[error("tile size must be positive and finite")]
    InvalidTileSize,
}

/// GPU setup failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Anything that can end a demo early
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
