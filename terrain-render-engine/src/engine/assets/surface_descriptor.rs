use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use constants::sample::MAX_SAMPLE;

/// Heightmap description loaded from `maps/<map>/surface.json`.
/// Mirrors the JSON structure exactly (camelCase keys). Rows index
/// the grid vertically, columns horizontally.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceDescriptor {
    pub height_map: Vec<Vec<u8>>,
    pub width: usize,
    pub height: usize,
    /// World-space elevation of a full-range (255) sample.
    pub max_height: f32,
    /// World-space distance between adjacent grid samples.
    pub pixel_size: f32,
}

/// Structural problems in a surface descriptor. All of these are
/// fatal to the surface build; no partial mesh is inserted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceDataError {
    #[error("surface grid must be at least 2x2 samples, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },
    #[error("height map has {rows} rows, descriptor declares {height}")]
    RowCountMismatch { rows: usize, height: usize },
    #[error("height map row {row} has {len} samples, descriptor declares {width}")]
    RowLengthMismatch { row: usize, len: usize, width: usize },
}

impl SurfaceDescriptor {
    /// Check the grid shape against the declared dimensions before
    /// any indexing happens.
    pub fn validate(&self) -> Result<(), SurfaceDataError> {
        if self.width < 2 || self.height < 2 {
            return Err(SurfaceDataError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.height_map.len() != self.height {
            return Err(SurfaceDataError::RowCountMismatch {
                rows: self.height_map.len(),
                height: self.height,
            });
        }
        for (row, samples) in self.height_map.iter().enumerate() {
            if samples.len() != self.width {
                return Err(SurfaceDataError::RowLengthMismatch {
                    row,
                    len: samples.len(),
                    width: self.width,
                });
            }
        }
        Ok(())
    }

    /// World-space elevation of the sample at grid row `j`, column
    /// `i`. Only valid on a descriptor that passed `validate`.
    pub fn elevation(&self, j: usize, i: usize) -> f32 {
        f32::from(self.height_map[j][i]) / MAX_SAMPLE * self.max_height
    }

    /// World-space x/z footprint of the generated mesh. A grid of `n`
    /// samples spans `n - 1` cells per axis.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            (self.width - 1) as f32 * self.pixel_size,
            (self.height - 1) as f32 * self.pixel_size,
        )
    }

    /// World-space x/z centre of the footprint. The grid sits half a
    /// pixel off the origin on both axes.
    pub fn center(&self) -> Vec2 {
        Vec2::splat(-self.pixel_size / 2.0)
    }
}
