//! The five rasters produced from one source image

use crate::pipeline::naming::MapKind;
use crate::raster::{Quantize, RgbRaster, ScalarField, Vector3Field};

/// Output of one run; immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMapSet {
    albedo: RgbRaster,
    normal: Vector3Field,
    roughness: ScalarField,
    ambient_occlusion: ScalarField,
    height: ScalarField,
}

impl GeneratedMapSet {
    /// Bundle the five generated maps
    pub const fn new(
        albedo: RgbRaster,
        normal: Vector3Field,
        roughness: ScalarField,
        ambient_occlusion: ScalarField,
        height: ScalarField,
    ) -> Self {
        Self {
            albedo,
            normal,
            roughness,
            ambient_occlusion,
            height,
        }
    }

    /// Delighted base color
    pub const fn albedo(&self) -> &RgbRaster {
        &self.albedo
    }

    /// Encoded tangent-space normals
    pub const fn normal(&self) -> &Vector3Field {
        &self.normal
    }

    /// Roughness
    pub const fn roughness(&self) -> &ScalarField {
        &self.roughness
    }

    /// Ambient occlusion
    pub const fn ambient_occlusion(&self) -> &ScalarField {
        &self.ambient_occlusion
    }

    /// Height/displacement
    pub const fn height(&self) -> &ScalarField {
        &self.height
    }

    /// Width and height shared by every map
    pub fn dimensions(&self) -> (usize, usize) {
        (self.albedo.width(), self.albedo.height())
    }

    /// The raster stored for `kind`
    pub fn get(&self, kind: MapKind) -> &dyn Quantize {
        match kind {
            MapKind::Albedo => &self.albedo,
            MapKind::Normal => &self.normal,
            MapKind::Roughness => &self.roughness,
            MapKind::AmbientOcclusion => &self.ambient_occlusion,
            MapKind::Height => &self.height,
        }
    }

    /// Every map paired with its kind, in save order
    pub fn iter(&self) -> impl Iterator<Item = (MapKind, &dyn Quantize)> + '_ {
        MapKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
