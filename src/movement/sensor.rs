//! Movement domain: ground support detection.
//!
//! The sensor overlaps a small sphere below the body origin with the
//! configured layers. A shape overlap rather than a single ray keeps the
//! answer stable when the body stands on the edge of a platform.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionConfig;
use crate::movement::GameLayer;

/// Geometric query backing a [`GroundSensor`].
pub trait GroundProbe {
    /// Whether any probed surface intersects the sphere.
    fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool;
}

/// Sphere probe answering "is this body supported?".
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundSensor {
    pub radius: f32,
    /// Distance below the body origin of the probe centre
    pub offset: f32,
    /// Layers that count as support
    pub layers: LayerMask,
}

impl GroundSensor {
    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self {
            radius: config.ground_check_radius,
            offset: config.ground_check_offset,
            layers: LayerMask::from([GameLayer::Ground, GameLayer::Hazard]),
        }
    }

    pub fn probe_center(&self, origin: Vec3) -> Vec3 {
        origin - Vec3::Y * self.offset
    }

    /// Side-effect free; safe to call any number of times per tick.
    pub fn is_grounded(&self, origin: Vec3, probe: &impl GroundProbe) -> bool {
        probe.overlaps_sphere(self.probe_center(origin), self.radius)
    }
}

/// [`GroundProbe`] backed by the physics world's spatial query pipeline.
pub struct SpatialGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialGroundProbe<'a, 'w, 's> {
    /// Probes `sensor.layers`, ignoring the sensing body itself.
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, sensor: &GroundSensor, body: Entity) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(sensor.layers).with_excluded_entities([body]),
        }
    }
}

impl GroundProbe for SpatialGroundProbe<'_, '_, '_> {
    fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        !self
            .spatial_query
            .shape_intersections(&Collider::sphere(radius), center, Quat::IDENTITY, &self.filter)
            .is_empty()
    }
}
