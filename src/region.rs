//! The playable region: the band of the scene where gameplay happens.
//!
//! The scene is authored at a fixed size and scaled to fill the screen, so on
//! wide displays the top and bottom of the scene are cropped. The playable
//! region is the part that stays visible at the widest supported aspect
//! ratio. Actors are confined to it by [`PlayableRegion::confine`].
use bevy::prelude::Resource;
use glam::Vec2;
use thiserror::Error;

/// Reasons a playable region cannot be derived from a scene.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegionError {
    /// The scene size has a non-positive or non-finite component.
    #[error("scene size must be finite and positive, got {width} x {height}")]
    InvalidSceneSize {
        /// Requested scene width.
        width: f32,
        /// Requested scene height.
        height: f32,
    },
    /// The aspect ratio is non-positive or non-finite.
    #[error("max aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f32),
}

/// Axis-aligned rectangle in scene coordinates.
///
/// Always lies inside the scene it was built for.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayableRegion {
    min: Vec2,
    max: Vec2,
}

/// Axes on which [`PlayableRegion::confine`] had to pin the position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryContact {
    /// The position crossed the left or right edge.
    pub x: bool,
    /// The position crossed the bottom or top edge.
    pub y: bool,
}

impl BoundaryContact {
    /// Whether either axis touched a bound.
    #[must_use]
    pub const fn any(self) -> bool {
        self.x || self.y
    }
}

impl PlayableRegion {
    /// Derives the playable region for a scene of `scene_size`.
    ///
    /// The region spans the full scene width and is `width / max_aspect_ratio`
    /// tall, centred vertically. Scenes already wider than the ratio use their
    /// full height.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError`] when the scene size or aspect ratio is not
    /// finite and strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use zombie_conga::PlayableRegion;
    /// let region = PlayableRegion::for_scene(Vec2::new(2048.0, 1536.0), 16.0 / 9.0).unwrap();
    /// assert_eq!(region.min(), Vec2::new(0.0, 192.0));
    /// assert_eq!(region.max(), Vec2::new(2048.0, 1344.0));
    /// ```
    pub fn for_scene(scene_size: Vec2, max_aspect_ratio: f32) -> Result<Self, RegionError> {
        if !scene_size.is_finite() || scene_size.cmple(Vec2::ZERO).any() {
            return Err(RegionError::InvalidSceneSize {
                width: scene_size.x,
                height: scene_size.y,
            });
        }
        if !max_aspect_ratio.is_finite() || max_aspect_ratio <= 0.0 {
            return Err(RegionError::InvalidAspectRatio(max_aspect_ratio));
        }

        let playable_height = (scene_size.x / max_aspect_ratio).min(scene_size.y);
        let margin = (scene_size.y - playable_height) / 2.0;
        Ok(Self {
            min: Vec2::new(0.0, margin),
            max: Vec2::new(scene_size.x, margin + playable_height),
        })
    }

    /// Builds a region from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Bottom-left corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Top-right corner.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Width and height of the region.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Centre point of the region.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Whether `point` lies inside the region, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Pins `position` inside the region, bouncing `velocity` off any edge
    /// that was crossed.
    ///
    /// Each axis is handled independently: when the position lies beyond a
    /// bound on that axis it is set to the bound and that velocity component
    /// is negated. A position resting exactly on an edge is left alone.
    pub fn confine(&self, position: &mut Vec2, velocity: &mut Vec2) -> BoundaryContact {
        let mut contact = BoundaryContact::default();
        if let Some(x) = pin(position.x, self.min.x, self.max.x) {
            position.x = x;
            velocity.x = -velocity.x;
            contact.x = true;
        }
        if let Some(y) = pin(position.y, self.min.y, self.max.y) {
            position.y = y;
            velocity.y = -velocity.y;
            contact.y = true;
        }
        contact
    }
}

/// Returns the bound `value` crossed, if any.
fn pin(value: f32, lower: f32, upper: f32) -> Option<f32> {
    if value < lower {
        Some(lower)
    } else if value > upper {
        Some(upper)
    } else {
        None
    }
}
