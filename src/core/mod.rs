//! Core-Geometrie-Engine: Segmente, Schnittpunkt-Erkennung, Kollaps-Animation.

pub mod collapse;
/// Reine Geometrie ohne Zustand
///
/// - LineEquation: implizite Gerade `a·x + b·y + c = 0`
/// - BoundingBox: achsenparalleles Rechteck eines Segments
pub mod geometry;
pub mod intersection;
pub mod segment;
pub mod segment_store;

pub use collapse::{
    collapse_segment, CollapseAnimator, CollapseConfig, CollapseError, CollapseState,
    CollapseTick,
};
pub use geometry::{BoundingBox, LineEquation, Point};
pub use intersection::{detect, IntersectionPoint, IntersectionReport};
pub use segment::Segment;
pub use segment_store::{DrawingError, DrawingState, SegmentStore};
