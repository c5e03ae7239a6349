//! Rad-Kern: Geometrie, Spin-Zustandsmaschine und Hit-Test.
//!
//! Alle drei Komponenten sind reine Funktionen bzw. zeitgetriebene
//! Zustandsmaschinen ohne Display-, Timer- oder I/O-Abhängigkeiten.

pub mod angles;
pub mod geometry;
pub mod spin;

pub use geometry::{render_frame, HubMarker, Segment, WheelFrame};
pub use hit_test::segment_at;
pub use spin::{SpinController, SpinJob, SpinRejection, SpinTick};
