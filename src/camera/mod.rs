//! View/camera state: the isometric viewport and the perspective rig.
//!
//! [`ViewportState`] owns the editor's pan/zoom state and the fixed
//! isometric basis; it is the only component with non-trivial transform
//! math. [`CameraRig`] is the yaw/pitch free camera used by the
//! perspective fallback projection.

mod rig;
mod viewport;

pub use rig::{CameraRig, MoveDirection};
pub use viewport::{ViewportState, MIN_ZOOM, ORTHO_FAR, ORTHO_NEAR};
