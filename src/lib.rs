#![cfg_attr(docsrs, feature(doc_cfg))]
//! Floating item motion: drifting, turning and bobbing in place.
//!
//! Each item wanders between goals chosen around the point it was activated
//! at, turns towards random orientations and bobs along a vertical axis. The
//! motion core is engine-agnostic and talks to its environment through
//! [`ItemHost`]; [`FloatingItemPlugin`] runs it inside a Bevy `App`.
pub mod arrival;
pub mod config;
pub mod constants;
pub mod debug;
pub mod host;
pub mod integrators;
pub mod interp;
pub mod item;
pub mod logging;
pub mod motion;
pub mod numeric;
pub mod oscillation;
pub mod oscillator;
pub mod plugin;
pub mod spawn;
pub mod targeting;
pub mod tuning;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, ItemSettings, MovementPolicy, RotationPolicy, TuningRanges};
pub use debug::{DebugOverlay, DebugReport, DebugSink, NoDebug};
pub use host::{ItemHost, SimHost};
pub use item::{FloatingItem, FrameOutcome, ItemMotion};
pub use logging::init as init_logging;
pub use motion::{MotionPhase, MotionState};
pub use plugin::{FloatingItemPlugin, ItemRng, PluginSettings, TransformHost};
pub use spawn::{spawn_item, spawn_item_row, ItemSpawnError};
pub use targeting::TargetMode;
pub use tuning::{ItemColor, ItemTuning};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use drift::prelude::*;
    //! ```

    pub use crate::ItemHost;
    pub use crate::ItemSettings;
    pub use crate::MotionPhase;
    pub use crate::NoDebug;
    pub use crate::SimHost;
    pub use crate::TargetMode;
    pub use crate::{FloatingItem, ItemMotion, ItemTuning};
    pub use crate::{FloatingItemPlugin, PluginSettings};
    pub use crate::{MovementPolicy, RotationPolicy};
}
