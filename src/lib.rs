//! Input device arbitration and spatial navigation for a 10-foot game shell.
//!
//! Keyboard, mouse and gamepad signals are normalized into one navigation
//! vocabulary and routed through a focus state machine that drives a hero
//! panel, a multi-row game carousel, a side menu and stacked overlays.

pub mod config;
pub mod focus;
pub mod input;
pub mod library;
pub mod listeners;
pub mod nav;
pub mod overlay;
pub mod paths;
pub mod shell;

pub use config::{OverlayDismissFocus, PadFilterType, ShellConfig};
pub use focus::{FocusArea, FocusEngine, ShellCallbacks};
pub use input::{ControllerBrand, DeviceArbiter, InputDevice};
pub use library::{CarouselPartition, Game, LibraryFilter};
pub use nav::{NavKind, NavigationBridge, NavigationEvent};
pub use overlay::{BlockingModal, OverlayCoordinator, OverlayId};
