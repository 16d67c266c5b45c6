//! Screen-independent state machines.
//!
//! Each flow enumerates its states and exposes one method per transition.
//! They know nothing about how input is collected; the CLI drives them with
//! whatever the user typed.

pub mod browse;
pub mod login;
pub mod rotation;
pub mod setup;

pub use browse::{BrowseFlow, BrowseState};
pub use login::{LoginFlow, LoginState};
pub use rotation::{RotationFlow, RotationState};
pub use setup::{SetupFlow, SetupState};
