#![forbid(unsafe_code)]

//! Segmented PIN-code entry control.
//!
//! A logical fixed-length code (say 4 digits) presented as N
//! single-character cells, mirrored into one sync field holding the
//! concatenated value. The interesting part is the navigation and
//! completion state machine: per-cell focus movement, per-cell
//! single-character capacity, the touch-vs-desktop divergence (touch
//! hosts get a single merged cell), and completion detection.
//!
//! The control is renderer-agnostic. It operates on an explicit cell
//! model and hands the rendering layer an ordered list of
//! [`ViewCommand`]s after each event; how cells are drawn, styled, or
//! laid out is the host's business.
//!
//! ```
//! use pincode_core::{Environment, Event, KeyCode, KeyEvent};
//! use pincode_input::{PinCode, PinCodeConfig};
//!
//! let mut control = PinCode::new(PinCodeConfig::new(), Environment::desktop()).unwrap();
//! control.on_complete(|notice, _region| println!("entered: {}", notice.value));
//!
//! for c in ['1', '2', '3', '4'] {
//!     let commands = control.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c))));
//!     // apply `commands` to the rendering layer
//!     let _ = commands;
//! }
//! assert_eq!(control.value(), "1234");
//! assert!(control.is_complete());
//! ```

pub mod cell;
pub mod config;
pub mod guard;
pub mod hooks;
mod machine;
pub mod sync;
pub mod view;
pub mod widget;

pub use cell::{Cell, CellBank, CellRole};
pub use config::{ConfigError, PinCodeConfig};
pub use guard::{AutofillGuard, GuardFieldKind};
pub use hooks::{ChangeNotice, CompleteNotice, ErrorRegion};
pub use sync::SyncField;
pub use view::ViewCommand;
pub use widget::PinCode;

pub use pincode_core::{Environment, Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
