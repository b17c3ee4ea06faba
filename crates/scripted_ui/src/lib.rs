//! # ScriptedUI
//!
//! Declarative, data-driven interface engine. A screen is written as a tree
//! of node literals, parsed once, and then rendered and fed input every frame
//! against data that may change from one frame to the next.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI PIPELINE                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  Source → Tokens → Terms → Node tree                     │
//! │                               ↓                          │
//! │  Data + State → get_size (bottom-up) → render (top-down) │
//! │  Input event  → dispatch (top-down)  → Action → run      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - Nodes are immutable. Anything that survives a frame lives in
//!   [`UiState`](crate::UiState), keyed by scroll group or by structural
//!   counter.
//! - Dispatch never mutates. It returns at most one [`Action`] to run after
//!   the whole tree was visited.
//! - Data of the wrong shape draws a red placeholder. Only a missing callback
//!   is fatal.
//!
//! ## Example
//!
//! ```no_run
//! use scripted_ui::{build_tree, CommandRenderer, ScriptedUi, SystemClock, UiConfig, UiData};
//!
//! let root = build_tree("Using(title) { Text(size = 30) }")?;
//! let ui = ScriptedUi::new(root, UiConfig::default())?;
//! let mut state = ui.new_state();
//! let mut renderer = CommandRenderer::new(800.0, 600.0);
//! let data = UiData::record([("title", UiData::label("Options"))]);
//! ui.render(&data, &mut state, &mut renderer, &SystemClock::new());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod action;
pub mod capability;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod host;
pub mod input;
pub mod layout;
pub mod node;
pub mod parser;
pub mod render;
pub mod scroll;
pub mod state;
pub mod style;

pub use action::{merge, Action};
pub use capability::{Clock, KeybindingMap, KeybindingTable, ManualClock, NoSound, SoundPlayer, SystemClock};
pub use config::UiConfig;
pub use context::{Context, Counters};
pub use data::{Builtin, Callback, DataKind, Record, UiData};
pub use error::{ConfigError, ConfigResult, DataMismatch, ParseError, ParseResult, SourcePos};
pub use host::{dispatch, dispatch_in, render, ScriptedUi};
pub use input::{ButtonKind, Key, KeyEvent, Modifiers, Propagation, UiEvent, WheelEvent};
pub use layout::{Placement, Rect, Side, Vec2};
pub use node::Node;
pub use parser::build_tree;
pub use render::{CommandRenderer, RenderCommand, Renderer, TextureFlip};
pub use scroll::ScrollPosition;
pub use state::{ScrollGrab, SliderState, UiState};
pub use style::{Color, Font, TextStyle};
