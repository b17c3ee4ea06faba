//! Dynamic data bound into the node tree at render/dispatch time.
//!
//! Nodes are immutable; everything that changes from frame to frame reaches
//! them as a [`UiData`]. A node only ever reads the alternative its kind
//! expects, through the matching accessor. A mismatch comes back as
//! [`DataMismatch`] and is drawn as a red placeholder instead of failing.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::DataMismatch;
use crate::state::UiState;

/// Which alternative a [`UiData`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// [`UiData::Label`].
    Label,
    /// [`UiData::IconSet`].
    IconSet,
    /// [`UiData::Callback`].
    Callback,
    /// [`UiData::Record`].
    Record,
    /// [`UiData::List`].
    List,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Label => "a label",
            Self::IconSet => "an icon set",
            Self::Callback => "a callback",
            Self::Record => "a record",
            Self::List => "a list",
        })
    }
}

/// Named sub-slots of a record. Key order carries no meaning.
pub type Record = BTreeMap<String, UiData>;

/// The value bound to a node.
#[derive(Clone, Debug)]
pub enum UiData {
    /// Display text.
    Label(String),
    /// Ordered icon tokens, drawn on top of each other.
    IconSet(Vec<String>),
    /// An action to run when the node fires.
    Callback(Callback),
    /// Named sub-values, selected with `Using` and tested with `If`.
    Record(Record),
    /// Repeated values; a `List` node instantiates its child once per element.
    List(Vec<UiData>),
}

impl Default for UiData {
    fn default() -> Self {
        Self::Record(Record::new())
    }
}

impl UiData {
    /// A label.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// An icon set.
    #[must_use]
    pub fn icons<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::IconSet(tokens.into_iter().map(Into::into).collect())
    }

    /// A callback returning whether the screen should close.
    #[must_use]
    pub fn callback(fun: impl Fn() -> bool + 'static) -> Self {
        Self::Callback(Callback::new(fun))
    }

    /// A record built from key/value pairs.
    #[must_use]
    pub fn record<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, UiData)>,
        K: Into<String>,
    {
        Self::Record(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A list.
    #[must_use]
    pub fn list(elems: impl IntoIterator<Item = UiData>) -> Self {
        Self::List(elems.into_iter().collect())
    }

    /// The alternative held.
    #[must_use]
    pub const fn kind(&self) -> DataKind {
        match self {
            Self::Label(_) => DataKind::Label,
            Self::IconSet(_) => DataKind::IconSet,
            Self::Callback(_) => DataKind::Callback,
            Self::Record(_) => DataKind::Record,
            Self::List(_) => DataKind::List,
        }
    }

    fn mismatch(&self, expected: DataKind) -> DataMismatch {
        DataMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Reads a label.
    ///
    /// # Errors
    ///
    /// [`DataMismatch`] if this is not a label.
    pub fn as_label(&self) -> Result<&str, DataMismatch> {
        match self {
            Self::Label(text) => Ok(text),
            _ => Err(self.mismatch(DataKind::Label)),
        }
    }

    /// Reads an icon set.
    ///
    /// # Errors
    ///
    /// [`DataMismatch`] if this is not an icon set.
    pub fn as_icons(&self) -> Result<&[String], DataMismatch> {
        match self {
            Self::IconSet(tokens) => Ok(tokens),
            _ => Err(self.mismatch(DataKind::IconSet)),
        }
    }

    /// Reads a callback.
    ///
    /// # Errors
    ///
    /// [`DataMismatch`] if this is not a callback.
    pub fn as_callback(&self) -> Result<&Callback, DataMismatch> {
        match self {
            Self::Callback(callback) => Ok(callback),
            _ => Err(self.mismatch(DataKind::Callback)),
        }
    }

    /// Reads a record.
    ///
    /// # Errors
    ///
    /// [`DataMismatch`] if this is not a record.
    pub fn as_record(&self) -> Result<&Record, DataMismatch> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(self.mismatch(DataKind::Record)),
        }
    }

    /// Reads a list.
    ///
    /// # Errors
    ///
    /// [`DataMismatch`] if this is not a list.
    pub fn as_list(&self) -> Result<&[UiData], DataMismatch> {
        match self {
            Self::List(elems) => Ok(elems),
            _ => Err(self.mismatch(DataKind::List)),
        }
    }

    /// Reads the callback a node is about to fire.
    ///
    /// # Panics
    ///
    /// Panics if this is not a callback: the source and the code filling its
    /// data disagree about what the node is bound to.
    #[must_use]
    #[track_caller]
    pub fn expect_callback(&self, node: &str) -> &Callback {
        match self {
            Self::Callback(callback) => callback,
            other => panic!("{node} expects a callback, got {}", other.kind()),
        }
    }
}

impl From<&str> for UiData {
    fn from(text: &str) -> Self {
        Self::Label(text.to_owned())
    }
}

impl From<String> for UiData {
    fn from(text: String) -> Self {
        Self::Label(text)
    }
}

impl From<Callback> for UiData {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

impl From<Vec<UiData>> for UiData {
    fn from(elems: Vec<UiData>) -> Self {
        Self::List(elems)
    }
}

/// Callbacks the engine provides itself, bound through pseudo-data names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `EXIT`: closes the screen.
    Exit,
    /// `HIGHLIGHT_NEXT`: moves keyboard focus to the next focusable node.
    HighlightNext,
    /// `HIGHLIGHT_PREVIOUS`: moves keyboard focus to the previous focusable node.
    HighlightPrevious,
}

impl Builtin {
    /// Resolves a pseudo-data name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "EXIT" => Some(Self::Exit),
            "HIGHLIGHT_NEXT" => Some(Self::HighlightNext),
            "HIGHLIGHT_PREVIOUS" => Some(Self::HighlightPrevious),
            _ => None,
        }
    }
}

#[derive(Clone)]
enum CallbackFn {
    Plain(Rc<dyn Fn() -> bool>),
    Ratio { initial: f64, fun: Rc<dyn Fn(f64) -> bool> },
    Builtin(Builtin),
}

/// A zero-argument action supplied by the caller (or by the engine).
///
/// Its return value asks the host to close the screen. Slider callbacks also
/// carry a ratio argument and the slider's initial position.
#[derive(Clone)]
pub struct Callback(CallbackFn);

impl Callback {
    /// A plain callback.
    #[must_use]
    pub fn new(fun: impl Fn() -> bool + 'static) -> Self {
        Self(CallbackFn::Plain(Rc::new(fun)))
    }

    /// A slider callback receiving the new ratio, starting at `initial`.
    #[must_use]
    pub fn slider(initial: f64, fun: impl Fn(f64) -> bool + 'static) -> Self {
        Self(CallbackFn::Ratio {
            initial: initial.clamp(0.0, 1.0),
            fun: Rc::new(fun),
        })
    }

    /// An engine-provided callback.
    #[must_use]
    pub const fn builtin(builtin: Builtin) -> Self {
        Self(CallbackFn::Builtin(builtin))
    }

    /// The engine callback this stands for, if it is one.
    #[must_use]
    pub fn as_builtin(&self) -> Option<Builtin> {
        match &self.0 {
            CallbackFn::Builtin(builtin) => Some(*builtin),
            _ => None,
        }
    }

    /// Initial slider position; 0 for non-slider callbacks.
    #[must_use]
    pub fn initial_ratio(&self) -> f64 {
        match &self.0 {
            CallbackFn::Ratio { initial, .. } => *initial,
            _ => 0.0,
        }
    }

    /// Runs the callback. Slider callbacks receive their initial ratio.
    pub fn invoke(&self, state: &mut UiState) -> bool {
        match &self.0 {
            CallbackFn::Plain(fun) => fun(),
            CallbackFn::Ratio { initial, fun } => fun(*initial),
            CallbackFn::Builtin(builtin) => state.apply_builtin(*builtin),
        }
    }

    /// Runs the callback with a slider ratio. Non-slider callbacks ignore it.
    pub fn invoke_ratio(&self, ratio: f64, state: &mut UiState) -> bool {
        match &self.0 {
            CallbackFn::Ratio { fun, .. } => fun(ratio),
            _ => self.invoke(state),
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            CallbackFn::Plain(_) => f.write_str("Callback"),
            CallbackFn::Ratio { initial, .. } => write!(f, "Callback(slider @ {initial})"),
            CallbackFn::Builtin(builtin) => write!(f, "Callback({builtin:?})"),
        }
    }
}
