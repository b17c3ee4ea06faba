//! Tag → node builder table.
//!
//! Each node kind reads its fields from an [`Args`] in declaration order. A
//! field is matched by name first, then by position; a node field that is
//! absent from the arguments is read from the term's brace block instead, so
//! `Using(title) { Text }` and `Using(title, Text)` build the same node.

use std::collections::VecDeque;
use std::time::Duration;

use super::term::{Arg, Term, TermKind};
use crate::error::{ParseError, ParseResult, SourcePos};
use crate::input::KeyEvent;
use crate::layout::{Placement, Side};
use crate::node::{
    Button, Chain, Fill, Focusable, FocusableKeys, Frame, Height, Horizontal, Icons, If, IfNot, KeyHandler,
    KeybindingHandler, Label, List, ListDirection, Margin, Margins, MaxHeight, MaxWidth, MouseOver, Node, Paragraph,
    Position, ScrollButton, Scrollable, Scroller, Slider, Text, Texture, Tooltip, Using, Vertical, Width,
};
use crate::render::TextureFlip;
use crate::style::{Color, Font};

/// Marks the child of a `Vertical` or `Horizontal` block that stretches.
pub(crate) const STRETCH: &str = "Stretch";

type Build = fn(&mut Args<'_>) -> ParseResult<Node>;

const REGISTRY: &[(&str, Build)] = &[
    ("Texture", texture),
    ("Fill", fill),
    ("Frame", frame),
    ("Text", text),
    ("Label", label),
    ("Paragraph", paragraph),
    ("Icons", icons),
    ("Margins", margins),
    ("Margin", margin),
    ("Position", position),
    ("Width", width),
    ("Height", height),
    ("MaxWidth", max_width),
    ("MaxHeight", max_height),
    ("Chain", chain_node),
    ("Vertical", vertical),
    ("Horizontal", horizontal),
    ("List", list),
    ("Using", using),
    ("If", if_node),
    ("IfNot", if_not),
    ("Button", button),
    ("Focusable", focusable),
    ("FocusableKeys", focusable_keys),
    ("MouseOver", mouse_over),
    ("KeyHandler", key_handler),
    ("KeybindingHandler", keybinding_handler),
    ("Scrollable", scrollable),
    ("Scroller", scroller),
    ("ScrollButton", scroll_button),
    ("Slider", slider),
    ("Tooltip", tooltip),
];

/// Builder registered for `tag`.
pub(crate) fn lookup(tag: &str) -> Option<Build> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, build)| *build)
}

/// Source text of a term, for error messages.
fn describe(term: &Term) -> String {
    match &term.kind {
        TermKind::Ident(name) | TermKind::Tagged { tag: name, .. } => name.clone(),
        TermKind::Number(value) => value.to_string(),
        TermKind::Str(text) => format!("{text:?}"),
        TermKind::Tuple(_) => "(".to_owned(),
        TermKind::Block(_) => "{".to_owned(),
    }
}

/// Builds the node a term describes.
pub(crate) fn build_node(term: &Term) -> ParseResult<Node> {
    match &term.kind {
        TermKind::Block(terms) => chain(terms),
        TermKind::Ident(tag) => build_tagged(tag, term.pos, &[], None),
        TermKind::Tagged { tag, args, block } => build_tagged(tag, term.pos, args, block.as_deref()),
        TermKind::Number(_) | TermKind::Str(_) | TermKind::Tuple(_) => Err(ParseError::UnexpectedToken {
            pos: term.pos,
            found: describe(term),
            expected: "a node",
        }),
    }
}

fn build_tagged(tag: &str, pos: SourcePos, args: &[Arg], block: Option<&[Term]>) -> ParseResult<Node> {
    let Some(build) = lookup(tag) else {
        tracing::warn!(tag, %pos, "unknown node tag, building a chain of its block");
        return chain(block.unwrap_or_default());
    };
    let mut args = Args::new(tag, pos, args, block);
    let node = build(&mut args)?;
    args.finish()?;
    Ok(node)
}

/// A chain of every term in `terms`.
pub(crate) fn chain(terms: &[Term]) -> ParseResult<Node> {
    let elems = terms.iter().map(build_node).collect::<ParseResult<_>>()?;
    Ok(Node::from(Chain { elems }))
}

/// Fields of one node literal, consumed as the builder reads them.
pub(crate) struct Args<'t> {
    tag: &'t str,
    pos: SourcePos,
    positional: VecDeque<&'t Term>,
    named: Vec<(&'t str, &'t Arg)>,
    block: Option<&'t [Term]>,
}

impl<'t> Args<'t> {
    fn new(tag: &'t str, pos: SourcePos, args: &'t [Arg], block: Option<&'t [Term]>) -> Self {
        let mut positional = VecDeque::new();
        let mut named = Vec::new();
        for arg in args {
            match &arg.name {
                Some(name) => named.push((name.as_str(), arg)),
                None => positional.push_back(&arg.value),
            }
        }
        Self {
            tag,
            pos,
            positional,
            named,
            block,
        }
    }

    fn take(&mut self, field: &str) -> Option<&'t Term> {
        match self.named.iter().position(|(name, _)| *name == field) {
            Some(index) => {
                let (_, arg) = self.named.remove(index);
                Some(&arg.value)
            }
            None => self.positional.pop_front(),
        }
    }

    fn missing(&self, field: &'static str) -> ParseError {
        ParseError::MissingField {
            pos: self.pos,
            tag: self.tag.to_owned(),
            field,
        }
    }

    fn invalid(&self, term: &Term, field: &'static str, expected: &'static str) -> ParseError {
        ParseError::InvalidValue {
            pos: term.pos,
            tag: self.tag.to_owned(),
            field,
            expected,
        }
    }

    fn raw_number(&self, term: &Term, field: &'static str) -> ParseResult<f64> {
        match term.kind {
            TermKind::Number(value) => Ok(value),
            _ => Err(self.invalid(term, field, "a number")),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn opt_number(&mut self, field: &'static str) -> ParseResult<Option<f32>> {
        self.take(field)
            .map(|term| self.raw_number(term, field).map(|value| value as f32))
            .transpose()
    }

    fn number(&mut self, field: &'static str) -> ParseResult<f32> {
        self.opt_number(field)?.ok_or_else(|| self.missing(field))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn opt_count(&mut self, field: &'static str) -> ParseResult<Option<u64>> {
        let Some(term) = self.take(field) else {
            return Ok(None);
        };
        match self.raw_number(term, field)? {
            value if value >= 0.0 && value.fract() == 0.0 => Ok(Some(value as u64)),
            _ => Err(self.invalid(term, field, "a whole number")),
        }
    }

    fn opt_name(&mut self, field: &'static str) -> ParseResult<Option<String>> {
        self.take(field)
            .map(|term| {
                term.as_name()
                    .map(str::to_owned)
                    .ok_or_else(|| self.invalid(term, field, "a name or string"))
            })
            .transpose()
    }

    fn name(&mut self, field: &'static str) -> ParseResult<String> {
        self.opt_name(field)?.ok_or_else(|| self.missing(field))
    }

    /// A value named by an identifier, looked up with `parse`.
    fn opt_value<T>(
        &mut self,
        field: &'static str,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> ParseResult<Option<T>> {
        self.take(field)
            .map(|term| term.as_name().and_then(&parse).ok_or_else(|| self.invalid(term, field, expected)))
            .transpose()
    }

    fn value<T>(
        &mut self,
        field: &'static str,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> ParseResult<T> {
        self.opt_value(field, expected, parse)?
            .ok_or_else(|| self.missing(field))
    }

    fn flag(&mut self, field: &'static str) -> ParseResult<bool> {
        let parse = |name: &str| match name {
            "TRUE" | "true" => Some(true),
            "FALSE" | "false" => Some(false),
            _ => None,
        };
        Ok(self.opt_value(field, "TRUE or FALSE", parse)?.unwrap_or(false))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn color(&mut self, field: &'static str) -> ParseResult<Option<Color>> {
        let Some(term) = self.take(field) else {
            return Ok(None);
        };
        let invalid = || self.invalid(term, field, "a color name or (r, g, b[, a])");
        match &term.kind {
            TermKind::Ident(name) => Color::from_name(name).map(Some).ok_or_else(invalid),
            TermKind::Tuple(parts) if (3..=4).contains(&parts.len()) => {
                let mut channels = [u8::MAX; 4];
                for (channel, part) in channels.iter_mut().zip(parts) {
                    *channel = match part.value.kind {
                        TermKind::Number(value) if (0.0..=255.0).contains(&value) && part.name.is_none() => {
                            value as u8
                        }
                        _ => return Err(invalid()),
                    };
                }
                let [r, g, b, a] = channels;
                Ok(Some(Color::rgba8(r, g, b, a)))
            }
            _ => Err(invalid()),
        }
    }

    fn color_or(&mut self, field: &'static str, default: Color) -> ParseResult<Color> {
        Ok(self.color(field)?.unwrap_or(default))
    }

    /// A child node; the brace block stands in for a missing argument.
    fn node(&mut self, field: &'static str) -> ParseResult<Box<Node>> {
        let node = match self.take(field) {
            Some(term) => build_node(term)?,
            None => match self.block.take() {
                Some([single]) => build_node(single)?,
                Some(terms) => chain(terms)?,
                None => return Err(self.missing(field)),
            },
        };
        Ok(Box::new(node))
    }

    /// Terms of the brace block; empty when there is none.
    fn children(&mut self) -> &'t [Term] {
        self.block.take().unwrap_or_default()
    }

    /// Rejects whatever the builder did not read.
    fn finish(self) -> ParseResult<()> {
        if let Some((name, _)) = self.named.first() {
            return Err(ParseError::UnknownField {
                pos: self.pos,
                tag: self.tag.to_owned(),
                field: (*name).to_owned(),
            });
        }
        let block_left = self.block.is_some_and(|terms| !terms.is_empty());
        if !self.positional.is_empty() || block_left {
            return Err(ParseError::TooManyArguments {
                pos: self.pos,
                tag: self.tag.to_owned(),
            });
        }
        Ok(())
    }
}

fn texture(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Texture {
        id: args.name("id")?,
        flip: args
            .opt_value("flip", "a flip mode", TextureFlip::from_name)?
            .unwrap_or_default(),
    }))
}

fn fill(args: &mut Args<'_>) -> ParseResult<Node> {
    let color = args.color("color")?.ok_or_else(|| args.missing("color"))?;
    Ok(Node::from(Fill { color }))
}

fn frame(args: &mut Args<'_>) -> ParseResult<Node> {
    let width = args.number("width")?;
    let color = args.color("color")?.ok_or_else(|| args.missing("color"))?;
    Ok(Node::from(Frame { width, color }))
}

fn text(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Text {
        size: args.opt_number("size")?,
        color: args.color_or("color", Color::WHITE)?,
        font: args.opt_value("font", "a font", Font::from_name)?.unwrap_or_default(),
    }))
}

fn label(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Label {
        text: args.name("text")?,
        size: args.opt_number("size")?,
        color: args.color_or("color", Color::WHITE)?,
        font: args.opt_value("font", "a font", Font::from_name)?.unwrap_or_default(),
    }))
}

fn paragraph(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Paragraph {
        width: args.number("width")?,
        size: args.opt_number("size")?,
        color: args.color_or("color", Color::WHITE)?,
    }))
}

fn icons(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Icons {
        zoom: args.opt_number("zoom")?.unwrap_or(1.0),
    }))
}

fn margins(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Margins {
        width: args.number("width")?,
        inside: args.node("inside")?,
    }))
}

fn margin(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Margin {
        side: args.value("side", "a side", Side::from_name)?,
        width: args.number("width")?,
        elem: args.node("elem")?,
    }))
}

fn position(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Position {
        position: args.value("position", "a position", Placement::from_name)?,
        elem: args.node("elem")?,
        clip: args.flag("clip")?,
    }))
}

fn width(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Width {
        value: args.number("value")?,
        elem: args.node("elem")?,
    }))
}

fn height(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Height {
        value: args.number("value")?,
        elem: args.node("elem")?,
    }))
}

fn max_width(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(MaxWidth {
        value: args.number("value")?,
        elem: args.node("elem")?,
    }))
}

fn max_height(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(MaxHeight {
        value: args.number("value")?,
        elem: args.node("elem")?,
    }))
}

fn chain_node(args: &mut Args<'_>) -> ParseResult<Node> {
    chain(args.children())
}

/// Children of a stacked container and the index of the one that stretches.
///
/// Without a `Stretch` marker the last child stretches.
fn stacked(args: &mut Args<'_>) -> ParseResult<(Vec<Node>, Option<usize>)> {
    let mut elems = Vec::new();
    let mut stretched = None;
    for term in args.children() {
        if !term.is_ident(STRETCH) {
            elems.push(build_node(term)?);
            continue;
        }
        if stretched.is_some() {
            return Err(ParseError::UnexpectedToken {
                pos: term.pos,
                found: STRETCH.to_owned(),
                expected: "a node",
            });
        }
        stretched = Some(elems.len());
    }
    if stretched.is_some_and(|index| index == elems.len()) {
        return Err(ParseError::UnexpectedEnd {
            expected: "a node after Stretch",
        });
    }
    let stretched = stretched.or_else(|| elems.len().checked_sub(1));
    Ok((elems, stretched))
}

fn vertical(args: &mut Args<'_>) -> ParseResult<Node> {
    let (elems, stretched) = stacked(args)?;
    Ok(Node::from(Vertical { elems, stretched }))
}

fn horizontal(args: &mut Args<'_>) -> ParseResult<Node> {
    let (elems, stretched) = stacked(args)?;
    Ok(Node::from(Horizontal { elems, stretched }))
}

fn list(args: &mut Args<'_>) -> ParseResult<Node> {
    let direction = args.value("direction", "a list direction", |name| match name {
        "VERTICAL" | "HORIZONTAL" | "HORIZONTAL_WRAP" => Some(name.to_owned()),
        _ => None,
    })?;
    let elem = args.node("elem")?;
    let max_width = args.opt_number("max_width")?;
    let direction = match direction.as_str() {
        "VERTICAL" => ListDirection::Vertical,
        "HORIZONTAL" => ListDirection::Horizontal,
        _ => ListDirection::HorizontalWrap {
            max_width: max_width.ok_or_else(|| args.missing("max_width"))?,
        },
    };
    Ok(Node::from(List { direction, elem }))
}

fn using(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Using {
        key: args.name("key")?,
        elem: args.node("elem")?,
    }))
}

fn if_node(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(If {
        key: args.name("key")?,
        elem: args.node("elem")?,
    }))
}

fn if_not(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(IfNot {
        key: args.name("key")?,
        elem: args.node("elem")?,
    }))
}

fn button(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Button {
        sound: args.opt_name("sound")?,
    }))
}

fn focusable(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Focusable {
        elem: args.node("elem")?,
    }))
}

fn focusable_keys(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(FocusableKeys {
        elem: args.node("elem")?,
    }))
}

fn mouse_over(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(MouseOver {
        elem: args.node("elem")?,
    }))
}

fn key_handler(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(KeyHandler {
        key: args.value("key", "a key", KeyEvent::parse)?,
        elem: args.node("elem")?,
    }))
}

fn keybinding_handler(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(KeybindingHandler {
        binding: args.name("binding")?,
        elem: args.node("elem")?,
    }))
}

fn scrollable(args: &mut Args<'_>) -> ParseResult<Node> {
    let scrollbar = args.node("scrollbar")?;
    let elem = args.node("elem")?;
    let group = args.opt_count("group")?.unwrap_or(0);
    Ok(Node::from(Scrollable {
        scrollbar,
        elem,
        group: usize::try_from(group).unwrap_or(usize::MAX),
    }))
}

fn scroller(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Scroller {
        slider: args.node("slider")?,
    }))
}

fn scroll_button(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(ScrollButton {
        direction: args.number("direction")?,
    }))
}

fn slider(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Slider {
        slider: args.node("slider")?,
        continuous: args.flag("continuous")?,
    }))
}

fn tooltip(args: &mut Args<'_>) -> ParseResult<Node> {
    Ok(Node::from(Tooltip {
        tooltip: args.node("tooltip")?,
        elem: args.node("elem")?,
        delay: args.opt_count("delay")?.map(Duration::from_millis),
    }))
}
