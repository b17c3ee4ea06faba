//! Nodes that pick what data their child sees, or whether it exists at all.
//!
//! `If` and `IfNot` make their subtree conditional on the data. Focus,
//! tooltip and slider state of nodes inside (and after) such a subtree is
//! only stable while the condition stays the same.

use std::borrow::Cow;

use super::{composite_element, Composite, Node, Slot, CONTAINER_PLACEHOLDER};
use crate::context::Context;
use crate::data::UiData;
use crate::layout::{Rect, Vec2};
use crate::state::UiState;

/// Binds its child to one field of the record it receives.
///
/// The engine's own handles (`EXIT`, `HIGHLIGHT_NEXT`, `HIGHLIGHT_PREVIOUS`)
/// resolve before the record is consulted. A missing field hides the child.
#[derive(Debug)]
pub struct Using {
    /// Record field.
    pub key: String,
    /// Node bound to the field.
    pub elem: Box<Node>,
}

impl Using {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        if let Some(pseudo) = UiState::pseudo_data(&self.key) {
            return self.elem.get_size(&pseudo, ctx);
        }
        match data.as_record() {
            Ok(record) => record
                .get(&self.key)
                .map_or(Vec2::ZERO, |value| self.elem.get_size(value, ctx)),
            Err(_) => CONTAINER_PLACEHOLDER,
        }
    }
}

impl Composite for Using {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        if let Some(pseudo) = UiState::pseudo_data(&self.key) {
            return vec![Slot::Child {
                node: &self.elem,
                data: Cow::Owned(pseudo),
                area,
            }];
        }
        match data.as_record() {
            Ok(record) => record
                .get(&self.key)
                .map(|value| Slot::child(&self.elem, value, area))
                .into_iter()
                .collect(),
            Err(error) => vec![Slot::Placeholder { error, area }],
        }
    }
}

/// Shows its child only when the record has a field.
#[derive(Debug)]
pub struct If {
    /// Record field tested.
    pub key: String,
    /// Conditional node, bound to the same record.
    pub elem: Box<Node>,
}

/// Shows its child only when the record lacks a field.
#[derive(Debug)]
pub struct IfNot {
    /// Record field tested.
    pub key: String,
    /// Conditional node, bound to the same record.
    pub elem: Box<Node>,
}

fn conditional_size(elem: &Node, key: &str, expected: bool, data: &UiData, ctx: &Context<'_>) -> Vec2 {
    match data.as_record() {
        Ok(record) if record.contains_key(key) == expected => elem.get_size(data, ctx),
        Ok(_) => Vec2::ZERO,
        Err(_) => CONTAINER_PLACEHOLDER,
    }
}

fn conditional_slots<'a>(elem: &'a Node, key: &str, expected: bool, data: &'a UiData, area: Rect) -> Vec<Slot<'a>> {
    match data.as_record() {
        Ok(record) if record.contains_key(key) == expected => vec![Slot::child(elem, data, area)],
        Ok(_) => Vec::new(),
        Err(error) => vec![Slot::Placeholder { error, area }],
    }
}

impl If {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        conditional_size(&self.elem, &self.key, true, data, ctx)
    }
}

impl Composite for If {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        conditional_slots(&self.elem, &self.key, true, data, area)
    }
}

impl IfNot {
    fn size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        conditional_size(&self.elem, &self.key, false, data, ctx)
    }
}

impl Composite for IfNot {
    fn slots<'a>(&'a self, data: &'a UiData, _ctx: &Context<'_>, area: Rect) -> Vec<Slot<'a>> {
        conditional_slots(&self.elem, &self.key, false, data, area)
    }
}

composite_element!(Using, If, IfNot);
