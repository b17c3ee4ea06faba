//! Renderer capability and a headless command-recording implementation.
//!
//! The engine never talks to a GPU. Everything it draws or measures goes
//! through [`Renderer`]; hosts plug in their own backend. [`CommandRenderer`]
//! records draw calls as [`RenderCommand`]s for headless hosts and tests.

use std::collections::HashMap;

use crate::layout::{Rect, Vec2};
use crate::style::{Color, Font, TextStyle};

/// Mirroring applied to a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFlip {
    /// Drawn as stored.
    #[default]
    None,
    /// Mirrored horizontally.
    FlipX,
    /// Mirrored vertically.
    FlipY,
    /// Mirrored on both axes.
    FlipXY,
}

impl TextureFlip {
    /// Parses a flip mode from its source-format name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NONE" => Some(Self::None),
            "FLIP_X" => Some(Self::FlipX),
            "FLIP_Y" => Some(Self::FlipY),
            "FLIP_XY" => Some(Self::FlipXY),
            _ => None,
        }
    }
}

/// Drawing and measuring capability consumed by the engine.
///
/// Measuring methods take `&self`: size queries happen during layout and must
/// not have observable side effects.
pub trait Renderer {
    /// Fills a rectangle.
    fn draw_rect(&mut self, bounds: Rect, color: Color);

    /// Strokes the inside edge of a rectangle.
    fn draw_outline(&mut self, bounds: Rect, width: f32, color: Color);

    /// Draws a single line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);

    /// Draws a whole texture stretched over `bounds`.
    fn draw_sprite(&mut self, texture: &str, bounds: Rect, flip: TextureFlip);

    /// Draws one icon token from the icon atlas at `pos`, `size` pixels square.
    fn draw_icon(&mut self, token: &str, pos: Vec2, size: f32);

    /// Native size of a texture.
    fn texture_size(&self, texture: &str) -> Vec2;

    /// Width of `text` when drawn with `font` at `size`.
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32;

    /// Breaks `text` into lines no wider than `width`.
    ///
    /// The default implementation wraps greedily on whitespace using
    /// [`Renderer::text_width`]; a single word wider than `width` gets a line
    /// of its own.
    fn wrap_text(&self, text: &str, font: Font, size: f32, width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                if line.is_empty() {
                    line.push_str(word);
                    continue;
                }
                let candidate = format!("{line} {word}");
                if self.text_width(&candidate, font, size) <= width {
                    line = candidate;
                } else {
                    lines.push(std::mem::replace(&mut line, word.to_owned()));
                }
            }
            lines.push(line);
        }
        lines
    }

    /// Starts drawing into the overlay layer, painted after everything else.
    fn push_top_layer(&mut self);

    /// Returns to the layer that was active before the matching push.
    fn pop_top_layer(&mut self);

    /// Restricts drawing to `bounds` (intersected with the current clip).
    fn push_clip(&mut self, bounds: Rect);

    /// Removes the most recent clip.
    fn pop_clip(&mut self);

    /// Size of the drawable surface.
    fn screen_size(&self) -> Vec2;

    /// Current pointer position.
    fn pointer_pos(&self) -> Vec2;
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline.
    Outline {
        /// Bounds.
        bounds: Rect,
        /// Stroke width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// Top-left position.
        pos: Vec2,
        /// Font, size and color.
        style: TextStyle,
    },
    /// Whole texture.
    Sprite {
        /// Texture id.
        texture: String,
        /// Destination bounds.
        bounds: Rect,
        /// Mirroring.
        flip: TextureFlip,
    },
    /// Icon atlas entry.
    Icon {
        /// Icon token.
        token: String,
        /// Top-left position.
        pos: Vec2,
        /// Edge length.
        size: f32,
    },
    /// Scissor rect (clip following commands).
    PushClip {
        /// Effective clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// Headless renderer that records commands instead of drawing.
///
/// Text is measured with a fixed advance of `size * advance_ratio` per
/// character. Overlay commands are kept apart and appended after the base
/// layer by [`CommandRenderer::end_frame`].
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    /// Base layer commands of the frame.
    commands: Vec<RenderCommand>,
    /// Overlay commands of the frame.
    overlay: Vec<RenderCommand>,
    /// Nesting depth of `push_top_layer`.
    overlay_depth: usize,
    /// Clip stack.
    clip_stack: Vec<Rect>,
    /// Known texture sizes.
    textures: HashMap<String, Vec2>,
    screen: Vec2,
    pointer: Vec2,
    advance_ratio: f32,
}

impl CommandRenderer {
    /// Default per-character advance as a fraction of the point size.
    pub const DEFAULT_ADVANCE_RATIO: f32 = 0.5;

    /// Creates a renderer for a screen of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::with_capacity(256),
            overlay: Vec::new(),
            overlay_depth: 0,
            clip_stack: Vec::with_capacity(16),
            textures: HashMap::new(),
            screen: Vec2::new(width, height),
            pointer: Vec2::NOWHERE,
            advance_ratio: Self::DEFAULT_ADVANCE_RATIO,
        }
    }

    /// Registers the native size of a texture.
    pub fn add_texture(&mut self, id: impl Into<String>, size: Vec2) {
        self.textures.insert(id.into(), size);
    }

    /// Moves the simulated pointer.
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Changes the simulated screen size.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen = Vec2::new(width, height);
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.overlay.clear();
        self.overlay_depth = 0;
        self.clip_stack.clear();
    }

    /// Ends the frame and returns its commands, overlay last.
    pub fn end_frame(&mut self) -> Vec<RenderCommand> {
        let mut frame = std::mem::take(&mut self.commands);
        frame.append(&mut self.overlay);
        frame
    }

    /// Commands recorded so far in the base layer.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Commands recorded so far in the overlay layer.
    #[must_use]
    pub fn overlay(&self) -> &[RenderCommand] {
        &self.overlay
    }

    /// Every text string recorded so far, base layer first.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .chain(&self.overlay)
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    fn push(&mut self, command: RenderCommand) {
        if self.overlay_depth > 0 {
            self.overlay.push(command);
        } else {
            self.commands.push(command);
        }
    }
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Renderer for CommandRenderer {
    fn draw_rect(&mut self, bounds: Rect, color: Color) {
        self.push(RenderCommand::Rect { bounds, color });
    }

    fn draw_outline(&mut self, bounds: Rect, width: f32, color: Color) {
        self.push(RenderCommand::Outline { bounds, width, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.push(RenderCommand::Text {
            text: text.to_owned(),
            pos,
            style,
        });
    }

    fn draw_sprite(&mut self, texture: &str, bounds: Rect, flip: TextureFlip) {
        self.push(RenderCommand::Sprite {
            texture: texture.to_owned(),
            bounds,
            flip,
        });
    }

    fn draw_icon(&mut self, token: &str, pos: Vec2, size: f32) {
        self.push(RenderCommand::Icon {
            token: token.to_owned(),
            pos,
            size,
        });
    }

    fn texture_size(&self, texture: &str) -> Vec2 {
        self.textures.get(texture).copied().unwrap_or(Vec2::ZERO)
    }

    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, _font: Font, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }

    fn push_top_layer(&mut self) {
        self.overlay_depth += 1;
    }

    fn pop_top_layer(&mut self) {
        self.overlay_depth = self.overlay_depth.saturating_sub(1);
    }

    fn push_clip(&mut self, bounds: Rect) {
        // Intersect with current clip if any
        let actual_clip = if let Some(current) = self.clip_stack.last() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.push(RenderCommand::PushClip { bounds: actual_clip });
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.push(RenderCommand::PopClip);
    }

    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn pointer_pos(&self) -> Vec2 {
        self.pointer
    }
}
