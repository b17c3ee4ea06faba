//! Leaf nodes: sprites, fills, text and icons.

use super::{draw_mismatch, Element, LABEL_PLACEHOLDER};
use crate::context::Context;
use crate::data::UiData;
use crate::layout::{Rect, Vec2};
use crate::render::TextureFlip;
use crate::style::{Color, Font, TextStyle};

/// Draws a whole texture over its area. Sized to the texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Texture id.
    pub id: String,
    /// Mirroring.
    pub flip: TextureFlip,
}

impl Element for Texture {
    fn get_size(&self, _data: &UiData, ctx: &Context<'_>) -> Vec2 {
        ctx.renderer.texture_size(&self.id)
    }

    fn render(&self, _data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        ctx.renderer.draw_sprite(&self.id, area, self.flip);
    }
}

/// Fills its area with a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    /// Fill color.
    pub color: Color,
}

impl Element for Fill {
    fn render(&self, _data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        ctx.renderer.draw_rect(area, self.color);
    }
}

/// Strokes the edge of its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Stroke width.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
}

impl Element for Frame {
    fn render(&self, _data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        ctx.renderer.draw_outline(area, self.width, self.color);
    }
}

/// Draws the label bound to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Text {
    /// Point size; the configured text size when absent.
    pub size: Option<f32>,
    /// Text color.
    pub color: Color,
    /// Font family.
    pub font: Font,
}

impl Text {
    fn style(&self, ctx: &Context<'_>) -> TextStyle {
        TextStyle {
            font: self.font,
            size: self.size.unwrap_or(ctx.config.text_size),
            color: self.color,
        }
    }
}

impl Element for Text {
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        match data.as_label() {
            Ok(text) => {
                let style = self.style(ctx);
                Vec2::new(
                    ctx.renderer.text_width(text, style.font, style.size),
                    ctx.config.line_height,
                )
            }
            Err(_) => LABEL_PLACEHOLDER,
        }
    }

    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        match data.as_label() {
            Ok(text) => {
                let style = self.style(ctx);
                ctx.renderer.draw_text(text, area.top_left(), style);
            }
            Err(error) => draw_mismatch(ctx, error, area.top_left()),
        }
    }
}

/// Draws fixed text from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// The text.
    pub text: String,
    /// Point size; the configured text size when absent.
    pub size: Option<f32>,
    /// Text color.
    pub color: Color,
    /// Font family.
    pub font: Font,
}

impl Label {
    fn style(&self, ctx: &Context<'_>) -> TextStyle {
        TextStyle {
            font: self.font,
            size: self.size.unwrap_or(ctx.config.text_size),
            color: self.color,
        }
    }
}

impl Element for Label {
    fn get_size(&self, _data: &UiData, ctx: &Context<'_>) -> Vec2 {
        let style = self.style(ctx);
        Vec2::new(
            ctx.renderer.text_width(&self.text, style.font, style.size),
            ctx.config.line_height,
        )
    }

    fn render(&self, _data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let style = self.style(ctx);
        ctx.renderer.draw_text(&self.text, area.top_left(), style);
    }
}

/// Draws the bound label word-wrapped to a fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paragraph {
    /// Wrap width.
    pub width: f32,
    /// Point size; the configured text size when absent.
    pub size: Option<f32>,
    /// Text color.
    pub color: Color,
}

impl Paragraph {
    fn style(&self, ctx: &Context<'_>) -> TextStyle {
        TextStyle::new(self.size.unwrap_or(ctx.config.text_size), self.color)
    }

    fn line_height(&self, ctx: &Context<'_>) -> f32 {
        ctx.config.line_height.max(self.style(ctx).size)
    }

    fn lines(&self, text: &str, ctx: &Context<'_>) -> Vec<String> {
        let style = self.style(ctx);
        ctx.renderer.wrap_text(text, style.font, style.size, self.width)
    }
}

impl Element for Paragraph {
    #[allow(clippy::cast_precision_loss)]
    fn get_size(&self, data: &UiData, ctx: &Context<'_>) -> Vec2 {
        match data.as_label() {
            Ok(text) => Vec2::new(
                self.width,
                self.lines(text, ctx).len() as f32 * self.line_height(ctx),
            ),
            Err(_) => LABEL_PLACEHOLDER,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        let text = match data.as_label() {
            Ok(text) => text,
            Err(error) => return draw_mismatch(ctx, error, area.top_left()),
        };
        let style = self.style(ctx);
        let line_height = self.line_height(ctx);
        for (row, line) in self.lines(text, ctx).iter().enumerate() {
            let pos = area.top_left() + Vec2::new(0.0, row as f32 * line_height);
            ctx.renderer.draw_text(line, pos, style);
        }
    }
}

/// Draws the bound icon set, every token stacked on the same spot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icons {
    /// Scale relative to the configured icon size.
    pub zoom: f32,
}

impl Element for Icons {
    fn get_size(&self, _data: &UiData, ctx: &Context<'_>) -> Vec2 {
        let edge = ctx.config.icon_size * self.zoom;
        Vec2::new(edge, edge)
    }

    fn render(&self, data: &UiData, ctx: &mut Context<'_>, area: Rect) {
        match data.as_icons() {
            Ok(tokens) => {
                let edge = ctx.config.icon_size * self.zoom;
                for token in tokens {
                    ctx.renderer.draw_icon(token, area.top_left(), edge);
                }
            }
            Err(error) => draw_mismatch(ctx, error, area.top_left()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;
    use crate::render::RenderCommand;

    #[test]
    fn test_text_measures_label() {
        let mut fixture = Fixture::new();
        let ctx = fixture.ctx();
        let text = Text {
            size: Some(10.0),
            color: Color::WHITE,
            font: Font::Text,
        };

        // 10pt text advances 5px per character
        assert_eq!(text.get_size(&UiData::label("abcd"), &ctx), Vec2::new(20.0, 20.0));
        assert_eq!(text.get_size(&UiData::default(), &ctx), LABEL_PLACEHOLDER);
    }

    #[test]
    fn test_text_mismatch_renders_placeholder() {
        let mut fixture = Fixture::new();
        let text = Text {
            size: None,
            color: Color::WHITE,
            font: Font::Text,
        };
        let mut ctx = fixture.ctx();
        text.render(&UiData::list(Vec::new()), &mut ctx, Rect::new(0.0, 0.0, 50.0, 20.0));
        drop(ctx);

        match &fixture.renderer.commands()[0] {
            RenderCommand::Text { text, style, .. } => {
                assert_eq!(text, "not a label");
                assert_eq!(style.color, Color::RED);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_paragraph_wraps() {
        let mut fixture = Fixture::new();
        let paragraph = Paragraph {
            width: 40.0,
            size: Some(10.0),
            color: Color::WHITE,
        };
        let data = UiData::label("aaa bbb ccc");
        let mut ctx = fixture.ctx();
        assert_eq!(paragraph.get_size(&data, &ctx), Vec2::new(40.0, 40.0));
        paragraph.render(&data, &mut ctx, Rect::new(0.0, 0.0, 40.0, 40.0));
        drop(ctx);

        assert_eq!(fixture.renderer.texts(), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_icons_stack_tokens() {
        let mut fixture = Fixture::new();
        let icons = Icons { zoom: 2.0 };
        let mut ctx = fixture.ctx();
        assert_eq!(icons.get_size(&UiData::default(), &ctx), Vec2::new(48.0, 48.0));
        icons.render(&UiData::icons(["floor", "knight"]), &mut ctx, Rect::new(5.0, 5.0, 48.0, 48.0));
        drop(ctx);

        let drawn: Vec<_> = fixture
            .renderer
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Icon { token, pos, size } => Some((token.as_str(), *pos, *size)),
                _ => None,
            })
            .collect();
        assert_eq!(
            drawn,
            vec![("floor", Vec2::new(5.0, 5.0), 48.0), ("knight", Vec2::new(5.0, 5.0), 48.0)]
        );
    }

    #[test]
    fn test_texture_sized_by_renderer() {
        let mut fixture = Fixture::new();
        fixture.renderer.add_texture("frame", Vec2::new(32.0, 16.0));
        let texture = Texture {
            id: "frame".to_owned(),
            flip: TextureFlip::FlipX,
        };
        let ctx = fixture.ctx();
        assert_eq!(texture.get_size(&UiData::default(), &ctx), Vec2::new(32.0, 16.0));
    }
}
