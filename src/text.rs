use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use macroquad::text::{draw_text_ex, measure_text, Font, TextParams};

/// A HUD string with its font, size and color. The string can be swapped
/// every frame (FPS counter, score); drawing addresses the text baseline.
pub struct TextRenderer {
    text: String,
    font: Option<Font>,
    font_size: u16,
    color: Color,
}

impl TextRenderer {
    pub fn new(text: impl Into<String>, font: Option<Font>, font_size: u16, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            font_size,
            color,
        }
    }

    pub fn update_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_size(&self) -> Vec2 {
        let dims = measure_text(&self.text, self.font.as_ref(), self.font_size, 1.0);
        vec2(dims.width, dims.height)
    }

    pub fn draw(&self, position: Vec2) {
        draw_text_ex(
            &self.text,
            position.x,
            position.y,
            TextParams {
                font: self.font.as_ref(),
                font_size: self.font_size,
                color: self.color,
                ..Default::default()
            },
        );
    }
}
