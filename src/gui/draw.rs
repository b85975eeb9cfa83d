use super::App;
use crate::NiceInt;
use eframe::egui::{load::SizedTexture, vec2, ColorImage, Image, RichText, TextureOptions, Ui};

impl App {
    fn render_texture(&mut self) {
        let (w, h) = (self.grid.width(), self.grid.height());
        let mut image = ColorImage::new([w, h], self.config.dead_color);
        for (i, pixel) in image.pixels.iter_mut().enumerate() {
            if self.grid.is_live(i % w, i / w) {
                *pixel = self.config.live_color;
            }
        }
        self.texture.set(image, TextureOptions::NEAREST);
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        self.render_texture();

        let size = vec2(
            self.grid.width() as f32 * self.config.cell_size,
            self.grid.height() as f32 * self.config.cell_size,
        );
        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source).fit_to_exact_size(size));
        self.field_rect.replace(response.rect);
    }

    pub(super) fn draw_counter(&self, ui: &mut Ui) {
        let mut text = format!("Generation {}", NiceInt::from(self.generation));
        if self.is_paused {
            text.push_str(" (paused)");
        }
        text.push_str(&format!(
            "   population {}   {:.0} fps",
            NiceInt::from_usize(self.grid.population()),
            self.fps_limiter.fps()
        ));

        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(text)
                    .color(self.config.text_color)
                    .size(self.config.text_size),
            );
        });
    }
}
