use super::Config;
use crate::{FpsLimiter, Grid, Simulator};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Key, Rect, TextureHandle, TextureOptions,
    TopBottomPanel, ViewportCommand,
};

pub struct App {
    pub(super) grid: Grid,                // Current generation.
    pub(super) simulator: Simulator,      // Computes the next generation.
    pub(super) config: Config,            // Colors, cell size and pacing.
    pub(super) generation: u64,           // Number of steps made so far.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,         // Do one step while paused.
    pub(super) texture: TextureHandle,    // Texture the field is rendered into.
    pub(super) field_rect: Option<Rect>,  // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to `config.max_fps`.
}

impl App {
    pub fn new(ctx: &Context, grid: Grid, config: Config) -> Self {
        Self {
            texture: ctx.load_texture(
                "Game of Life field",
                ColorImage::new([grid.width(), grid.height()], config.dead_color),
                TextureOptions::NEAREST,
            ),
            fps_limiter: FpsLimiter::new(config.max_fps),
            grid,
            simulator: Simulator::new(),
            config,
            generation: 0,
            is_paused: false,
            do_one_step: false,
            field_rect: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        self.simulator.step(&mut self.grid);
        self.generation += 1;
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (quit, toggle_pause, step, click) = ctx.input(|input| {
            let click = input
                .pointer
                .primary_clicked()
                .then(|| input.pointer.interact_pos())
                .flatten();
            (
                input.key_pressed(Key::Escape) || input.key_pressed(Key::Q),
                input.key_pressed(Key::Space),
                input.key_pressed(Key::N),
                click,
            )
        });

        if quit {
            tracing::debug!(generation = self.generation, "quit requested");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        if toggle_pause {
            self.is_paused = !self.is_paused;
            tracing::debug!(paused = self.is_paused, generation = self.generation, "pause toggled");
        }
        if step && self.is_paused {
            self.do_one_step = true;
        }

        if let (Some(pos), Some(rect)) = (click, self.field_rect) {
            if rect.contains(pos) {
                let p = (pos - rect.left_top()) / rect.size();
                let x = (p.x * self.grid.width() as f32) as usize;
                let y = (p.y * self.grid.height() as f32) as usize;
                match self.grid.toggle_cell(x, y) {
                    Ok(live) => tracing::debug!(x, y, live, "cell toggled"),
                    Err(err) => tracing::warn!(%err, "click ignored"),
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        TopBottomPanel::bottom("generation counter")
            .exact_height(self.config.bottom_margin)
            .show_separator_line(false)
            .frame(Frame::none().fill(self.config.dead_color))
            .show(ctx, |ui| self.draw_counter(ui));

        CentralPanel::default()
            .frame(Frame::none().fill(self.config.dead_color))
            .show(ctx, |ui| self.draw_field(ui));

        self.update_engine();

        ctx.request_repaint();
        self.fps_limiter.delay();
    }
}
