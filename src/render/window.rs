use minifb::{Key, ScaleMode, Window, WindowOptions};

use crate::foundation::error::{FloorplotError, FloorplotResult};
use crate::render::cpu::{FrameRGBA, rasterize};
use crate::render::settings::PlotSettings;
use crate::render::sink::{AspectMode, DrawRect, RenderSink, Scene};

const TARGET_FPS: usize = 30;

/// Interactive sink: rasterizes on `present`, then shows the frame in a window and blocks until
/// the window is closed or Escape is pressed.
#[derive(Debug)]
pub struct WindowSink {
    settings: PlotSettings,
    scene: Scene,
}

impl WindowSink {
    pub fn new(settings: PlotSettings) -> Self {
        Self {
            settings,
            scene: Scene::default(),
        }
    }
}

impl RenderSink for WindowSink {
    fn draw_rectangle(&mut self, rect: &DrawRect) -> FloorplotResult<()> {
        self.scene.push(rect);
        Ok(())
    }

    fn set_aspect(&mut self, aspect: AspectMode) -> FloorplotResult<()> {
        self.scene.aspect = aspect;
        Ok(())
    }

    fn present(&mut self) -> FloorplotResult<()> {
        let frame = rasterize(&self.scene.draws, self.scene.aspect, &self.settings)?;
        let buffer = to_0rgb(&frame);
        let (w, h) = (frame.width as usize, frame.height as usize);

        let mut window = Window::new(
            &self.settings.title,
            w,
            h,
            WindowOptions {
                resize: true,
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| FloorplotError::render(format!("open window: {e}")))?;
        window.set_target_fps(TARGET_FPS);
        tracing::info!(width = w, height = h, "window opened");

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&buffer, w, h)
                .map_err(|e| FloorplotError::render(format!("update window: {e}")))?;
        }
        tracing::debug!("window closed");
        Ok(())
    }
}

/// Pack straight RGB into minifb's `0x00RRGGBB` pixels.
fn to_0rgb(frame: &FrameRGBA) -> Vec<u32> {
    frame
        .to_straight_rgba()
        .chunks_exact(4)
        .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
        .collect()
}
