use crate::adapters::pixel_format::{WHITE, flatten_rgba_onto};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use std::time::Duration;
use winit::dpi::PhysicalPosition;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Shows frames in a `pixels` framebuffer the size of the render grid and
/// draws the egui overlay on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    grid: PixelGrid,
    surface_width: u32,
    surface_height: u32,
    has_frame: bool,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        grid: PixelGrid,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(grid.width(), grid.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            grid,
            surface_width: size.width,
            surface_height: size.height,
            has_frame: false,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        })
    }

    pub fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    /// Maps a window position to the grid pixel under it, if any.
    #[must_use]
    pub fn window_pos_to_pixel(&self, position: PhysicalPosition<f64>) -> Option<Point> {
        self.pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()
            .map(|(x, y)| Point::new(x as u32, y as u32))
    }

    /// Copies the newest finished frame, if there is one, into the framebuffer.
    /// Returns whether anything changed on screen.
    pub fn maybe_draw_frame(&mut self) -> bool {
        let Some(event) = self.adapter.take_render_event() else {
            return false;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= self.last_presented_generation
                    || frame.pixel_buffer.grid() != self.grid
                {
                    return false;
                }

                self.copy_pixel_buffer_into_pixels_frame(&frame);
                self.has_frame = true;
                self.last_presented_generation = frame.generation;
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
            }
            RenderEvent::Error(failure) => {
                if failure.generation < self.last_presented_generation {
                    return false;
                }

                self.last_error_message = Some(failure.error.to_string());
            }
        }

        true
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Follows the window surface; the framebuffer keeps the grid size.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel[..3].copy_from_slice(&WHITE);
            pixel[3] = 255;
        }
    }

    fn copy_pixel_buffer_into_pixels_frame(&mut self, frame: &FrameData) {
        flatten_rgba_onto(frame.pixel_buffer.buffer(), self.pixels.frame_mut(), WHITE);
    }
}
