use crate::assets;
use crate::config::WorldConfig;
use crate::error::AssetError;
use crate::types::{DrawTarget, Sprite};
use log::info;
use macroquad::prelude::*;

const BACKGROUND_COLOR: Color = SKYBLUE;

// Textures for the bird frames, uploaded once at startup
struct Sprites {
    flap_up: Texture2D,
    flap_down: Texture2D,
}

impl Sprites {
    fn load() -> Result<Self, AssetError> {
        Ok(Sprites {
            flap_up: load_sprite(Sprite::FlapUp)?,
            flap_down: load_sprite(Sprite::FlapDown)?,
        })
    }

    fn texture(&self, sprite: Sprite) -> &Texture2D {
        match sprite {
            Sprite::FlapUp => &self.flap_up,
            Sprite::FlapDown => &self.flap_down,
        }
    }
}

fn load_sprite(sprite: Sprite) -> Result<Texture2D, AssetError> {
    let image = assets::load_image(sprite.asset_name())?;
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    info!(
        "Loaded sprite {} ({}x{})",
        sprite.asset_name(),
        image.width(),
        image.height()
    );
    Ok(texture)
}

// Draws the play field into an off-screen buffer and flips it to the window on present
pub struct Renderer {
    world: WorldConfig,
    sprites: Sprites,
    scene_rt: Option<RenderTarget>,
}

impl Renderer {
    /// Needs a live macroquad context. Fails if a sprite is missing or corrupt.
    pub fn new(world: WorldConfig) -> Result<Self, AssetError> {
        Ok(Renderer {
            world,
            sprites: Sprites::load()?,
            scene_rt: None,
        })
    }

    // Back buffer is created on first use, sized to the world
    fn scene_target(&mut self) -> RenderTarget {
        let world = self.world;
        self.scene_rt
            .get_or_insert_with(|| {
                let rt = render_target(world.width as u32, world.height as u32);
                rt.texture.set_filter(FilterMode::Nearest);
                info!("Created {}x{} back buffer", world.width, world.height);
                rt
            })
            .clone()
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}

impl DrawTarget for Renderer {
    fn clear(&mut self) {
        let scene_rt = self.scene_target();
        set_camera(&Camera2D {
            render_target: Some(scene_rt),
            zoom: vec2(2.0 / self.world.width, 2.0 / self.world.height),
            target: vec2(self.world.width / 2.0, self.world.height / 2.0),
            ..Default::default()
        });
        clear_background(BACKGROUND_COLOR);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32) {
        draw_texture(self.sprites.texture(sprite), x, y, WHITE);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        draw_text(text, x, y, font_size, color);
    }

    fn present(&mut self) {
        set_default_camera();
        clear_background(BLACK);
        if let Some(scene_rt) = &self.scene_rt {
            draw_texture_ex(
                &scene_rt.texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            );
        }
    }
}
