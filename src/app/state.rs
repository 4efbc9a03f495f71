use eframe::App as EApp;
use egui::TextureHandle;
use lru::LruCache;
use std::num::NonZeroUsize;

use super::layout::MountedDashboard;
use crate::plotting::render_chart_rgb;
use crate::types::{ChartDefinition, ChartId, Rgba};

/// Textures kept alive across frames; a resize renders a new set.
const TEXTURE_CACHE_SIZE: usize = 24;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TextureKey {
    pub chart: ChartId,
    pub width: u32,
    pub height: u32,
}

/// Chart textures rendered at a given pixel size, owned by one window
pub struct ChartTextures {
    cache: LruCache<TextureKey, TextureHandle>,
    pub error_message: Option<String>,
}

impl ChartTextures {
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(TEXTURE_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            error_message: None,
        }
    }

    /// Texture for `definition` at `size` pixels, rendering it on a miss.
    pub fn get_or_render(
        &mut self,
        ctx: &egui::Context,
        definition: &ChartDefinition,
        background: Rgba,
        size: (u32, u32),
    ) -> Option<TextureHandle> {
        if size.0 == 0 || size.1 == 0 {
            return None;
        }

        let key = TextureKey {
            chart: definition.id,
            width: size.0,
            height: size.1,
        };
        if let Some(texture) = self.cache.get(&key) {
            return Some(texture.clone());
        }

        match render_chart_rgb(definition, background, size) {
            Ok(pixels) => {
                let image = egui::ColorImage::from_rgb([size.0 as usize, size.1 as usize], &pixels);
                let texture = ctx.load_texture(
                    format!("chart-{}", definition.id),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                tracing::debug!("rendered {} at {}x{}", definition.id, size.0, size.1);
                self.cache.put(key, texture.clone());
                Some(texture)
            }
            Err(e) => {
                tracing::error!("failed to render {}: {}", definition.id, e);
                self.error_message = Some(e.to_string());
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for ChartTextures {
    fn default() -> Self {
        Self::new()
    }
}

/// The native window showing one mounted dashboard
pub struct DashboardApp {
    pub mounted: MountedDashboard,
    pub textures: ChartTextures,
}

impl DashboardApp {
    pub fn new(mounted: MountedDashboard) -> Self {
        Self {
            mounted,
            textures: ChartTextures::new(),
        }
    }
}

impl EApp for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::draw_ui(&self.mounted.tree, &mut self.textures, ctx);
    }
}
