use tracing::warn;

use crate::color::Color;
use crate::config::SceneConfig;
use crate::tessellation::Side;

use super::texture::{TextureImage, TextureLoader};

/// How a material responds to light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Flat color, unaffected by lights.
    Basic,
    Phong { specular: Color },
}

/// A texture applied with repeat wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMap {
    pub image: TextureImage,
    pub repeat: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub shading: Shading,
    pub side: Side,
    pub map: Option<TextureMap>,
}

impl Material {
    /// An unlit, front-sided material.
    #[must_use]
    pub fn basic(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Basic,
            side: Side::Front,
            map: None,
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// Materials shared by every primitive of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMaterials {
    pub wall: Material,
    pub wall_outline: Material,
    pub post: Material,
    pub floor: Material,
}

impl SceneMaterials {
    /// Builds the palette, loading the floor texture through `loader`.
    ///
    /// If the texture cannot be loaded the floor keeps its base color
    /// without a map, and a warning is logged.
    pub fn new(config: &SceneConfig, loader: &dyn TextureLoader) -> Self {
        let map = match loader.load(&config.floor_texture) {
            Ok(image) => Some(TextureMap {
                image,
                repeat: config.floor_texture_repeat,
            }),
            Err(err) => {
                warn!(%err, "floor texture unavailable, using plain floor");
                None
            }
        };

        Self {
            wall: Material::basic(config.wall_color),
            wall_outline: Material::basic(config.wall_outline_color).with_side(Side::Back),
            post: Material::basic(config.post_color),
            floor: Material {
                color: config.floor_color,
                shading: Shading::Phong {
                    specular: config.floor_specular,
                },
                side: Side::Double,
                map,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrusion::texture::MemoryTextureLoader;

    #[test]
    fn default_palette() {
        let mut loader = MemoryTextureLoader::new();
        loader.insert("textures/hardwood.png", vec![1, 2, 3]);
        let materials = SceneMaterials::new(&SceneConfig::default(), &loader);

        assert_eq!(materials.wall, Material::basic(Color(0xF0_EADC)));
        assert_eq!(materials.wall_outline.side, Side::Back);
        assert_eq!(materials.wall_outline.color, Color(0xdd_dddd));
        assert_eq!(materials.post.color, Color(0xee_eeee));
        assert_eq!(materials.floor.side, Side::Double);
        assert_eq!(
            materials.floor.shading,
            Shading::Phong {
                specular: Color(0x0a_0a0a)
            }
        );
        let map = materials.floor.map.as_ref().map(|m| m.repeat);
        assert_eq!(map, Some([1.0, 1.0]));
    }

    #[test]
    fn missing_texture_falls_back_to_plain_floor() {
        let materials = SceneMaterials::new(&SceneConfig::default(), &MemoryTextureLoader::new());
        assert!(materials.floor.map.is_none());
        assert_eq!(materials.floor.color, Color(0xcc_cccc));
    }
}
