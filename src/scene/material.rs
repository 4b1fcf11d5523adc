use slotmap::SlotMap;

use super::Color;
use crate::error::SceneError;

slotmap::new_key_type! {
    /// Unique identifier for a material in the registry.
    pub struct MaterialId;
}

/// Surface appearance of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Diffuse color.
    pub base_color: Color,
    /// Emissive color, multiplied by `emissive_intensity`.
    pub emissive: Color,
    /// Glow strength. `0.0` means no glow.
    pub emissive_intensity: f32,
}

impl Material {
    /// A non-emissive material.
    #[must_use]
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            emissive: Color::black(),
            emissive_intensity: 0.0,
        }
    }

    /// Effective emitted light.
    #[must_use]
    pub fn emitted(&self) -> Color {
        self.emissive.scaled(self.emissive_intensity)
    }
}

/// Arena owning the materials meshes point at.
///
/// Loaded assets share materials between meshes; the registry lets callers
/// control their lifetime instead of a process-wide cache.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: SlotMap<MaterialId, Material>,
}

impl MaterialRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a material and returns its ID.
    pub fn add(&mut self, material: Material) -> MaterialId {
        self.materials.insert(material)
    }

    /// Returns a reference to the material, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not in the registry.
    pub fn get(&self, id: MaterialId) -> Result<&Material, SceneError> {
        self.materials
            .get(id)
            .ok_or(SceneError::EntityNotFound("material"))
    }

    /// Returns a mutable reference to the material, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not in the registry.
    pub fn get_mut(&mut self, id: MaterialId) -> Result<&mut Material, SceneError> {
        self.materials
            .get_mut(id)
            .ok_or(SceneError::EntityNotFound("material"))
    }

    /// Copies a material into a new, independent entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the registry.
    pub fn duplicate(&mut self, id: MaterialId) -> Result<MaterialId, SceneError> {
        let copy = self.get(id)?.clone();
        Ok(self.materials.insert(copy))
    }

    /// Removes a material, returning it if it existed.
    pub fn remove(&mut self, id: MaterialId) -> Option<Material> {
        self.materials.remove(id)
    }

    /// Returns `true` if `id` is in the registry.
    #[must_use]
    pub fn contains(&self, id: MaterialId) -> bool {
        self.materials.contains_key(id)
    }

    /// Number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
