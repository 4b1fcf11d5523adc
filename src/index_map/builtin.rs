use super::IndexMaps;
use crate::dentition::{ToothClass, ToothNumber};
use crate::surface::SurfaceCode::{
    Contact, Distal, Facial, Incisal, Lingual, Mesial, Occlusal, Root,
};

impl IndexMaps {
    /// Index layout of the bundled mini-mouth tooth models.
    ///
    /// Posterior meshes have no dedicated contact part, so contact requests
    /// fall back to mesial plus distal. Multi-rooted molars and the canines
    /// carry per-tooth overrides.
    #[must_use]
    pub fn builtin() -> Self {
        let posterior = ToothClass::Posterior;
        let anterior = ToothClass::Anterior;
        let mut maps = Self::new()
            .with_default(posterior, Occlusal, [1u32, 3, 4, 5, 6, 7, 9])
            .with_default(posterior, Mesial, [2u32])
            .with_default(posterior, Distal, [8u32])
            .with_default(posterior, Facial, [10u32])
            .with_default(posterior, Lingual, [11u32])
            .with_default(posterior, Root, [12u32])
            .with_default(anterior, Facial, [1u32])
            .with_default(anterior, Lingual, [2u32])
            .with_default(anterior, Mesial, [3u32])
            .with_default(anterior, Distal, [4u32])
            .with_default(anterior, Incisal, [5u32])
            .with_default(anterior, Contact, [6u32])
            .with_default(anterior, Root, [7u32]);

        // Upper molars: three roots. Lower molars: two.
        for n in [16u16, 17, 26, 27] {
            maps = maps.with_override(ToothNumber::new(n), Root, [12u32, 13, 14]);
        }
        for n in [36u16, 37, 46, 47] {
            maps = maps.with_override(ToothNumber::new(n), Root, [12u32, 13]);
        }
        // Canine cusp tip is modelled as its own part.
        for n in [13u16, 23, 33, 43] {
            maps = maps.with_override(ToothNumber::new(n), Incisal, [5u32, 8]);
        }
        maps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dentition::permanent_teeth;

    #[test]
    fn every_permanent_tooth_has_crown_and_root() {
        let maps = IndexMaps::builtin();
        for tooth in permanent_teeth() {
            let class = tooth.class();
            for surface in [Facial, Lingual, Mesial, Distal, Root] {
                assert!(
                    !maps.lookup(tooth, class, surface).is_empty(),
                    "{tooth} {surface}"
                );
            }
        }
    }

    #[test]
    fn posterior_has_no_contact_part() {
        let maps = IndexMaps::builtin();
        assert!(maps
            .lookup(ToothNumber::new(16), ToothClass::Posterior, Contact)
            .is_empty());
    }
}
