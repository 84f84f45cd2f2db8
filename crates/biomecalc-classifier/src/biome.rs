//! Biome codes: the classifier's output value.
//!
//! A biome code is a byte laid out as `0yyyxxxx`, where `yyy` is the
//! [`BiomeCategory`] and `xxxx` the biome within that category. Codes not
//! listed in [`Biome`] are reserved and decode to [`Biome::Unknown`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Top three bits of a biome code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BiomeCategory {
    Terrestrial = 0,
    Aquatic = 1,
    Artificial = 2,
    Astronomical = 4,
    Fictional = 7,
}

impl BiomeCategory {
    /// Decodes the category bits of a biome code. Returns `None` for the
    /// unused category values 3, 5, and 6.
    pub fn from_code(code: u8) -> Option<Self> {
        match (code >> 4) & 0b111 {
            0 => Some(Self::Terrestrial),
            1 => Some(Self::Aquatic),
            2 => Some(Self::Artificial),
            4 => Some(Self::Astronomical),
            7 => Some(Self::Fictional),
            _ => None,
        }
    }
}

/// A biome, with its code as the discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Biome {
    /// No data, or no prediction could be made.
    Unknown = 0x00,
    Wetland = 0x01,
    /// Tropical rainforest.
    Jungle = 0x02,
    /// Temperate deciduous forest.
    SeasonalForest = 0x03,
    /// Boreal, alpine, and taiga evergreen forest.
    NeedleleafForest = 0x04,
    /// Plains, prairies, and savannas.
    Grassland = 0x05,
    DesertShrubland = 0x06,
    /// Too cold for trees.
    Tundra = 0x07,
    /// Exposed rock with little or no macroscopic life.
    Barren = 0x08,
    /// Sand dunes with little or no macroscopic life.
    SandSea = 0x09,
    /// Open ocean where no light reaches the floor.
    DeepOcean = 0x10,
    /// Lakes and rivers.
    Freshwater = 0x11,
    /// Kelp forests and seagrass meadows.
    SeaForest = 0x12,
    /// Coral reefs.
    TropicalReef = 0x13,
    /// Low-productivity shallow marine habitat.
    RockyShallows = 0x14,
    ShallowOcean = 0x15,
    /// Permanent ice on land or water.
    IceSheet = 0x16,
    /// Water so hot that it boils.
    BoilingSea = 0x17,
    Farmland = 0x20,
    Urban = 0x21,
    /// Abandoned urban land being reclaimed by nature.
    Ruins = 0x22,
    PollutedWasteland = 0x23,
    PollutedWastewater = 0x24,
    /// Lifeless dust and rock.
    Moonscape = 0x40,
    MagmaSea = 0x41,
    /// Ocean of a liquid cryogen such as nitrogen.
    CryogenSea = 0x42,
    GasGiant = 0x43,
    Star = 0x44,
    NeutronStar = 0x45,
    /// "Surface" of a black hole.
    EventHorizon = 0x46,
    /// Permanently dark habitat with glowing flora.
    Bioluminescent = 0x70,
    /// Dead (or undead) land.
    Dead = 0x71,
    MagicGarden = 0x72,
    /// Floating rocks, unmeltable ice, dancing fire.
    ElementalChaos = 0x73,
    /// Living landscape, such as an ocean-sized amoeba.
    Ooze = 0x74,
}

/// Static descriptive data attached to each biome.
struct BiomeInfo {
    name: &'static str,
    common_name: &'static str,
    technical_name: &'static str,
    icon: &'static str,
    map_color: [u8; 3],
}

const fn info(
    name: &'static str,
    common_name: &'static str,
    technical_name: &'static str,
    icon: &'static str,
    map_color: [u8; 3],
) -> BiomeInfo {
    BiomeInfo { name, common_name, technical_name, icon, map_color }
}

impl Biome {
    /// Every biome, in code order.
    pub const ALL: [Biome; 35] = [
        Biome::Unknown,
        Biome::Wetland,
        Biome::Jungle,
        Biome::SeasonalForest,
        Biome::NeedleleafForest,
        Biome::Grassland,
        Biome::DesertShrubland,
        Biome::Tundra,
        Biome::Barren,
        Biome::SandSea,
        Biome::DeepOcean,
        Biome::Freshwater,
        Biome::SeaForest,
        Biome::TropicalReef,
        Biome::RockyShallows,
        Biome::ShallowOcean,
        Biome::IceSheet,
        Biome::BoilingSea,
        Biome::Farmland,
        Biome::Urban,
        Biome::Ruins,
        Biome::PollutedWasteland,
        Biome::PollutedWastewater,
        Biome::Moonscape,
        Biome::MagmaSea,
        Biome::CryogenSea,
        Biome::GasGiant,
        Biome::Star,
        Biome::NeutronStar,
        Biome::EventHorizon,
        Biome::Bioluminescent,
        Biome::Dead,
        Biome::MagicGarden,
        Biome::ElementalChaos,
        Biome::Ooze,
    ];

    /// The packed `0yyyxxxx` biome code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The category encoded in the top bits of [`code`](Self::code).
    pub fn category(self) -> BiomeCategory {
        match self.code() >> 4 {
            0 => BiomeCategory::Terrestrial,
            1 => BiomeCategory::Aquatic,
            2 => BiomeCategory::Artificial,
            4 => BiomeCategory::Astronomical,
            _ => BiomeCategory::Fictional,
        }
    }

    /// Decodes a biome code, rejecting reserved values.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UndefinedBiomeCode`] if `code` is not assigned.
    pub fn try_from_code(code: u8) -> Result<Self, ClassifyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.code() == code)
            .ok_or(ClassifyError::UndefinedBiomeCode(code))
    }

    /// Stable identifier, e.g. `"SeasonalForest"`. Suitable as a
    /// localization key; changing it is a breaking change.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// US English name for a general audience.
    pub fn common_name(self) -> &'static str {
        self.info().common_name
    }

    /// US English name for a scientific audience.
    pub fn technical_name(self) -> &'static str {
        self.info().technical_name
    }

    /// A single glyph for text maps. Not unique across biomes.
    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    /// RGB color for map rendering. Not unique across biomes.
    pub fn map_color(self) -> [u8; 3] {
        self.info().map_color
    }

    /// Maps a MODIS IGBP land-cover class (1..=17) to a biome.
    ///
    /// IGBP water (17) is only meaningful on land, so it maps to
    /// [`Biome::Freshwater`]. Barren land (16) counts as desert shrubland;
    /// snow and ice (15) carries no biome of its own and stays
    /// [`Biome::Unknown`].
    pub fn from_igbp_cover_type(cover_type: u8) -> Self {
        match cover_type {
            1 => Biome::NeedleleafForest,
            2 => Biome::Jungle,
            3..=5 => Biome::SeasonalForest,
            6 | 7 | 16 => Biome::DesertShrubland,
            8..=10 => Biome::Grassland,
            11 => Biome::Wetland,
            12 | 14 => Biome::Farmland,
            13 => Biome::Urban,
            17 => Biome::Freshwater,
            _ => Biome::Unknown,
        }
    }

    fn info(self) -> BiomeInfo {
        match self {
            Biome::Unknown => info("Unknown", "unknown", "unknown", "?", [127, 127, 127]),
            Biome::Wetland => info("Wetland", "swamp", "wetland", "w", [0, 192, 118]),
            Biome::Jungle => info("Jungle", "jungle", "tropical rainforest", "T", [0, 192, 0]),
            Biome::SeasonalForest => info(
                "SeasonalForest", "deciduous forest", "temperate forest", "t", [78, 192, 0],
            ),
            Biome::NeedleleafForest => info(
                "NeedleleafForest", "evergreen forest", "needleleaf forest", "^", [27, 113, 68],
            ),
            Biome::Grassland => info("Grassland", "grassland", "grassland", "\"", [184, 255, 55]),
            Biome::DesertShrubland => info(
                "DesertShrubland", "desert", "xeric shrubland", "'", [255, 197, 57],
            ),
            Biome::Tundra => info("Tundra", "tundra", "tundra", "=", [130, 221, 142]),
            Biome::Barren => info("Barren", "barren", "barren", ".", [192, 162, 138]),
            Biome::SandSea => info("SandSea", "sand dunes", "eolian sand", "-", [255, 255, 127]),
            Biome::DeepOcean => info("DeepOcean", "ocean", "deep ocean", "≈", [42, 82, 190]),
            Biome::Freshwater => info("Freshwater", "freshwater", "freshwater", "~", [0, 255, 255]),
            Biome::SeaForest => info(
                "SeaForest", "seaweed forest", "marine forest", "~", [85, 190, 190],
            ),
            Biome::TropicalReef => info(
                "TropicalReef", "coral reef", "tropical reef", "~", [70, 218, 248],
            ),
            Biome::RockyShallows => info(
                "RockyShallows", "rocky shallows", "rocky shallows", "~", [85, 114, 191],
            ),
            Biome::ShallowOcean => info(
                "ShallowOcean", "shallow ocean", "shallow ocean", "~", [0, 134, 176],
            ),
            Biome::IceSheet => info("IceSheet", "ice sheet", "ice sheet", "*", [255, 255, 255]),
            Biome::BoilingSea => info(
                "BoilingSea", "boiling sea", "hydrothermal sea", "≀", [125, 164, 176],
            ),
            Biome::Farmland => info("Farmland", "farmland", "farmland", "±", [122, 170, 98]),
            Biome::Urban => info("Urban", "urban", "urban", "Π", [100, 100, 100]),
            Biome::Ruins => info("Ruins", "ruins", "ruins", "λ", [120, 134, 113]),
            Biome::PollutedWasteland => info(
                "PollutedWasteland", "toxic wasteland", "industrial barrens", "☢", [255, 255, 0],
            ),
            Biome::PollutedWastewater => info(
                "PollutedWastewater", "toxic water", "hypoxic water", "☣", [172, 255, 0],
            ),
            Biome::Moonscape => info("Moonscape", "moonscape", "regolith", "_", [155, 155, 155]),
            Biome::MagmaSea => info("MagmaSea", "magma sea", "lava sea", "£", [115, 0, 0]),
            Biome::CryogenSea => info(
                "CryogenSea", "cryogen sea", "cryogen sea", "¢", [184, 236, 255],
            ),
            Biome::GasGiant => info("GasGiant", "gas giant", "gas giant", "§", [255, 207, 161]),
            Biome::Star => info("Star", "star", "star", "☼", [255, 255, 177]),
            Biome::NeutronStar => info(
                "NeutronStar", "neutron star", "neutron star", "@", [113, 113, 78],
            ),
            Biome::EventHorizon => info(
                "EventHorizon", "black hole", "event horizon", "Ø", [0, 0, 0],
            ),
            Biome::Bioluminescent => info(
                "Bioluminescent", "permanent night", "bioluminescent flora", "☾", [46, 32, 128],
            ),
            Biome::Dead => info("Dead", "dead land", "dead land", "☠", [60, 60, 60]),
            Biome::MagicGarden => info(
                "MagicGarden", "magic garden", "magic garden", "☥", [55, 255, 0],
            ),
            Biome::ElementalChaos => info(
                "ElementalChaos", "elemental chaos", "elemental chaos", "☆", [255, 110, 244],
            ),
            Biome::Ooze => info("Ooze", "ooze", "giant slime", "⚇", [136, 60, 196]),
        }
    }
}

impl From<u8> for Biome {
    /// Lenient decoding: reserved codes become [`Biome::Unknown`].
    fn from(code: u8) -> Self {
        Self::try_from_code(code).unwrap_or(Biome::Unknown)
    }
}

impl From<Biome> for u8 {
    fn from(biome: Biome) -> u8 {
        biome.code()
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Biome {
    type Err = ClassifyError;

    /// Parses a [`name`](Biome::name), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClassifyError::UnknownBiomeName(s.to_string()))
    }
}

/// Lenient element-wise decoding of a code buffer.
pub fn biomes_from_codes(codes: &[u8]) -> Vec<Biome> {
    codes.iter().map(|&c| Biome::from(c)).collect()
}

/// Element-wise encoding of a biome buffer.
pub fn codes_from_biomes(biomes: &[Biome]) -> Vec<u8> {
    biomes.iter().map(|b| b.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_sorted_and_unique() {
        let codes: Vec<u8> = Biome::ALL.iter().map(|b| b.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Biome::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names.len(), Biome::ALL.len());
    }

    #[test]
    fn test_name_matches_debug_repr() {
        for biome in Biome::ALL {
            assert_eq!(biome.name(), format!("{biome:?}"));
        }
    }

    #[test]
    fn test_every_code_decodes_consistently() {
        for code in 0..=u8::MAX {
            let lenient = Biome::from(code);
            match Biome::try_from_code(code) {
                Ok(biome) => assert_eq!(biome.code(), code),
                Err(ClassifyError::UndefinedBiomeCode(c)) => {
                    assert_eq!(c, code);
                    assert_eq!(lenient, Biome::Unknown);
                }
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }

    #[test]
    fn test_defined_codes_stay_below_0x75() {
        assert!(Biome::ALL.iter().all(|b| b.code() <= 0x74));
        assert!(Biome::try_from_code(0x75).is_err());
        assert!(Biome::try_from_code(0x0A).is_err());
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Biome::Jungle.code(), 2);
        assert_eq!(Biome::Tundra.code(), 7);
        assert_eq!(Biome::DeepOcean.code(), 16);
        assert_eq!(Biome::IceSheet.code(), 22);
        assert_eq!(Biome::Moonscape.code(), 64);
        assert_eq!(Biome::Star.code(), 68);
        assert_eq!(Biome::Ooze.code(), 116);
    }

    #[test]
    fn test_category_bits() {
        assert_eq!(Biome::Unknown.category(), BiomeCategory::Terrestrial);
        assert_eq!(Biome::SandSea.category(), BiomeCategory::Terrestrial);
        assert_eq!(Biome::IceSheet.category(), BiomeCategory::Aquatic);
        assert_eq!(Biome::Ruins.category(), BiomeCategory::Artificial);
        assert_eq!(Biome::EventHorizon.category(), BiomeCategory::Astronomical);
        assert_eq!(Biome::Dead.category(), BiomeCategory::Fictional);
        for biome in Biome::ALL {
            assert_eq!(BiomeCategory::from_code(biome.code()), Some(biome.category()));
        }
        assert_eq!(BiomeCategory::from_code(0x30), None);
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("needleleafforest".parse::<Biome>().unwrap(), Biome::NeedleleafForest);
        assert_eq!("GASGIANT".parse::<Biome>().unwrap(), Biome::GasGiant);
        assert!("swampland".parse::<Biome>().is_err());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Biome::TropicalReef.to_string(), "TropicalReef");
    }

    #[test]
    fn test_igbp_mapping() {
        assert_eq!(Biome::from_igbp_cover_type(1), Biome::NeedleleafForest);
        assert_eq!(Biome::from_igbp_cover_type(2), Biome::Jungle);
        assert_eq!(Biome::from_igbp_cover_type(4), Biome::SeasonalForest);
        assert_eq!(Biome::from_igbp_cover_type(7), Biome::DesertShrubland);
        assert_eq!(Biome::from_igbp_cover_type(9), Biome::Grassland);
        assert_eq!(Biome::from_igbp_cover_type(11), Biome::Wetland);
        assert_eq!(Biome::from_igbp_cover_type(14), Biome::Farmland);
        assert_eq!(Biome::from_igbp_cover_type(13), Biome::Urban);
        assert_eq!(Biome::from_igbp_cover_type(15), Biome::Unknown);
        assert_eq!(Biome::from_igbp_cover_type(16), Biome::DesertShrubland);
        assert_eq!(Biome::from_igbp_cover_type(17), Biome::Freshwater);
        assert_eq!(Biome::from_igbp_cover_type(0), Biome::Unknown);
        assert_eq!(Biome::from_igbp_cover_type(255), Biome::Unknown);
    }

    #[test]
    fn test_code_buffers() {
        let codes = [2u8, 10, 68];
        let biomes = biomes_from_codes(&codes);
        assert_eq!(biomes, vec![Biome::Jungle, Biome::Unknown, Biome::Star]);
        assert_eq!(codes_from_biomes(&biomes), vec![2, 0, 68]);
    }
}
