//! Nearest-reference-point lookup for terrestrial biomes.
//!
//! Each terrestrial class has five representative climates in a normalized
//! four-dimensional feature space: solar flux, mean temperature, annual
//! temperature range, and the square root of precipitation. A land point
//! takes the class of the closest reference climate.

use crate::biome::Biome;

const FLUX_RANGE: (f64, f64) = (0.0, 800.0);
const MEAN_TEMP_RANGE: (f64, f64) = (-20.0, 50.0);
const TEMP_VAR_RANGE: (f64, f64) = (0.0, 35.0);
const SQRT_PRECIP_RANGE: (f64, f64) = (0.0, 75.0);

/// Terrestrial classes, indexed in step with [`REF_POINTS`].
pub const REF_CLASSES: [Biome; 9] = [
    Biome::Wetland,
    Biome::Jungle,
    Biome::SeasonalForest,
    Biome::NeedleleafForest,
    Biome::Grassland,
    Biome::DesertShrubland,
    Biome::Tundra,
    Biome::Barren,
    Biome::SandSea,
];

/// Normalized reference climates, five per class in [`REF_CLASSES`].
#[rustfmt::skip]
pub const REF_POINTS: [[[f64; 4]; 5]; 9] = [
    [
        [0.97589505, 0.6692817, 0.09676683, 0.42183435],
        [0.2872733, 0.5562218, 0.21704593, 0.3098737],
        [0.95833284, 0.6877248, 0.12377492, 0.2995282],
        [0.6171483, 0.47020113, 0.4836682, 0.22195342],
        [0.81850535, 0.60123855, 0.25867933, 0.31303504],
    ],
    [
        [0.7665621, 0.5300055, 0.2408872, 0.3123359],
        [0.99121696, 0.6713649, 0.07588506, 0.40304184],
        [0.98553646, 0.67212886, 0.08356771, 0.3337861],
        [0.9209426, 0.59560406, 0.15855226, 0.3750781],
        [0.99228674, 0.67052644, 0.07420062, 0.49766815],
    ],
    [
        [0.82307386, 0.54830164, 0.28397045, 0.32422626],
        [0.95406234, 0.68983954, 0.16054682, 0.29840717],
        [0.5337313, 0.44197488, 0.4220576, 0.24119267],
        [0.70596063, 0.5029748, 0.37620285, 0.26919958],
        [0.65009725, 0.41467762, 0.53735024, 0.24624129],
    ],
    [
        [0.8442506, 0.513412, 0.23853904, 0.31593102],
        [0.4755671, 0.42182055, 0.32860836, 0.25947723],
        [0.69879943, 0.5263777, 0.3583926, 0.24800086],
        [0.6385724, 0.44265494, 0.30205786, 0.41645652],
        [0.59855306, 0.41948298, 0.4608879, 0.21030518],
    ],
    [
        [0.9590115, 0.69129807, 0.14321554, 0.33431706],
        [0.64463437, 0.51307285, 0.6764352, 0.17131203],
        [0.75970644, 0.53838587, 0.34264302, 0.25237092],
        [0.9574419, 0.76865923, 0.21147878, 0.2162868],
        [0.7787093, 0.64991206, 0.49281284, 0.1717132],
    ],
    [
        [0.8768907, 0.68539584, 0.30395174, 0.18175352],
        [0.85951805, 0.75583154, 0.43008733, 0.13515931],
        [0.9133944, 0.80276865, 0.33543584, 0.15386288],
        [0.95464563, 0.8058968, 0.2042541, 0.1794926],
        [0.7509371, 0.62957406, 0.44375542, 0.1542665],
    ],
    [
        [0.4441414, 0.30920148, 0.4959661, 0.24957538],
        [0.4513571, 0.23461857, 0.732274, 0.2127717],
        [0.6739347, 0.34742635, 0.41046205, 0.26215446],
        [0.577827, 0.32734275, 0.62989986, 0.22067626],
        [0.37011942, 0.15006503, 0.65958476, 0.18708763],
    ],
    [
        [0.29481938, 0.09472984, 0.59135556, 0.06860657],
        [0.86539465, 0.7506361, 0.37203112, 0.11493613],
        [0.664666, 0.6056427, 0.46542227, 0.14238815],
        [0.6938545, 0.43799615, 0.30913985, 0.2867542],
        [0.8466273, 0.53237015, 0.44636855, 0.16200702],
    ],
    [
        [0.82119286, 0.48783484, 0.44511366, 0.10902377],
        [0.9354581, 0.8444746, 0.28542006, 0.076657],
        [0.75143087, 0.70467633, 0.602095, 0.09906711],
        [0.8729486, 0.81519806, 0.4026484, 0.0783796],
        [0.24349129, 0.7866096, 0.45044297, 0.11177942],
    ],
];

fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    (value - min) / (max - min)
}

/// Maps raw climate values into the reference feature space.
pub fn feature_vector(
    solar_flux_wpm2: f64,
    mean_temp_c: f64,
    temp_var_c: f64,
    annual_precip_mm: f64,
) -> [f64; 4] {
    [
        normalize(solar_flux_wpm2, FLUX_RANGE),
        normalize(mean_temp_c, MEAN_TEMP_RANGE),
        normalize(temp_var_c, TEMP_VAR_RANGE),
        normalize(annual_precip_mm.sqrt(), SQRT_PRECIP_RANGE),
    ]
}

/// Class of the reference point closest (Euclidean) to `features`.
///
/// Ties keep the first point found in table order. Features outside
/// `[0, 1]` are compared as-is.
pub fn nearest_class(features: &[f64; 4]) -> Biome {
    let mut best = Biome::Unknown;
    let mut best_dist = 1e35;
    for (class, points) in REF_CLASSES.iter().zip(REF_POINTS.iter()) {
        for point in points {
            let dist = features
                .iter()
                .zip(point)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            if dist < best_dist {
                best_dist = dist;
                best = *class;
            }
        }
    }
    best
}
