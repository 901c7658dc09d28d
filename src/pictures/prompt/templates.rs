use std::collections::HashMap;

use crate::pictures::enums::city::City;

pub const AI_RANDOM_LABEL: &str = "AI-random match";

pub const BASE_PROMPT_TEMPLATE: &str = "\
Generate four photorealistic travel posters of the person in the first input image, \
one distinct scene per poster. {scene_description} {clothing_description} \
Keep the person's face, body shape and identity consistent across all four images, \
and keep the composition suitable for a vertical poster.";

pub const EASY_CLOTHING_TEMPLATE: &str = "\
Dress the person in the outfit shown in the provided garment images, keeping each \
garment's cut, color and texture faithful to its reference image.";

pub const MASTER_CLOTHING_TEMPLATE: &str = "\
Dress the person in {type} with a {style} look, made of {material} fabric in {color}.";

lazy_static! {
    pub static ref CITY_SCENES: HashMap<City, &'static str> = HashMap::from([
        (
            City::Tokyo,
            "Background scene: Tokyo - Shibuya crossing at dusk, the Sensoji temple gate, \
             a cherry-blossom lined riverside and the Tokyo Tower skyline at night."
        ),
        (
            City::Paris,
            "Background scene: Paris - the Eiffel Tower from the Trocadero, a Seine-side \
             book stall, the Louvre pyramid and a Montmartre cafe terrace."
        ),
        (
            City::London,
            "Background scene: London - Tower Bridge, a red telephone box on a rainy \
             street, the Big Ben clock face and a Notting Hill mews."
        ),
        (
            City::NewYork,
            "Background scene: New York - the Brooklyn Bridge walkway, Times Square neon, \
             a Central Park lawn and a SoHo fire-escape street."
        ),
        (
            City::Rome,
            "Background scene: Rome - the Colosseum at golden hour, the Trevi fountain, \
             a Trastevere alley and the Spanish Steps."
        ),
        (
            City::Dubai,
            "Background scene: Dubai - the Burj Khalifa observation view, a desert dune \
             at sunset, the Dubai Marina promenade and a gold souk arcade."
        ),
        (
            City::Beijing,
            "Background scene: Beijing - the Forbidden City gate, a Great Wall ridge, \
             a hutong courtyard and the Temple of Heaven."
        ),
        (
            City::Seoul,
            "Background scene: Seoul - Gyeongbokgung palace, a Bukchon hanok lane, \
             the N Seoul Tower at night and a Han river park."
        ),
        (
            City::Sydney,
            "Background scene: Sydney - the Opera House sails, the Harbour Bridge, \
             Bondi beach and a Royal Botanic Garden lawn."
        ),
        (
            City::Amsterdam,
            "Background scene: Amsterdam - a canal-side row of gabled houses, a flower \
             market, a bicycle bridge and a windmill at the city edge."
        ),
    ]);
}
