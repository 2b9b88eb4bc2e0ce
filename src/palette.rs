//! The X11 color palette.
//!
//! Every entry is available in three forms:
//!
//! * as an associated constant on [`Color`], e.g. [`Color::CORNFLOWER_BLUE`],
//! * as a packed `0xRRGGBBAA` constant in this module, e.g.
//!   [`CORNFLOWER_BLUE_RGBA32`], for packed vertex colors,
//! * as a [`NamedColor`] in [`NAMED_COLORS`], which can be searched by name
//!   with [`lookup`].
//!
//! Both constant forms are generated from the same 8-bit table, so a color
//! constant quantized with [`Color::to_packed`] always yields its packed
//! counterpart.
//!
//! The palette follows the X11 definitions rather than CSS where the two
//! disagree: [`Color::GRAY`], [`Color::GREEN`], [`Color::MAROON`] and
//! [`Color::PURPLE`] are the X11 values, and the CSS values are available
//! with a `WEB_` prefix.
//!
//! <https://en.wikipedia.org/wiki/X11_color_names>

use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::color::{pack_rgba32, Color};
use crate::util::normalize_name;

/// A palette entry.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NamedColor {
    /// The `snake_case` name of the color, e.g. `"cornflower_blue"`.
    pub name: &'static str,
    /// The human readable name of the color, e.g. `"Cornflower Blue"`.
    pub display_name: &'static str,
    /// The color as floats.
    pub color: Color,
    /// The color packed as `0xRRGGBBAA`.
    pub rgba32: u32,
}

macro_rules! palette {
    ($($ident:ident, $packed:ident, $name:literal, $display:literal => ($r:literal, $g:literal, $b:literal, $a:literal);)*) => {
        impl Color {
            $(
                #[doc = concat!("The ", $display, " color `{ R: ", $r, ", G: ", $g, ", B: ", $b, ", A: ", $a, " }`.")]
                pub const $ident: Color = Color::from_bytes($r, $g, $b, $a);
            )*
        }

        $(
            #[doc = concat!("[`Color::", stringify!($ident), "`] packed as RGBA32.")]
            pub const $packed: u32 = pack_rgba32($r, $g, $b, $a);
        )*

        /// Every palette entry, in X11 listing order.
        pub static NAMED_COLORS: &[NamedColor] = &[
            $(
                NamedColor {
                    name: $name,
                    display_name: $display,
                    color: Color::$ident,
                    rgba32: $packed,
                },
            )*
        ];
    };
}

palette! {
    ALICE_BLUE, ALICE_BLUE_RGBA32, "alice_blue", "Alice Blue" => (240, 248, 255, 255);
    ANTIQUE_WHITE, ANTIQUE_WHITE_RGBA32, "antique_white", "Antique White" => (250, 235, 215, 255);
    AQUA, AQUA_RGBA32, "aqua", "Aqua" => (0, 255, 255, 255);
    AQUAMARINE, AQUAMARINE_RGBA32, "aquamarine", "Aquamarine" => (127, 255, 212, 255);
    AZURE, AZURE_RGBA32, "azure", "Azure" => (240, 255, 255, 255);
    BEIGE, BEIGE_RGBA32, "beige", "Beige" => (245, 245, 220, 255);
    BISQUE, BISQUE_RGBA32, "bisque", "Bisque" => (255, 228, 196, 255);
    BLACK, BLACK_RGBA32, "black", "Black" => (0, 0, 0, 255);
    BLANCHED_ALMOND, BLANCHED_ALMOND_RGBA32, "blanched_almond", "Blanched Almond" => (255, 235, 205, 255);
    BLUE, BLUE_RGBA32, "blue", "Blue" => (0, 0, 255, 255);
    BLUE_VIOLET, BLUE_VIOLET_RGBA32, "blue_violet", "Blue Violet" => (138, 43, 226, 255);
    BROWN, BROWN_RGBA32, "brown", "Brown" => (165, 42, 42, 255);
    BURLYWOOD, BURLYWOOD_RGBA32, "burlywood", "Burlywood" => (222, 184, 135, 255);
    CADET_BLUE, CADET_BLUE_RGBA32, "cadet_blue", "Cadet Blue" => (95, 158, 160, 255);
    CHARTREUSE, CHARTREUSE_RGBA32, "chartreuse", "Chartreuse" => (127, 255, 0, 255);
    CHOCOLATE, CHOCOLATE_RGBA32, "chocolate", "Chocolate" => (210, 105, 30, 255);
    CORAL, CORAL_RGBA32, "coral", "Coral" => (255, 127, 80, 255);
    CORNFLOWER_BLUE, CORNFLOWER_BLUE_RGBA32, "cornflower_blue", "Cornflower Blue" => (100, 149, 237, 255);
    CORNSILK, CORNSILK_RGBA32, "cornsilk", "Cornsilk" => (255, 248, 220, 255);
    CRIMSON, CRIMSON_RGBA32, "crimson", "Crimson" => (220, 20, 60, 255);
    CYAN, CYAN_RGBA32, "cyan", "Cyan" => (0, 255, 255, 255);
    DARK_BLUE, DARK_BLUE_RGBA32, "dark_blue", "Dark Blue" => (0, 0, 139, 255);
    DARK_CYAN, DARK_CYAN_RGBA32, "dark_cyan", "Dark Cyan" => (0, 139, 139, 255);
    DARK_GOLDENROD, DARK_GOLDENROD_RGBA32, "dark_goldenrod", "Dark Goldenrod" => (184, 134, 11, 255);
    DARK_GRAY, DARK_GRAY_RGBA32, "dark_gray", "Dark Gray" => (169, 169, 169, 255);
    DARK_GREEN, DARK_GREEN_RGBA32, "dark_green", "Dark Green" => (0, 100, 0, 255);
    DARK_KHAKI, DARK_KHAKI_RGBA32, "dark_khaki", "Dark Khaki" => (189, 183, 107, 255);
    DARK_MAGENTA, DARK_MAGENTA_RGBA32, "dark_magenta", "Dark Magenta" => (139, 0, 139, 255);
    DARK_OLIVE_GREEN, DARK_OLIVE_GREEN_RGBA32, "dark_olive_green", "Dark Olive Green" => (85, 107, 47, 255);
    DARK_ORANGE, DARK_ORANGE_RGBA32, "dark_orange", "Dark Orange" => (255, 140, 0, 255);
    DARK_ORCHID, DARK_ORCHID_RGBA32, "dark_orchid", "Dark Orchid" => (153, 50, 204, 255);
    DARK_RED, DARK_RED_RGBA32, "dark_red", "Dark Red" => (139, 0, 0, 255);
    DARK_SALMON, DARK_SALMON_RGBA32, "dark_salmon", "Dark Salmon" => (233, 150, 122, 255);
    DARK_SEA_GREEN, DARK_SEA_GREEN_RGBA32, "dark_sea_green", "Dark Sea Green" => (143, 188, 143, 255);
    DARK_SLATE_BLUE, DARK_SLATE_BLUE_RGBA32, "dark_slate_blue", "Dark Slate Blue" => (72, 61, 139, 255);
    DARK_SLATE_GRAY, DARK_SLATE_GRAY_RGBA32, "dark_slate_gray", "Dark Slate Gray" => (47, 79, 79, 255);
    DARK_TURQUOISE, DARK_TURQUOISE_RGBA32, "dark_turquoise", "Dark Turquoise" => (0, 206, 209, 255);
    DARK_VIOLET, DARK_VIOLET_RGBA32, "dark_violet", "Dark Violet" => (148, 0, 211, 255);
    DEEP_PINK, DEEP_PINK_RGBA32, "deep_pink", "Deep Pink" => (255, 20, 147, 255);
    DEEP_SKY_BLUE, DEEP_SKY_BLUE_RGBA32, "deep_sky_blue", "Deep Sky Blue" => (0, 191, 255, 255);
    DIM_GRAY, DIM_GRAY_RGBA32, "dim_gray", "Dim Gray" => (105, 105, 105, 255);
    DODGER_BLUE, DODGER_BLUE_RGBA32, "dodger_blue", "Dodger Blue" => (30, 144, 255, 255);
    FIREBRICK, FIREBRICK_RGBA32, "firebrick", "Firebrick" => (178, 34, 34, 255);
    FLORAL_WHITE, FLORAL_WHITE_RGBA32, "floral_white", "Floral White" => (255, 250, 240, 255);
    FOREST_GREEN, FOREST_GREEN_RGBA32, "forest_green", "Forest Green" => (34, 139, 34, 255);
    FUCHSIA, FUCHSIA_RGBA32, "fuchsia", "Fuchsia" => (255, 0, 255, 255);
    GAINSBORO, GAINSBORO_RGBA32, "gainsboro", "Gainsboro" => (220, 220, 220, 255);
    GHOST_WHITE, GHOST_WHITE_RGBA32, "ghost_white", "Ghost White" => (248, 248, 255, 255);
    GOLD, GOLD_RGBA32, "gold", "Gold" => (255, 215, 0, 255);
    GOLDENROD, GOLDENROD_RGBA32, "goldenrod", "Goldenrod" => (218, 165, 32, 255);
    GRAY, GRAY_RGBA32, "gray", "Gray" => (190, 190, 190, 255);
    WEB_GRAY, WEB_GRAY_RGBA32, "web_gray", "Web Gray" => (128, 128, 128, 255);
    GREEN, GREEN_RGBA32, "green", "Green" => (0, 255, 0, 255);
    WEB_GREEN, WEB_GREEN_RGBA32, "web_green", "Web Green" => (0, 128, 0, 255);
    GREEN_YELLOW, GREEN_YELLOW_RGBA32, "green_yellow", "Green Yellow" => (173, 255, 47, 255);
    HONEYDEW, HONEYDEW_RGBA32, "honeydew", "Honeydew" => (240, 255, 240, 255);
    HOT_PINK, HOT_PINK_RGBA32, "hot_pink", "Hot Pink" => (255, 105, 180, 255);
    INDIAN_RED, INDIAN_RED_RGBA32, "indian_red", "Indian Red" => (205, 92, 92, 255);
    INDIGO, INDIGO_RGBA32, "indigo", "Indigo" => (75, 0, 130, 255);
    IVORY, IVORY_RGBA32, "ivory", "Ivory" => (255, 255, 240, 255);
    KHAKI, KHAKI_RGBA32, "khaki", "Khaki" => (240, 230, 140, 255);
    LAVENDER, LAVENDER_RGBA32, "lavender", "Lavender" => (230, 230, 250, 255);
    LAVENDER_BLUSH, LAVENDER_BLUSH_RGBA32, "lavender_blush", "Lavender Blush" => (255, 240, 245, 255);
    LAWN_GREEN, LAWN_GREEN_RGBA32, "lawn_green", "Lawn Green" => (124, 252, 0, 255);
    LEMON_CHIFFON, LEMON_CHIFFON_RGBA32, "lemon_chiffon", "Lemon Chiffon" => (255, 250, 205, 255);
    LIGHT_BLUE, LIGHT_BLUE_RGBA32, "light_blue", "Light Blue" => (173, 216, 230, 255);
    LIGHT_CORAL, LIGHT_CORAL_RGBA32, "light_coral", "Light Coral" => (240, 128, 128, 255);
    LIGHT_CYAN, LIGHT_CYAN_RGBA32, "light_cyan", "Light Cyan" => (224, 255, 255, 255);
    LIGHT_GOLDENROD, LIGHT_GOLDENROD_RGBA32, "light_goldenrod", "Light Goldenrod" => (250, 250, 210, 255);
    LIGHT_GRAY, LIGHT_GRAY_RGBA32, "light_gray", "Light Gray" => (211, 211, 211, 255);
    LIGHT_GREEN, LIGHT_GREEN_RGBA32, "light_green", "Light Green" => (144, 238, 144, 255);
    LIGHT_PINK, LIGHT_PINK_RGBA32, "light_pink", "Light Pink" => (255, 182, 193, 255);
    LIGHT_SALMON, LIGHT_SALMON_RGBA32, "light_salmon", "Light Salmon" => (255, 160, 122, 255);
    LIGHT_SEA_GREEN, LIGHT_SEA_GREEN_RGBA32, "light_sea_green", "Light Sea Green" => (32, 178, 170, 255);
    LIGHT_SKY_BLUE, LIGHT_SKY_BLUE_RGBA32, "light_sky_blue", "Light Sky Blue" => (135, 206, 250, 255);
    LIGHT_SLATE_GRAY, LIGHT_SLATE_GRAY_RGBA32, "light_slate_gray", "Light Slate Gray" => (119, 136, 153, 255);
    LIGHT_STEEL_BLUE, LIGHT_STEEL_BLUE_RGBA32, "light_steel_blue", "Light Steel Blue" => (176, 196, 222, 255);
    LIGHT_YELLOW, LIGHT_YELLOW_RGBA32, "light_yellow", "Light Yellow" => (255, 255, 224, 255);
    LIME, LIME_RGBA32, "lime", "Lime" => (0, 255, 0, 255);
    LIME_GREEN, LIME_GREEN_RGBA32, "lime_green", "Lime Green" => (50, 205, 50, 255);
    LINEN, LINEN_RGBA32, "linen", "Linen" => (250, 240, 230, 255);
    MAGENTA, MAGENTA_RGBA32, "magenta", "Magenta" => (255, 0, 255, 255);
    MAROON, MAROON_RGBA32, "maroon", "Maroon" => (176, 48, 96, 255);
    WEB_MAROON, WEB_MAROON_RGBA32, "web_maroon", "Web Maroon" => (128, 0, 0, 255);
    MEDIUM_AQUAMARINE, MEDIUM_AQUAMARINE_RGBA32, "medium_aquamarine", "Medium Aquamarine" => (102, 205, 170, 255);
    MEDIUM_BLUE, MEDIUM_BLUE_RGBA32, "medium_blue", "Medium Blue" => (0, 0, 205, 255);
    MEDIUM_ORCHID, MEDIUM_ORCHID_RGBA32, "medium_orchid", "Medium Orchid" => (186, 85, 211, 255);
    MEDIUM_PURPLE, MEDIUM_PURPLE_RGBA32, "medium_purple", "Medium Purple" => (147, 112, 219, 255);
    MEDIUM_SEA_GREEN, MEDIUM_SEA_GREEN_RGBA32, "medium_sea_green", "Medium Sea Green" => (60, 179, 113, 255);
    MEDIUM_SLATE_BLUE, MEDIUM_SLATE_BLUE_RGBA32, "medium_slate_blue", "Medium Slate Blue" => (123, 104, 238, 255);
    MEDIUM_SPRING_GREEN, MEDIUM_SPRING_GREEN_RGBA32, "medium_spring_green", "Medium Spring Green" => (0, 250, 154, 255);
    MEDIUM_TURQUOISE, MEDIUM_TURQUOISE_RGBA32, "medium_turquoise", "Medium Turquoise" => (72, 209, 204, 255);
    MEDIUM_VIOLET_RED, MEDIUM_VIOLET_RED_RGBA32, "medium_violet_red", "Medium Violet Red" => (199, 21, 133, 255);
    MIDNIGHT_BLUE, MIDNIGHT_BLUE_RGBA32, "midnight_blue", "Midnight Blue" => (25, 25, 112, 255);
    MINT_CREAM, MINT_CREAM_RGBA32, "mint_cream", "Mint Cream" => (245, 255, 250, 255);
    MISTY_ROSE, MISTY_ROSE_RGBA32, "misty_rose", "Misty Rose" => (255, 228, 225, 255);
    MOCCASIN, MOCCASIN_RGBA32, "moccasin", "Moccasin" => (255, 228, 181, 255);
    NAVAJO_WHITE, NAVAJO_WHITE_RGBA32, "navajo_white", "Navajo White" => (255, 222, 173, 255);
    NAVY_BLUE, NAVY_BLUE_RGBA32, "navy_blue", "Navy Blue" => (0, 0, 128, 255);
    OLD_LACE, OLD_LACE_RGBA32, "old_lace", "Old Lace" => (253, 245, 230, 255);
    OLIVE, OLIVE_RGBA32, "olive", "Olive" => (128, 128, 0, 255);
    OLIVE_DRAB, OLIVE_DRAB_RGBA32, "olive_drab", "Olive Drab" => (107, 142, 35, 255);
    ORANGE, ORANGE_RGBA32, "orange", "Orange" => (255, 165, 0, 255);
    ORANGE_RED, ORANGE_RED_RGBA32, "orange_red", "Orange Red" => (255, 69, 0, 255);
    ORCHID, ORCHID_RGBA32, "orchid", "Orchid" => (218, 112, 214, 255);
    PALE_GOLDENROD, PALE_GOLDENROD_RGBA32, "pale_goldenrod", "Pale Goldenrod" => (238, 232, 170, 255);
    PALE_GREEN, PALE_GREEN_RGBA32, "pale_green", "Pale Green" => (152, 251, 152, 255);
    PALE_TURQUOISE, PALE_TURQUOISE_RGBA32, "pale_turquoise", "Pale Turquoise" => (175, 238, 238, 255);
    PALE_VIOLET_RED, PALE_VIOLET_RED_RGBA32, "pale_violet_red", "Pale Violet Red" => (219, 112, 147, 255);
    PAPAYA_WHIP, PAPAYA_WHIP_RGBA32, "papaya_whip", "Papaya Whip" => (255, 239, 213, 255);
    PEACH_PUFF, PEACH_PUFF_RGBA32, "peach_puff", "Peach Puff" => (255, 218, 185, 255);
    PERU, PERU_RGBA32, "peru", "Peru" => (205, 133, 63, 255);
    PINK, PINK_RGBA32, "pink", "Pink" => (255, 192, 203, 255);
    PLUM, PLUM_RGBA32, "plum", "Plum" => (221, 160, 221, 255);
    POWDER_BLUE, POWDER_BLUE_RGBA32, "powder_blue", "Powder Blue" => (176, 224, 230, 255);
    PURPLE, PURPLE_RGBA32, "purple", "Purple" => (160, 32, 240, 255);
    WEB_PURPLE, WEB_PURPLE_RGBA32, "web_purple", "Web Purple" => (128, 0, 128, 255);
    REBECCA_PURPLE, REBECCA_PURPLE_RGBA32, "rebecca_purple", "Rebecca Purple" => (102, 51, 153, 255);
    RED, RED_RGBA32, "red", "Red" => (255, 0, 0, 255);
    ROSY_BROWN, ROSY_BROWN_RGBA32, "rosy_brown", "Rosy Brown" => (188, 143, 143, 255);
    ROYAL_BLUE, ROYAL_BLUE_RGBA32, "royal_blue", "Royal Blue" => (65, 105, 225, 255);
    SADDLE_BROWN, SADDLE_BROWN_RGBA32, "saddle_brown", "Saddle Brown" => (139, 69, 19, 255);
    SALMON, SALMON_RGBA32, "salmon", "Salmon" => (250, 128, 114, 255);
    SANDY_BROWN, SANDY_BROWN_RGBA32, "sandy_brown", "Sandy Brown" => (244, 164, 96, 255);
    SEA_GREEN, SEA_GREEN_RGBA32, "sea_green", "Sea Green" => (46, 139, 87, 255);
    SEASHELL, SEASHELL_RGBA32, "seashell", "Seashell" => (255, 245, 238, 255);
    SIENNA, SIENNA_RGBA32, "sienna", "Sienna" => (160, 82, 45, 255);
    SILVER, SILVER_RGBA32, "silver", "Silver" => (192, 192, 192, 255);
    SKY_BLUE, SKY_BLUE_RGBA32, "sky_blue", "Sky Blue" => (135, 206, 235, 255);
    SLATE_BLUE, SLATE_BLUE_RGBA32, "slate_blue", "Slate Blue" => (106, 90, 205, 255);
    SLATE_GRAY, SLATE_GRAY_RGBA32, "slate_gray", "Slate Gray" => (112, 128, 144, 255);
    SNOW, SNOW_RGBA32, "snow", "Snow" => (255, 250, 250, 255);
    SPRING_GREEN, SPRING_GREEN_RGBA32, "spring_green", "Spring Green" => (0, 255, 127, 255);
    STEEL_BLUE, STEEL_BLUE_RGBA32, "steel_blue", "Steel Blue" => (70, 130, 180, 255);
    TAN, TAN_RGBA32, "tan", "Tan" => (210, 180, 140, 255);
    TEAL, TEAL_RGBA32, "teal", "Teal" => (0, 128, 128, 255);
    THISTLE, THISTLE_RGBA32, "thistle", "Thistle" => (216, 191, 216, 255);
    TOMATO, TOMATO_RGBA32, "tomato", "Tomato" => (255, 99, 71, 255);
    TRANSPARENT, TRANSPARENT_RGBA32, "transparent", "Transparent" => (0, 0, 0, 0);
    TURQUOISE, TURQUOISE_RGBA32, "turquoise", "Turquoise" => (64, 224, 208, 255);
    VIOLET, VIOLET_RGBA32, "violet", "Violet" => (238, 130, 238, 255);
    WHEAT, WHEAT_RGBA32, "wheat", "Wheat" => (245, 222, 179, 255);
    WHITE, WHITE_RGBA32, "white", "White" => (255, 255, 255, 255);
    WHITE_SMOKE, WHITE_SMOKE_RGBA32, "white_smoke", "White Smoke" => (245, 245, 245, 255);
    YELLOW, YELLOW_RGBA32, "yellow", "Yellow" => (255, 255, 0, 255);
    YELLOW_GREEN, YELLOW_GREEN_RGBA32, "yellow_green", "Yellow Green" => (154, 205, 50, 255);
}

fn index() -> &'static HashMap<String, usize> {
    static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let index: HashMap<_, _> = NAMED_COLORS
            .iter()
            .enumerate()
            .map(|(i, named)| (normalize_name(named.name), i))
            .collect();
        log::trace!("built color name index with {} entries", index.len());
        index
    })
}

/// Finds a palette entry by name.
///
/// Matching ignores ASCII case, whitespace, underscores and hyphens, so
/// `"cornflower_blue"`, `"Cornflower Blue"` and `"CornflowerBlue"` all find
/// the same entry.
pub fn lookup(name: &str) -> Option<&'static NamedColor> {
    index()
        .get(&normalize_name(name))
        .map(|&i| &NAMED_COLORS[i])
}

/// Finds the first palette entry with the given packed value.
///
/// Some colors appear under more than one name (`aqua` and `cyan`, for
/// example). The entry listed first wins.
pub fn lookup_rgba32(rgba: u32) -> Option<&'static NamedColor> {
    NAMED_COLORS.iter().find(|named| named.rgba32 == rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_eq!(NAMED_COLORS.len(), 146);
        assert_eq!(index().len(), NAMED_COLORS.len());
    }

    #[test]
    fn float_and_packed_agree() {
        for named in NAMED_COLORS {
            assert_eq!(named.color.to_packed(), named.rgba32, "{}", named.name);
            assert_eq!(Color::from_packed(named.rgba32), named.color, "{}", named.name);
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(Color::RED, Color::from_rgba(1., 0., 0., 1.));
        assert_eq!(RED_RGBA32, 0xFF0000FF);
        assert_eq!(CORNFLOWER_BLUE_RGBA32, 0x6495EDFF);
        let c = Color::CORNFLOWER_BLUE;
        assert!((c.r - 0.392156863).abs() < 1e-6);
        assert!((c.g - 0.584313725).abs() < 1e-6);
        assert!((c.b - 0.929411765).abs() < 1e-6);
        assert_eq!(c.a, 1.);
        assert_eq!(Color::TRANSPARENT, Color::from_rgba(0., 0., 0., 0.));
        assert_eq!(TRANSPARENT_RGBA32, 0);
    }

    #[test]
    fn only_transparent_is_translucent() {
        let translucent: Vec<_> = NAMED_COLORS
            .iter()
            .filter(|named| named.color.a != 1.)
            .map(|named| named.name)
            .collect();
        assert_eq!(translucent, ["transparent"]);
    }

    #[test]
    fn names_match_display_names() {
        for named in NAMED_COLORS {
            assert_eq!(normalize_name(named.name), normalize_name(named.display_name));
        }
    }

    #[test]
    fn lookup_spellings() {
        for name in ["cornflower_blue", "Cornflower Blue", "CornflowerBlue", "cornflower-blue"] {
            assert_eq!(lookup(name).map(|named| named.color), Some(Color::CORNFLOWER_BLUE));
        }
        assert_eq!(lookup("web_purple").map(|named| named.rgba32), Some(0x800080FF));
        assert_eq!(lookup("no such color"), None);
        assert_eq!(Color::from_name("tomato"), Some(Color::TOMATO));
    }

    #[test]
    fn reverse_lookup_prefers_first_entry() {
        assert_eq!(lookup_rgba32(0x00FFFFFF).map(|named| named.name), Some("aqua"));
        assert_eq!(lookup_rgba32(0xFF00FFFF).map(|named| named.name), Some("fuchsia"));
        assert_eq!(lookup_rgba32(0x00000000).map(|named| named.name), Some("transparent"));
        assert_eq!(lookup_rgba32(0x01020304), None);
    }
}
