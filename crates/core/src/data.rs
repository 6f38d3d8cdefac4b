//! The built-in cocktail taxonomy: authored ground truth for the catalog.

use crate::record::CocktailRecord;

fn record(
    name: &str,
    spirit_base: &str,
    primary_flavor: &str,
    complexity: &str,
    (bitterness, sweetness, richness): (u8, u8, u8),
    color_palette: &[&str],
    (has_cream, has_ice, is_effervescent): (bool, bool, bool),
    description: &str,
) -> CocktailRecord {
    CocktailRecord {
        name: name.to_string(),
        spirit_base: spirit_base.to_string(),
        primary_flavor: primary_flavor.to_string(),
        complexity: complexity.to_string(),
        bitterness,
        sweetness,
        richness,
        color_palette: color_palette.iter().map(|hex| hex.to_string()).collect(),
        has_cream,
        has_ice,
        is_effervescent,
        description: description.to_string(),
    }
}

/// All authored cocktail records, in catalog order.
pub fn builtin_taxonomy() -> Vec<CocktailRecord> {
    vec![
        record(
            "Negroni",
            "gin",
            "bitter",
            "simple",
            (8, 3, 6),
            &["#8B1A1A", "#D2691E", "#FFA500"],
            (false, true, false),
            "Classic aperitivo: gin, Campari, vermouth rosso. Bitter, bold, balanced.",
        ),
        record(
            "Mai Tai",
            "rum",
            "fruity",
            "complex",
            (2, 6, 8),
            &["#FF6B35", "#F7931E", "#8B4513", "#00A86B"],
            (false, true, false),
            "Tiki classic: aged rum, lime, orgeat, curacao. Sweet, tropical, complex.",
        ),
        record(
            "Daiquiri",
            "rum",
            "sour",
            "simple",
            (1, 3, 3),
            &["#FFF8DC", "#FFE4B5", "#F0E68C"],
            (false, true, false),
            "Elegant simplicity: white rum, fresh lime, simple syrup.",
        ),
        record(
            "Old Fashioned",
            "whiskey",
            "spirit_forward",
            "simple",
            (4, 2, 7),
            &["#8B4513", "#A0522D", "#654321"],
            (false, true, false),
            "Timeless classic: whiskey, sugar, bitters, orange twist.",
        ),
        record(
            "Mojito",
            "rum",
            "herbal",
            "moderate",
            (1, 4, 2),
            &["#00AA66", "#FFE4B5", "#FFFFFF"],
            (false, true, true),
            "Refreshing summer drink: white rum, mint, lime, soda, sugar.",
        ),
        record(
            "Margarita",
            "tequila",
            "sour",
            "moderate",
            (0, 4, 3),
            &["#FFE4B5", "#FFA500", "#FF6347"],
            (false, true, false),
            "Iconic: tequila, lime, triple sec, salt rim.",
        ),
        record(
            "Espresso Martini",
            "vodka",
            "bitter",
            "moderate",
            (6, 5, 8),
            &["#2F4F4F", "#8B7355", "#FFFFFF"],
            (false, false, false),
            "Modern sophistication: vodka, coffee liqueur, espresso, cream.",
        ),
        record(
            "Sazerac",
            "whiskey",
            "herbal",
            "simple",
            (5, 1, 6),
            &["#A0522D", "#8B4513", "#FFD700"],
            (false, true, false),
            "New Orleans classic: rye, absinthe, Peychaud's bitters.",
        ),
        record(
            "Martini",
            "gin",
            "spirit_forward",
            "simple",
            (2, 1, 3),
            &["#F5F5F5", "#E8E8E8", "#C0C0C0"],
            (false, false, false),
            "Crystalline restraint: gin, dry vermouth, olive or lemon twist.",
        ),
        record(
            "Manhattan",
            "whiskey",
            "spirit_forward",
            "simple",
            (5, 4, 7),
            &["#8B0000", "#A0522D", "#D2691E"],
            (false, false, false),
            "Stirred classic: rye, sweet vermouth, aromatic bitters.",
        ),
        record(
            "Pina Colada",
            "rum",
            "creamy",
            "moderate",
            (0, 8, 9),
            &["#FFFDD0", "#FFF8DC", "#F5DEB3"],
            (true, true, false),
            "Blended escape: rum, coconut cream, pineapple.",
        ),
        record(
            "Paloma",
            "tequila",
            "fruity",
            "simple",
            (1, 5, 2),
            &["#FFB6C1", "#FF69B4", "#FFFACD"],
            (false, true, true),
            "Grapefruit highball: tequila, soda, lime, salted rim.",
        ),
        record(
            "Oaxaca Old Fashioned",
            "mezcal",
            "smoky",
            "moderate",
            (4, 3, 6),
            &["#8B4513", "#CD853F", "#556B2F"],
            (false, true, false),
            "Agave riff on the classic: mezcal, reposado, agave nectar, mole bitters.",
        ),
    ]
}
