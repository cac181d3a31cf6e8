//! The built-in item table.

use stockpile_core::{DefinitionId, ItemCategory, ItemDefinition};

fn item(
    id: &str,
    width: u8,
    height: u8,
    sprite: &str,
    name: &str,
    base_price: u32,
    category: ItemCategory,
    description: &str,
) -> ItemDefinition {
    ItemDefinition {
        id: DefinitionId::new(id),
        width,
        height,
        sprite: sprite.to_owned(),
        name: name.to_owned(),
        base_price,
        category,
        description: description.to_owned(),
    }
}

/// The shipped item definitions, in draw-index order.
///
/// Reordering or removing entries changes which definition a given seed
/// draws, so existing entries keep their position; new items go at the end
/// of their category block.
pub fn default_catalog() -> Vec<ItemDefinition> {
    use ItemCategory::*;

    vec![
        // Food
        item(
            "noodles",
            1,
            1,
            "instant_noodles_1x1",
            "Instant Noodles",
            20,
            Food,
            "Bare survival rations. A loss sold alone; combine them first.",
        ),
        item(
            "cola",
            1,
            1,
            "cola_can_1x1",
            "Cola Can",
            35,
            Food,
            "Fizzy comfort. Hard currency after the end of the world.",
        ),
        item(
            "chips",
            1,
            1,
            "potato_chips_1x1",
            "Potato Chips",
            40,
            Food,
            "Mostly air, but the calories are real.",
        ),
        item(
            "spam",
            1,
            1,
            "food_spam_1x1",
            "Canned Ham",
            65,
            Food,
            "Meat. Actual meat. Pays for itself at the counter.",
        ),
        item(
            "beans",
            1,
            1,
            "canned_beans_1x1",
            "Baked Beans",
            45,
            Food,
            "An acquired taste, but packed with protein.",
        ),
        item(
            "energy",
            1,
            1,
            "energy_bar_1x1",
            "Energy Bar",
            55,
            Food,
            "Kills hunger on the move.",
        ),
        item(
            "water",
            1,
            2,
            "water_bottle_1x1",
            "Water Jug",
            120,
            Food,
            "The source of life. Bulky (1x2), but worth the space.",
        ),
        // Weapons
        item(
            "knife",
            1,
            1,
            "weapon_knife_1x1",
            "Tactical Knife",
            70,
            Weapon,
            "Small, sharp, and always within reach.",
        ),
        item(
            "bat",
            1,
            2,
            "weapon_bat_1x2",
            "Baseball Bat",
            90,
            Weapon,
            "Applied physics. Mind the long (1x2) shape.",
        ),
        item(
            "pistol",
            2,
            1,
            "weapon_pistol_2x1",
            "Revolver",
            200,
            Weapon,
            "High noon. Takes two cells across (2x1).",
        ),
        // Medical
        item(
            "bandage",
            1,
            1,
            "med_bandage_1x1",
            "Bandage",
            50,
            Medical,
            "Minor scrape? Wrap it and move on.",
        ),
        item(
            "pills",
            1,
            1,
            "med_pills_1x1",
            "Antibiotics",
            150,
            Medical,
            "Worth more than gold when the clinics close.",
        ),
        item(
            "medkit",
            2,
            2,
            "med_kit_2x2",
            "First Aid Kit",
            400,
            Medical,
            "A huge (2x2) medical pack. Saves lives and fortunes.",
        ),
        // Utility
        item(
            "battery",
            1,
            1,
            "util_battery_1x1",
            "Industrial Battery",
            80,
            Utility,
            "No power, no handheld games.",
        ),
        item(
            "gas",
            2,
            2,
            "util_gas_2x2",
            "Fuel Can",
            350,
            Utility,
            "Liquid gold. A 2x2 hulk, and very flammable.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_definition_has_a_unique_sprite() {
        let defs = default_catalog();
        let mut sprites: Vec<_> = defs.iter().map(|d| d.sprite.as_str()).collect();
        sprites.sort_unstable();
        sprites.dedup();
        assert_eq!(sprites.len(), defs.len());
    }

    #[test]
    fn footprints_fit_an_eight_by_eight_grid() {
        for def in default_catalog() {
            assert!(def.width >= 1 && def.width <= 8, "{}", def.id);
            assert!(def.height >= 1 && def.height <= 8, "{}", def.id);
        }
    }

    #[test]
    fn draw_index_order_is_stable() {
        let defs = default_catalog();
        assert_eq!(defs[0].id, DefinitionId::new("noodles"));
        assert_eq!(defs[6].id, DefinitionId::new("water"));
        assert_eq!(defs[14].id, DefinitionId::new("gas"));
    }
}
