use game_core::state::Rgb;
use game_core::{Consumable, Equippable, Item, ItemTemplate};

pub fn items() -> Vec<(String, ItemTemplate)> {
    vec![
        consumable(
            "health_potion",
            "Health Potion",
            '!',
            Rgb(8, 80, 8),
            Consumable::Healing { amount: 4 },
        ),
        consumable(
            "big_health_potion",
            "Big Health Potion",
            '!',
            Rgb(10, 137, 10),
            Consumable::Healing { amount: 12 },
        ),
        consumable(
            "lightning_scroll",
            "Lightning Scroll",
            '~',
            Rgb(255, 255, 0),
            Consumable::Lightning {
                damage: 20,
                max_range: 5,
            },
        ),
        consumable(
            "confusion_scroll",
            "Confusion Scroll",
            '~',
            Rgb(207, 63, 255),
            Consumable::Confusion { turns: 10 },
        ),
        consumable(
            "fireball_scroll",
            "Fireball Scroll",
            '~',
            Rgb(255, 0, 0),
            Consumable::Fireball {
                damage: 12,
                radius: 3,
            },
        ),
        gear("dull_dagger", "Dull Dagger", '/', Rgb(41, 21, 0), Equippable::weapon(1)),
        gear("dagger", "Dagger", '/', Rgb(87, 43, 0), Equippable::weapon(2)),
        gear("sharp_dagger", "Sharp Dagger", '/', Rgb(140, 71, 1), Equippable::weapon(3)),
        gear("dull_sword", "Dull Sword", '/', Rgb(89, 89, 89), Equippable::weapon(3)),
        gear("sword", "Sword", '/', Rgb(117, 116, 116), Equippable::weapon(4)),
        gear("sharp_sword", "Sharp Sword", '/', Rgb(189, 189, 189), Equippable::weapon(5)),
        gear("leather_armor", "Leather Armor", '[', Rgb(139, 69, 19), Equippable::armor(1)),
        gear("chain_mail", "Chain Mail", '[', Rgb(117, 117, 117), Equippable::armor(3)),
        gear("iron_armor", "Iron Armor", '[', Rgb(212, 212, 212), Equippable::armor(4)),
        gear("diamond_armor", "Diamond Armor", '[', Rgb(89, 233, 212), Equippable::armor(5)),
    ]
}

fn consumable(
    id: &str,
    name: &str,
    glyph: char,
    color: Rgb,
    consumable: Consumable,
) -> (String, ItemTemplate) {
    template(
        id,
        name,
        glyph,
        color,
        Item {
            consumable: Some(consumable),
            equippable: None,
        },
    )
}

fn gear(
    id: &str,
    name: &str,
    glyph: char,
    color: Rgb,
    equippable: Equippable,
) -> (String, ItemTemplate) {
    template(
        id,
        name,
        glyph,
        color,
        Item {
            consumable: None,
            equippable: Some(equippable),
        },
    )
}

fn template(id: &str, name: &str, glyph: char, color: Rgb, item: Item) -> (String, ItemTemplate) {
    (
        id.to_owned(),
        ItemTemplate {
            name: name.into(),
            glyph,
            color,
            item,
        },
    )
}
