//! Shop catalog — prices and purchase effects.
//!
//! Purchases verify the gold balance first; on shortfall nothing is
//! mutated and the shortfall is reported to the caller.

use hecs::World;

use holdout_core::components::{Hero, Structure};
use holdout_core::constants::*;
use holdout_core::enums::ShopItem;
use holdout_core::errors::CommandError;
use holdout_core::stats::StatBlock;
use holdout_core::types::Position;

use crate::economy::EconomyLedger;
use crate::world_setup;

/// Gold price of a shop item.
pub fn price(item: ShopItem) -> u32 {
    match item {
        ShopItem::DamageUp => 60,
        ShopItem::AttackSpeedUp => 80,
        ShopItem::MaxHealthUp => 50,
        ShopItem::ArmorUp => 70,
        ShopItem::RegenUp => 40,
        ShopItem::AmmoPack => 25,
        ShopItem::Tower => 100,
    }
}

/// Per-purchase effect sizes.
const DAMAGE_STEP: f64 = 0.5;
const ATTACK_SPEED_STEP: f64 = 0.25;
const MAX_HEALTH_STEP: f64 = 20.0;
const ARMOR_STEP: f64 = 5.0;
const REGEN_STEP: f64 = 0.5;
const AMMO_PACK_SIZE: u32 = 15;

/// Buy an item: spend first, then apply the effect atomically.
pub fn purchase(
    world: &mut World,
    ledger: &mut EconomyLedger,
    item: ShopItem,
) -> Result<(), CommandError> {
    // Tower placement is validated before any gold moves.
    let tower_slot = if item == ShopItem::Tower {
        Some(free_tower_slot(world).ok_or(CommandError::NoTowerSlot)?)
    } else {
        None
    };

    ledger.spend(price(item))?;

    match item {
        ShopItem::AmmoPack => ledger.add_ammo(AMMO_PACK_SIZE),
        ShopItem::Tower => {
            let (x, z) = tower_slot.unwrap_or_default();
            world_setup::spawn_tower(world, x, z);
        }
        _ => apply_hero_upgrade(world, item),
    }
    Ok(())
}

/// Apply a stat upgrade to the hero.
fn apply_hero_upgrade(world: &mut World, item: ShopItem) {
    for (_entity, (hero, stats)) in world.query_mut::<(&mut Hero, &mut StatBlock)>() {
        match item {
            ShopItem::DamageUp => stats.damage += DAMAGE_STEP,
            ShopItem::AttackSpeedUp => stats.attack_speed += ATTACK_SPEED_STEP,
            ShopItem::MaxHealthUp => {
                stats.max_health += MAX_HEALTH_STEP;
                stats.heal(MAX_HEALTH_STEP);
            }
            ShopItem::ArmorUp => stats.armor += ARMOR_STEP,
            ShopItem::RegenUp => hero.health_regen += REGEN_STEP,
            ShopItem::AmmoPack | ShopItem::Tower => {}
        }
    }
}

/// Find the first free slot on the tower ring, honoring the minimum
/// structure spacing.
fn free_tower_slot(world: &World) -> Option<(f64, f64)> {
    let occupied: Vec<Position> = {
        let mut q = world.query::<(&Structure, &Position)>();
        q.iter().map(|(_, (_, pos))| *pos).collect()
    };

    for i in 0..TOWER_SLOT_COUNT {
        let angle = std::f64::consts::TAU * i as f64 / TOWER_SLOT_COUNT as f64;
        let slot = Position::new(
            TOWER_SLOT_RADIUS * angle.cos(),
            0.0,
            TOWER_SLOT_RADIUS * angle.sin(),
        );
        let clear = occupied
            .iter()
            .all(|p| p.horizontal_range_to(&slot) >= STRUCTURE_MIN_SPACING);
        if clear {
            return Some((slot.x, slot.z));
        }
    }
    None
}
