//! The per-tick orchestrator.
//!
//! [`game_tick`] advances one frame of simulation in a fixed order: potion
//! use, player movement, power-ups, pickups, enemies, the dead-enemy sweep,
//! population top-up, chest interaction and finally camera and animation. It
//! returns a [`TickResult`] describing what happened so the presentation
//! layer never has to inspect the state diff itself.

use crate::buffs::PowerUpPickup;
use crate::combat::{EntityId, Item};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::core::messages::Severity;
use crate::dungeon::{Tile, TileGrid};
use crate::effects::EffectKind;
use crate::enemy::{in_melee_contact, think};
use crate::input::InputSource;
use crate::physics::{resolve_collision, tiles_in_radius};
use glam::DVec2;
use rand::Rng;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    PotionUsed { healed: u32, message: String },
    NoPotion { message: String },
    PowerUpCollected { power_up_id: String, message: String },
    AuraStrike {
        target: EntityId,
        damage: u32,
        was_crit: bool,
        message: String,
    },
    EnemyAttack {
        enemy: EntityId,
        damage: u32,
        was_crit: bool,
        message: String,
    },
    EnemyDefeated {
        enemy: EntityId,
        xp_gained: u64,
        gold_gained: u32,
        message: String,
    },
    LevelUp { new_level: u32, message: String },
    LootDropped { position: DVec2, message: String },
    EnemiesSpawned { count: usize, message: String },
    ChestOpened {
        tile: (i64, i64),
        gold: u32,
        message: String,
    },
    ChestTooExpensive { cost: u32, message: String },
    PlayerDied { message: String },
}

impl TickEvent {
    pub fn message(&self) -> &str {
        match self {
            TickEvent::PotionUsed { message, .. }
            | TickEvent::NoPotion { message }
            | TickEvent::PowerUpCollected { message, .. }
            | TickEvent::AuraStrike { message, .. }
            | TickEvent::EnemyAttack { message, .. }
            | TickEvent::EnemyDefeated { message, .. }
            | TickEvent::LevelUp { message, .. }
            | TickEvent::LootDropped { message, .. }
            | TickEvent::EnemiesSpawned { message, .. }
            | TickEvent::ChestOpened { message, .. }
            | TickEvent::ChestTooExpensive { message, .. }
            | TickEvent::PlayerDied { message } => message,
        }
    }

    /// Feed severity, or `None` for events too frequent to show the player.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            TickEvent::PotionUsed { .. } => Some(Severity::Heal),
            TickEvent::NoPotion { .. }
            | TickEvent::PowerUpCollected { .. }
            | TickEvent::EnemyDefeated { .. }
            | TickEvent::LootDropped { .. }
            | TickEvent::ChestOpened { .. } => Some(Severity::Info),
            TickEvent::EnemyAttack { was_crit: true, .. } => Some(Severity::Critical),
            TickEvent::EnemyAttack { .. }
            | TickEvent::ChestTooExpensive { .. }
            | TickEvent::PlayerDied { .. } => Some(Severity::Damage),
            TickEvent::LevelUp { .. } => Some(Severity::LevelUp),
            TickEvent::AuraStrike { .. } | TickEvent::EnemiesSpawned { .. } => None,
        }
    }
}

/// Result of a single tick, consumed by the front-end.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events in the order they happened.
    pub events: Vec<TickEvent>,
    /// Set on the tick the player dies.
    pub game_over: bool,
}

/// Advances the session by `delta_time` seconds.
///
/// Gameplay randomness (crits, wander, loot, chest gold) comes from `rng`;
/// spawn positions keep drawing from the map's seeded stream. Once the game
/// is over every further call is a no-op.
pub fn game_tick<I: InputSource + ?Sized, R: Rng>(
    state: &mut GameState,
    input: &mut I,
    delta_time: f64,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if !state.is_running {
        return result;
    }

    state.ticks += 1;
    state.elapsed += delta_time;
    state.effects.update(delta_time);
    state.messages.update(delta_time);

    // ── 0. Potion ───────────────────────────────────────────────
    if input.take_potion() {
        let potions = state
            .player
            .as_player()
            .map(|data| data.count_items(Item::HealthPotion))
            .unwrap_or(0);
        if potions > 0 {
            let healed = state.player.use_health_potion();
            state.stats.potions_used += 1;
            result.events.push(TickEvent::PotionUsed {
                healed,
                message: format!("Drank a health potion (+{} HP)", healed),
            });
        } else {
            result.events.push(TickEvent::NoPotion {
                message: "No health potions left".to_string(),
            });
        }
    }

    // ── 1. Player movement ──────────────────────────────────────
    {
        let direction = input.movement();
        let player = &mut state.player;
        player.set_velocity(direction.x, direction.y);
        player.integrate(delta_time);
        resolve_collision(&state.dungeon.grid, player, PLAYER_BOX.0, PLAYER_BOX.1);
    }

    // ── 2. Power-ups ────────────────────────────────────────────
    let strikes = state
        .power_ups
        .update(delta_time, Some(&state.player), &mut state.enemies, rng);
    for strike in strikes {
        state.stats.aura_damage_dealt += strike.dealt as u64;
        state.effects.mark(strike.target, EffectKind::AuraHit);
        if strike.damage.is_critical {
            state.effects.mark(strike.target, EffectKind::CriticalFlash);
        }
        result.events.push(TickEvent::AuraStrike {
            target: strike.target,
            damage: strike.dealt,
            was_crit: strike.damage.is_critical,
            message: format!("Aura hit for {}", strike.dealt),
        });
    }

    // ── 3. Pickups ──────────────────────────────────────────────
    let player_position = state.player.position;
    let collected: Vec<PowerUpPickup> = state
        .pickups
        .iter_mut()
        .filter_map(|pickup| pickup.update(player_position).then(|| pickup.clone()))
        .collect();
    state.pickups.retain(|p| !p.collected);
    for pickup in collected {
        if state.power_ups.add(&pickup.power_up_id).is_some() {
            state.stats.buffs_collected += 1;
        }
        result.events.push(TickEvent::PowerUpCollected {
            message: format!("{} collected!", pickup.name),
            power_up_id: pickup.power_up_id,
        });
    }

    // ── 4. Enemies ──────────────────────────────────────────────
    for enemy in state.enemies.iter_mut() {
        if enemy.is_dead() {
            continue;
        }
        think(enemy, player_position, delta_time, rng);
        enemy.integrate(delta_time);
        resolve_collision(&state.dungeon.grid, enemy, ENEMY_BOX.0, ENEMY_BOX.1);
        enemy.tick_cooldown(delta_time);

        if state.player.is_dead() || !in_melee_contact(enemy, &state.player) || !enemy.can_attack() {
            continue;
        }
        let attack = enemy.attack(&mut state.player, rng);
        state.stats.damage_taken += attack.dealt as u64;
        let message = if attack.damage.is_critical {
            format!("Enemy landed a CRITICAL hit for {}!", attack.dealt)
        } else {
            format!("Enemy hit you for {}", attack.dealt)
        };
        result.events.push(TickEvent::EnemyAttack {
            enemy: enemy.id,
            damage: attack.dealt,
            was_crit: attack.damage.is_critical,
            message,
        });
    }

    if state.player.is_dead() && !state.game_over {
        state.game_over = true;
        state.is_running = false;
        result.game_over = true;
        log::info!(
            "game over after {} ticks ({:.1}s) at level {}",
            state.ticks,
            state.elapsed,
            state.player.level()
        );
        result.events.push(TickEvent::PlayerDied {
            message: "GAME OVER!".to_string(),
        });
    }

    // ── 5. Sweep the dead ───────────────────────────────────────
    let (dead, alive): (Vec<_>, Vec<_>) = std::mem::take(&mut state.enemies)
        .into_iter()
        .partition(|e| e.is_dead());
    state.enemies = alive;

    for enemy in dead {
        state.effects.forget(enemy.id);
        state.stats.kills += 1;

        let reward = enemy.reward().unwrap_or_default();
        if let Some(data) = state.player.as_player_mut() {
            data.add_gold(reward.gold);
        }
        let levels = state.player.gain_experience(reward.experience);
        result.events.push(TickEvent::EnemyDefeated {
            enemy: enemy.id,
            xp_gained: reward.experience,
            gold_gained: reward.gold,
            message: format!(
                "Enemy defeated! +{} XP, +{} gold",
                reward.experience, reward.gold
            ),
        });
        for new_level in levels {
            result.events.push(TickEvent::LevelUp {
                new_level,
                message: format!("Level up! You are now level {}", new_level),
            });
        }

        if rng.gen::<f64>() < LOOT_DROP_CHANCE {
            state.stats.loot_dropped += 1;
            let pickup = PowerUpPickup::damage_aura(enemy.position);
            result.events.push(TickEvent::LootDropped {
                position: enemy.position,
                message: format!("The enemy dropped a {}", pickup.name),
            });
            state.pickups.push(pickup);
        }
    }

    // ── 6. Population floor ─────────────────────────────────────
    if state.enemies.len() < MIN_ENEMY_COUNT {
        let level = state.player.level();
        let spawned = state.spawn_enemies(ENEMY_REINFORCEMENT_COUNT, level);
        result.events.push(TickEvent::EnemiesSpawned {
            count: spawned.len(),
            message: format!("{} enemies emerge from the dark", spawned.len()),
        });
    }

    // ── 7. Chests ───────────────────────────────────────────────
    if input.take_action() {
        open_nearby_chests(state, &mut result, rng);
    }

    // ── 8. Camera and animation ─────────────────────────────────
    let world = state.world_size();
    state.camera.follow(state.player.position, world);
    let player = &mut state.player;
    player.animation.update(player.velocity, delta_time);
    for enemy in state.enemies.iter_mut() {
        enemy.animation.update(enemy.velocity, delta_time);
    }

    for event in &result.events {
        if let Some(severity) = event.severity() {
            state.messages.push(event.message(), severity);
        }
    }

    result
}

/// Opens every unopened chest within reach, paying for each one in turn.
fn open_nearby_chests<R: Rng>(state: &mut GameState, result: &mut TickResult, rng: &mut R) {
    // Measured from the player's tile centre so the reach is the 3x3 block around it
    let (tile_x, tile_y) = TileGrid::world_to_tile(state.player.position);
    let center = TileGrid::tile_to_world(tile_x, tile_y) + DVec2::splat(TILE_SIZE / 2.0);
    let reach = CHEST_REACH_TILES * TILE_SIZE;
    let chests: Vec<(i64, i64)> = tiles_in_radius(&state.dungeon.grid, center, reach)
        .into_iter()
        .filter(|hit| hit.tile == Tile::Chest && !state.dungeon.grid.is_chest_opened(hit.x, hit.y))
        .map(|hit| (hit.x, hit.y))
        .collect();

    for (x, y) in chests {
        let Some(data) = state.player.as_player_mut() else {
            return;
        };
        if !data.remove_gold(CHEST_COST) {
            result.events.push(TickEvent::ChestTooExpensive {
                cost: CHEST_COST,
                message: format!("Not enough gold! A chest costs {}", CHEST_COST),
            });
            return;
        }

        let gold = rng.gen_range(CHEST_GOLD_MIN..CHEST_GOLD_MAX);
        data.add_gold(gold);
        data.add_to_inventory(Item::HealthPotion);
        state.dungeon.grid.open_chest(x, y);
        state.stats.chests_opened += 1;

        result.events.push(TickEvent::ChestOpened {
            tile: (x, y),
            gold,
            message: format!(
                "Chest opened! +{} gold, +{} XP and a potion (cost {})",
                gold, CHEST_EXPERIENCE, CHEST_COST
            ),
        });
        for new_level in state.player.gain_experience(CHEST_EXPERIENCE) {
            result.events.push(TickEvent::LevelUp {
                new_level,
                message: format!("Level up! You are now level {}", new_level),
            });
        }
    }
}
