use serde::Serialize;

use crate::entity::Entity;

/// Outcome of one attack. A kill is a normal result, not an error: the
/// caller is responsible for removing the named target from its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    Hit { damage: i32 },
    Killed { target: String, damage: i32 },
}

/// Resolve one attack: the attacker's base damage plus a fresh swing roll.
///
/// Capability is the caller's problem; by the time this runs the attacker
/// has already been cleared to attack.
pub fn attack(
    attacker: &Entity,
    target: &mut Entity,
    mut swing: impl FnMut() -> i32,
    mut log: impl FnMut(String),
) -> AttackOutcome {
    let damage = attacker.base_damage() + swing();
    target.take_damage(damage);
    log(format!(
        "[ATTACK][{}] strikes {} for {}",
        attacker.name, target.name, damage
    ));
    if target.is_alive() {
        AttackOutcome::Hit { damage }
    } else {
        AttackOutcome::Killed { target: target.name.clone(), damage }
    }
}

/// Resolve one heal: the healer's base power plus a fresh swing roll.
/// Never lowers health and has no upper cap. Returns the rolled amount.
pub fn heal(
    healer: &Entity,
    target: &mut Entity,
    mut swing: impl FnMut() -> i32,
    mut log: impl FnMut(String),
) -> i32 {
    let amount = healer.base_damage() + swing();
    target.restore(amount);
    log(format!(
        "[HEAL][{}] restores {} for {}",
        healer.name, target.name, amount
    ));
    amount
}
