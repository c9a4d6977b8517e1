use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::combat::{AttackOutcome, attack, heal};
use crate::entity::{Class, Entity};
use crate::Dice;

/// Why a player action was refused. All of these are recoverable: the
/// driver reports them and the turn loop keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ActionError {
    #[error("pick a character first")]
    NoActorSelected,
    #[error("{name} cannot {action}")]
    InvalidActor { name: String, action: &'static str },
    #[error("no such target: {0}")]
    UnknownTarget(String),
    #[error("no such character: {0}")]
    UnknownCharacter(String),
}

/// One player move, as parsed by the interaction layer. `Pass` is a
/// deliberate no-op; anything the parser does not recognize arrives as
/// `Other` and wastes the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerMove {
    Attack(String),
    Heal(String),
    Pass,
    Other,
}

/// What one full turn produced: the refusal (if the player's move was
/// rejected) and every combat log line, player phase first.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    pub error: Option<ActionError>,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndState {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub name: String,
    pub class: Class,
    pub health: i32,
    pub damage: i32,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            name: e.name.clone(),
            class: e.class,
            health: e.health,
            damage: e.base_damage(),
        }
    }
}

/// Both live rosters in name order.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub characters: Vec<EntityView>,
    pub enemies: Vec<EntityView>,
}

/// One running skirmish. Owns both rosters, the player's current
/// selection, and the single dice stream every roll is drawn from.
///
/// Rosters are kept in name order so that index-based random selection is
/// well-defined; removal on death preserves the order of the rest.
pub struct Session {
    characters: IndexMap<String, Entity>,
    enemies: IndexMap<String, Entity>,
    selected: Option<String>,
    dice: Dice,
}

impl Session {
    /// The fixed starting skirmish: Frieren's party against two goblins.
    pub fn new(dice: Dice) -> Self {
        Self::with_rosters(
            [
                Entity::new("FRIEREN", Class::Mage),
                Entity::new("EISEN", Class::Warrior),
                Entity::new("HEITER", Class::Priest),
                Entity::new("HIMMEL", Class::Rogue),
            ],
            [
                Entity::new("GOBLIN1", Class::Enemy),
                Entity::new("GOBLIN2", Class::Enemy),
            ],
            dice,
        )
    }

    /// Build a session from arbitrary rosters. Names are unique keys; a
    /// duplicate name replaces the earlier entry.
    pub fn with_rosters(
        characters: impl IntoIterator<Item = Entity>,
        enemies: impl IntoIterator<Item = Entity>,
        dice: Dice,
    ) -> Self {
        let mut characters: IndexMap<String, Entity> = characters
            .into_iter()
            .map(|e| (e.name.clone(), e))
            .collect();
        let mut enemies: IndexMap<String, Entity> = enemies
            .into_iter()
            .map(|e| (e.name.clone(), e))
            .collect();
        characters.sort_unstable_keys();
        enemies.sort_unstable_keys();
        Self { characters, enemies, selected: None, dice }
    }

    /// Pick the character the next moves act through. A failed pick leaves
    /// any previous selection untouched.
    pub fn select_character(&mut self, name: &str) -> Result<&Entity, ActionError> {
        let Some(chara) = self.characters.get(name) else {
            return Err(ActionError::UnknownCharacter(name.to_string()));
        };
        self.selected = Some(name.to_string());
        Ok(chara)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn character(&self, name: &str) -> Option<&Entity> {
        self.characters.get(name)
    }

    pub fn enemy(&self, name: &str) -> Option<&Entity> {
        self.enemies.get(name)
    }

    pub fn roster(&self) -> RosterView {
        RosterView {
            characters: self.characters.values().map(EntityView::from).collect(),
            enemies: self.enemies.values().map(EntityView::from).collect(),
        }
    }

    /// Enemies are checked first, so a simultaneous double wipe counts as
    /// a win.
    pub fn outcome(&self) -> Option<EndState> {
        if self.enemies.is_empty() {
            Some(EndState::Victory)
        } else if self.characters.is_empty() {
            Some(EndState::Defeat)
        } else {
            None
        }
    }

    /// One full turn: the player's move, then one automated enemy move.
    /// The enemy side acts even when the player's move was refused.
    pub fn take_turn(&mut self, mv: PlayerMove) -> TurnReport {
        let mut log = Vec::new();
        let error = self.player_phase(mv, &mut log).err();
        if let Some(e) = &error {
            debug!(refusal = %e, "player move refused");
        }
        self.enemy_phase(&mut log);
        TurnReport { error, log }
    }

    fn player_phase(&mut self, mv: PlayerMove, log: &mut Vec<String>) -> Result<(), ActionError> {
        if matches!(mv, PlayerMove::Pass) {
            return Ok(());
        }
        // A selection whose character has since been killed and removed no
        // longer resolves; the player must pick again.
        let actor = match self.selected.as_deref() {
            Some(name) if self.characters.contains_key(name) => name.to_string(),
            _ => return Err(ActionError::NoActorSelected),
        };
        match mv {
            PlayerMove::Attack(target) => self.player_attack(&actor, &target, log),
            PlayerMove::Heal(target) => self.player_heal(&actor, &target, log),
            PlayerMove::Pass | PlayerMove::Other => Ok(()),
        }
    }

    fn player_attack(
        &mut self,
        actor: &str,
        target: &str,
        log: &mut Vec<String>,
    ) -> Result<(), ActionError> {
        let attacker = self
            .characters
            .get(actor)
            .ok_or(ActionError::NoActorSelected)?;
        if !attacker.class.can_attack() {
            return Err(ActionError::InvalidActor {
                name: attacker.name.clone(),
                action: "attack",
            });
        }
        let dice = &mut self.dice;
        let enemy = self
            .enemies
            .get_mut(target)
            .ok_or_else(|| ActionError::UnknownTarget(target.to_string()))?;
        let outcome = attack(attacker, enemy, || dice.swing(), |line| log.push(line));
        if let AttackOutcome::Killed { target, .. } = outcome {
            self.enemies.shift_remove(&target);
            log.push(format!("[KILL][{}] {} is slain", actor, target));
        }
        Ok(())
    }

    fn player_heal(
        &mut self,
        actor: &str,
        target: &str,
        log: &mut Vec<String>,
    ) -> Result<(), ActionError> {
        let healer = self
            .characters
            .get(actor)
            .ok_or(ActionError::NoActorSelected)?
            .clone();
        if !healer.class.can_heal() {
            return Err(ActionError::InvalidActor {
                name: healer.name,
                action: "heal",
            });
        }
        let dice = &mut self.dice;
        let patient = self
            .characters
            .get_mut(target)
            .ok_or_else(|| ActionError::UnknownTarget(target.to_string()))?;
        heal(&healer, patient, || dice.swing(), |line| log.push(line));
        Ok(())
    }

    /// One automated enemy move: a uniformly chosen enemy strikes a
    /// uniformly chosen character. Both indices are drawn fresh against
    /// the roster sizes as they stand right now, after any shrink from
    /// the player's action.
    fn enemy_phase(&mut self, log: &mut Vec<String>) {
        if self.enemies.is_empty() || self.characters.is_empty() {
            return;
        }
        let enemy_ix = self.dice.index(self.enemies.len());
        let char_ix = self.dice.index(self.characters.len());
        let dice = &mut self.dice;
        let Some((_, enemy)) = self.enemies.get_index(enemy_ix) else {
            return;
        };
        let Some((_, victim)) = self.characters.get_index_mut(char_ix) else {
            return;
        };
        debug!(enemy = %enemy.name, victim = %victim.name, "enemy phase");
        let outcome = attack(enemy, victim, || dice.swing(), |line| log.push(line));
        if let AttackOutcome::Killed { target, .. } = outcome {
            let killer = enemy.name.clone();
            self.characters.shift_remove(&target);
            log.push(format!("[KILL][{}] {} is slain", killer, target));
        }
    }
}
