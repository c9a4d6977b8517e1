use serde::{Deserialize, Serialize};

/// The five combatant kinds. Base stats are fixed per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Enemy,
    Mage,
    Priest,
    Warrior,
    Rogue,
}

impl Class {
    pub fn base_health(self) -> i32 {
        match self {
            Class::Enemy => 70,
            Class::Mage => 60,
            Class::Priest => 60,
            Class::Warrior => 100,
            Class::Rogue => 50,
        }
    }

    pub fn base_damage(self) -> i32 {
        match self {
            Class::Enemy => 25,
            Class::Mage => 60,
            Class::Priest => 40,
            Class::Warrior => 50,
            Class::Rogue => 60,
        }
    }

    /// Priests channel everything into mending and cannot attack.
    pub fn can_attack(self) -> bool {
        !matches!(self, Class::Priest)
    }

    pub fn can_heal(self) -> bool {
        matches!(self, Class::Priest)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Class::Enemy => "enemy",
            Class::Mage => "mage",
            Class::Priest => "priest",
            Class::Warrior => "warrior",
            Class::Rogue => "rogue",
        }
    }
}

/// A single combatant. The name doubles as the roster key and never changes.
///
/// Health is signed and unclamped; it may go arbitrarily negative under a
/// heavy hit and above the starting value under healing. Only the `alive`
/// flag matters downstream, and it flips exactly once: an entity whose
/// health ever reaches 0 stays dead even if its health is later raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub class: Class,
    pub health: i32,
    alive: bool,
}

impl Entity {
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        Self {
            name: name.into(),
            class,
            health: class.base_health(),
            alive: true,
        }
    }

    pub fn base_damage(&self) -> i32 {
        self.class.base_damage()
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
        }
    }

    /// Raise health with no upper cap. Does not revive.
    pub fn restore(&mut self, amount: i32) {
        self.health += amount;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
