use serde::Serialize;

use crate::domain::models::Weapon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Technology {
    LaserTechnology,
    PhaserTechnology,
    PhotonicTechnology,
    PlasmaTechnology,
}

impl Technology {
    pub const ALL: [Technology; 4] = [
        Technology::LaserTechnology,
        Technology::PhaserTechnology,
        Technology::PhotonicTechnology,
        Technology::PlasmaTechnology,
    ];

    /// STAPI field name, also used as the chart label.
    pub fn key(self) -> &'static str {
        match self {
            Technology::LaserTechnology => "laserTechnology",
            Technology::PhaserTechnology => "phaserTechnology",
            Technology::PhotonicTechnology => "photonicTechnology",
            Technology::PlasmaTechnology => "plasmaTechnology",
        }
    }

    pub fn is_set(self, weapon: &Weapon) -> bool {
        match self {
            Technology::LaserTechnology => weapon.laser_technology,
            Technology::PhaserTechnology => weapon.phaser_technology,
            Technology::PhotonicTechnology => weapon.photonic_technology,
            Technology::PlasmaTechnology => weapon.plasma_technology,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAggregate {
    pub laser: u64,
    pub phaser: u64,
    pub photonic: u64,
    pub plasma: u64,
    pub multiple_technology: u64,
    pub no_technology: u64,
    pub alternate_reality: u64,
    pub mirror: u64,
    pub hand_held: u64,
    pub not_hand_held: u64,
    pub total: u64,
}

impl WeaponAggregate {
    fn add(mut self, weapon: &Weapon) -> Self {
        let technologies = Technology::ALL
            .iter()
            .filter(|tech| tech.is_set(weapon))
            .count();

        match technologies {
            0 => self.no_technology += 1,
            1 => {}
            _ => {
                tracing::debug!(uid = %weapon.uid, name = ?weapon.name, "multiple technologies");
                self.multiple_technology += 1;
            }
        }

        self.laser += u64::from(weapon.laser_technology);
        self.phaser += u64::from(weapon.phaser_technology);
        self.photonic += u64::from(weapon.photonic_technology);
        self.plasma += u64::from(weapon.plasma_technology);

        self.alternate_reality += u64::from(weapon.alternate_reality);
        self.mirror += u64::from(weapon.mirror);
        if weapon.hand_held_weapon {
            self.hand_held += 1;
        } else {
            self.not_hand_held += 1;
        }
        self.total += 1;
        self
    }

    pub fn count(&self, technology: Technology) -> u64 {
        match technology {
            Technology::LaserTechnology => self.laser,
            Technology::PhaserTechnology => self.phaser,
            Technology::PhotonicTechnology => self.photonic,
            Technology::PlasmaTechnology => self.plasma,
        }
    }

    pub fn technologies(&self) -> [(Technology, u64); 4] {
        Technology::ALL.map(|tech| (tech, self.count(tech)))
    }

    pub fn technology_total(&self) -> u64 {
        self.laser + self.phaser + self.photonic + self.plasma
    }

    pub fn with_any_technology(&self) -> u64 {
        self.total - self.no_technology
    }
}

pub fn aggregate_weapons(weapons: &[Weapon]) -> WeaponAggregate {
    weapons
        .iter()
        .fold(WeaponAggregate::default(), WeaponAggregate::add)
}
