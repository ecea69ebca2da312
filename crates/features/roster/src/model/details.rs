use super::summary::{HeroSummary, PowerSummary};
use crate::entity::{Strength, hero, hero_power, power};
use hhub_derive::api_model;

/// A hero with its links; each link nests its power one level deep.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct HeroDetail {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerItem>,
}

/// A link as seen from its hero: the parent hero is implied and not repeated.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct HeroPowerItem {
    pub id: i32,
    pub hero_id: i32,
    pub strength: Strength,
    pub power: PowerSummary,
}

/// A link with both ends nested one level deep.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct HeroPowerCreated {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
    pub hero: HeroSummary,
    pub power: PowerSummary,
}

impl HeroDetail {
    pub fn from_entities(
        hero: hero::Model,
        links: impl IntoIterator<Item = (hero_power::Model, power::Model)>,
    ) -> Self {
        let hero_powers = links
            .into_iter()
            .map(|(link, power)| HeroPowerItem {
                id: link.id,
                hero_id: link.hero_id,
                strength: link.strength,
                power: power.into(),
            })
            .collect();

        Self { id: hero.id, name: hero.name, super_name: hero.super_name, hero_powers }
    }
}

impl HeroPowerCreated {
    pub fn from_entities(link: hero_power::Model, hero: hero::Model, power: power::Model) -> Self {
        Self {
            id: link.id,
            hero_id: link.hero_id,
            power_id: link.power_id,
            strength: link.strength,
            hero: hero.into(),
            power: power.into(),
        }
    }
}
