use crate::entity::{hero, power};
use hhub_derive::api_model;

/// `{id, name, super_name}`
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct HeroSummary {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

/// `{id, name, description}`; also the full power detail.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct PowerSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<hero::Model> for HeroSummary {
    fn from(hero: hero::Model) -> Self {
        Self { id: hero.id, name: hero.name, super_name: hero.super_name }
    }
}

impl From<power::Model> for PowerSummary {
    fn from(power: power::Model) -> Self {
        Self { id: power.id, name: power.name, description: power.description }
    }
}
