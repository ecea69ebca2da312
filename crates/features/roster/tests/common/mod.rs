#![allow(dead_code, unreachable_pub)]

use hhub_database::Database;
use hhub_roster::RosterService;
use hhub_roster::model::{HeroSummary, NewHero, NewHeroPower, NewPower, PowerSummary};

pub const FLIGHT: &str =
    "gives the wielder the ability to fly through the skies at supersonic speed";
pub const STRENGTH: &str = "gives the wielder super-human strengths";

pub async fn database() -> Database {
    Database::builder().url("sqlite::memory:").init().await.expect("in-memory database")
}

pub async fn service() -> RosterService {
    RosterService::new(database().await)
}

pub async fn hero(service: &RosterService, name: &str, super_name: &str) -> HeroSummary {
    service
        .create_hero(NewHero { name: name.to_owned(), super_name: super_name.to_owned() })
        .await
        .expect("create hero")
}

pub async fn power(service: &RosterService, name: &str, description: &str) -> PowerSummary {
    service
        .create_power(NewPower { name: name.to_owned(), description: Some(description.to_owned()) })
        .await
        .expect("create power")
}

pub fn link(strength: &str, hero_id: i32, power_id: i32) -> NewHeroPower {
    NewHeroPower {
        strength: Some(serde_json::Value::from(strength)),
        hero_id: Some(hero_id.into()),
        power_id: Some(power_id.into()),
    }
}
