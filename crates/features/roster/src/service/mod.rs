use crate::entity::{hero, hero_power, power};
use crate::error::{RosterError, RosterErrorExt};
use crate::graph;
use crate::model::{
    HeroDetail, HeroPowerCreated, HeroSummary, NewHero, NewHeroPower, NewPower, PowerPatch,
    PowerSummary,
};
use crate::validation::{parse_strength, validate_description};
use hhub_database::Database;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{info, instrument};

const HERO_NOT_FOUND: &str = "Hero not found";
const POWER_NOT_FOUND: &str = "Power not found";
const HERO_POWER_NOT_FOUND: &str = "HeroPower not found";

/// Entity operations over heroes, powers and their links.
///
/// Every write runs in its own transaction: validation happens first, and any failure after the
/// transaction opens drops it, which rolls everything back.
#[derive(Debug, Clone)]
pub struct RosterService {
    db: Database,
}

impl RosterService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_heroes(&self) -> Result<Vec<HeroSummary>, RosterError> {
        let heroes = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(&*self.db)
            .await
            .context("Listing heroes")?;

        Ok(heroes.into_iter().map(HeroSummary::from).collect())
    }

    /// A hero with every link and the linked power.
    #[instrument(skip(self))]
    pub async fn get_hero(&self, id: i32) -> Result<HeroDetail, RosterError> {
        // Hero and links are read from one snapshot.
        let tx = self.db.begin().await.context("Opening transaction")?;
        let hero = hero::Entity::find_by_id(id)
            .one(&tx)
            .await
            .context("Loading hero")?
            .ok_or_else(|| RosterError::not_found(HERO_NOT_FOUND))?;
        let links = graph::links_of_hero(&tx, id).await.context("Loading hero powers")?;
        tx.commit().await.context("Closing read transaction")?;

        Ok(HeroDetail::from_entities(hero, links))
    }

    #[instrument(skip(self))]
    pub async fn create_hero(&self, new: NewHero) -> Result<HeroSummary, RosterError> {
        let tx = self.db.begin().await.context("Opening transaction")?;
        let hero = hero::ActiveModel {
            name: Set(new.name),
            super_name: Set(new.super_name),
            ..Default::default()
        }
        .insert(&tx)
        .await
        .context("Inserting hero")?;
        tx.commit().await.context("Committing hero")?;

        info!(hero_id = hero.id, "Hero created");
        Ok(hero.into())
    }

    /// Deletes the hero together with all of its links.
    #[instrument(skip(self))]
    pub async fn delete_hero(&self, id: i32) -> Result<(), RosterError> {
        let tx = self.db.begin().await.context("Opening transaction")?;
        hero::Entity::find_by_id(id)
            .one(&tx)
            .await
            .context("Loading hero")?
            .ok_or_else(|| RosterError::not_found(HERO_NOT_FOUND))?;

        let links = graph::cascade_hero(&tx, id).await.context("Deleting hero powers")?;
        hero::Entity::delete_by_id(id).exec(&tx).await.context("Deleting hero")?;
        tx.commit().await.context("Committing hero deletion")?;

        info!(hero_id = id, links, "Hero deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_powers(&self) -> Result<Vec<PowerSummary>, RosterError> {
        let powers = power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(&*self.db)
            .await
            .context("Listing powers")?;

        Ok(powers.into_iter().map(PowerSummary::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_power(&self, id: i32) -> Result<PowerSummary, RosterError> {
        power::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .context("Loading power")?
            .map(PowerSummary::from)
            .ok_or_else(|| RosterError::not_found(POWER_NOT_FOUND))
    }

    /// Heroes holding the power, each listed once.
    #[instrument(skip(self))]
    pub async fn power_heroes(&self, id: i32) -> Result<Vec<HeroSummary>, RosterError> {
        self.get_power(id).await?;
        let heroes = graph::heroes_of_power(&*self.db, id).await.context("Loading power heroes")?;

        Ok(heroes.into_iter().map(HeroSummary::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn create_power(&self, new: NewPower) -> Result<PowerSummary, RosterError> {
        let description = validate_description(new.description.as_deref())?.to_owned();

        let tx = self.db.begin().await.context("Opening transaction")?;
        let power = power::ActiveModel {
            name: Set(new.name),
            description: Set(description),
            ..Default::default()
        }
        .insert(&tx)
        .await
        .context("Inserting power")?;
        tx.commit().await.context("Committing power")?;

        info!(power_id = power.id, "Power created");
        Ok(power.into())
    }

    /// Replaces the description (required) and optionally the name.
    ///
    /// An unknown id is reported before the description is checked.
    #[instrument(skip(self))]
    pub async fn update_power(
        &self,
        id: i32,
        patch: PowerPatch,
    ) -> Result<PowerSummary, RosterError> {
        let tx = self.db.begin().await.context("Opening transaction")?;
        let current = power::Entity::find_by_id(id)
            .one(&tx)
            .await
            .context("Loading power")?
            .ok_or_else(|| RosterError::not_found(POWER_NOT_FOUND))?;
        let description = validate_description(patch.description.as_deref())?.to_owned();

        let mut power: power::ActiveModel = current.into();
        power.description = Set(description);
        if let Some(name) = patch.name {
            power.name = Set(name);
        }
        let power = power.update(&tx).await.context("Updating power")?;
        tx.commit().await.context("Committing power update")?;

        info!(power_id = id, "Power updated");
        Ok(power.into())
    }

    /// Deletes the power together with all of its links.
    #[instrument(skip(self))]
    pub async fn delete_power(&self, id: i32) -> Result<(), RosterError> {
        let tx = self.db.begin().await.context("Opening transaction")?;
        power::Entity::find_by_id(id)
            .one(&tx)
            .await
            .context("Loading power")?
            .ok_or_else(|| RosterError::not_found(POWER_NOT_FOUND))?;

        let links = graph::cascade_power(&tx, id).await.context("Deleting hero powers")?;
        power::Entity::delete_by_id(id).exec(&tx).await.context("Deleting power")?;
        tx.commit().await.context("Committing power deletion")?;

        info!(power_id = id, links, "Power deleted");
        Ok(())
    }

    /// Links a hero to a power.
    ///
    /// Checks run in order and stop at the first failure: strength, hero, power.
    #[instrument(skip(self))]
    pub async fn create_hero_power(
        &self,
        new: NewHeroPower,
    ) -> Result<HeroPowerCreated, RosterError> {
        let strength = parse_strength(new.strength_str())?;

        let tx = self.db.begin().await.context("Opening transaction")?;
        let hero = match new.hero_key() {
            Some(id) => hero::Entity::find_by_id(id).one(&tx).await.context("Loading hero")?,
            None => None,
        }
        .ok_or_else(|| RosterError::not_found(HERO_NOT_FOUND))?;
        let power = match new.power_key() {
            Some(id) => power::Entity::find_by_id(id).one(&tx).await.context("Loading power")?,
            None => None,
        }
        .ok_or_else(|| RosterError::not_found(POWER_NOT_FOUND))?;

        let link = hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            ..Default::default()
        }
        .insert(&tx)
        .await
        .context("Inserting hero power")?;
        tx.commit().await.context("Committing hero power")?;

        info!(
            hero_power_id = link.id,
            hero_id = hero.id,
            power_id = power.id,
            %strength,
            "Hero power created"
        );
        Ok(HeroPowerCreated::from_entities(link, hero, power))
    }

    /// A link in the same shape as its creation response.
    #[instrument(skip(self))]
    pub async fn get_hero_power(&self, id: i32) -> Result<HeroPowerCreated, RosterError> {
        let not_found = || RosterError::not_found(HERO_POWER_NOT_FOUND);

        let link = hero_power::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .context("Loading hero power")?
            .ok_or_else(not_found)?;
        let hero = hero::Entity::find_by_id(link.hero_id)
            .one(&*self.db)
            .await
            .context("Loading hero")?
            .ok_or_else(not_found)?;
        let power = power::Entity::find_by_id(link.power_id)
            .one(&*self.db)
            .await
            .context("Loading power")?
            .ok_or_else(not_found)?;

        Ok(HeroPowerCreated::from_entities(link, hero, power))
    }
}
