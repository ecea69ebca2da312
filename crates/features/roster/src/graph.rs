//! Relationship graph between heroes and powers.
//!
//! `hero_powers` is the only table referencing both sides. Heroes and powers own their links:
//! deleting either side removes its links inside the same transaction, and the schema's
//! `ON DELETE CASCADE` foreign keys back that up.

use crate::entity::{hero, hero_power, power};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

/// Removes every link owned by the hero. Returns the number of links deleted.
pub(crate) async fn cascade_hero<C: ConnectionTrait>(conn: &C, hero_id: i32) -> Result<u64, DbErr> {
    let result = hero_power::Entity::delete_many()
        .filter(hero_power::Column::HeroId.eq(hero_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Removes every link owned by the power. Returns the number of links deleted.
pub(crate) async fn cascade_power<C: ConnectionTrait>(
    conn: &C,
    power_id: i32,
) -> Result<u64, DbErr> {
    let result = hero_power::Entity::delete_many()
        .filter(hero_power::Column::PowerId.eq(power_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Distinct heroes reachable from a power through its links, ordered by id.
///
/// Computed on every call; nothing is cached or stored.
pub async fn heroes_of_power<C: ConnectionTrait>(
    conn: &C,
    power_id: i32,
) -> Result<Vec<hero::Model>, DbErr> {
    hero::Entity::find()
        .join(JoinType::InnerJoin, hero::Relation::HeroPowers.def())
        .filter(hero_power::Column::PowerId.eq(power_id))
        .distinct()
        .order_by_asc(hero::Column::Id)
        .all(conn)
        .await
}

/// A hero's links paired with their powers, ordered by link id.
pub async fn links_of_hero<C: ConnectionTrait>(
    conn: &C,
    hero_id: i32,
) -> Result<Vec<(hero_power::Model, power::Model)>, DbErr> {
    let rows = hero_power::Entity::find()
        .filter(hero_power::Column::HeroId.eq(hero_id))
        .find_also_related(power::Entity)
        .order_by_asc(hero_power::Column::Id)
        .all(conn)
        .await?;

    // The power_id foreign key rules out rows without a power.
    Ok(rows.into_iter().filter_map(|(link, power)| power.map(|power| (link, power))).collect())
}
