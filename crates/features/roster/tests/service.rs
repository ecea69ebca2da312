mod common;

use common::{FLIGHT, STRENGTH, hero, link, power, service};
use hhub_roster::RosterError;
use hhub_roster::entity::Strength;
use hhub_roster::model::{NewHeroPower, NewPower, PowerPatch};
use hhub_roster::validation::{DESCRIPTION_TOO_SHORT, INVALID_STRENGTH};
use serde_json::json;

fn message(err: &RosterError) -> &str {
    match err {
        RosterError::NotFound { message, .. } | RosterError::Validation { message, .. } => message,
        other => panic!("unexpected error kind {}", other.kind()),
    }
}

#[tokio::test]
async fn heroes_are_listed_in_id_order() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let doreen = hero(&service, "Doreen Green", "Squirrel Girl").await;

    let heroes = service.list_heroes().await.expect("list heroes");
    assert_eq!(heroes, vec![kamala.clone(), doreen.clone()]);
    assert!(kamala.id < doreen.id);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let service = service().await;

    let err = service.get_hero(42).await.unwrap_err();
    assert_eq!(message(&err), "Hero not found");
    let err = service.get_power(42).await.unwrap_err();
    assert_eq!(message(&err), "Power not found");
    let err = service.get_hero_power(42).await.unwrap_err();
    assert_eq!(message(&err), "HeroPower not found");
    let err = service.power_heroes(42).await.unwrap_err();
    assert_eq!(message(&err), "Power not found");
}

#[tokio::test]
async fn short_description_is_rejected_on_create() {
    let service = service().await;

    let err = service
        .create_power(NewPower { name: "weak".into(), description: Some("too short".into()) })
        .await
        .unwrap_err();
    assert_eq!(message(&err), DESCRIPTION_TOO_SHORT);
    assert!(service.list_powers().await.expect("list powers").is_empty());

    let created = service
        .create_power(NewPower {
            name: "Super Strength".into(),
            description: Some("Gives super strength".into()),
        })
        .await
        .expect("20 characters is enough");
    assert_eq!(created.description, "Gives super strength");
}

#[tokio::test]
async fn failed_update_keeps_the_committed_description() {
    let service = service().await;
    let flight = power(&service, "flight", FLIGHT).await;

    let err = service
        .update_power(flight.id, PowerPatch { name: None, description: Some("short".into()) })
        .await
        .unwrap_err();
    assert_eq!(message(&err), DESCRIPTION_TOO_SHORT);

    let err = service.update_power(flight.id, PowerPatch::default()).await.unwrap_err();
    assert_eq!(message(&err), DESCRIPTION_TOO_SHORT);

    assert_eq!(service.get_power(flight.id).await.expect("get power").description, FLIGHT);
}

#[tokio::test]
async fn update_replaces_description_and_optional_name() {
    let service = service().await;
    let flight = power(&service, "flight", FLIGHT).await;

    let updated = service
        .update_power(
            flight.id,
            PowerPatch { name: None, description: Some("Valid Updated Description".into()) },
        )
        .await
        .expect("update description");
    assert_eq!(updated.name, "flight");
    assert_eq!(updated.description, "Valid Updated Description");

    let renamed = service
        .update_power(
            flight.id,
            PowerPatch { name: Some("soaring".into()), description: Some(FLIGHT.into()) },
        )
        .await
        .expect("update name");
    assert_eq!(renamed.name, "soaring");
    assert_eq!(service.get_power(flight.id).await.expect("get power"), renamed);
}

#[tokio::test]
async fn update_of_unknown_power_is_not_found() {
    let service = service().await;

    let err = service
        .update_power(9, PowerPatch { name: None, description: Some(FLIGHT.into()) })
        .await
        .unwrap_err();
    assert_eq!(message(&err), "Power not found");
}

#[tokio::test]
async fn link_checks_run_in_order() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let flight = power(&service, "flight", FLIGHT).await;

    // Strength is checked before anything is looked up.
    let err = service.create_hero_power(link("Mighty", 999, 999)).await.unwrap_err();
    assert_eq!(message(&err), INVALID_STRENGTH);

    let err = service.create_hero_power(link("Strong", 999, flight.id)).await.unwrap_err();
    assert_eq!(message(&err), "Hero not found");

    let err = service.create_hero_power(link("Strong", 999, 999)).await.unwrap_err();
    assert_eq!(message(&err), "Hero not found");

    let err = service.create_hero_power(link("Strong", kamala.id, 999)).await.unwrap_err();
    assert_eq!(message(&err), "Power not found");

    let err = service
        .create_hero_power(NewHeroPower {
            strength: None,
            hero_id: Some(kamala.id.into()),
            power_id: None,
        })
        .await
        .unwrap_err();
    assert_eq!(message(&err), INVALID_STRENGTH);

    let err = service
        .create_hero_power(NewHeroPower {
            strength: Some(json!(3)),
            hero_id: Some(kamala.id.into()),
            power_id: Some(flight.id.into()),
        })
        .await
        .unwrap_err();
    assert_eq!(message(&err), INVALID_STRENGTH);

    let err = service
        .create_hero_power(NewHeroPower {
            strength: Some("Weak".into()),
            hero_id: None,
            power_id: Some(flight.id.into()),
        })
        .await
        .unwrap_err();
    assert_eq!(message(&err), "Hero not found");

    let detail = service.get_hero(kamala.id).await.expect("get hero");
    assert!(detail.hero_powers.is_empty(), "failed links must not be stored");
}

#[tokio::test]
async fn ids_that_cannot_name_a_row_are_not_found() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let flight = power(&service, "flight", FLIGHT).await;

    for id in [json!(3_000_000_000_i64), json!("abc"), json!(1.5)] {
        let err = service
            .create_hero_power(NewHeroPower {
                strength: Some("Weak".into()),
                hero_id: Some(id.clone()),
                power_id: Some(flight.id.into()),
            })
            .await
            .unwrap_err();
        assert_eq!(message(&err), "Hero not found", "{id}");

        let err = service
            .create_hero_power(NewHeroPower {
                strength: Some("Weak".into()),
                hero_id: Some(kamala.id.into()),
                power_id: Some(id.clone()),
            })
            .await
            .unwrap_err();
        assert_eq!(message(&err), "Power not found", "{id}");
    }

    assert!(service.get_hero(kamala.id).await.expect("get hero").hero_powers.is_empty());
}

#[tokio::test]
async fn created_link_is_visible_from_both_sides() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let flight = power(&service, "flight", FLIGHT).await;

    let created =
        service.create_hero_power(link("Average", kamala.id, flight.id)).await.expect("link");
    assert_eq!(created.strength, Strength::Average);
    assert_eq!(created.hero, kamala);
    assert_eq!(created.power, flight);

    assert_eq!(service.get_hero_power(created.id).await.expect("get link"), created);

    let detail = service.get_hero(kamala.id).await.expect("get hero");
    assert_eq!(detail.hero_powers.len(), 1);
    assert_eq!(detail.hero_powers[0].id, created.id);
    assert_eq!(detail.hero_powers[0].power, flight);

    let heroes = service.power_heroes(flight.id).await.expect("power heroes");
    assert_eq!(heroes, vec![kamala]);
}

#[tokio::test]
async fn power_heroes_lists_each_hero_once() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let gwen = hero(&service, "Gwen Stacy", "Spider-Gwen").await;
    let flight = power(&service, "flight", FLIGHT).await;

    for request in [
        link("Strong", kamala.id, flight.id),
        link("Weak", kamala.id, flight.id),
        link("Average", gwen.id, flight.id),
    ] {
        service.create_hero_power(request).await.expect("link");
    }

    let heroes = service.power_heroes(flight.id).await.expect("power heroes");
    assert_eq!(heroes, vec![kamala, gwen]);
}

#[tokio::test]
async fn deleting_a_hero_removes_exactly_its_links() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let gwen = hero(&service, "Gwen Stacy", "Spider-Gwen").await;
    let flight = power(&service, "flight", FLIGHT).await;
    let strength = power(&service, "super strength", STRENGTH).await;

    let kamala_flight =
        service.create_hero_power(link("Strong", kamala.id, flight.id)).await.expect("link");
    let kamala_strength =
        service.create_hero_power(link("Weak", kamala.id, strength.id)).await.expect("link");
    let gwen_flight =
        service.create_hero_power(link("Average", gwen.id, flight.id)).await.expect("link");

    service.delete_hero(kamala.id).await.expect("delete hero");

    assert_eq!(message(&service.get_hero(kamala.id).await.unwrap_err()), "Hero not found");
    for removed in [kamala_flight.id, kamala_strength.id] {
        assert!(service.get_hero_power(removed).await.is_err());
    }
    assert_eq!(service.get_hero_power(gwen_flight.id).await.expect("kept link"), gwen_flight);
    assert_eq!(service.list_powers().await.expect("powers").len(), 2);
    assert_eq!(service.power_heroes(flight.id).await.expect("heroes"), vec![gwen]);
}

#[tokio::test]
async fn deleting_a_power_removes_exactly_its_links() {
    let service = service().await;
    let kamala = hero(&service, "Kamala Khan", "Ms. Marvel").await;
    let flight = power(&service, "flight", FLIGHT).await;
    let strength = power(&service, "super strength", STRENGTH).await;

    service.create_hero_power(link("Strong", kamala.id, flight.id)).await.expect("link");
    let kept = service.create_hero_power(link("Weak", kamala.id, strength.id)).await.expect("link");

    service.delete_power(flight.id).await.expect("delete power");

    let detail = service.get_hero(kamala.id).await.expect("get hero");
    assert_eq!(detail.hero_powers.len(), 1);
    assert_eq!(detail.hero_powers[0].id, kept.id);
    assert_eq!(message(&service.delete_power(flight.id).await.unwrap_err()), "Power not found");
}

#[tokio::test]
async fn deleting_unknown_hero_is_not_found() {
    let service = service().await;
    let err = service.delete_hero(5).await.unwrap_err();
    assert_eq!(message(&err), "Hero not found");
}
