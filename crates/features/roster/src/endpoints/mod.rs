use crate::Roster;
use crate::error::RosterError;
use crate::model::{
    HeroDetail, HeroPowerCreated, HeroSummary, NewHero, NewHeroPower, NewPower, PowerPatch,
    PowerSummary,
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use hhub_derive::api_handler;
use hhub_domain::constants::{HERO_POWERS_TAG, HEROES_TAG, POWERS_TAG};
use hhub_kernel::server::error::{ErrorResponse, ErrorsResponse};
use hhub_kernel::server::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

const JSON_CONTENT_TYPE_REQUIRED: &str = "Content-Type must be application/json";

/// Every roster route with its `OpenAPI` description.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_heroes, create_hero))
        .routes(routes!(get_hero, delete_hero))
        .routes(routes!(list_powers, create_power))
        .routes(routes!(get_power, update_power, delete_power))
        .routes(routes!(power_heroes))
        .routes(routes!(create_hero_power))
        .routes(routes!(get_hero_power))
}

/// Unwraps a JSON body.
///
/// A missing JSON content type is a [`RosterError::BadRequest`]; any other decoding problem is a
/// [`RosterError::Validation`] carrying the decoder's message.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, RosterError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(RosterError::BadRequest {
            message: JSON_CONTENT_TYPE_REQUIRED.into(),
            context: None,
        }),
        Err(rejection) => Err(RosterError::validation(rejection.body_text())),
    }
}

/// Ids that are not integers cannot name a record, so they are reported as not found.
fn path_id(
    id: Result<Path<i32>, PathRejection>,
    missing: &'static str,
) -> Result<i32, RosterError> {
    id.map(|Path(id)| id).map_err(|_| RosterError::not_found(missing))
}

/// A router mounted without the roster slice registered is a wiring fault, not a client error.
fn roster(state: &ApiState) -> Result<&Roster, RosterError> {
    state.try_get_slice::<Roster>().map_err(|e| RosterError::from(e.to_string()))
}

// --- Heroes ---

#[api_handler(
    get,
    path = "/heroes",
    responses((status = OK, description = "All heroes ordered by id", body = [HeroSummary])),
    tag = HEROES_TAG,
)]
pub(crate) async fn list_heroes(
    State(state): State<ApiState>,
) -> Result<Json<Vec<HeroSummary>>, RosterError> {
    Ok(Json(roster(&state)?.service.list_heroes().await?))
}

#[api_handler(
    get,
    path = "/heroes/{id}",
    params(("id" = i32, Path, description = "Hero id")),
    responses(
        (status = OK, description = "Hero with its powers", body = HeroDetail),
        (status = NOT_FOUND, description = "Unknown hero", body = ErrorResponse),
    ),
    tag = HEROES_TAG,
)]
pub(crate) async fn get_hero(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<HeroDetail>, RosterError> {
    let id = path_id(id, "Hero not found")?;
    Ok(Json(roster(&state)?.service.get_hero(id).await?))
}

#[api_handler(
    post,
    path = "/heroes",
    request_body = NewHero,
    responses(
        (status = CREATED, description = "Hero created", body = HeroSummary),
        (status = BAD_REQUEST, description = "Malformed body", body = ErrorsResponse),
    ),
    tag = HEROES_TAG,
)]
pub(crate) async fn create_hero(
    State(state): State<ApiState>,
    payload: Result<Json<NewHero>, JsonRejection>,
) -> Result<impl IntoResponse, RosterError> {
    let new = json_body(payload)?;
    let hero = roster(&state)?.service.create_hero(new).await?;
    Ok((StatusCode::CREATED, Json(hero)))
}

#[api_handler(
    delete,
    path = "/heroes/{id}",
    params(("id" = i32, Path, description = "Hero id")),
    responses(
        (status = NO_CONTENT, description = "Hero and its links deleted"),
        (status = NOT_FOUND, description = "Unknown hero", body = ErrorResponse),
    ),
    tag = HEROES_TAG,
)]
pub(crate) async fn delete_hero(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, RosterError> {
    let id = path_id(id, "Hero not found")?;
    roster(&state)?.service.delete_hero(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Powers ---

#[api_handler(
    get,
    path = "/powers",
    responses((status = OK, description = "All powers ordered by id", body = [PowerSummary])),
    tag = POWERS_TAG,
)]
pub(crate) async fn list_powers(
    State(state): State<ApiState>,
) -> Result<Json<Vec<PowerSummary>>, RosterError> {
    Ok(Json(roster(&state)?.service.list_powers().await?))
}

#[api_handler(
    get,
    path = "/powers/{id}",
    params(("id" = i32, Path, description = "Power id")),
    responses(
        (status = OK, description = "Power", body = PowerSummary),
        (status = NOT_FOUND, description = "Unknown power", body = ErrorResponse),
    ),
    tag = POWERS_TAG,
)]
pub(crate) async fn get_power(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<PowerSummary>, RosterError> {
    let id = path_id(id, "Power not found")?;
    Ok(Json(roster(&state)?.service.get_power(id).await?))
}

#[api_handler(
    get,
    path = "/powers/{id}/heroes",
    params(("id" = i32, Path, description = "Power id")),
    responses(
        (status = OK, description = "Heroes holding the power", body = [HeroSummary]),
        (status = NOT_FOUND, description = "Unknown power", body = ErrorResponse),
    ),
    tag = POWERS_TAG,
)]
pub(crate) async fn power_heroes(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<HeroSummary>>, RosterError> {
    let id = path_id(id, "Power not found")?;
    Ok(Json(roster(&state)?.service.power_heroes(id).await?))
}

#[api_handler(
    post,
    path = "/powers",
    request_body = NewPower,
    responses(
        (status = CREATED, description = "Power created", body = PowerSummary),
        (status = BAD_REQUEST, description = "Invalid description or body", body = ErrorsResponse),
    ),
    tag = POWERS_TAG,
)]
pub(crate) async fn create_power(
    State(state): State<ApiState>,
    payload: Result<Json<NewPower>, JsonRejection>,
) -> Result<impl IntoResponse, RosterError> {
    let new = json_body(payload)?;
    let power = roster(&state)?.service.create_power(new).await?;
    Ok((StatusCode::CREATED, Json(power)))
}

#[api_handler(
    patch,
    path = "/powers/{id}",
    params(("id" = i32, Path, description = "Power id")),
    request_body = PowerPatch,
    responses(
        (status = OK, description = "Power updated", body = PowerSummary),
        (status = BAD_REQUEST, description = "Invalid description or body", body = ErrorsResponse),
        (status = NOT_FOUND, description = "Unknown power", body = ErrorResponse),
    ),
    tag = POWERS_TAG,
)]
pub(crate) async fn update_power(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PowerPatch>, JsonRejection>,
) -> Result<Json<PowerSummary>, RosterError> {
    let id = path_id(id, "Power not found")?;
    let service = &roster(&state)?.service;
    // An unknown power wins over a bad body.
    let patch = match json_body(payload) {
        Ok(patch) => patch,
        Err(err) => {
            service.get_power(id).await?;
            return Err(err);
        }
    };
    Ok(Json(service.update_power(id, patch).await?))
}

#[api_handler(
    delete,
    path = "/powers/{id}",
    params(("id" = i32, Path, description = "Power id")),
    responses(
        (status = NO_CONTENT, description = "Power and its links deleted"),
        (status = NOT_FOUND, description = "Unknown power", body = ErrorResponse),
    ),
    tag = POWERS_TAG,
)]
pub(crate) async fn delete_power(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, RosterError> {
    let id = path_id(id, "Power not found")?;
    roster(&state)?.service.delete_power(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- HeroPowers ---

#[api_handler(
    post,
    path = "/hero_powers",
    request_body = NewHeroPower,
    responses(
        (status = CREATED, description = "Link created", body = HeroPowerCreated),
        (status = BAD_REQUEST, description = "Wrong content type, invalid strength or body"),
        (status = NOT_FOUND, description = "Unknown hero or power", body = ErrorResponse),
    ),
    tag = HERO_POWERS_TAG,
)]
pub(crate) async fn create_hero_power(
    State(state): State<ApiState>,
    payload: Result<Json<NewHeroPower>, JsonRejection>,
) -> Result<impl IntoResponse, RosterError> {
    let new = json_body(payload)?;
    let link = roster(&state)?.service.create_hero_power(new).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[api_handler(
    get,
    path = "/hero_powers/{id}",
    params(("id" = i32, Path, description = "HeroPower id")),
    responses(
        (status = OK, description = "Link with both ends", body = HeroPowerCreated),
        (status = NOT_FOUND, description = "Unknown link", body = ErrorResponse),
    ),
    tag = HERO_POWERS_TAG,
)]
pub(crate) async fn get_hero_power(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<HeroPowerCreated>, RosterError> {
    let id = path_id(id, "HeroPower not found")?;
    Ok(Json(roster(&state)?.service.get_hero_power(id).await?))
}
