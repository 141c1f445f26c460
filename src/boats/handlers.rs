use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::auth::AuthedUser;
use crate::db::models::{Boat, NewBoat};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBoatRequest {
    pub name: String,
    pub registration: Option<String>,
    #[serde(rename = "type")]
    pub boat_type: Option<String>,
    pub length_m: Option<i32>,
    pub home_port: Option<String>,
}

/// Public view of a boat. Owner id and timestamps stay server-side.
#[derive(Debug, Serialize)]
pub struct BoatResponse {
    pub id: i64,
    pub name: String,
    pub registration: Option<String>,
    #[serde(rename = "type")]
    pub boat_type: Option<String>,
    pub length_m: Option<i32>,
    pub home_port: Option<String>,
}

impl From<Boat> for BoatResponse {
    fn from(boat: Boat) -> Self {
        Self {
            id: boat.id,
            name: boat.name,
            registration: boat.registration,
            boat_type: boat.boat_type,
            length_m: boat.length_m,
            home_port: boat.home_port,
        }
    }
}

pub async fn create_boat(
    user: AuthedUser,
    req: web::Json<CreateBoatRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received boat registration from user id: {}", user.id);

    if !user.role.can_register_boats() {
        warn!(
            "Boat registration refused for user id {} with role {}",
            user.id, user.role
        );
        return Err(AppError::Forbidden(
            "Only captains or owners can register boats".into(),
        ));
    }

    let req = req.into_inner();
    let new_boat = NewBoat {
        name: req.name,
        registration: req.registration,
        boat_type: req.boat_type,
        length_m: req.length_m,
        home_port: req.home_port,
    };

    match state.db.create_boat(user.id, &new_boat).await {
        Ok(boat) => {
            info!("Boat {} registered for owner id: {}", boat.id, user.id);
            Ok(HttpResponse::Ok().json(BoatResponse::from(boat)))
        }
        Err(e) => {
            error!("Boat registration failed for owner id {}: {}", user.id, e);
            Err(e)
        }
    }
}

pub async fn list_my_boats(
    user: AuthedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received boat listing request from user id: {}", user.id);

    match state.db.list_boats_by_owner(user.id).await {
        Ok(boats) => {
            let body: Vec<BoatResponse> = boats.into_iter().map(BoatResponse::from).collect();
            Ok(HttpResponse::Ok().json(body))
        }
        Err(e) => {
            error!("Listing boats failed for owner id {}: {}", user.id, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_create_request_accepts_minimal_body() {
        let req: CreateBoatRequest = serde_json::from_str(r#"{"name": "Sea Witch"}"#).unwrap();

        assert_eq!(req.name, "Sea Witch");
        assert_eq!(req.registration, None);
        assert_eq!(req.boat_type, None);
        assert_eq!(req.length_m, None);
        assert_eq!(req.home_port, None);
    }

    #[test]
    fn test_boat_type_maps_to_type_on_the_wire() {
        let req: CreateBoatRequest =
            serde_json::from_str(r#"{"name": "Pelican", "type": "trawler"}"#).unwrap();
        assert_eq!(req.boat_type.as_deref(), Some("trawler"));

        let body = serde_json::to_value(BoatResponse::from(Boat {
            id: 9,
            name: "Pelican".into(),
            registration: None,
            boat_type: Some("trawler".into()),
            length_m: Some(14),
            home_port: None,
            owner_id: 3,
            created_at: Utc::now(),
        }))
        .unwrap();

        assert_eq!(body["type"], "trawler");
        assert!(body.get("boat_type").is_none());
        assert!(body.get("owner_id").is_none());
        assert!(body.get("created_at").is_none());
    }
}
