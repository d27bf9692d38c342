//! In-process stand-in for the FruityVice API.
//!
//! Serves `GET /api/fruit/{name}` from a small seeded catalog with the same
//! payload shape as the public service, and `PUT /api/fruit` to add or
//! replace entries. Name lookup is case-insensitive; unknown names get a 404
//! with `{"error":"Not found"}`.
//!
//! `GET /fault/{code}/{name}` answers any name with status `code` and the
//! non-UTF-8 body [`FAULT_BODY`], so a client pointed at
//! `http://host/fault/500` sees a misbehaving API.

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Fruit {
    pub name: String,
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritions: Option<Nutritions>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Nutritions {
    pub calories: f64,
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

/// Body of every `/fault` response: invalid UTF-8, invalid JSON.
pub const FAULT_BODY: &[u8] = b"\xff\xfe not json";

/// Catalog keyed by lowercased fruit name.
pub type Db = Arc<RwLock<HashMap<String, Fruit>>>;

fn fruit(name: &str, id: u32, family: &str, order: &str, genus: &str, n: [f64; 5]) -> Fruit {
    Fruit {
        name: name.to_string(),
        id,
        family: Some(family.to_string()),
        order: Some(order.to_string()),
        genus: Some(genus.to_string()),
        nutritions: Some(Nutritions {
            calories: n[0],
            fat: n[1],
            sugar: n[2],
            carbohydrates: n[3],
            protein: n[4],
        }),
    }
}

/// The entries every fresh `app()` starts with.
pub fn seed() -> Vec<Fruit> {
    vec![
        fruit("Banana", 1, "Musaceae", "Zingiberales", "Musa", [96.0, 0.2, 12.2, 22.8, 1.0]),
        fruit("Strawberry", 3, "Rosaceae", "Rosales", "Fragaria", [29.0, 0.4, 5.4, 5.5, 0.8]),
        fruit("Apple", 6, "Rosaceae", "Rosales", "Malus", [52.0, 0.4, 10.3, 11.4, 0.3]),
        fruit("Pineapple", 10, "Bromeliaceae", "Poales", "Ananas", [50.0, 0.12, 9.85, 13.12, 0.54]),
        fruit("Persimmon", 52, "Ebenaceae", "Rosales", "Diospyros", [81.0, 0.0, 18.0, 18.0, 0.0]),
        fruit("Passion fruit", 70, "Passifloraceae", "Malpighiales", "Passiflora", [97.0, 0.7, 11.2, 22.4, 2.2]),
    ]
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(fruits: Vec<Fruit>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        fruits.into_iter().map(|f| (f.name.to_lowercase(), f)).collect(),
    ));
    Router::new()
        .route("/api/fruit", put(put_fruit))
        .route("/api/fruit/{name}", get(get_fruit))
        .route("/fault/{code}/{name}", get(fault))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `app()` on an ephemeral localhost port from a background thread
/// with its own current-thread runtime. Returns once the port is bound.
pub fn spawn() -> Result<SocketAddr, std::io::Error> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    std::thread::spawn(move || {
        let served = rt.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            run(listener).await
        });
        if let Err(e) = served {
            tracing::error!(error = %e, %addr, "mock server stopped");
        }
    });

    Ok(addr)
}

async fn get_fruit(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Fruit>, (StatusCode, Json<Value>)> {
    tracing::info!(%name, "GET /api/fruit/{{name}}");
    let fruits = db.read().await;
    fruits
        .get(&name.to_lowercase())
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))))
}

async fn fault(Path((code, name)): Path<(u16, String)>) -> Response {
    tracing::info!(code, %name, "GET /fault/{{code}}/{{name}}");
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, [(header::CONTENT_TYPE, "application/json")], FAULT_BODY).into_response()
}

async fn put_fruit(State(db): State<Db>, Json(input): Json<Fruit>) -> Json<Fruit> {
    tracing::info!(name = %input.name, "PUT /api/fruit");
    db.write().await.insert(input.name.to_lowercase(), input.clone());
    Json(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fruit_serializes_with_nested_nutritions() {
        let banana = seed().into_iter().next().unwrap();
        let json = serde_json::to_value(&banana).unwrap();
        assert_eq!(json["name"], "Banana");
        assert_eq!(json["id"], 1);
        assert_eq!(json["family"], "Musaceae");
        assert_eq!(json["nutritions"]["sugar"], 12.2);
        assert_eq!(json["nutritions"]["carbohydrates"], 22.8);
        assert!(json.get("sugar").is_none());
    }

    #[test]
    fn fruit_omits_absent_optional_fields() {
        let bare: Fruit = serde_json::from_str(r#"{"name":"Mystery","id":99}"#).unwrap();
        assert!(bare.family.is_none());
        assert!(bare.nutritions.is_none());
        let json = serde_json::to_value(&bare).unwrap();
        assert_eq!(json, json!({ "name": "Mystery", "id": 99 }));
    }

    #[test]
    fn fruit_rejects_missing_name() {
        let result: Result<Fruit, _> = serde_json::from_str(r#"{"id":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn fault_body_is_neither_utf8_nor_json() {
        assert!(std::str::from_utf8(FAULT_BODY).is_err());
        assert!(serde_json::from_slice::<Value>(FAULT_BODY).is_err());
    }

    #[test]
    fn seed_ids_are_unique() {
        let mut ids: Vec<u32> = seed().iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed().len());
    }
}
