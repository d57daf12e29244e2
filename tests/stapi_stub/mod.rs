use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::{json, Value};

/// Canned STAPI data served by the stub.
#[derive(Debug, Clone)]
pub struct StapiStubConfig {
    pub series: Vec<Value>,
    pub seasons: Vec<Value>,
    /// One entry per page of weapon results.
    pub weapon_pages: Vec<Vec<Value>>,
    /// Weapon page answered with HTTP 500.
    pub failing_weapon_page: Option<u32>,
}

impl Default for StapiStubConfig {
    fn default() -> Self {
        Self {
            series: vec![
                json!({"uid": "SEMA0000062876", "title": "Star Trek: The Next Generation",
                       "abbreviation": "TNG", "originalRunStartDate": "1987-09-28",
                       "originalRunEndDate": "1994-05-23"}),
                json!({"uid": "SEMA0000001095", "title": "Star Trek",
                       "abbreviation": "TOS", "originalRunStartDate": "1966-09-08",
                       "originalRunEndDate": "1969-06-03"}),
                json!({"uid": "SEMA0000244919", "title": "Star Trek: Strange New Worlds",
                       "abbreviation": "SNW", "originalRunStartDate": "2022-05-05",
                       "originalRunEndDate": null}),
            ],
            seasons: vec![
                season("SEMA0000001095", 1, 29),
                season("SEMA0000001095", 2, 26),
                season("SEMA0000062876", 1, 26),
                season("SEMA0000001095", 3, 24),
                season("SEMA0000244919", 1, 10),
            ],
            weapon_pages: vec![
                vec![
                    weapon("WPMA0000000001", &["laserTechnology", "phaserTechnology", "handHeldWeapon"]),
                    weapon("WPMA0000000002", &["laserTechnology"]),
                ],
                vec![
                    weapon("WPMA0000000003", &["plasmaTechnology", "mirror"]),
                    weapon("WPMA0000000004", &["handHeldWeapon"]),
                ],
                vec![weapon("WPMA0000000005", &["photonicTechnology", "handHeldWeapon"])],
            ],
            failing_weapon_page: None,
        }
    }
}

pub fn season(series_uid: &str, number: u32, episodes: u32) -> Value {
    json!({
        "uid": format!("SA{series_uid}{number}"),
        "title": format!("Season {number}"),
        "series": {"uid": series_uid, "title": "ignored"},
        "seasonNumber": number,
        "numberOfEpisodes": episodes,
    })
}

pub fn weapon(uid: &str, flags: &[&str]) -> Value {
    let mut value = json!({
        "uid": uid,
        "name": uid,
        "alternateReality": false,
        "handHeldWeapon": false,
        "mirror": false,
        "laserTechnology": false,
        "phaserTechnology": false,
        "photonicTechnology": false,
        "plasmaTechnology": false,
    });
    for flag in flags {
        value[*flag] = Value::Bool(true);
    }
    value
}

pub struct StapiStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StapiStub {
    pub fn spawn(config: StapiStubConfig) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start stapi stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}/api/v1/rest/");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let raw = request.url().to_string();
            log.lock().unwrap().push(raw.clone());
            let url = url::Url::parse(&format!("http://stub{raw}")).expect("parse request url");
            let query = |key: &str| {
                url.query_pairs()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.into_owned())
            };

            let (status, body) = match url.path() {
                "/api/v1/rest/series/search" => (200, single_page("series", &config.series)),
                "/api/v1/rest/season/search" => (200, single_page("seasons", &config.seasons)),
                "/api/v1/rest/weapon/search" => {
                    let number: u32 = query("pageNumber")
                        .and_then(|n| n.parse().ok())
                        .unwrap_or(0);
                    if config.failing_weapon_page == Some(number) {
                        (500, json!({"error": "boom"}))
                    } else {
                        (200, weapon_page(&config.weapon_pages, number))
                    }
                }
                _ => (404, json!({"error": "not found"})),
            };

            let response = tiny_http::Response::from_string(body.to_string())
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json")
                        .expect("content-type header"),
                );
            let _ = request.respond(response);
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StapiStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn single_page(field: &str, items: &[Value]) -> Value {
    json!({
        field: items,
        "page": {
            "pageNumber": 0,
            "pageSize": 50,
            "numberOfElements": items.len(),
            "totalElements": items.len(),
            "totalPages": 1,
            "firstPage": true,
            "lastPage": true,
        }
    })
}

fn weapon_page(pages: &[Vec<Value>], number: u32) -> Value {
    let total_pages = pages.len() as u32;
    let total_elements: usize = pages.iter().map(Vec::len).sum();
    let items = pages.get(number as usize).cloned().unwrap_or_default();
    json!({
        "weapons": items,
        "page": {
            "pageNumber": number,
            "pageSize": 2,
            "numberOfElements": items.len(),
            "totalElements": total_elements,
            "totalPages": total_pages,
            "firstPage": number == 0,
            "lastPage": number + 1 >= total_pages,
        }
    })
}
