use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use fyyur::config::DatabaseConfig;
use fyyur::db::connection;
use fyyur::forms::{ArtistForm, FormFields, NewShow, VenueForm};
use fyyur::services::ServiceContext;
use fyyur::test_helpers::test_router;

/// A fresh in-memory store. One pooled connection, since every sqlite
/// `:memory:` connection opens its own empty database.
async fn store() -> DatabaseConnection {
    connection::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_idle: 1,
    })
    .await
    .expect("in-memory store should open")
}

fn fields(pairs: &[(&str, &str)]) -> FormFields {
    FormFields::new(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}

fn venue_form(name: &str, city: &str, state: &str, genres: &[&str]) -> VenueForm {
    let mut pairs = vec![
        ("name", name),
        ("city", city),
        ("state", state),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("seeking_talent", "y"),
        ("seeking_description", "We are on the lookout for a local artist"),
    ];
    pairs.extend(genres.iter().map(|genre| ("genres", *genre)));
    let form = VenueForm::from_fields(&fields(&pairs));
    assert_eq!(form.check(), Ok(()), "fixture form should validate");
    form
}

fn artist_form(name: &str, genres: &[&str]) -> ArtistForm {
    let mut pairs = vec![
        ("name", name),
        ("city", "NYC"),
        ("state", "NY"),
        ("phone", "5551234"),
        ("seeking_venue", "y"),
    ];
    pairs.extend(genres.iter().map(|genre| ("genres", *genre)));
    let form = ArtistForm::from_fields(&fields(&pairs));
    assert_eq!(form.check(), Ok(()), "fixture form should validate");
    form
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(20, 0, 0))
        .expect("timestamp should be valid")
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn html_response(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn genres_keep_their_submitted_order() {
    let db = store().await;
    let services = ServiceContext::new(&db);

    let venue = services
        .venue()
        .create(venue_form("The Musical Hop", "San Francisco", "CA", &["Soul", "Jazz", "Folk"]))
        .await
        .expect("venue should be created");
    let artist = services
        .artist()
        .create(artist_form("Guns N Petals", &["Rock n Roll", "Blues"]))
        .await
        .expect("artist should be created");

    let venue = services.venue().detail(venue.id).await.expect("venue detail");
    let artist = services.artist().detail(artist.id).await.expect("artist detail");
    assert_eq!(venue.genres, ["Soul", "Jazz", "Folk"]);
    assert_eq!(artist.genres, ["Rock n Roll", "Blues"]);
}

#[tokio::test]
async fn search_matches_substrings_regardless_of_case() {
    let db = store().await;
    let venues = ServiceContext::new(&db).venue();
    for name in ["The Musical Hop", "Park Square Live Music & Coffee", "The Dueling Pianos Bar"] {
        venues
            .create(venue_form(name, "San Francisco", "CA", &["Jazz"]))
            .await
            .expect("venue should be created");
    }

    let hop = venues.search("hop").await.expect("search should succeed");
    let music = venues.search("MUSIC").await.expect("search should succeed");
    let nothing = venues.search("opera").await.expect("search should succeed");

    assert_eq!(hop.count, 1);
    assert_eq!(hop.results[0].name, "The Musical Hop");
    assert_eq!(music.count, 2);
    assert_eq!(nothing.count, 0);
}

#[tokio::test]
async fn wildcard_characters_in_search_match_literally() {
    let db = store().await;
    let venues = ServiceContext::new(&db).venue();
    for name in ["100% Vinyl Club", "1000 Oaks Lounge", "The_Underscore", "The Outer Space"] {
        venues
            .create(venue_form(name, "Oakland", "CA", &["Jazz"]))
            .await
            .expect("venue should be created");
    }

    let percent = venues.search("100%").await.expect("search should succeed");
    let underscore = venues.search("e_U").await.expect("search should succeed");

    assert_eq!(percent.count, 1);
    assert_eq!(percent.results[0].name, "100% Vinyl Club");
    assert_eq!(underscore.count, 1);
    assert_eq!(underscore.results[0].name, "The_Underscore");
}

#[tokio::test]
async fn accented_names_are_found_by_their_own_spelling() {
    let db = store().await;
    let venues = ServiceContext::new(&db).venue();
    venues
        .create(venue_form("ÉCOLE Hall", "Montpelier", "VT", &["Classical"]))
        .await
        .expect("venue should be created");

    let exact = venues.search("ÉCOLE").await.expect("search should succeed");
    let folded = venues.search("hall").await.expect("search should succeed");

    assert_eq!(exact.count, 1);
    assert_eq!(exact.results[0].name, "ÉCOLE Hall");
    assert_eq!(folded.count, 1);
}

#[tokio::test]
async fn upcoming_counts_only_cover_future_shows_of_matches() {
    let db = store().await;
    let services = ServiceContext::new(&db);
    let hop = services
        .venue()
        .create(venue_form("The Musical Hop", "San Francisco", "CA", &["Jazz"]))
        .await
        .expect("venue should be created");
    let pianos = services
        .venue()
        .create(venue_form("The Dueling Pianos Bar", "New York", "NY", &["Jazz"]))
        .await
        .expect("venue should be created");
    let band = services
        .artist()
        .create(artist_form("The Wild Sax Band", &["Jazz"]))
        .await
        .expect("artist should be created");
    for (venue_id, start_time) in [
        (hop.id, at(2001, 5, 21)),
        (hop.id, at(2035, 4, 1)),
        (pianos.id, at(2035, 4, 8)),
        (pianos.id, at(2035, 4, 15)),
    ] {
        services
            .show()
            .create(NewShow {
                artist_id: band.id,
                venue_id,
                start_time,
            })
            .await
            .expect("show should be created");
    }

    let results = services.venue().search("hop").await.expect("search should succeed");
    assert_eq!(results.count, 1);
    assert_eq!(results.results[0].upcoming_show_count, 1);

    let areas = services.venue().list_areas().await.expect("areas should load");
    let counts: Vec<(&str, u64)> = areas
        .iter()
        .flat_map(|area| area.venues.iter())
        .map(|venue| (venue.name.as_str(), venue.upcoming_show_count))
        .collect();
    assert!(counts.contains(&("The Musical Hop", 1)));
    assert!(counts.contains(&("The Dueling Pianos Bar", 2)));

    let detail = services.artist().detail(band.id).await.expect("artist detail");
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 3);
}

#[tokio::test]
async fn deleting_a_venue_takes_its_shows_along() {
    let db = store().await;
    let services = ServiceContext::new(&db);
    let venue = services
        .venue()
        .create(venue_form("Park Square Live Music & Coffee", "San Francisco", "CA", &["Jazz"]))
        .await
        .expect("venue should be created");
    let artist = services
        .artist()
        .create(artist_form("Matt Quevedo", &["Jazz"]))
        .await
        .expect("artist should be created");
    services
        .show()
        .create(NewShow {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: at(2035, 4, 1),
        })
        .await
        .expect("show should be created");

    services.venue().remove(venue.id).await.expect("venue should be removed");

    let shows = services.show().list().await.expect("shows should load");
    assert!(shows.is_empty());
    let err = services
        .venue()
        .detail(venue.id)
        .await
        .expect_err("venue should be gone");
    assert!(err.is_not_found());
    let artist = services.artist().detail(artist.id).await.expect("artist remains");
    assert_eq!(artist.upcoming_shows_count, 0);
}

#[tokio::test]
async fn shows_for_unknown_artists_are_rejected() {
    let db = store().await;
    let services = ServiceContext::new(&db);
    let venue = services
        .venue()
        .create(venue_form("The Musical Hop", "San Francisco", "CA", &["Jazz"]))
        .await
        .expect("venue should be created");

    let err = services
        .show()
        .create(NewShow {
            artist_id: 999,
            venue_id: venue.id,
            start_time: at(2035, 4, 1),
        })
        .await
        .expect_err("dangling artist should be refused");

    assert!(!err.is_not_found());
    assert!(services.show().list().await.expect("shows should load").is_empty());
}

#[tokio::test]
async fn editing_replaces_every_field() {
    let db = store().await;
    let venues = ServiceContext::new(&db).venue();
    let venue = venues
        .create(venue_form("The Musical Hop", "San Francisco", "CA", &["Jazz", "Soul"]))
        .await
        .expect("venue should be created");

    let replacement = VenueForm::from_fields(&fields(&[
        ("name", "The Dueling Pianos Bar"),
        ("city", "New York"),
        ("state", "NY"),
        ("address", "335 Delancey Street"),
        ("genres", "Classical"),
    ]));
    venues
        .update(venue.id, replacement)
        .await
        .expect("update should succeed");

    let detail = venues.detail(venue.id).await.expect("venue detail");
    assert_eq!(detail.name, "The Dueling Pianos Bar");
    assert_eq!((detail.city.as_str(), detail.state.as_str()), ("New York", "NY"));
    assert_eq!(detail.genres, ["Classical"]);
    assert_eq!(detail.phone, None);
    assert!(!detail.seeking_talent);
    assert_eq!(detail.seeking_description, None);
}

#[tokio::test]
async fn listed_artist_is_searchable_and_seeking() {
    let db = store().await;
    let app = test_router(db.clone());

    let (status, html) = html_response(
        app.clone(),
        form_post(
            "/artists/create",
            "name=Sammy&city=NYC&state=NY&phone=5551234&genres=Jazz&seeking_venue=y",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Artist Sammy was successfully listed!"));

    let (status, html) = html_response(app, form_post("/artists/search", "search_term=Sam")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(": 1</h3>"));
    assert!(html.contains("Sammy"));

    let artists = ServiceContext::new(&db).artist();
    let listed = artists.list().await.expect("artists should load");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Sammy");
    let detail = artists.detail(listed[0].id).await.expect("artist detail");
    assert!(detail.seeking_venue);
    assert_eq!(detail.genres, ["Jazz"]);
}
