pub mod health;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::db;
use crate::errors::AppError;
use crate::models::{Application, AssessmentTest, Candidate, Entity, JobListing, TrainingProgram};
use crate::render;
use crate::state::AppState;

/// GET /
pub async fn home() -> Result<Html<String>, AppError> {
    Ok(Html(render::render_home()?))
}

/// GET on an entity's list path: every row as an HTML table.
pub async fn list_entity<E: Entity>(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let records = db::fetch_all::<E>(&state.db).await?;
    Ok(Html(render::render_listing(&records)?))
}

fn with_listing<E: Entity>(router: Router<AppState>) -> Router<AppState> {
    router.route(E::VIEW.path, get(list_entity::<E>))
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_handler));
    let router = with_listing::<Candidate>(router);
    let router = with_listing::<JobListing>(router);
    let router = with_listing::<TrainingProgram>(router);
    let router = with_listing::<AssessmentTest>(router);
    let router = with_listing::<Application>(router);
    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::db::{ensure_schema, initialize, memory_pool};

    async fn seeded_app() -> Router {
        let pool = memory_pool().await;
        initialize(&pool).await.unwrap();
        build_router(AppState { db: pool })
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    fn body_rows(html: &str) -> usize {
        html.split("<tbody>").nth(1).unwrap().matches("<tr>").count()
    }

    #[tokio::test]
    async fn test_home_links_to_all_listings() {
        let (status, content_type, html) = get_page(seeded_app().await, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        for path in [
            "/candidates",
            "/job_listings",
            "/training_programs",
            "/assessment_tests",
            "/applications",
        ] {
            assert!(html.contains(&format!("href=\"{path}\"")), "{path}");
        }
    }

    #[tokio::test]
    async fn test_seeded_listings_show_sample_rows() {
        let app = seeded_app().await;
        let cases = [
            (
                "/candidates",
                "<th>ID</th><th>Name</th><th>Contact</th><th>Skills</th>",
                "<td>1</td><td>John Doe</td><td>john@example.com</td><td>Python, Flask, SQLAlchemy</td>",
            ),
            (
                "/job_listings",
                "<th>ID</th><th>Company</th><th>Salary</th><th>Status</th>",
                "<td>1</td><td>Acme Corp</td><td>$50,000</td><td>Open</td>",
            ),
            (
                "/training_programs",
                "<th>ID</th><th>Program</th><th>Institution</th>",
                "<td>1</td><td>Python Bootcamp</td><td>Tech Institute</td>",
            ),
            (
                "/assessment_tests",
                "<th>ID</th><th>Skill Area</th><th>Description</th>",
                "<td>1</td><td>Python</td><td>Basic Python programming skills assessment.</td>",
            ),
            (
                "/applications",
                "<th>ID</th><th>Candidate ID</th><th>Job ID</th><th>Status</th>",
                "<td>1</td><td>1</td><td>1</td><td>Pending</td>",
            ),
        ];

        for (uri, header_row, row) in cases {
            let (status, content_type, html) = get_page(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(content_type.unwrap().starts_with("text/html"), "{uri}");
            assert!(html.contains(&format!("<tr>{header_row}</tr>")), "{uri}");
            assert!(html.contains(row), "{uri}");
            assert_eq!(body_rows(&html), 1, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_listing_row_count_tracks_table() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();
        for name in ["Ada", "Grace", "Linus"] {
            sqlx::query("INSERT INTO candidate (name) VALUES (?)")
                .bind(name)
                .execute(&pool)
                .await
                .unwrap();
        }
        let app = build_router(AppState { db: pool });

        let (_, _, html) = get_page(app.clone(), "/candidates").await;
        assert_eq!(body_rows(&html), 3);
        assert!(!html.contains("None"));

        let (_, _, html) = get_page(app, "/job_listings").await;
        assert_eq!(body_rows(&html), 1);
        assert!(html.contains("No records available."));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, _) = get_page(seeded_app().await, "/interviews").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listings_are_read_only() {
        let response = seeded_app()
            .await
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/candidates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_closed_store_yields_server_error() {
        let pool = memory_pool().await;
        initialize(&pool).await.unwrap();
        let app = build_router(AppState { db: pool.clone() });
        pool.close().await;

        let (status, _, body) = get_page(app.clone(), "/candidates").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "A database error occurred");

        let (status, _, body) = get_page(app, "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("\"status\":\"unavailable\""));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (status, _, body) = get_page(seeded_app().await, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "hkrn");
    }
}
