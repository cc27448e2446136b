pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(advisor::handle_index).post(advisor::handle_submit_profile),
        )
        .route("/generate", post(advisor::handle_generate))
        .route(
            "/recommendation_detail",
            post(advisor::handle_recommendation_detail),
        )
        .route("/download_report", post(report::handle_download_report))
        .route(
            "/download_detailed_report",
            post(report::handle_download_detailed_report),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::advisor::testing::CannedGenerator;
    use crate::errors::{DETAIL_FAILED_MESSAGE, GENERATION_FAILED_MESSAGE, REPORT_FAILED_MESSAGE};
    use crate::report::{DocumentRasterizer, ReportError};

    const CAREER_REPLY: &str = "Sure!\n\
        --- RECOMMENDATION 1\nTITLE: Data Scientist\nOVERVIEW: Great fit\nPROS: analytical, flexible\nCONS: competitive\n\
        --- RECOMMENDATION 2\nTITLE: ML Engineer\nCOMPANIES: Acme, Globex\nSALARY: 20 LPA\n\
        --- RECOMMENDATION 3\nTITLE: Data Analyst\n";

    /// Records the markup it receives and returns fixed bytes.
    #[derive(Default)]
    struct RecordingRasterizer {
        fail: bool,
        markup: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DocumentRasterizer for RecordingRasterizer {
        async fn rasterize(&self, markup: &str) -> Result<Vec<u8>, ReportError> {
            self.markup.lock().unwrap().push(markup.to_string());
            if self.fail {
                return Err(ReportError::Converter {
                    status: "exit status: 1".to_string(),
                    stderr: "boom".to_string(),
                });
            }
            Ok(b"%PDF-1.4 test".to_vec())
        }
    }

    fn router(generator: CannedGenerator, rasterizer: Arc<RecordingRasterizer>) -> Router {
        build_router(AppState {
            generator: Arc::new(generator),
            rasterizer,
        })
    }

    async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const PROFILE: [(&str, &str); 7] = [
        ("name", "Asha Rao"),
        ("age", "24"),
        ("qualifications", "B.Tech"),
        ("skills", "Python"),
        ("interests", "AI"),
        ("location", "Pune"),
        ("goal", "Job"),
    ];

    #[tokio::test]
    async fn test_health() {
        let app = router(CannedGenerator::failing(), Arc::default());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_and_loading_pages() {
        let app = router(CannedGenerator::failing(), Arc::default());
        let response = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Get recommendations"));

        let response = post_form(app, "/", &PROFILE).await;
        let page = body_text(response).await;
        assert!(page.contains(r#"action="/generate""#));
        assert!(page.contains(r#"name="location" value="Pune""#));
    }

    #[tokio::test]
    async fn test_generate_renders_results_with_hidden_state() {
        let app = router(CannedGenerator::replying(CAREER_REPLY), Arc::default());
        let response = post_form(app, "/generate", &PROFILE).await;
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_text(response).await;
        assert!(page.contains(r#"name="rec_0_title" value="Data Scientist""#));
        assert!(page.contains(r#"name="rec_0_pros" value="analytical|flexible""#));
        assert!(page.contains(r#"name="rec_1_salary" value="20 LPA""#));
        assert!(page.contains(r#"name="rec_2_title" value="Data Analyst""#));
        assert!(!page.contains("rec_0_institutions"));
    }

    #[tokio::test]
    async fn test_generate_failure_renders_error_page() {
        let app = router(CannedGenerator::failing(), Arc::default());
        let response = post_form(app, "/generate", &PROFILE).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let page = body_text(response).await;
        assert!(page.contains(&crate::pages::escape(GENERATION_FAILED_MESSAGE)));
    }

    #[tokio::test]
    async fn test_generate_with_unparseable_reply_renders_error_page() {
        let app = router(CannedGenerator::replying("no sections here"), Arc::default());
        let response = post_form(app, "/generate", &PROFILE).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_detail_round_trips_selected_record() {
        let mut fields = PROFILE.to_vec();
        fields.extend([
            ("index", "1"),
            ("rec_0_title", "Data Scientist"),
            ("rec_1_title", "ML Engineer"),
            ("rec_1_companies", "Acme|Globex"),
            ("rec_1_salary", "20 LPA"),
            ("rec_1_pros", "remote|learning"),
        ]);
        let app = router(CannedGenerator::failing(), Arc::default());
        let response = post_form(app, "/recommendation_detail", &fields).await;
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_text(response).await;
        assert!(page.contains("<h1>ML Engineer</h1>"));
        assert!(page.contains("<li>remote</li><li>learning</li>"));
        assert!(page.contains(r#"name="rec_0_title" value="ML Engineer""#));
        assert!(page.contains(r#"name="rec_0_companies" value="Acme|Globex""#));
    }

    #[tokio::test]
    async fn test_detail_rejects_out_of_range_index() {
        for index in ["3", "-1", "x"] {
            let mut fields = PROFILE.to_vec();
            fields.extend([("index", index), ("rec_0_title", "Data Scientist")]);
            let app = router(CannedGenerator::failing(), Arc::default());
            let response = post_form(app, "/recommendation_detail", &fields).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let page = body_text(response).await;
            assert!(page.contains(&crate::pages::escape(DETAIL_FAILED_MESSAGE)));
        }
    }

    #[tokio::test]
    async fn test_detail_without_title_at_index_is_an_error() {
        let mut fields = PROFILE.to_vec();
        fields.extend([("index", "2"), ("rec_0_title", "Data Scientist")]);
        let app = router(CannedGenerator::failing(), Arc::default());
        let response = post_form(app, "/recommendation_detail", &fields).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_download_report_serves_pdf() {
        let rasterizer = Arc::new(RecordingRasterizer::default());
        let mut fields = PROFILE.to_vec();
        fields.extend([
            ("rec_0_title", "Data Scientist"),
            ("rec_1_title", ""),
            ("rec_2_title", "Data Analyst"),
        ]);
        let app = router(CannedGenerator::failing(), rasterizer.clone());
        let response = post_form(app, "/download_report", &fields).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Career_Report_Asha_Rao.pdf\"; \
             filename*=UTF-8''Career_Report_Asha_Rao.pdf"
        );
        assert_eq!(body_text(response).await, "%PDF-1.4 test");

        let markup = rasterizer.markup.lock().unwrap();
        assert_eq!(markup[0].matches(r#"<div class="rec-card">"#).count(), 2);
    }

    #[tokio::test]
    async fn test_download_detailed_report_uses_title_for_file_name() {
        let rasterizer = Arc::new(RecordingRasterizer::default());
        let mut fields = PROFILE.to_vec();
        fields.extend([("rec_0_title", "Data Scientist"), ("rec_0_skills_needed", "SQL|R")]);
        let app = router(CannedGenerator::failing(), rasterizer.clone());
        let response = post_form(app, "/download_detailed_report", &fields).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Detailed_Analysis_Data_Scientist.pdf\"; \
             filename*=UTF-8''Detailed_Analysis_Data_Scientist.pdf"
        );
        assert!(rasterizer.markup.lock().unwrap()[0].contains("Required Skills:</strong> SQL, R"));
    }

    #[tokio::test]
    async fn test_download_report_keeps_non_ascii_user_name() {
        let mut fields = PROFILE.to_vec();
        fields[0] = ("name", "राम शर्मा");
        fields.push(("rec_0_title", "Data Scientist"));
        let app = router(CannedGenerator::failing(), Arc::default());
        let response = post_form(app, "/download_report", &fields).await;

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.ends_with(
            "filename*=UTF-8''Career_Report_%E0%A4%B0%E0%A4%BE%E0%A4%AE_\
             %E0%A4%B6%E0%A4%B0%E0%A5%8D%E0%A4%AE%E0%A4%BE.pdf"
        ));
    }

    #[tokio::test]
    async fn test_download_detailed_report_without_title_is_plain_500() {
        let rasterizer = Arc::new(RecordingRasterizer::default());
        let app = router(CannedGenerator::failing(), rasterizer.clone());
        let response = post_form(app, "/download_detailed_report", &PROFILE).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, REPORT_FAILED_MESSAGE);
        assert!(rasterizer.markup.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rasterizer_failure_is_plain_500() {
        let rasterizer = Arc::new(RecordingRasterizer {
            fail: true,
            ..Default::default()
        });
        let app = router(CannedGenerator::failing(), rasterizer);
        let response = post_form(app, "/download_report", &PROFILE).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, REPORT_FAILED_MESSAGE);
    }
}
