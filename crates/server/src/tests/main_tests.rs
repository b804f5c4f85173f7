use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{body, body::Body, http::Request, response::Response};
use catalog::ReactionTable;
use resolver::{
    GenerationRequest, ReactionGenerator, ResolutionCache, Resolver, UnconfiguredGenerator,
    COLLABORATOR_UNAVAILABLE_MESSAGE, INSUFFICIENT_INPUTS_MESSAGE,
};
use shared::{error::ErrorCode, protocol::ResolutionSource};
use tower::ServiceExt;

struct CountingGenerator {
    calls: AtomicUsize,
}

#[async_trait]
impl ReactionGenerator for CountingGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(r#"{"success": false, "message": "两者不反应。"}"#.to_owned())
    }
}

fn app_with(generator: Arc<dyn ReactionGenerator>) -> Router {
    build_router(Arc::new(AppState::new(Resolver::new(
        ReactionTable::builtin(),
        generator,
        Arc::new(ResolutionCache::new()),
    ))))
}

fn starters(symbols: &[&str]) -> Vec<Substance> {
    let all = starter_inventory(Utc::now());
    symbols
        .iter()
        .map(|symbol| {
            all.iter()
                .find(|s| s.symbol == *symbol)
                .cloned()
                .expect("starter symbol")
        })
        .collect()
}

async fn post_synthesize(app: Router, substances: Vec<Substance>) -> Response {
    let request = Request::post("/synthesize")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&SynthesizeRequest { substances }).expect("json"),
        ))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = app_with(Arc::new(UnconfiguredGenerator));
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn reactions_and_starter_inventory_are_listed() {
    let app = app_with(Arc::new(UnconfiguredGenerator));

    let request = Request::get("/reactions").body(Body::empty()).expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let reactions: Vec<ReactionSummary> = json_body(response).await;
    assert_eq!(reactions.len(), ReactionTable::builtin().len());
    let water = reactions
        .iter()
        .find(|r| r.key == "H₂+O₂")
        .expect("water reaction");
    assert_eq!(water.product_symbol, "H₂O");

    let request = Request::get("/inventory/starter")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let inventory: Vec<Substance> = json_body(response).await;
    assert_eq!(inventory.len(), 19);
    assert!(inventory.iter().all(|s| s.discovered_at.is_some()));
}

#[tokio::test]
async fn table_reaction_resolves_without_generator() {
    let app = app_with(Arc::new(UnconfiguredGenerator));
    let response = post_synthesize(app, starters(&["O₂", "H₂"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let dto: SynthesisResponse = json_body(response).await;
    assert_eq!(dto.source, ResolutionSource::Table);
    assert_eq!(dto.key.as_deref(), Some("H₂+O₂"));
    assert!(dto.outcome.success);
    let product = dto.outcome.product.expect("product");
    assert_eq!(product.name, "水");
    assert!(product.discovered_at.is_some());
}

#[tokio::test]
async fn single_substance_is_rejected_in_band() {
    let app = app_with(Arc::new(UnconfiguredGenerator));
    let response = post_synthesize(app, starters(&["Fe"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let dto: SynthesisResponse = json_body(response).await;
    assert_eq!(dto.source, ResolutionSource::Rejected);
    assert_eq!(dto.key, None);
    assert!(!dto.outcome.success);
    assert_eq!(dto.outcome.message, INSUFFICIENT_INPUTS_MESSAGE);
}

#[tokio::test]
async fn missing_generator_reports_unavailable() {
    let app = app_with(Arc::new(UnconfiguredGenerator));
    let response = post_synthesize(app, starters(&["Ag", "Ba"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let dto: SynthesisResponse = json_body(response).await;
    assert_eq!(dto.source, ResolutionSource::Unavailable);
    assert_eq!(dto.outcome.message, COLLABORATOR_UNAVAILABLE_MESSAGE);
    assert!(dto.outcome.product.is_none());
}

#[tokio::test]
async fn generated_answer_is_served_from_cache_afterwards() {
    let generator = Arc::new(CountingGenerator {
        calls: AtomicUsize::new(0),
    });
    let app = app_with(generator.clone());

    let first: SynthesisResponse =
        json_body(post_synthesize(app.clone(), starters(&["Ag", "Ba"])).await).await;
    let second: SynthesisResponse =
        json_body(post_synthesize(app, starters(&["Ba", "Ag", "Ag"])).await).await;

    assert_eq!(first.source, ResolutionSource::Generated);
    assert_eq!(second.source, ResolutionSource::Cache);
    assert_eq!(first.key, second.key);
    assert_eq!(second.outcome.message, "两者不反应。");
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn too_many_substances_is_a_validation_error() {
    let app = app_with(Arc::new(UnconfiguredGenerator));
    let substances = starters(&["Fe"])
        .into_iter()
        .cycle()
        .take(MAX_SYNTHESIS_INPUTS + 1)
        .collect();
    let response = post_synthesize(app, substances).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let err: ApiError = json_body(response).await;
    assert_eq!(err.code, ErrorCode::Validation);
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let app = app_with(Arc::new(UnconfiguredGenerator));
    let oversized = MAX_BODY_BYTES + 1;
    let request = Request::post("/synthesize")
        .header("content-type", "application/json")
        .header("content-length", oversized.to_string())
        .body(Body::from(vec![b' '; oversized]))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
