use std::sync::RwLock;

use actix_web::{delete, get, middleware, put, web, App, HttpResponse, HttpServer, Responder};

use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use rs_trigram_core::{max_length_from_signed, validate_max_length, ModelError, TrigramModel};

mod config;

use config::{ServerConfig, MAX_TRAINING_BYTES};

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	/// Negative values produce an empty text
	max_length: Option<i64>,
}

/// Summary returned by `/v1/stats`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ModelStats {
	contexts: usize,
	vocabulary: usize,
	trigrams: usize,
	last_tokens: usize,
}

struct SharedData {
	model: TrigramModel,
	default_max_length: usize,
}

impl SharedData {
	fn new(default_max_length: usize) -> Self {
		Self { model: TrigramModel::new(), default_max_length }
	}
}

/// GET /v1/generate
///
/// Generates a text from the shared model.
/// Several generations may run at once; they only take the read lock.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<RwLock<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let max_length = match query.max_length {
		Some(n) => max_length_from_signed(n),
		None => shared_data.default_max_length,
	};
	let max_length = match validate_max_length(max_length) {
		Ok(n) => n,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	match shared_data.model.generate(max_length) {
		Ok(result) => HttpResponse::Ok().body(result),
		Err(e @ ModelError::InvalidState) => {
			warn!("generation requested before training");
			HttpResponse::Conflict().body(e.to_string())
		}
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// PUT /v1/train
///
/// Fits the request body into the shared model. Training is additive.
#[put("/v1/train")]
async fn put_train(data: web::Data<RwLock<SharedData>>, body: String) -> impl Responder {
	let mut shared_data = match data.write() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	shared_data.model.fit(&body);
	let model = &shared_data.model;
	HttpResponse::Ok().body(format!(
		"Model trained on {} tokens ({} contexts, {} vocabulary entries)",
		model.tokens().len(),
		model.context_count(),
		model.vocabulary().len()
	))
}

/// DELETE /v1/model
///
/// Replaces the shared model with a fresh, untrained one.
#[delete("/v1/model")]
async fn delete_model(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let mut shared_data = match data.write() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model.reset();
	HttpResponse::Ok().body("Model reset")
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	let model = &shared_data.model;
	HttpResponse::Ok().json(ModelStats {
		contexts: model.context_count(),
		vocabulary: model.vocabulary().len(),
		trigrams: model.trigram_count(),
		last_tokens: model.tokens().len(),
	})
}

/// Registers every endpoint on an app.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::PayloadConfig::new(MAX_TRAINING_BYTES))
		.service(get_generated)
		.service(put_train)
		.service(delete_model)
		.service(get_stats);
}

/// Main entry point for the server.
///
/// Builds the shared model (optionally trained on `--corpus`), wraps it in an
/// `RwLock` and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::parse();
	config
		.validate()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

	let mut shared_data = SharedData::new(config.default_max_length);
	if let Some(corpus) = &config.corpus {
		let text = std::fs::read_to_string(corpus)?;
		shared_data.model.fit(&text);
		info!("trained on {} ({} tokens)", corpus.display(), shared_data.model.tokens().len());
	}
	let shared_model = web::Data::new(RwLock::new(shared_data));

	info!("listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.app_data(shared_model.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared() -> web::Data<RwLock<SharedData>> {
		web::Data::new(RwLock::new(SharedData::new(50)))
	}

	#[actix_web::test]
	async fn generate_before_training_is_a_conflict() {
		let app = test::init_service(App::new().app_data(shared()).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/generate").to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), StatusCode::CONFLICT);
	}

	#[actix_web::test]
	async fn train_then_generate() {
		let app = test::init_service(App::new().app_data(shared()).configure(routes)).await;

		let req = test::TestRequest::put().uri("/v1/train").set_payload("Alpha, beta gamma!").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/generate").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "alpha beta gamma");
	}

	#[actix_web::test]
	async fn negative_length_yields_empty_text() {
		let app = test::init_service(App::new().app_data(shared()).configure(routes)).await;

		let req = test::TestRequest::put().uri("/v1/train").set_payload("some words").to_request();
		test::call_service(&app, req).await;

		let req = test::TestRequest::get().uri("/v1/generate?max_length=-3").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
		assert!(test::read_body(resp).await.is_empty());
	}

	#[actix_web::test]
	async fn overlong_request_is_rejected() {
		let app = test::init_service(App::new().app_data(shared()).configure(routes)).await;

		let req = test::TestRequest::put().uri("/v1/train").set_payload("some words").to_request();
		test::call_service(&app, req).await;

		let req = test::TestRequest::get().uri("/v1/generate?max_length=1000000").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn stats_and_reset() {
		let app = test::init_service(App::new().app_data(shared()).configure(routes)).await;

		let req = test::TestRequest::put().uri("/v1/train").set_payload("the cat sat").to_request();
		test::call_service(&app, req).await;

		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let stats: ModelStats = test::call_and_read_body_json(&app, req).await;
		assert_eq!(stats, ModelStats { contexts: 4, vocabulary: 4, trigrams: 4, last_tokens: 3 });

		let req = test::TestRequest::delete().uri("/v1/model").to_request();
		test::call_service(&app, req).await;

		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let stats: ModelStats = test::call_and_read_body_json(&app, req).await;
		assert_eq!(stats, ModelStats { contexts: 0, vocabulary: 0, trigrams: 0, last_tokens: 0 });
	}
}
