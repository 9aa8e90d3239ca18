use anyhow::Context;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::{
    account, bonus, bonus_answers, competitions, guesses, leaderboard, matches, teams,
};
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        competitions::handlers::list_competitions,
        competitions::handlers::get_competition,
        competitions::handlers::create_competition,
        teams::handlers::list_teams,
        teams::handlers::get_team,
        teams::handlers::create_team,
        matches::handlers::list_matches,
        matches::handlers::get_match,
        matches::handlers::create_match,
        matches::handlers::record_result,
        bonus::handlers::list_questions,
        bonus::handlers::get_question,
        bonus::handlers::create_question,
        bonus::handlers::add_question_choice,
        bonus::handlers::set_correct_choice,
        bonus::handlers::list_choices,
        bonus::handlers::create_choice,
        guesses::handlers::list_guesses,
        guesses::handlers::get_guess,
        guesses::handlers::submit_guess,
        guesses::handlers::update_guess,
        guesses::handlers::delete_guess,
        bonus_answers::handlers::list_answers,
        bonus_answers::handlers::get_answer,
        bonus_answers::handlers::submit_answer,
        bonus_answers::handlers::update_answer,
        bonus_answers::handlers::delete_answer,
        leaderboard::handlers::get_leaderboard,
        account::handlers::get_me,
    ),
    components(
        schemas(
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::matches::CreateMatchRequest,
            storage::dto::matches::RecordResultRequest,
            storage::dto::matches::MatchResponse,
            storage::dto::bonus::CreateChoiceRequest,
            storage::dto::bonus::CreateQuestionRequest,
            storage::dto::bonus::AddQuestionChoiceRequest,
            storage::dto::bonus::SetCorrectChoiceRequest,
            storage::dto::bonus::SubmitBonusAnswerRequest,
            storage::dto::bonus::UpdateBonusAnswerRequest,
            storage::dto::bonus::QuestionChoiceResponse,
            storage::dto::bonus::BonusQuestionResponse,
            storage::dto::guess::CreateGuessRequest,
            storage::dto::guess::UpdateGuessRequest,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::models::Competition,
            storage::models::Team,
            storage::models::Match,
            storage::models::Guess,
            storage::models::Choice,
            storage::models::BonusQuestion,
            storage::models::QuestionChoice,
            storage::models::BonusAnswer,
            storage::models::Requester,
        )
    ),
    tags(
        (name = "competitions", description = "Competition catalogue"),
        (name = "teams", description = "Participating teams"),
        (name = "matches", description = "Fixtures and final results"),
        (name = "bonus", description = "Bonus questions and their choices"),
        (name = "guesses", description = "A user's match predictions"),
        (name = "bonus-answers", description = "A user's bonus question answers"),
        (name = "scores", description = "Leaderboard"),
        (name = "account", description = "Resolved request identity"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting prediction contest API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        bonus_points = config.bonus_points,
        "Configuration loaded successfully"
    );

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        api_keys: ApiKeys::from_comma_separated(&config.api_keys),
        rules: config.scoring_rules(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
