use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::SubmitAttemptRequest,
        response::{
            AvailableQuizzesResponse, ProgressView, QuizSummary, QuizView, StartAttemptResponse,
        },
    },
};

#[get("/quizzes")]
async fn list_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (available, completed_count) = state.attempt_workflow.list_available(&auth.0.sub).await?;
    let quizzes = available.iter().map(QuizSummary::from).collect();

    Ok(HttpResponse::Ok().json(AvailableQuizzesResponse {
        quizzes,
        completed_count,
    }))
}

#[post("/quizzes/{id}/start")]
async fn start_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (quiz, started_at) = state.attempt_workflow.start(&auth.0.sub, &id).await?;

    Ok(HttpResponse::Ok().json(StartAttemptResponse {
        quiz: QuizView::from(&quiz),
        started_at,
    }))
}

#[post("/quizzes/{id}/attempt")]
async fn submit_attempt(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .attempt_workflow
        .submit(&auth.0.sub, &id, &request.answers, request.started_at)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

#[get("/progress")]
async fn get_progress(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let progress = state.attempt_workflow.dashboard(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(ProgressView::from(&progress)))
}
