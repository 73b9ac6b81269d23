use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{request::CreateQuizRequest, response::QuizSummary},
};

#[post("/admin/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(state.admin_checker.as_ref(), &auth.0.sub).await?;

    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(QuizSummary::from(&quiz)))
}

#[get("/admin/quizzes")]
async fn list_all_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(state.admin_checker.as_ref(), &auth.0.sub).await?;

    let quizzes = state.quiz_service.list_all().await?;
    let rows: Vec<QuizSummary> = quizzes.iter().map(QuizSummary::from).collect();
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/admin/attempts")]
async fn attempt_history(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(state.admin_checker.as_ref(), &auth.0.sub).await?;

    let attempts = state.attempt_workflow.attempt_history().await?;
    Ok(HttpResponse::Ok().json(attempts))
}
