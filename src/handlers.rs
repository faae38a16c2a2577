use crate::errors::AppError;
use crate::models::{
    AppData, DayQuery, DayResponse, DeleteRequest, NewTaskRequest, StreakResponse, SubtaskRequest,
    TaskNode, Theme, ThemeRequest, ThemeResponse, ToggleRequest,
};
use crate::state::AppState;
use crate::stats::{self, date_key, day_stats, today_key};
use crate::storage::{STORE_KEY, persist_days, persist_theme};
use crate::tree;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_key();
    let data = state.data.lock().await;
    Html(render_index(&date, data.theme, stats::streak(&data)))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date_key(&query.date)?;
    let data = state.data.lock().await;
    Ok(Json(day_response(date, &data)))
}

pub async fn get_streak(State(state): State<AppState>) -> Json<StreakResponse> {
    let data = state.data.lock().await;
    Json(StreakResponse {
        days: stats::streak(&data),
    })
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let data = state.data.lock().await;
    Json(ThemeResponse { theme: data.theme })
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = Theme::parse(payload.theme.trim())
        .ok_or_else(|| AppError::bad_request("theme must be 'dark' or 'light'"))?;

    let mut data = state.data.lock().await;
    data.theme = theme;
    persist_theme(&state.storage, theme).await;

    Ok(Json(ThemeResponse { theme }))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date_key(&payload.date)?;
    let text = payload.text.trim();

    let mut data = state.data.lock().await;
    if !text.is_empty() {
        let forest = data.days.remove(&date).unwrap_or_default();
        data.days
            .insert(date.clone(), tree::insert(TaskNode::new(text), forest));
        persist_days(&state.storage, &data.days).await;
    }

    Ok(Json(day_response(date, &data)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date_key(&payload.date)?;

    let mut data = state.data.lock().await;
    if let Some(forest) = data.days.remove(&date) {
        data.days.insert(date.clone(), tree::toggle(&payload.id, forest));
        persist_days(&state.storage, &data.days).await;
    }

    Ok(Json(day_response(date, &data)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date_key(&payload.date)?;

    let mut data = state.data.lock().await;
    if let Some(forest) = data.days.remove(&date) {
        data.days.insert(date.clone(), tree::delete(&payload.id, forest));
        persist_days(&state.storage, &data.days).await;
    }

    Ok(Json(day_response(date, &data)))
}

pub async fn add_subtask(
    State(state): State<AppState>,
    Json(payload): Json<SubtaskRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date_key(&payload.date)?;
    let text = payload.text.trim();

    let mut data = state.data.lock().await;
    if !text.is_empty() {
        if let Some(forest) = data.days.remove(&date) {
            data.days.insert(
                date.clone(),
                tree::add_subtask(&payload.parent_id, text, forest),
            );
            persist_days(&state.storage, &data.days).await;
        }
    }

    Ok(Json(day_response(date, &data)))
}

pub async fn wipe(State(state): State<AppState>) -> Json<DayResponse> {
    let mut data = state.data.lock().await;
    data.days.clear();
    state.storage.remove(STORE_KEY).await;

    Json(day_response(today_key(), &data))
}

fn day_response(date: String, data: &AppData) -> DayResponse {
    let tasks = data.days.get(&date).cloned().unwrap_or_default();
    let stats = day_stats(&tasks);
    DayResponse { date, tasks, stats }
}

// Round-trips through NaiveDate so malformed keys are rejected and unpadded
// ones come back in canonical `YYYY-MM-DD` form.
fn parse_date_key(raw: &str) -> Result<String, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(date_key)
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))
}
