use crate::page::Page;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub water_intake: String,
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub water_intake_update: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewByIdForm {
    pub id: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().await;
    Html(render_index(state.client.base_url(), &page))
}

pub async fn get_page(State(state): State<AppState>) -> Json<Page> {
    let page = state.page.lock().await;
    Json(page.clone())
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Redirect {
    let rendered = state
        .client
        .submit_reading(&form.water_intake, &form.target)
        .await;
    state.show(rendered).await;
    Redirect::to("/")
}

pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateForm>) -> Redirect {
    let rendered = state.client.update_reading(&form.water_intake_update).await;
    state.show(rendered).await;
    Redirect::to("/")
}

pub async fn view_latest(State(state): State<AppState>) -> Redirect {
    let rendered = state.client.view_latest().await;
    state.show(rendered).await;
    Redirect::to("/")
}

pub async fn view_percentage(State(state): State<AppState>) -> Redirect {
    let rendered = state.client.view_percentage().await;
    state.show(rendered).await;
    Redirect::to("/")
}

pub async fn view_by_id(State(state): State<AppState>, Form(form): Form<ViewByIdForm>) -> Redirect {
    let rendered = state.client.view_reading_by_id(&form.id).await;
    state.show(rendered).await;
    Redirect::to("/")
}

pub async fn status(State(state): State<AppState>) -> Redirect {
    let rendered = state.client.check_server().await;
    state.show(rendered).await;
    Redirect::to("/")
}
