use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;
use crate::generator::{DEFAULT_ROLE, GENDERS, MARITAL_STATUSES};
use crate::state::SharedState;

const ROLES: &[&str] = &["MAIN", "CO_APPLICANT", "GUARANTOR"];

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    locale: &'static str,
    roles: Vec<RoleOption>,
    genders: &'static [&'static str],
    marital_statuses: &'static [&'static str],
}

struct RoleOption {
    value: &'static str,
    selected: bool,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        locale: state.locale.code,
        roles: ROLES
            .iter()
            .map(|&value| RoleOption {
                value,
                selected: value == DEFAULT_ROLE,
            })
            .collect(),
        genders: GENDERS,
        marital_statuses: MARITAL_STATUSES,
    };
    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render index: {e}")))?;
    Ok(Html(html))
}
