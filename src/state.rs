use std::sync::Arc;

use crate::generator::locale::Locale;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub locale: &'static Locale,
}
