//! Общий каталог навигации SPA.
//!
//! Фронтенд строит по нему таблицу маршрутов и меню, бэкенд отдаёт
//! `index.html` оболочки на каждый из этих путей.

use crate::enums::clinic_page::ClinicPage;

/// Корень приложения, алиас дашборда
pub const ROOT_PATH: &str = "/";

/// Страница, на которую откатывается любой неизвестный путь
pub const DEFAULT_PAGE: ClinicPage = ClinicPage::Dashboard;

/// Пары (алиас, канонический путь)
pub fn route_aliases() -> Vec<(&'static str, &'static str)> {
    vec![(ROOT_PATH, DEFAULT_PAGE.path())]
}

/// Все пути, которые обслуживает оболочка: алиасы и канонические пути страниц
pub fn shell_paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = route_aliases().into_iter().map(|(alias, _)| alias).collect();
    paths.extend(ClinicPage::all().iter().map(|page| page.path()));
    paths
}
