use serde::{Deserialize, Serialize};

/// Страницы клинической панели, доступные из боковой навигации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicPage {
    Dashboard,
    Users,
    Employees,
    Patients,
    Appointments,
    Prescriptions,
    Certificates,
    Settings,
}

impl ClinicPage {
    /// Канонический путь страницы
    pub fn path(&self) -> &'static str {
        match self {
            ClinicPage::Dashboard => "/dashboard",
            ClinicPage::Users => "/usuarios",
            ClinicPage::Employees => "/funcionarios",
            ClinicPage::Patients => "/pacientes",
            ClinicPage::Appointments => "/agendamentos",
            ClinicPage::Prescriptions => "/receitas",
            ClinicPage::Certificates => "/atestados",
            ClinicPage::Settings => "/configuracoes",
        }
    }

    /// Заголовок для breadcrumb и пункта меню
    pub fn title(&self) -> &'static str {
        match self {
            ClinicPage::Dashboard => "Dashboard",
            ClinicPage::Users => "Usuários",
            ClinicPage::Employees => "Funcionários",
            ClinicPage::Patients => "Pacientes",
            ClinicPage::Appointments => "Agendamentos",
            ClinicPage::Prescriptions => "Receitas",
            ClinicPage::Certificates => "Atestados",
            ClinicPage::Settings => "Configurações",
        }
    }

    /// Имя иконки feather
    pub fn icon(&self) -> &'static str {
        match self {
            ClinicPage::Dashboard => "home",
            ClinicPage::Users => "user-check",
            ClinicPage::Employees => "briefcase",
            ClinicPage::Patients => "users",
            ClinicPage::Appointments => "calendar",
            ClinicPage::Prescriptions => "file-text",
            ClinicPage::Certificates => "award",
            ClinicPage::Settings => "settings",
        }
    }

    /// Все страницы в порядке меню
    pub fn all() -> Vec<ClinicPage> {
        vec![
            ClinicPage::Dashboard,
            ClinicPage::Users,
            ClinicPage::Employees,
            ClinicPage::Patients,
            ClinicPage::Appointments,
            ClinicPage::Prescriptions,
            ClinicPage::Certificates,
            ClinicPage::Settings,
        ]
    }

    /// Поиск страницы по каноническому пути (алиасы не учитываются)
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().into_iter().find(|page| page.path() == path)
    }
}
