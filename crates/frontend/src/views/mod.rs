//! View registry - единственный источник правды для маппинга страница → разметка.

pub mod dashboard;
pub mod employees;
pub mod placeholders;
pub mod settings;

use crate::routes::{RouteTable, RouteTableError, ViewProducer};
use contracts::enums::clinic_page::ClinicPage;
use contracts::shared::navigation::{route_aliases, DEFAULT_PAGE};

pub fn producer_for(page: ClinicPage) -> ViewProducer {
    match page {
        ClinicPage::Dashboard => dashboard::dashboard,
        ClinicPage::Users => placeholders::users,
        ClinicPage::Employees => employees::employees,
        ClinicPage::Patients => placeholders::patients,
        ClinicPage::Appointments => placeholders::appointments,
        ClinicPage::Prescriptions => placeholders::prescriptions,
        ClinicPage::Certificates => placeholders::certificates,
        ClinicPage::Settings => settings::settings,
    }
}

/// Production route table: every catalogue page plus its aliases.
pub fn clinic_routes() -> Result<RouteTable, RouteTableError> {
    let builder = ClinicPage::all()
        .into_iter()
        .fold(RouteTable::builder(DEFAULT_PAGE.path()), |b, page| {
            b.route(page.path(), page.title(), producer_for(page))
        });
    route_aliases()
        .into_iter()
        .fold(builder, |b, (alias, target)| b.alias(alias, target))
        .build()
}
