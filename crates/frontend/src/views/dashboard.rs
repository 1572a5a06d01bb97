/// KPI cards and the patient-flow chart.
pub fn dashboard() -> String {
    include_str!("../../templates/dashboard.html").to_string()
}
