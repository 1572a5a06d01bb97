/// Staff overview: KPI cards, search bar and the professionals table.
pub fn employees() -> String {
    include_str!("../../templates/employees.html").to_string()
}
