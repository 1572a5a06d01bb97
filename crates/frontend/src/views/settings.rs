/// Settings tab strip with the profile form open.
pub fn settings() -> String {
    include_str!("../../templates/settings.html").to_string()
}
