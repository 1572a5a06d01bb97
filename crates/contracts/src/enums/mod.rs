pub mod clinic_page;
