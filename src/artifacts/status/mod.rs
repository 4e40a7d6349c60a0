pub mod status_name;
