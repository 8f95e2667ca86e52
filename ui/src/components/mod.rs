pub mod base_field;
pub mod demo_form;
pub mod root_field;
