pub mod form;
pub mod messages;
pub mod password_input;
pub mod role_switch;
