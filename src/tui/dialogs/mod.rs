pub mod event_form;
