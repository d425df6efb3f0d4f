pub mod slot_error;
