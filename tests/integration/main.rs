#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_argument_validation;
#[cfg(unix)]
mod test_end_to_end;
