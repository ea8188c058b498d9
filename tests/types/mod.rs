mod outcome;
mod unwrap_error;
