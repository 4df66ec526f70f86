mod helpers;

mod credits;
mod errors;
mod generate;
mod listing;
mod polling;
mod status;
