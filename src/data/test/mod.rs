mod account;
mod gift_code;
mod plan;
mod session;
mod sound;
